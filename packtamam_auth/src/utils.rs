/// Shorten a token for log lines so full credentials never land in logs.
pub(crate) fn redact_token(token: &str) -> String {
    let mut chars = token.chars();
    let head: String = chars.by_ref().take(6).collect();
    if chars.next().is_none() {
        // Short tokens are masked entirely
        return "***".to_string();
    }
    format!("{head}***")
}
