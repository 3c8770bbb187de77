use serde::{Deserialize, Serialize};

/// Read-only snapshot of the authenticated end user as known to the
/// identity provider. The adapter owns the live state; everything else in
/// the crate only ever sees clones of this.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Identity {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
    pub email_verified: bool,
}

/// Successful sign-in: the identity snapshot plus the freshly minted ID
/// token the session bridge exchanges into a backend session.
#[derive(Debug, Clone)]
pub struct SignedIn {
    pub identity: Identity,
    pub id_token: String,
}
