use serde::{Deserialize, Serialize};

use crate::identity::{Identity, SignedIn};

/// Result payload of a successful admin login, shaped for direct UI use.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginData {
    pub uid: String,
    pub email: String,
    pub id_token: String,
}

impl From<&SignedIn> for LoginData {
    fn from(signed_in: &SignedIn) -> Self {
        Self {
            uid: signed_in.identity.uid.clone(),
            email: signed_in.identity.email.clone(),
            id_token: signed_in.id_token.clone(),
        }
    }
}

/// Re-exported alias: bridge consumers deal in identity snapshots.
pub type SessionUser = Identity;
