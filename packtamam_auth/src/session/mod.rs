mod errors;
mod main;
mod types;

pub use errors::SessionError;
pub use main::SessionBridge;
pub use types::{LoginData, SessionUser};
