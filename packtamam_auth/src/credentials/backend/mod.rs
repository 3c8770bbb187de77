mod file;
mod memory;
mod types;

pub use file::FileCredentialBackend;
pub use memory::MemoryCredentialBackend;
pub use types::CredentialBackend;
