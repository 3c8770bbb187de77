mod adapter;
mod wire;

pub use adapter::IdentityProvider;
