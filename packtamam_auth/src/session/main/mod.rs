mod bridge;

pub use bridge::SessionBridge;
