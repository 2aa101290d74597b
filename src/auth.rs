//! Client identity: organization identifiers and the shared secret.

pub mod id;
pub mod secret;

pub use id::*;
pub use secret::*;
