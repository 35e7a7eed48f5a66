//! Socket-layer failure taxonomy.
//!
//! Lower layers pick a [`FailureKind`] when a socket operation fails and wrap it in a [`SocketError`],
//! which captures the OS error code at that moment and exposes diagnostics about the failure.
mod kind; pub use kind::{FailureKind, Port};
mod diagnostics;
mod error; pub use error::SocketError;
pub mod errno;
pub mod utils;
