//! # Supperplan Core
//!
//! Domain types, traits, and error definitions shared by every Supperplan
//! crate. Nothing in here talks to the network: the `Provider` trait is the
//! seam the HTTP-backed implementation lives behind, and `decode` turns a
//! model's free-text reply into JSON.

pub mod decode;
pub mod error;
pub mod provider;

// Re-export key types at crate root for ergonomics
pub use decode::extract_json;
pub use error::{DecodeError, Error, ProviderError, Result};
pub use provider::{CompletionRequest, CompletionResponse, Provider, Usage};
