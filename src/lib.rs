//! # account-api
//!
//! Validated request contracts for profile updates and password changes.
//!
//! A payload deserialized from a request body by the web layer either becomes
//! its validated counterpart or an ordered list of field violations; what
//! happens after acceptance (persistence, hashing, sessions) belongs to the
//! services behind this crate.
//!
//! ## Example
//!
//! ```rust
//! use account_api::{ProfileUpdatePayload, ValidateRequest};
//!
//! let payload = ProfileUpdatePayload {
//!     name: "Alice".to_string(),
//!     avatar_url: None,
//! };
//! let accepted = payload.validate().expect("valid profile update");
//! assert_eq!(accepted.name(), "Alice");
//! ```

pub mod bootstrap;
pub mod error;
pub mod requests;
pub mod rules;

// Re-exports for convenient access
pub use bootstrap::Capabilities;
pub use error::{Violation, Violations};
pub use requests::*;
