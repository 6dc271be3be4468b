//! Domain layer for Mockgram.
//!
//! Holds the profile data model, the ports the outer layers implement
//! (key-value storage, image picking, persistence), the route table and the
//! pure view renderers.

pub mod config;
pub mod error;
pub mod image;
pub mod profile;
pub mod route;
pub mod storage;
pub mod view;

// Re-export common error type
pub use error::MockgramError;
pub use profile::{Highlight, ProfileRecord};
pub use route::Route;
