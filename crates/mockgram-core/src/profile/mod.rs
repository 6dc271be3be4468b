//! Profile domain module.
//!
//! # Module Structure
//!
//! - `model`: the profile record and its highlights
//! - `sample`: the fixed default record
//! - `repository`: persistence port for the record
//!
//! # Usage
//!
//! ```ignore
//! use mockgram_core::profile::{ProfileRecord, ProfileRepository, default_profile};
//! ```

mod model;
mod repository;
mod sample;

// Re-export public API
pub use model::{Highlight, HighlightField, ProfileField, ProfileRecord};
pub use repository::ProfileRepository;
pub use sample::{
    NEW_HIGHLIGHT_IMAGE, NEW_HIGHLIGHT_LABEL, default_profile, placeholder_image,
};
