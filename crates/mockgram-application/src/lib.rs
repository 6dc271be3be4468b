//! Application layer for Mockgram.
//!
//! Coordinates the domain and infrastructure layers: the profile store that
//! owns the committed record, the editor that stages changes to it, the
//! transient feed state and the navigator tying routes to all three.

pub mod editor;
pub mod feed;
pub mod navigator;
pub mod store;

pub use editor::{EditCommand, FieldUpdate, ProfileEditor};
pub use feed::FeedState;
pub use navigator::{Navigator, Screen};
pub use store::{ProfileObserver, ProfileStore, SubscriptionId};
