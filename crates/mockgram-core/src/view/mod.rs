//! Pure view renderers.
//!
//! Each renderer maps the record (plus display flags) to a typed view model.
//! Nothing here holds state; front ends decide how a view model is drawn.

mod config_form;
mod feed;
mod profile_page;

pub use config_form::{ConfigFormView, HighlightRow, PostRow, render_config_form};
pub use feed::{FeedEntryView, FeedView, PostReaction, render_feed};
pub use profile_page::{
    ActionButton, BottomNav, ContentTab, HeaderView, HighlightStrip, HighlightTile, NavItem,
    NavKind, PostGrid, PostTile, ProfileInfo, ProfilePage, StatsView, TabKind,
    render_profile_page,
};
