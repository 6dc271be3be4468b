//! Edit commands accepted by [`ProfileEditor`](super::ProfileEditor).

use mockgram_core::profile::{Highlight, HighlightField, ProfileField};

/// A whole-field replacement on the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    /// One of the free-text scalars
    Text(ProfileField, String),
    Verified(bool),
    Bio(Vec<String>),
    Highlights(Vec<Highlight>),
    Posts(Vec<String>),
}

/// One edit-form interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    SetField(FieldUpdate),
    /// Bio as a newline-separated block
    SetBioText(String),
    UpdateHighlight {
        index: usize,
        field: HighlightField,
        value: String,
    },
    AddHighlight,
    RemoveHighlight(usize),
    AddPost,
    RemovePost(usize),
    UpdatePost {
        index: usize,
        image: String,
    },
}
