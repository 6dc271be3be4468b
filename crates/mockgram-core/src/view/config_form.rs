//! Edit form view model (`/config`).

use crate::profile::ProfileRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightRow {
    pub index: usize,
    pub label: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRow {
    pub index: usize,
    pub image: String,
}

/// Everything the edit form shows for a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFormView {
    pub picture: String,
    pub username: String,
    pub verified: bool,
    pub display_name: String,
    pub followers: String,
    pub following: String,
    /// The bio as the text area shows it
    pub bio_text: String,
    pub highlights: Vec<HighlightRow>,
    pub posts: Vec<PostRow>,
    /// Draft differs from the committed record
    pub dirty: bool,
}

pub fn render_config_form(draft: &ProfileRecord, dirty: bool) -> ConfigFormView {
    ConfigFormView {
        picture: draft.profile_image.clone(),
        username: draft.username.clone(),
        verified: draft.verified,
        display_name: draft.display_name.clone(),
        followers: draft.follower_count.clone(),
        following: draft.following_count.clone(),
        bio_text: draft.bio_text(),
        highlights: draft
            .highlights
            .iter()
            .enumerate()
            .map(|(index, h)| HighlightRow {
                index,
                label: h.label.clone(),
                image: h.image.clone(),
            })
            .collect(),
        posts: draft
            .posts
            .iter()
            .enumerate()
            .map(|(index, image)| PostRow {
                index,
                image: image.clone(),
            })
            .collect(),
        dirty,
    }
}
