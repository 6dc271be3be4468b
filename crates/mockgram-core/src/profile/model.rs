//! ProfileRecord domain model.
//!
//! The serialized field names follow the storage format written by earlier
//! releases, so an existing `instagramProfileData` entry keeps loading.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

/// A labeled cover image representing a saved story collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    /// Caption shown under the cover
    #[serde(rename = "name")]
    pub label: String,
    /// Remote URL or `data:` URI
    #[serde(rename = "image")]
    pub image: String,
}

impl Highlight {
    pub fn new(label: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            image: image.into(),
        }
    }

    /// Returns a copy with one field replaced.
    pub fn with_field(&self, field: HighlightField, value: impl Into<String>) -> Self {
        let mut updated = self.clone();
        match field {
            HighlightField::Label => updated.label = value.into(),
            HighlightField::Image => updated.image = value.into(),
        }
        updated
    }
}

/// The editable fields of a [`Highlight`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, VariantNames)]
#[strum(serialize_all = "lowercase")]
pub enum HighlightField {
    #[strum(to_string = "name", serialize = "label")]
    Label,
    Image,
}

/// The free-text scalar fields of a [`ProfileRecord`].
///
/// Names match the labels of the edit form, so they double as the field
/// argument of the REPL `set` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, VariantNames)]
#[strum(serialize_all = "lowercase")]
pub enum ProfileField {
    Username,
    #[strum(serialize = "name")]
    DisplayName,
    #[strum(serialize = "followers")]
    FollowerCount,
    #[strum(serialize = "following")]
    FollowingCount,
    #[strum(serialize = "picture")]
    ProfileImage,
}

/// The single record describing the mocked account.
///
/// Always fully populated: there are no optional fields, and a stored value
/// missing any of them is rejected as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub username: String,
    pub verified: bool,
    #[serde(rename = "name")]
    pub display_name: String,
    /// Free text such as "1.1M"; never parsed as a number
    #[serde(rename = "followers")]
    pub follower_count: String,
    #[serde(rename = "following")]
    pub following_count: String,
    /// Bio, one entry per rendered line
    #[serde(rename = "bio")]
    pub bio_lines: Vec<String>,
    #[serde(rename = "profilePicture")]
    pub profile_image: String,
    pub highlights: Vec<Highlight>,
    /// Post images in display order
    #[serde(rename = "posts_images")]
    pub posts: Vec<String>,
}

impl ProfileRecord {
    /// Number of posts; derived from `posts`, never stored.
    pub fn post_count(&self) -> usize {
        self.posts.len()
    }

    /// The bio as a single newline-joined block, the form the editor shows.
    pub fn bio_text(&self) -> String {
        self.bio_lines.join("\n")
    }

    /// Replaces the bio from a newline-separated block.
    ///
    /// Afterwards `bio_text()` returns `text` exactly, trailing empty lines included.
    pub fn set_bio_text(&mut self, text: &str) {
        self.bio_lines = text.split('\n').map(str::to_string).collect();
    }

    /// Reads one of the free-text scalar fields.
    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Username => &self.username,
            ProfileField::DisplayName => &self.display_name,
            ProfileField::FollowerCount => &self.follower_count,
            ProfileField::FollowingCount => &self.following_count,
            ProfileField::ProfileImage => &self.profile_image,
        }
    }

    /// Replaces one of the free-text scalar fields.
    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProfileField::Username => self.username = value,
            ProfileField::DisplayName => self.display_name = value,
            ProfileField::FollowerCount => self.follower_count = value,
            ProfileField::FollowingCount => self.following_count = value,
            ProfileField::ProfileImage => self.profile_image = value,
        }
    }
}

impl Default for ProfileRecord {
    fn default() -> Self {
        super::sample::default_profile()
    }
}
