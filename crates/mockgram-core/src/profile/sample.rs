//! The fixed default record used on first start and whenever stored data is unusable.

use super::model::{Highlight, ProfileRecord};

/// Label given to a freshly added highlight.
pub const NEW_HIGHLIGHT_LABEL: &str = "New";

/// Cover given to a freshly added highlight.
pub const NEW_HIGHLIGHT_IMAGE: &str = "https://picsum.photos/id/237/200";

/// Remote placeholder image for a picsum id.
pub fn placeholder_image(id: u32) -> String {
    format!("https://picsum.photos/id/{}/200", id)
}

/// Returns the sample profile shown before anything has been edited.
///
/// Five highlights and 61 posts (picsum ids 10 through 70).
pub fn default_profile() -> ProfileRecord {
    ProfileRecord {
        username: "famous_person".to_string(),
        verified: true,
        display_name: "Famous Person".to_string(),
        follower_count: "1.1M".to_string(),
        following_count: "811".to_string(),
        bio_lines: vec![
            "🎧| Dj • Modelo • 🇧🇷 BBB16".to_string(),
            "🔳| Travel • Lifestyle • Work".to_string(),
            "🕺| Partner @galleriabarsp @vilajk".to_string(),
        ],
        profile_image: placeholder_image(1005),
        highlights: vec![
            Highlight::new("❤️", placeholder_image(237)),
            Highlight::new("norway24", placeholder_image(1036)),
            Highlight::new("viena24", placeholder_image(953)),
            Highlight::new("rj", placeholder_image(849)),
            Highlight::new("🎉", placeholder_image(849)),
        ],
        posts: (10..=70).map(placeholder_image).collect(),
    }
}
