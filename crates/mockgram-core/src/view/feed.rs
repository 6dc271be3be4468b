//! Single-post feed view model (`/publications/:index`).

use crate::profile::ProfileRecord;

/// View-local reaction state of one post. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PostReaction {
    pub liked: bool,
    pub saved: bool,
    /// Displayed like counter, including the viewer's own like
    pub likes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntryView {
    pub index: usize,
    pub image: String,
    pub author: String,
    pub author_image: String,
    pub verified: bool,
    pub reaction: PostReaction,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedView {
    pub entries: Vec<FeedEntryView>,
    /// Entry the view scrolls to, if it exists
    pub focus: Option<usize>,
}

/// Renders every post in order, marking `focus` when it is in range.
///
/// Posts without a matching entry in `reactions` render with a zeroed reaction.
pub fn render_feed(
    record: &ProfileRecord,
    reactions: &[PostReaction],
    focus: Option<usize>,
) -> FeedView {
    let focus = focus.filter(|index| *index < record.posts.len());

    let entries = record
        .posts
        .iter()
        .enumerate()
        .map(|(index, image)| FeedEntryView {
            index,
            image: image.clone(),
            author: record.username.clone(),
            author_image: record.profile_image.clone(),
            verified: record.verified,
            reaction: reactions.get(index).copied().unwrap_or_default(),
            focused: focus == Some(index),
        })
        .collect();

    FeedView { entries, focus }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::default_profile;

    #[test]
    fn test_focus_in_range() {
        let record = default_profile();
        let view = render_feed(&record, &[], Some(3));

        assert_eq!(view.focus, Some(3));
        assert_eq!(view.entries.len(), 61);
        assert!(view.entries[3].focused);
        assert_eq!(view.entries.iter().filter(|e| e.focused).count(), 1);
        assert_eq!(view.entries[3].image, record.posts[3]);
    }

    #[test]
    fn test_focus_out_of_range_is_dropped() {
        let record = default_profile();
        let view = render_feed(&record, &[], Some(500));
        assert_eq!(view.focus, None);
        assert!(view.entries.iter().all(|e| !e.focused));
    }

    #[test]
    fn test_reactions_are_attached_by_index() {
        let record = default_profile();
        let reactions = vec![
            PostReaction::default(),
            PostReaction {
                liked: true,
                saved: false,
                likes: 12,
            },
        ];
        let view = render_feed(&record, &reactions, None);
        assert!(view.entries[1].reaction.liked);
        assert_eq!(view.entries[1].reaction.likes, 12);
        // Past the end of `reactions`
        assert_eq!(view.entries[2].reaction, PostReaction::default());
    }
}
