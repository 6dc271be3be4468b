//! Transient reaction state of the publications feed.

use mockgram_core::MockgramError;
use mockgram_core::error::Result;
use mockgram_core::profile::ProfileRecord;
use mockgram_core::view::{FeedView, PostReaction, render_feed};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Range the initial like counters are drawn from.
const LIKES_RANGE: std::ops::RangeInclusive<u32> = 10..=50_000;

/// Like/save flags and counters for one visit to the feed.
///
/// Built fresh every time the feed is entered and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedState {
    reactions: Vec<PostReaction>,
    focus: Option<usize>,
}

impl FeedState {
    /// Seeds one reaction per post. With `seed` the counters are reproducible.
    pub fn new(post_count: usize, focus: usize, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let reactions = (0..post_count)
            .map(|_| PostReaction {
                liked: false,
                saved: false,
                likes: rng.gen_range(LIKES_RANGE),
            })
            .collect();

        Self {
            reactions,
            focus: (focus < post_count).then_some(focus),
        }
    }

    pub fn reactions(&self) -> &[PostReaction] {
        &self.reactions
    }

    pub fn reaction(&self, index: usize) -> Option<PostReaction> {
        self.reactions.get(index).copied()
    }

    /// Focused entry, `None` when the route index was out of range.
    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    /// Flips the like flag, moving the counter by one.
    pub fn toggle_like(&mut self, index: usize) -> Result<PostReaction> {
        let reaction = self.reaction_mut(index)?;
        reaction.liked = !reaction.liked;
        reaction.likes = if reaction.liked {
            reaction.likes.saturating_add(1)
        } else {
            reaction.likes.saturating_sub(1)
        };
        Ok(*reaction)
    }

    pub fn toggle_save(&mut self, index: usize) -> Result<PostReaction> {
        let reaction = self.reaction_mut(index)?;
        reaction.saved = !reaction.saved;
        Ok(*reaction)
    }

    pub fn render(&self, record: &ProfileRecord) -> FeedView {
        render_feed(record, &self.reactions, self.focus)
    }

    fn reaction_mut(&mut self, index: usize) -> Result<&mut PostReaction> {
        MockgramError::check_index("posts", index, self.reactions.len())?;
        Ok(&mut self.reactions[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockgram_core::profile::default_profile;

    #[test]
    fn test_new_seeds_every_post() {
        let feed = FeedState::new(61, 3, Some(1));
        assert_eq!(feed.reactions().len(), 61);
        assert_eq!(feed.focus(), Some(3));
        assert!(
            feed.reactions()
                .iter()
                .all(|r| !r.liked && !r.saved && LIKES_RANGE.contains(&r.likes))
        );
    }

    #[test]
    fn test_seed_is_reproducible() {
        assert_eq!(FeedState::new(20, 0, Some(42)), FeedState::new(20, 0, Some(42)));
    }

    #[test]
    fn test_out_of_range_focus() {
        assert_eq!(FeedState::new(3, 3, None).focus(), None);
        assert_eq!(FeedState::new(0, 0, None).focus(), None);
    }

    #[test]
    fn test_toggle_like_adjusts_count() {
        let mut feed = FeedState::new(5, 0, Some(3));
        let start = feed.reaction(2).unwrap().likes;

        let liked = feed.toggle_like(2).unwrap();
        assert!(liked.liked);
        assert_eq!(liked.likes, start + 1);

        let unliked = feed.toggle_like(2).unwrap();
        assert!(!unliked.liked);
        assert_eq!(unliked.likes, start);
    }

    #[test]
    fn test_toggle_save() {
        let mut feed = FeedState::new(5, 0, Some(3));
        assert!(feed.toggle_save(4).unwrap().saved);
        assert!(!feed.toggle_save(4).unwrap().saved);
        assert!(feed.toggle_save(5).unwrap_err().is_index_out_of_range());
    }

    #[test]
    fn test_render_uses_reactions() {
        let record = default_profile();
        let mut feed = FeedState::new(record.posts.len(), 3, Some(5));
        feed.toggle_like(3).unwrap();

        let view = feed.render(&record);
        assert_eq!(view.entries.len(), 61);
        assert_eq!(view.focus, Some(3));
        assert!(view.entries[3].focused);
        assert!(view.entries[3].reaction.liked);
        assert!(!view.entries[4].reaction.liked);
    }
}
