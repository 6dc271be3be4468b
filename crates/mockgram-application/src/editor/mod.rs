//! Draft editing session for the config view.
//!
//! A [`ProfileEditor`] holds a private copy of the committed record. Edits
//! only touch that copy; the store sees them once, as a whole, on
//! [`ProfileEditor::commit`].

mod command;

pub use command::{EditCommand, FieldUpdate};

use crate::store::ProfileStore;
use mockgram_core::MockgramError;
use mockgram_core::error::Result;
use mockgram_core::image::{ImagePicker, ImageTarget};
use mockgram_core::profile::{
    Highlight, HighlightField, NEW_HIGHLIGHT_IMAGE, NEW_HIGHLIGHT_LABEL, ProfileRecord,
    placeholder_image,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;
use std::sync::Arc;

/// Upper bound (exclusive) of the placeholder id used by [`ProfileEditor::add_post`].
const PLACEHOLDER_ID_RANGE: u32 = 1000;

/// An edit session over a draft copy of the profile record.
pub struct ProfileEditor {
    store: Arc<ProfileStore>,
    original: ProfileRecord,
    draft: ProfileRecord,
    rng: StdRng,
}

impl ProfileEditor {
    /// Starts a session from the store's current record.
    pub fn begin(store: Arc<ProfileStore>) -> Self {
        Self::with_rng(store, StdRng::from_entropy())
    }

    /// Starts a session whose placeholder ids come from a seeded generator.
    pub fn begin_seeded(store: Arc<ProfileStore>, seed: u64) -> Self {
        Self::with_rng(store, StdRng::seed_from_u64(seed))
    }

    fn with_rng(store: Arc<ProfileStore>, rng: StdRng) -> Self {
        let original = store.get();
        tracing::debug!(
            "[ProfileEditor] Began editing '{}'",
            original.username
        );
        Self {
            store,
            draft: original.clone(),
            original,
            rng,
        }
    }

    pub fn draft(&self) -> &ProfileRecord {
        &self.draft
    }

    /// The bio as the text area shows it.
    pub fn bio_text(&self) -> String {
        self.draft.bio_text()
    }

    /// Whether the draft differs from the record the session started from.
    pub fn is_dirty(&self) -> bool {
        self.draft != self.original
    }

    pub fn set_field(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Text(field, value) => self.draft.set_field(field, value),
            FieldUpdate::Verified(verified) => self.draft.verified = verified,
            FieldUpdate::Bio(lines) => self.draft.bio_lines = lines,
            FieldUpdate::Highlights(highlights) => self.draft.highlights = highlights,
            FieldUpdate::Posts(posts) => self.draft.posts = posts,
        }
    }

    pub fn set_bio_text(&mut self, text: &str) {
        self.draft.set_bio_text(text);
    }

    /// Replaces one field of the highlight at `index`.
    pub fn update_highlight(
        &mut self,
        index: usize,
        field: HighlightField,
        value: impl Into<String>,
    ) -> Result<()> {
        MockgramError::check_index("highlights", index, self.draft.highlights.len())?;
        let value = value.into();
        if field == HighlightField::Image {
            require_image(&value)?;
        }
        let updated = self.draft.highlights[index].with_field(field, value);
        self.draft.highlights[index] = updated;
        Ok(())
    }

    /// Appends the placeholder highlight and returns its index.
    pub fn add_highlight(&mut self) -> usize {
        self.draft
            .highlights
            .push(Highlight::new(NEW_HIGHLIGHT_LABEL, NEW_HIGHLIGHT_IMAGE));
        self.draft.highlights.len() - 1
    }

    pub fn remove_highlight(&mut self, index: usize) -> Result<Highlight> {
        MockgramError::check_index("highlights", index, self.draft.highlights.len())?;
        Ok(self.draft.highlights.remove(index))
    }

    /// Appends a random placeholder post and returns its index.
    pub fn add_post(&mut self) -> usize {
        let id = self.rng.gen_range(0..PLACEHOLDER_ID_RANGE);
        self.draft.posts.push(placeholder_image(id));
        self.draft.posts.len() - 1
    }

    pub fn remove_post(&mut self, index: usize) -> Result<String> {
        MockgramError::check_index("posts", index, self.draft.posts.len())?;
        Ok(self.draft.posts.remove(index))
    }

    /// Replaces the image of the post at `index`.
    pub fn update_post(&mut self, index: usize, image: impl Into<String>) -> Result<()> {
        MockgramError::check_index("posts", index, self.draft.posts.len())?;
        let image = image.into();
        require_image(&image)?;
        self.draft.posts[index] = image;
        Ok(())
    }

    /// Applies one synchronous edit.
    pub fn apply(&mut self, command: EditCommand) -> Result<()> {
        match command {
            EditCommand::SetField(update) => self.set_field(update),
            EditCommand::SetBioText(text) => self.set_bio_text(&text),
            EditCommand::UpdateHighlight {
                index,
                field,
                value,
            } => self.update_highlight(index, field, value)?,
            EditCommand::AddHighlight => {
                self.add_highlight();
            }
            EditCommand::RemoveHighlight(index) => {
                self.remove_highlight(index)?;
            }
            EditCommand::AddPost => {
                self.add_post();
            }
            EditCommand::RemovePost(index) => {
                self.remove_post(index)?;
            }
            EditCommand::UpdatePost { index, image } => self.update_post(index, image)?,
        }
        Ok(())
    }

    /// Reads a local image and stores it as a `data:` URI at `target`.
    ///
    /// The target is checked before reading, and the draft changes only once
    /// the read succeeded.
    pub async fn attach_image(
        &mut self,
        target: ImageTarget,
        picker: &dyn ImagePicker,
        source: &Path,
    ) -> Result<()> {
        self.check_target(target)?;

        let image = match picker.read(source).await {
            Ok(image) => image,
            Err(e) => {
                tracing::warn!(
                    "[ProfileEditor] Failed to attach {}: {}",
                    source.display(),
                    e
                );
                return Err(e);
            }
        };
        let uri = image.to_data_uri();

        match target {
            ImageTarget::Profile => self.draft.profile_image = uri,
            ImageTarget::Highlight(index) => {
                self.update_highlight(index, HighlightField::Image, uri)?
            }
            ImageTarget::Post(index) => self.update_post(index, uri)?,
        }

        tracing::debug!(
            "[ProfileEditor] Attached {} ({} bytes) to {:?}",
            image.name,
            image.bytes.len(),
            target
        );
        Ok(())
    }

    fn check_target(&self, target: ImageTarget) -> Result<()> {
        match target {
            ImageTarget::Profile => Ok(()),
            ImageTarget::Highlight(index) => {
                MockgramError::check_index("highlights", index, self.draft.highlights.len())
            }
            ImageTarget::Post(index) => {
                MockgramError::check_index("posts", index, self.draft.posts.len())
            }
        }
    }

    /// Hands the draft to the store and ends the session.
    pub fn commit(self) {
        tracing::debug!(
            "[ProfileEditor] Committing draft (dirty: {})",
            self.is_dirty()
        );
        self.store.replace(self.draft);
    }

    /// Ends the session without touching the store.
    pub fn discard(self) {
        if self.is_dirty() {
            tracing::info!("[ProfileEditor] Discarded unsaved changes");
        }
    }
}

/// Image references stay non-empty once created.
fn require_image(image: &str) -> Result<()> {
    if image.trim().is_empty() {
        return Err(MockgramError::invalid_input("image reference cannot be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockgram_core::image::PickedImage;
    use mockgram_core::profile::{ProfileField, ProfileRepository, default_profile};
    use std::sync::Mutex;

    #[derive(Default)]
    struct CountingRepository {
        saves: Mutex<usize>,
    }

    impl ProfileRepository for CountingRepository {
        fn load(&self) -> ProfileRecord {
            default_profile()
        }

        fn save(&self, _record: &ProfileRecord) {
            *self.saves.lock().unwrap() += 1;
        }
    }

    /// Picker returning fixed bytes, or failing when `fail` is set.
    struct StubPicker {
        fail: bool,
    }

    #[async_trait]
    impl ImagePicker for StubPicker {
        async fn read(&self, source: &Path) -> Result<PickedImage> {
            if self.fail {
                return Err(MockgramError::io(format!("cannot read {}", source.display())));
            }
            Ok(PickedImage {
                name: "pic.png".to_string(),
                mime_type: "image/png".to_string(),
                bytes: vec![1, 2, 3],
            })
        }
    }

    fn editor() -> (ProfileEditor, Arc<ProfileStore>, Arc<CountingRepository>) {
        let repository = Arc::new(CountingRepository::default());
        let store = Arc::new(ProfileStore::new(default_profile(), repository.clone()));
        (ProfileEditor::begin_seeded(store.clone(), 7), store, repository)
    }

    #[test]
    fn test_draft_starts_as_copy() {
        let (editor, store, _) = editor();
        assert_eq!(editor.draft(), &store.get());
        assert!(!editor.is_dirty());
    }

    #[test]
    fn test_set_field_touches_one_field() {
        let (mut editor, store, _) = editor();
        editor.set_field(FieldUpdate::Text(ProfileField::Username, "alice".to_string()));

        let mut expected = store.get();
        expected.username = "alice".to_string();
        assert_eq!(editor.draft(), &expected);
        assert!(editor.is_dirty());

        editor.set_field(FieldUpdate::Verified(false));
        assert!(!editor.draft().verified);
    }

    #[test]
    fn test_bio_text_round_trip() {
        let (mut editor, _, _) = editor();
        for text in ["", "one", "a\nb", "a\n\nb\n", "\n"] {
            editor.set_bio_text(text);
            assert_eq!(editor.bio_text(), text);
        }
        editor.set_bio_text("x\ny");
        assert_eq!(editor.draft().bio_lines, vec!["x", "y"]);
    }

    #[test]
    fn test_add_and_remove_highlight() {
        let (mut editor, _, _) = editor();
        let before = editor.draft().highlights.clone();

        let index = editor.add_highlight();
        assert_eq!(index, before.len());
        assert_eq!(
            editor.draft().highlights[index],
            Highlight::new("New", "https://picsum.photos/id/237/200")
        );

        editor.remove_highlight(index).unwrap();
        assert_eq!(editor.draft().highlights, before);
    }

    #[test]
    fn test_remove_preserves_order() {
        let (mut editor, _, _) = editor();
        let mut expected = editor.draft().posts.clone();
        expected.remove(2);

        let removed = editor.remove_post(2).unwrap();
        assert_eq!(removed, "https://picsum.photos/id/12/200");
        assert_eq!(editor.draft().posts, expected);
    }

    #[test]
    fn test_add_post_placeholder() {
        let (mut editor, _, _) = editor();
        let index = editor.add_post();
        assert_eq!(index, 61);

        let url = &editor.draft().posts[index];
        let id: u32 = url
            .strip_prefix("https://picsum.photos/id/")
            .and_then(|rest| rest.strip_suffix("/200"))
            .unwrap()
            .parse()
            .unwrap();
        assert!(id < 1000);
    }

    #[test]
    fn test_out_of_range_edits_leave_draft_unchanged() {
        let (mut editor, _, _) = editor();
        let before = editor.draft().clone();

        assert!(
            editor
                .update_highlight(5, HighlightField::Label, "x")
                .unwrap_err()
                .is_index_out_of_range()
        );
        assert!(editor.remove_highlight(99).is_err());
        assert!(editor.remove_post(61).is_err());
        assert!(editor.update_post(61, "x").is_err());
        assert!(editor.apply(EditCommand::RemovePost(1000)).is_err());

        assert_eq!(editor.draft(), &before);
    }

    #[test]
    fn test_empty_image_refs_rejected() {
        let (mut editor, _, _) = editor();
        let before = editor.draft().clone();

        let err = editor
            .apply(EditCommand::UpdateHighlight {
                index: 0,
                field: HighlightField::Image,
                value: String::new(),
            })
            .unwrap_err();
        assert_eq!(
            err,
            MockgramError::invalid_input("image reference cannot be empty")
        );
        assert!(editor.update_post(0, "  ").is_err());
        assert_eq!(editor.draft(), &before);

        // An empty label is still a valid edit
        editor
            .update_highlight(0, HighlightField::Label, "")
            .unwrap();
        assert_eq!(editor.draft().highlights[0].label, "");
    }

    #[test]
    fn test_apply_commands() {
        let (mut editor, _, _) = editor();
        editor
            .apply(EditCommand::UpdateHighlight {
                index: 0,
                field: HighlightField::Label,
                value: "Trips".to_string(),
            })
            .unwrap();
        editor.apply(EditCommand::AddHighlight).unwrap();
        editor.apply(EditCommand::AddPost).unwrap();
        editor
            .apply(EditCommand::SetBioText("hi\nthere".to_string()))
            .unwrap();

        let draft = editor.draft();
        assert_eq!(draft.highlights[0].label, "Trips");
        assert_eq!(draft.highlights.len(), 6);
        assert_eq!(draft.posts.len(), 62);
        assert_eq!(draft.bio_lines, vec!["hi", "there"]);
    }

    #[test]
    fn test_commit_replaces_once() {
        let (mut editor, store, repository) = editor();
        editor.set_field(FieldUpdate::Text(ProfileField::DisplayName, "A".to_string()));
        editor.add_post();
        editor.remove_highlight(0).unwrap();

        // Nothing reaches the store before commit
        assert_eq!(store.get(), default_profile());
        assert_eq!(*repository.saves.lock().unwrap(), 0);

        let draft = editor.draft().clone();
        editor.commit();
        assert_eq!(store.get(), draft);
        assert_eq!(*repository.saves.lock().unwrap(), 1);
    }

    #[test]
    fn test_discard_leaves_store() {
        let (mut editor, store, repository) = editor();
        editor.set_field(FieldUpdate::Posts(Vec::new()));
        editor.discard();

        assert_eq!(store.get(), default_profile());
        assert_eq!(*repository.saves.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_attach_image_targets() {
        let (mut editor, _, _) = editor();
        let picker = StubPicker { fail: false };
        let source = Path::new("pic.png");

        editor
            .attach_image(ImageTarget::Profile, &picker, source)
            .await
            .unwrap();
        editor
            .attach_image(ImageTarget::Highlight(1), &picker, source)
            .await
            .unwrap();
        editor
            .attach_image(ImageTarget::Post(60), &picker, source)
            .await
            .unwrap();

        let uri = "data:image/png;base64,AQID";
        assert_eq!(editor.draft().profile_image, uri);
        assert_eq!(editor.draft().highlights[1].image, uri);
        assert_eq!(editor.draft().posts[60], uri);
    }

    #[tokio::test]
    async fn test_attach_failure_leaves_draft() {
        let (mut editor, _, _) = editor();
        let before = editor.draft().clone();

        let err = editor
            .attach_image(
                ImageTarget::Profile,
                &StubPicker { fail: true },
                Path::new("missing.png"),
            )
            .await
            .unwrap_err();
        assert!(err.is_io());

        let err = editor
            .attach_image(
                ImageTarget::Post(61),
                &StubPicker { fail: false },
                Path::new("pic.png"),
            )
            .await
            .unwrap_err();
        assert!(err.is_index_out_of_range());

        assert_eq!(editor.draft(), &before);
    }
}
