//! Route ownership for a front end.
//!
//! The [`Navigator`] tracks the current route and the per-route session
//! state: an editor while `/config` is open, feed reactions while a
//! publications route is open. Leaving a route drops its state.

use crate::editor::ProfileEditor;
use crate::feed::FeedState;
use crate::store::ProfileStore;
use mockgram_core::MockgramError;
use mockgram_core::error::Result;
use mockgram_core::route::{Resolution, Route};
use mockgram_core::view::{
    ConfigFormView, FeedView, ProfilePage, render_config_form, render_profile_page,
};
use std::sync::Arc;

/// The view model of whatever route is current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Profile(ProfilePage),
    Config(ConfigFormView),
    Publications(FeedView),
}

pub struct Navigator {
    store: Arc<ProfileStore>,
    route: Route,
    editor: Option<ProfileEditor>,
    feed: Option<FeedState>,
    feed_seed: Option<u64>,
}

impl Navigator {
    /// Starts at `/`.
    pub fn new(store: Arc<ProfileStore>) -> Self {
        Self {
            store,
            route: Route::Profile,
            editor: None,
            feed: None,
            feed_seed: None,
        }
    }

    /// Makes feed like counters reproducible.
    pub fn with_feed_seed(mut self, seed: Option<u64>) -> Self {
        self.feed_seed = seed;
        self
    }

    pub fn store(&self) -> &Arc<ProfileStore> {
        &self.store
    }

    pub fn route(&self) -> Route {
        self.route
    }

    /// Resolves `path` and moves there. Unknown paths land on `/`.
    pub fn navigate(&mut self, path: &str) -> Resolution {
        let resolution = Route::resolve(path);
        if resolution.redirected {
            tracing::debug!("[Navigator] Unknown path '{}', redirecting to /", path);
        }
        self.go(resolution.route);
        resolution
    }

    /// Moves to `route`, tearing down the state of the route being left.
    ///
    /// Going to the current route again keeps its state.
    pub fn go(&mut self, route: Route) {
        if route == self.route {
            return;
        }

        if let Some(editor) = self.editor.take() {
            editor.discard();
        }
        self.feed = None;

        match route {
            Route::Profile => {}
            Route::Config => {
                self.editor = Some(ProfileEditor::begin(self.store.clone()));
            }
            Route::Publications { index } => {
                let post_count = self.store.with_record(|record| record.post_count());
                self.feed = Some(FeedState::new(post_count, index, self.feed_seed));
            }
        }

        tracing::debug!("[Navigator] {} -> {}", self.route, route);
        self.route = route;
    }

    /// Switches between the own and other-account profile and shows `/`.
    pub fn show_profile(&mut self, viewing_own: bool) {
        self.store.set_viewing_own(viewing_own);
        self.go(Route::Profile);
    }

    /// The open edit session, while on `/config`.
    pub fn editor(&self) -> Option<&ProfileEditor> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut ProfileEditor> {
        self.editor.as_mut()
    }

    /// The feed reactions, while on a publications route.
    pub fn feed(&self) -> Option<&FeedState> {
        self.feed.as_ref()
    }

    pub fn feed_mut(&mut self) -> Option<&mut FeedState> {
        self.feed.as_mut()
    }

    /// Commits the open draft and returns to `/`.
    pub fn save(&mut self) -> Result<()> {
        let editor = self.editor.take().ok_or_else(not_editing)?;
        editor.commit();
        self.go(Route::Profile);
        Ok(())
    }

    /// Drops the open draft and returns to `/`.
    pub fn cancel(&mut self) -> Result<()> {
        if self.editor.is_none() {
            return Err(not_editing());
        }
        self.go(Route::Profile);
        Ok(())
    }

    /// Renders the current route.
    pub fn render(&self) -> Screen {
        match (&self.route, &self.editor, &self.feed) {
            (Route::Config, Some(editor), _) => {
                Screen::Config(render_config_form(editor.draft(), editor.is_dirty()))
            }
            (Route::Publications { .. }, _, Some(feed)) => {
                Screen::Publications(self.store.with_record(|record| feed.render(record)))
            }
            _ => {
                let viewing_own = self.store.viewing_own();
                Screen::Profile(
                    self.store
                        .with_record(|record| render_profile_page(record, viewing_own)),
                )
            }
        }
    }
}

fn not_editing() -> MockgramError {
    MockgramError::invalid_input("Not editing the profile; open /config first")
}
