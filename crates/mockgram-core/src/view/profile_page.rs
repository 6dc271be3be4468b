//! Profile page view model.

use crate::profile::{Highlight, ProfileRecord};
use crate::route::Route;

/// Posts per grid row.
pub const GRID_COLUMNS: usize = 3;

/// Every n-th grid tile carries the multi-image marker.
const MULTI_IMAGE_EVERY: usize = 7;

/// Notification counter shown next to the follow-requests icon.
const NOTIFICATION_BADGE: &str = "999+";

/// The top bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderView {
    /// Own account: username, account switcher, activity badge and the edit menu
    Own {
        username: String,
        notification_badge: &'static str,
        menu_target: Route,
    },
    /// Someone else's account: back chevron, username and the verified badge
    Other { username: String, verified: bool },
}

/// Counters next to the profile picture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsView {
    pub posts: usize,
    pub followers: String,
    pub following: String,
}

impl StatsView {
    pub const POSTS_LABEL: &'static str = "posts";
    pub const FOLLOWERS_LABEL: &'static str = "seguidores";
    pub const FOLLOWING_LABEL: &'static str = "seguindo";
}

/// A button under the bio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
    pub label: &'static str,
    /// Filled blue instead of grey
    pub primary: bool,
    /// Where pressing it navigates, if anywhere
    pub target: Option<Route>,
}

impl ActionButton {
    fn plain(label: &'static str) -> Self {
        Self {
            label,
            primary: false,
            target: None,
        }
    }
}

/// Picture, counters, name, bio and buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileInfo {
    pub picture: String,
    pub stats: StatsView,
    pub display_name: String,
    pub bio_lines: Vec<String>,
    pub actions: Vec<ActionButton>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightTile {
    pub label: String,
    pub image: String,
}

impl From<&Highlight> for HighlightTile {
    fn from(highlight: &Highlight) -> Self {
        Self {
            label: highlight.label.clone(),
            image: highlight.image.clone(),
        }
    }
}

/// The horizontally scrolling highlights row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightStrip {
    /// Leading "+ Novo" tile, own profile only
    pub show_add_new: bool,
    pub tiles: Vec<HighlightTile>,
}

impl HighlightStrip {
    pub const ADD_NEW_LABEL: &'static str = "Novo";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabKind {
    Grid,
    Reels,
    Tagged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentTab {
    pub kind: TabKind,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTile {
    pub index: usize,
    pub image: String,
    pub multi_image: bool,
    pub link: Route,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostGrid {
    pub columns: usize,
    pub tiles: Vec<PostTile>,
}

impl PostGrid {
    /// Tiles grouped into rows of `columns`.
    pub fn rows(&self) -> impl Iterator<Item = &[PostTile]> {
        self.tiles.chunks(self.columns.max(1))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKind {
    /// Switches to the other-account view
    Home,
    Search,
    NewPost,
    Reels,
    /// Switches to the own-account view
    Profile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub kind: NavKind,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BottomNav {
    pub items: Vec<NavItem>,
}

/// The whole `/` page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilePage {
    pub header: HeaderView,
    pub info: ProfileInfo,
    pub highlights: HighlightStrip,
    pub tabs: Vec<ContentTab>,
    pub grid: PostGrid,
    pub bottom_nav: BottomNav,
}

/// Renders the profile page for the own or the other-account mode.
pub fn render_profile_page(record: &ProfileRecord, viewing_own: bool) -> ProfilePage {
    ProfilePage {
        header: render_header(record, viewing_own),
        info: render_info(record, viewing_own),
        highlights: HighlightStrip {
            show_add_new: viewing_own,
            tiles: record.highlights.iter().map(HighlightTile::from).collect(),
        },
        tabs: vec![
            ContentTab {
                kind: TabKind::Grid,
                selected: true,
            },
            ContentTab {
                kind: TabKind::Reels,
                selected: false,
            },
            ContentTab {
                kind: TabKind::Tagged,
                selected: false,
            },
        ],
        grid: render_grid(&record.posts),
        bottom_nav: render_bottom_nav(viewing_own),
    }
}

fn render_header(record: &ProfileRecord, viewing_own: bool) -> HeaderView {
    if viewing_own {
        HeaderView::Own {
            username: record.username.clone(),
            notification_badge: NOTIFICATION_BADGE,
            menu_target: Route::Config,
        }
    } else {
        HeaderView::Other {
            username: record.username.clone(),
            verified: record.verified,
        }
    }
}

fn render_info(record: &ProfileRecord, viewing_own: bool) -> ProfileInfo {
    let actions = if viewing_own {
        vec![
            ActionButton {
                label: "Editar",
                primary: false,
                target: Some(Route::Config),
            },
            ActionButton::plain("Compartilhar perfil"),
            ActionButton::plain("👤"),
        ]
    } else {
        vec![
            ActionButton {
                label: "Seguir",
                primary: true,
                target: None,
            },
            ActionButton::plain("Mensagem"),
            ActionButton::plain("Email"),
            ActionButton::plain("👤"),
        ]
    };

    ProfileInfo {
        picture: record.profile_image.clone(),
        stats: StatsView {
            posts: record.post_count(),
            followers: record.follower_count.clone(),
            following: record.following_count.clone(),
        },
        display_name: record.display_name.clone(),
        bio_lines: record.bio_lines.clone(),
        actions,
    }
}

fn render_grid(posts: &[String]) -> PostGrid {
    PostGrid {
        columns: GRID_COLUMNS,
        tiles: posts
            .iter()
            .enumerate()
            .map(|(index, image)| PostTile {
                index,
                image: image.clone(),
                multi_image: index % MULTI_IMAGE_EVERY == 0,
                link: Route::Publications { index },
            })
            .collect(),
    }
}

fn render_bottom_nav(viewing_own: bool) -> BottomNav {
    let items = [
        NavKind::Home,
        NavKind::Search,
        NavKind::NewPost,
        NavKind::Reels,
        NavKind::Profile,
    ]
    .into_iter()
    .map(|kind| NavItem {
        kind,
        active: match kind {
            NavKind::Home => !viewing_own,
            NavKind::Profile => viewing_own,
            _ => false,
        },
    })
    .collect();

    BottomNav { items }
}
