//! Plain-text drawing of the view models.

use colored::Colorize;
use mockgram_application::Screen;
use mockgram_core::view::{
    ActionButton, ConfigFormView, FeedEntryView, FeedView, HeaderView, HighlightStrip, NavKind,
    PostGrid, ProfilePage, StatsView, TabKind,
};
use std::fmt::Write;

/// Longest image reference printed verbatim.
const IMAGE_PREVIEW_LEN: usize = 48;

pub fn screen(screen: &Screen) -> String {
    match screen {
        Screen::Profile(page) => profile_page(page),
        Screen::Config(form) => config_form(form),
        Screen::Publications(feed) => feed_view(feed),
    }
}

pub fn profile_page(page: &ProfilePage) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", header(&page.header));
    let _ = writeln!(out);

    let info = &page.info;
    let _ = writeln!(out, "{} {}", "◉".bright_magenta(), image_label(&info.picture).dimmed());
    let _ = writeln!(out, "{}", stats(&info.stats));
    let _ = writeln!(out, "{}", info.display_name.bold());
    for line in &info.bio_lines {
        let _ = writeln!(out, "{}", line);
    }
    let _ = writeln!(out, "{}", actions(&info.actions));
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", highlights(&page.highlights));
    let _ = writeln!(out);

    let tabs: Vec<String> = page
        .tabs
        .iter()
        .map(|tab| {
            let label = match tab.kind {
                TabKind::Grid => "▦ posts",
                TabKind::Reels => "▶ reels",
                TabKind::Tagged => "◎ tagged",
            };
            if tab.selected {
                label.bold().underline().to_string()
            } else {
                label.dimmed().to_string()
            }
        })
        .collect();
    let _ = writeln!(out, "{}", tabs.join("   "));

    out.push_str(&grid(&page.grid));
    let _ = writeln!(out);

    let nav: Vec<String> = page
        .bottom_nav
        .items
        .iter()
        .map(|item| {
            let label = match item.kind {
                NavKind::Home => "home",
                NavKind::Search => "search",
                NavKind::NewPost => "new",
                NavKind::Reels => "reels",
                NavKind::Profile => "profile",
            };
            if item.active {
                format!("[{}]", label).bright_white().bold().to_string()
            } else {
                label.dimmed().to_string()
            }
        })
        .collect();
    let _ = write!(out, "{}", nav.join("  "));

    out
}

fn header(header: &HeaderView) -> String {
    match header {
        HeaderView::Own {
            username,
            notification_badge,
            menu_target,
        } => format!(
            "{} ⌄   ♡ {}  ＋  ☰ {}",
            username.bold(),
            notification_badge.red(),
            format!("({})", menu_target).dimmed()
        ),
        HeaderView::Other { username, verified } => {
            let badge = if *verified {
                format!(" {}", "✔".bright_blue())
            } else {
                String::new()
            };
            format!("‹ {}{}   ⋯", username.bold(), badge)
        }
    }
}

fn stats(stats: &StatsView) -> String {
    format!(
        "{} {}   {} {}   {} {}",
        stats.posts.to_string().bold(),
        StatsView::POSTS_LABEL,
        stats.followers.bold(),
        StatsView::FOLLOWERS_LABEL,
        stats.following.bold(),
        StatsView::FOLLOWING_LABEL
    )
}

fn actions(actions: &[ActionButton]) -> String {
    actions
        .iter()
        .map(|action| {
            let label = format!("[ {} ]", action.label);
            if action.primary {
                label.on_blue().bright_white().to_string()
            } else {
                label
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn highlights(strip: &HighlightStrip) -> String {
    let mut tiles = Vec::new();
    if strip.show_add_new {
        tiles.push(format!("(+ {})", HighlightStrip::ADD_NEW_LABEL).green().to_string());
    }
    tiles.extend(strip.tiles.iter().map(|tile| format!("({})", tile.label)));
    tiles.join(" ")
}

fn grid(grid: &PostGrid) -> String {
    let mut out = String::new();
    for row in grid.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|tile| {
                let marker = if tile.multi_image { "⧉" } else { " " };
                format!("[{:>3}{}]", tile.index, marker)
            })
            .collect();
        let _ = writeln!(out, "{}", cells.join(" "));
    }
    out
}

pub fn config_form(form: &ConfigFormView) -> String {
    let mut out = String::new();

    let title = if form.dirty {
        format!("{} {}", "Edit profile".bold(), "(unsaved changes)".yellow())
    } else {
        "Edit profile".bold().to_string()
    };
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out);

    let field = |name: &str, value: &str| format!("  {:<10} {}", name.cyan(), value);
    let _ = writeln!(out, "{}", field("picture", &image_label(&form.picture)));
    let _ = writeln!(out, "{}", field("username", &form.username));
    let _ = writeln!(
        out,
        "{}",
        field("verified", if form.verified { "on" } else { "off" })
    );
    let _ = writeln!(out, "{}", field("name", &form.display_name));
    let _ = writeln!(out, "{}", field("followers", &form.followers));
    let _ = writeln!(out, "{}", field("following", &form.following));
    let _ = writeln!(out, "  {}", "bio".cyan());
    for line in form.bio_text.split('\n') {
        let _ = writeln!(out, "    │ {}", line);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{} ({})", "Highlights".bold(), form.highlights.len());
    for row in &form.highlights {
        let _ = writeln!(
            out,
            "  {:>3}  {:<12} {}",
            row.index,
            row.label,
            image_label(&row.image).dimmed()
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{} ({})", "Posts".bold(), form.posts.len());
    for row in &form.posts {
        let _ = writeln!(out, "  {:>3}  {}", row.index, image_label(&row.image).dimmed());
    }

    out
}

pub fn feed_view(feed: &FeedView) -> String {
    if feed.entries.is_empty() {
        return "No posts yet.".dimmed().to_string();
    }

    let mut out = String::new();
    if feed.focus.is_none() {
        let _ = writeln!(out, "{}", "Post not found; showing the whole feed.".yellow());
    }
    for entry in &feed.entries {
        out.push_str(&feed_entry(entry));
    }
    out
}

fn feed_entry(entry: &FeedEntryView) -> String {
    let mut out = String::new();
    let pointer = if entry.focused {
        "▶".bright_yellow().to_string()
    } else {
        " ".to_string()
    };
    let badge = if entry.verified {
        format!(" {}", "✔".bright_blue())
    } else {
        String::new()
    };
    let _ = writeln!(out, "{} #{} {}{}", pointer, entry.index, entry.author.bold(), badge);
    let _ = writeln!(out, "    {}", image_label(&entry.image).dimmed());

    let heart = if entry.reaction.liked {
        "♥".red().to_string()
    } else {
        "♡".to_string()
    };
    let bookmark = if entry.reaction.saved { "■" } else { "□" };
    let _ = writeln!(
        out,
        "    {} {} curtidas   {}",
        heart, entry.reaction.likes, bookmark
    );
    out
}

/// Shortens embedded images to their MIME type and size.
pub fn image_label(image: &str) -> String {
    if let Some(rest) = image.strip_prefix("data:") {
        let mime = rest.split([';', ',']).next().unwrap_or_default();
        return format!("<embedded {}, {} chars>", mime, image.len());
    }
    if image.chars().count() > IMAGE_PREVIEW_LEN {
        let head: String = image.chars().take(IMAGE_PREVIEW_LEN).collect();
        return format!("{}…", head);
    }
    image.to_string()
}
