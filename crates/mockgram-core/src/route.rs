//! Static route table.

use std::fmt;

/// The three views of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// `/`: the profile page, own or other depending on the store flag
    #[default]
    Profile,
    /// `/config`: the edit form
    Config,
    /// `/publications/:index`: the post feed, scrolled to `index`
    Publications { index: usize },
}

/// Outcome of resolving a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub route: Route,
    /// True when the path matched nothing and was sent to `/`
    pub redirected: bool,
}

impl Route {
    /// Resolves a path, redirecting anything unknown to the profile page.
    ///
    /// A trailing slash is ignored; a query string or fragment is dropped.
    pub fn resolve(path: &str) -> Resolution {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();

        let route = match (path.starts_with('/'), segments.as_slice()) {
            (true, []) => Some(Route::Profile),
            (true, ["config"]) => Some(Route::Config),
            (true, ["publications", index]) => index
                .parse::<usize>()
                .ok()
                .map(|index| Route::Publications { index }),
            _ => None,
        };

        match route {
            Some(route) => Resolution {
                route,
                redirected: false,
            },
            None => Resolution {
                route: Route::Profile,
                redirected: true,
            },
        }
    }

    /// Shorthand for `Route::resolve(path).route`.
    pub fn parse(path: &str) -> Route {
        Self::resolve(path).route
    }

    /// The canonical path of this route.
    pub fn path(&self) -> String {
        match self {
            Route::Profile => "/".to_string(),
            Route::Config => "/config".to_string(),
            Route::Publications { index } => format!("/publications/{}", index),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
