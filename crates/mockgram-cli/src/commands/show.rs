use anyhow::Result;
use colored::Colorize;

use crate::app::App;
use crate::render;

/// Renders one route and exits.
pub fn run(app: &App, path: &str) -> Result<()> {
    let mut navigator = app.navigator();
    let resolution = navigator.navigate(path);
    if resolution.redirected {
        eprintln!("{}", format!("No page at '{}', showing /", path).yellow());
    }

    println!("{}", render::screen(&navigator.render()));
    Ok(())
}
