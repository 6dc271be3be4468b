use anyhow::{Context, Result};
use colored::Colorize;

use crate::app::App;

/// Prints the stored profile JSON exactly as persisted.
pub fn run(app: &App) -> Result<()> {
    let raw = app
        .repository
        .raw()
        .with_context(|| format!("Failed to read '{}'", app.repository.key()))?;

    match raw {
        Some(text) => println!("{}", text),
        None => eprintln!(
            "{}",
            format!(
                "Nothing stored under '{}'; the default profile is in use.",
                app.repository.key()
            )
            .yellow()
        ),
    }
    Ok(())
}
