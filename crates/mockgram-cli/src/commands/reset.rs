use anyhow::{Context, Result};
use colored::Colorize;
use mockgram_core::profile::default_profile;

use crate::app::App;

/// Overwrites the stored profile with the default sample.
pub fn run(app: &App) -> Result<()> {
    app.repository
        .try_save(&default_profile())
        .with_context(|| format!("Failed to write '{}'", app.repository.key()))?;

    tracing::info!("[Reset] Stored profile replaced with the default sample");
    println!("{}", "Profile reset to the default sample.".bright_green());
    Ok(())
}
