//! Interactive session over the navigator.

mod command;

use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::{Result, anyhow};
use colored::Colorize;
use mockgram_application::Navigator;
use mockgram_core::image::ImagePicker;
use mockgram_infrastructure::FsImagePicker;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use crate::app::App;
use crate::render;
use command::{COMMAND_WORDS, HELP, ReplCommand};

/// Rustyline helper completing and hinting command words.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: COMMAND_WORDS.iter().map(|word| word.to_string()).collect(),
        }
    }

    fn is_command(&self, line: &str) -> bool {
        let word = line.split_whitespace().next().unwrap_or_default();
        self.commands.iter().any(|cmd| cmd == word)
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.contains(' ') {
            return Ok((0, vec![]));
        }

        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if self.is_command(line) {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.is_empty() || line.contains(' ') {
            return None;
        }
        self.commands
            .iter()
            .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for CliHelper {}

/// What the loop does after a command.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Render,
    Message(String),
    Quit,
}

/// Runs the REPL until `quit` or end of input.
pub async fn run(app: App) -> Result<()> {
    let mut navigator = app.navigator();
    let picker = FsImagePicker::new();

    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    println!("{}", "=== Mockgram ===".bright_magenta().bold());
    println!(
        "{}",
        "Type 'help' for commands, 'go /config' to edit, or 'quit' to exit.".bright_black()
    );
    println!();
    println!("{}", render::screen(&navigator.render()));

    loop {
        let prompt = format!("{} >> ", navigator.route());

        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                let outcome = match trimmed.parse::<ReplCommand>() {
                    Ok(command) => execute(&mut navigator, &picker, command).await,
                    Err(e) => Err(e),
                };

                match outcome {
                    Ok(Outcome::Render) => println!("{}", render::screen(&navigator.render())),
                    Ok(Outcome::Message(message)) => println!("{}", message.bright_green()),
                    Ok(Outcome::Quit) => {
                        println!("{}", "Bye.".bright_green());
                        break;
                    }
                    Err(e) => eprintln!("{}", format!("{:#}", e).red()),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "Interrupted; the draft is kept. Type 'quit' to leave.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "End of input.".bright_green());
                break;
            }
            Err(err) => {
                tracing::error!("[Repl] Readline failed: {:?}", err);
                eprintln!("{}", format!("Input closed: {}", err).red());
                break;
            }
        }
    }

    if let Some(editor) = navigator.editor()
        && editor.is_dirty()
    {
        tracing::info!("[Repl] Exiting with unsaved changes; they are dropped");
    }

    Ok(())
}

async fn execute(
    navigator: &mut Navigator,
    picker: &dyn ImagePicker,
    command: ReplCommand,
) -> Result<Outcome> {
    match command {
        ReplCommand::Go(path) => {
            let resolution = navigator.navigate(&path);
            if resolution.redirected {
                println!("{}", format!("No page at '{}', showing /", path).yellow());
            }
            Ok(Outcome::Render)
        }
        ReplCommand::ShowProfile { own } => {
            navigator.show_profile(own);
            Ok(Outcome::Render)
        }
        ReplCommand::Show => Ok(Outcome::Render),
        ReplCommand::Like(index) => {
            let feed = navigator
                .feed_mut()
                .ok_or_else(|| anyhow!("Open a post first, e.g. 'go /publications/0'"))?;
            feed.toggle_like(index)?;
            Ok(Outcome::Render)
        }
        ReplCommand::Save(index) => {
            let feed = navigator
                .feed_mut()
                .ok_or_else(|| anyhow!("Open a post first, e.g. 'go /publications/0'"))?;
            feed.toggle_save(index)?;
            Ok(Outcome::Render)
        }
        ReplCommand::Edit(edit) => {
            navigator.editor_mut().ok_or_else(not_editing)?.apply(edit)?;
            Ok(Outcome::Render)
        }
        ReplCommand::Attach { target, source } => {
            navigator
                .editor_mut()
                .ok_or_else(not_editing)?
                .attach_image(target, picker, &source)
                .await
                .map_err(|e| anyhow!("Could not attach {}: {}", source.display(), e))?;
            Ok(Outcome::Render)
        }
        ReplCommand::Commit => {
            navigator.save()?;
            Ok(Outcome::Message("Profile saved.".to_string()))
        }
        ReplCommand::Cancel => {
            navigator.cancel()?;
            Ok(Outcome::Message("Changes discarded.".to_string()))
        }
        ReplCommand::Help => Ok(Outcome::Message(HELP.to_string())),
        ReplCommand::Quit => Ok(Outcome::Quit),
    }
}

fn not_editing() -> anyhow::Error {
    anyhow!("Only available in the edit form; type 'go /config'")
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockgram_application::ProfileStore;
    use mockgram_core::Route;
    use mockgram_infrastructure::{KeyValueProfileRepository, MemoryKeyValueStore};
    use std::sync::Arc;

    fn navigator() -> (Navigator, Arc<KeyValueProfileRepository>) {
        let repository = Arc::new(KeyValueProfileRepository::new(Arc::new(
            MemoryKeyValueStore::new(),
        )));
        let store = Arc::new(ProfileStore::open(repository.clone()));
        (Navigator::new(store).with_feed_seed(Some(1)), repository)
    }

    async fn run_line(navigator: &mut Navigator, line: &str) -> Result<Outcome> {
        let command = line.parse::<ReplCommand>()?;
        execute(navigator, &FsImagePicker::new(), command).await
    }

    #[tokio::test]
    async fn test_edit_session() {
        use mockgram_core::profile::ProfileRepository;

        let (mut navigator, repository) = navigator();

        run_line(&mut navigator, "go /config").await.unwrap();
        run_line(&mut navigator, "set username alice").await.unwrap();
        run_line(&mut navigator, "bio hello\\nworld").await.unwrap();
        run_line(&mut navigator, "post add").await.unwrap();
        let outcome = run_line(&mut navigator, "commit").await.unwrap();

        assert_eq!(outcome, Outcome::Message("Profile saved.".to_string()));
        assert_eq!(navigator.route(), Route::Profile);

        let stored = repository.load();
        assert_eq!(stored.username, "alice");
        assert_eq!(stored.bio_lines, vec!["hello", "world"]);
        assert_eq!(stored.posts.len(), 62);
    }

    #[tokio::test]
    async fn test_edits_outside_form_rejected() {
        let (mut navigator, _) = navigator();
        assert!(run_line(&mut navigator, "post add").await.is_err());
        assert!(run_line(&mut navigator, "commit").await.is_err());
        assert!(run_line(&mut navigator, "like 0").await.is_err());
    }

    #[tokio::test]
    async fn test_feed_reactions() {
        let (mut navigator, _) = navigator();
        run_line(&mut navigator, "go /publications/2").await.unwrap();
        run_line(&mut navigator, "like 2").await.unwrap();
        run_line(&mut navigator, "save 2").await.unwrap();

        let reaction = navigator.feed().unwrap().reaction(2).unwrap();
        assert!(reaction.liked && reaction.saved);
        assert!(run_line(&mut navigator, "like 61").await.is_err());
    }

    #[tokio::test]
    async fn test_attach_missing_file_keeps_draft() {
        let (mut navigator, _) = navigator();
        run_line(&mut navigator, "go /config").await.unwrap();
        let err = run_line(&mut navigator, "attach profile /nonexistent/me.png")
            .await
            .unwrap_err();

        assert!(err.to_string().starts_with("Could not attach"));
        assert!(!navigator.editor().unwrap().is_dirty());
    }

    #[test]
    fn test_helper_recognizes_commands() {
        let helper = CliHelper::new();
        assert!(helper.is_command("highlight add"));
        assert!(!helper.is_command("dance"));
    }
}
