//! Parsing of REPL input lines.

use anyhow::{Context, Result, anyhow, bail};
use mockgram_application::{EditCommand, FieldUpdate};
use mockgram_core::image::ImageTarget;
use mockgram_core::profile::{HighlightField, ProfileField};
use std::path::PathBuf;
use std::str::FromStr;
use strum::VariantNames;

/// Command words, in the order `help` lists them.
pub const COMMAND_WORDS: &[&str] = &[
    "go", "own", "other", "show", "like", "save", "set", "verified", "bio", "highlight", "post",
    "attach", "commit", "cancel", "help", "quit",
];

pub const HELP: &str = "\
Navigation
  go PATH                     open /, /config or /publications/N
  own | other                 show the profile as its owner or as a visitor
  show                        draw the current view again
Feed (/publications/N)
  like N | save N             toggle like or bookmark on post N
Edit form (/config)
  set FIELD VALUE             FIELD: username, name, followers, following, picture
  verified on|off
  bio TEXT                    use \\n for line breaks, \\\\ for a backslash
  highlight add | rm I | name I TEXT | image I URL
  post add | rm I | image I URL
  attach profile FILE | attach highlight I FILE | attach post I FILE
  commit | cancel             save and return to /, or drop the changes
Session
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Go(String),
    ShowProfile { own: bool },
    Show,
    Like(usize),
    Save(usize),
    Edit(EditCommand),
    Attach { target: ImageTarget, source: PathBuf },
    Commit,
    Cancel,
    Help,
    Quit,
}

impl FromStr for ReplCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (word, rest) = split_word(line);

        let command = match word {
            "go" => ReplCommand::Go(required(rest, "go PATH")?.to_string()),
            "own" => ReplCommand::ShowProfile { own: true },
            "other" => ReplCommand::ShowProfile { own: false },
            "show" => ReplCommand::Show,
            "like" => ReplCommand::Like(index(rest, "like N")?),
            "save" => ReplCommand::Save(index(rest, "save N")?),
            "set" => parse_set(rest)?,
            "verified" => parse_verified(rest)?,
            "bio" => ReplCommand::Edit(EditCommand::SetBioText(unescape(rest))),
            "highlight" => parse_highlight(rest)?,
            "post" => parse_post(rest)?,
            "attach" => parse_attach(rest)?,
            "commit" => ReplCommand::Commit,
            "cancel" => ReplCommand::Cancel,
            "help" | "?" => ReplCommand::Help,
            "quit" | "exit" => ReplCommand::Quit,
            other => bail!("Unknown command '{}'; type 'help'", other),
        };
        Ok(command)
    }
}

fn parse_set(rest: &str) -> Result<ReplCommand> {
    let usage = "set FIELD VALUE";
    let (name, value) = split_word(required(rest, usage)?);
    let field = ProfileField::from_str(name).map_err(|_| {
        anyhow!(
            "Unknown field '{}'; expected one of {}",
            name,
            ProfileField::VARIANTS.join(", ")
        )
    })?;
    Ok(ReplCommand::Edit(EditCommand::SetField(FieldUpdate::Text(
        field,
        value.to_string(),
    ))))
}

fn parse_verified(rest: &str) -> Result<ReplCommand> {
    let verified = match rest {
        "on" | "true" | "yes" => true,
        "off" | "false" | "no" => false,
        _ => bail!("Usage: verified on|off"),
    };
    Ok(ReplCommand::Edit(EditCommand::SetField(
        FieldUpdate::Verified(verified),
    )))
}

fn parse_highlight(rest: &str) -> Result<ReplCommand> {
    let usage = "highlight add | rm I | name I TEXT | image I URL";
    let (action, args) = split_word(required(rest, usage)?);
    let edit = match action {
        "add" => EditCommand::AddHighlight,
        "rm" => EditCommand::RemoveHighlight(index(args, usage)?),
        "name" | "image" => {
            let (position, value) = split_word(args);
            let (field, value) = if action == "name" {
                (HighlightField::Label, value)
            } else {
                (HighlightField::Image, required(value, usage)?)
            };
            EditCommand::UpdateHighlight {
                index: index(position, usage)?,
                field,
                value: value.to_string(),
            }
        }
        _ => bail!("Usage: {}", usage),
    };
    Ok(ReplCommand::Edit(edit))
}

fn parse_post(rest: &str) -> Result<ReplCommand> {
    let usage = "post add | rm I | image I URL";
    let (action, args) = split_word(required(rest, usage)?);
    let edit = match action {
        "add" => EditCommand::AddPost,
        "rm" => EditCommand::RemovePost(index(args, usage)?),
        "image" => {
            let (position, image) = split_word(args);
            EditCommand::UpdatePost {
                index: index(position, usage)?,
                image: required(image, usage)?.to_string(),
            }
        }
        _ => bail!("Usage: {}", usage),
    };
    Ok(ReplCommand::Edit(edit))
}

fn parse_attach(rest: &str) -> Result<ReplCommand> {
    let usage = "attach profile FILE | attach highlight I FILE | attach post I FILE";
    let (kind, args) = split_word(required(rest, usage)?);
    let (target, source) = match kind {
        "profile" => (ImageTarget::Profile, args),
        "highlight" | "post" => {
            let (position, source) = split_word(args);
            let position = index(position, usage)?;
            let target = if kind == "highlight" {
                ImageTarget::Highlight(position)
            } else {
                ImageTarget::Post(position)
            };
            (target, source)
        }
        _ => bail!("Usage: {}", usage),
    };
    Ok(ReplCommand::Attach {
        target,
        source: PathBuf::from(required(source, usage)?),
    })
}

/// Splits off the first whitespace-delimited word.
fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (input, ""),
    }
}

fn required<'a>(value: &'a str, usage: &str) -> Result<&'a str> {
    if value.trim().is_empty() {
        bail!("Usage: {}", usage);
    }
    Ok(value.trim())
}

fn index(value: &str, usage: &str) -> Result<usize> {
    let value = required(value, usage)?;
    value
        .parse()
        .with_context(|| format!("'{}' is not an index; usage: {}", value, usage))
}

/// Turns `\n` into a line break and `\\` into a single backslash.
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> ReplCommand {
        line.parse().unwrap()
    }

    #[test]
    fn test_navigation() {
        assert_eq!(parse("go /publications/3"), ReplCommand::Go("/publications/3".to_string()));
        assert_eq!(parse("  own "), ReplCommand::ShowProfile { own: true });
        assert_eq!(parse("other"), ReplCommand::ShowProfile { own: false });
        assert_eq!(parse("like 4"), ReplCommand::Like(4));
        assert_eq!(parse("exit"), ReplCommand::Quit);
    }

    #[test]
    fn test_set_keeps_spaces() {
        assert_eq!(
            parse("set name Famous  Person Jr"),
            ReplCommand::Edit(EditCommand::SetField(FieldUpdate::Text(
                ProfileField::DisplayName,
                "Famous  Person Jr".to_string()
            )))
        );
        assert_eq!(
            parse("set followers 2M"),
            ReplCommand::Edit(EditCommand::SetField(FieldUpdate::Text(
                ProfileField::FollowerCount,
                "2M".to_string()
            )))
        );
    }

    #[test]
    fn test_set_unknown_field() {
        let err = "set age 30".parse::<ReplCommand>().unwrap_err();
        assert!(err.to_string().contains("username"));
    }

    #[test]
    fn test_bio_escapes() {
        assert_eq!(
            parse("bio first\\nsecond\\n"),
            ReplCommand::Edit(EditCommand::SetBioText("first\nsecond\n".to_string()))
        );
        assert_eq!(
            parse("bio"),
            ReplCommand::Edit(EditCommand::SetBioText(String::new()))
        );
    }

    #[test]
    fn test_bio_literal_backslash() {
        assert_eq!(
            parse(r"bio C:\\new\nnext \t"),
            ReplCommand::Edit(EditCommand::SetBioText("C:\\new\nnext \\t".to_string()))
        );
    }

    #[test]
    fn test_highlight_and_post() {
        assert_eq!(
            parse("highlight add"),
            ReplCommand::Edit(EditCommand::AddHighlight)
        );
        assert_eq!(
            parse("highlight name 2 summer trip"),
            ReplCommand::Edit(EditCommand::UpdateHighlight {
                index: 2,
                field: HighlightField::Label,
                value: "summer trip".to_string(),
            })
        );
        assert_eq!(
            parse("post rm 0"),
            ReplCommand::Edit(EditCommand::RemovePost(0))
        );
        assert_eq!(
            parse("post image 1 https://example.com/a.png"),
            ReplCommand::Edit(EditCommand::UpdatePost {
                index: 1,
                image: "https://example.com/a.png".to_string(),
            })
        );
    }

    #[test]
    fn test_attach() {
        assert_eq!(
            parse("attach post 3 ./pics/beach photo.jpg"),
            ReplCommand::Attach {
                target: ImageTarget::Post(3),
                source: PathBuf::from("./pics/beach photo.jpg"),
            }
        );
        assert_eq!(
            parse("attach profile me.png"),
            ReplCommand::Attach {
                target: ImageTarget::Profile,
                source: PathBuf::from("me.png"),
            }
        );
    }

    #[test]
    fn test_bad_input() {
        for line in [
            "dance",
            "go",
            "like x",
            "verified maybe",
            "highlight rm",
            "post image 1",
            "highlight image 0",
            "attach highlight 1",
        ] {
            assert!(line.parse::<ReplCommand>().is_err(), "accepted {line:?}");
        }
    }
}
