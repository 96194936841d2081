//! # Command Layer
//!
//! This module contains the **core business logic** of anilist. Each command
//! lives in its own submodule as a plain function over a [`Model`]; the
//! [`Command`] enum ties them together so a parsed command is a value that can
//! be stored, compared and executed later.
//!
//! ## Role and Responsibilities
//!
//! Commands:
//! - Validate their arguments against the model (index range, "any field set")
//! - Mutate the model through its replace/add/delete operations
//! - Return a structured [`CmdResult`] with affected anime and messages
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O**: No stdout, stderr or files. Persistence is the API's job.
//! - **Text parsing**: Commands receive typed values ([`DisplayIndex`],
//!   [`AnimeDescriptor`], [`AnimeFilter`]).
//! - **Hold the model**: The model is borrowed for one `execute` call only.
//!
//! ## Validation Before Mutation
//!
//! Every check (empty descriptor, index out of range, duplicate name) runs
//! before the model is touched. A failed command leaves the model exactly as
//! it was.
//!
//! ## Filter Policy
//!
//! The edit family ([`edit`] and [`genre`]) resets the displayed list to show
//! all anime after a successful edit, so the edited anime is always visible.
//! [`add`] and [`delete`] keep the current filter.
//!
//! ## Command Modules
//!
//! - [`add`]: Append a new anime
//! - [`delete`]: Remove the anime at a displayed index
//! - [`edit`]: Apply a descriptor to the anime at a displayed index
//! - [`genre`]: Add or delete genres of the anime at a displayed index
//! - [`find`]: Filter the displayed list (find by name, list with filters)
//! - [`clear`]: Remove every anime
//! - [`helpers`]: Descriptor application and shared edit path

use crate::anime::Anime;
use crate::descriptor::AnimeDescriptor;
use crate::error::Result;
use crate::filter::AnimeFilter;
use crate::index::{DisplayAnime, DisplayIndex};
use crate::model::Model;
use serde::Serialize;

pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod find;
pub mod genre;
pub mod helpers;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_animes: Vec<DisplayAnime>,
    pub listed_animes: Vec<DisplayAnime>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_animes(mut self, animes: Vec<DisplayAnime>) -> Self {
        self.listed_animes = animes;
        self
    }
}

/// A fully parsed command, ready to run against a model.
///
/// Two commands are equal when they are the same kind with the same
/// arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Anime),
    Delete {
        index: DisplayIndex,
    },
    Edit {
        index: DisplayIndex,
        descriptor: AnimeDescriptor,
    },
    Genre {
        index: DisplayIndex,
        descriptor: AnimeDescriptor,
    },
    Find(AnimeFilter),
    List(AnimeFilter),
    Clear,
}

impl Command {
    /// The word users type to invoke this command.
    pub fn word(&self) -> &'static str {
        match self {
            Command::Add(_) => "add",
            Command::Delete { .. } => "delete",
            Command::Edit { .. } => "edit",
            Command::Genre { .. } => "genre",
            Command::Find(_) => "find",
            Command::List(_) => "list",
            Command::Clear => "clear",
        }
    }

    /// Commands that can change the backing list, and so need saving.
    pub fn is_mutating(&self) -> bool {
        !matches!(self, Command::Find(_) | Command::List(_))
    }

    #[tracing::instrument(name = "execute", skip(self, model), fields(command = self.word()))]
    pub fn execute(&self, model: &mut Model) -> Result<CmdResult> {
        let result = match self {
            Command::Add(anime) => add::run(model, anime.clone()),
            Command::Delete { index } => delete::run(model, *index),
            Command::Edit { index, descriptor } => edit::run(model, *index, descriptor),
            Command::Genre { index, descriptor } => genre::run(model, *index, descriptor),
            Command::Find(filter) => find::run(model, filter.clone()),
            Command::List(filter) => find::list(model, filter.clone()),
            Command::Clear => clear::run(model),
        };

        match &result {
            Ok(res) => tracing::debug!(
                affected = res.affected_animes.len(),
                listed = res.listed_animes.len(),
                "Command succeeded"
            ),
            Err(e) => tracing::debug!(error = %e, "Command failed"),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anime::Status;
    use crate::descriptor::GenreOperation;
    use crate::test_utils::{anime, genre};

    fn idx(i: usize) -> DisplayIndex {
        DisplayIndex::from_one_based(i).unwrap()
    }

    fn genre_add(names: &[&str]) -> AnimeDescriptor {
        AnimeDescriptor::new().with_genres(names.iter().map(|n| genre(n)), GenreOperation::Add)
    }

    #[test]
    fn test_command_equality() {
        let descriptor = genre_add(&["Shounen"]);
        let standard = Command::Genre {
            index: idx(1),
            descriptor: descriptor.clone(),
        };

        // copied descriptor -> equal
        let same_values = Command::Genre {
            index: idx(1),
            descriptor: descriptor.clone(),
        };
        assert_eq!(standard, same_values);

        // different kind
        assert_ne!(standard, Command::Clear);
        assert_ne!(
            standard,
            Command::Edit {
                index: idx(1),
                descriptor: genre_add(&["Shounen"]),
            }
        );

        // different index
        assert_ne!(
            standard,
            Command::Genre {
                index: idx(2),
                descriptor: genre_add(&["Shounen"]),
            }
        );

        // different descriptor
        assert_ne!(
            standard,
            Command::Genre {
                index: idx(1),
                descriptor: genre_add(&["Superhero"]),
            }
        );
    }

    #[test]
    fn test_execute_dispatches_and_reports() {
        let mut model = Model::with_animes(vec![anime("Naruto", Status::Watching, &["Shounen"])]);
        let result = Command::Genre {
            index: idx(1),
            descriptor: genre_add(&["Fantasy"]),
        }
        .execute(&mut model)
        .unwrap();

        assert_eq!(result.affected_animes.len(), 1);
        assert!(model.animes()[0].has_genre(&genre("Fantasy")));
    }

    #[test]
    fn test_listing_commands_are_not_mutating() {
        assert!(!Command::List(AnimeFilter::ShowAll).is_mutating());
        assert!(!Command::Find(AnimeFilter::name_keywords(["x"])).is_mutating());
        assert!(Command::Clear.is_mutating());
        assert!(Command::Delete { index: idx(1) }.is_mutating());
    }
}
