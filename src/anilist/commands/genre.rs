use crate::commands::{CmdMessage, CmdResult};
use crate::descriptor::{AnimeDescriptor, GenreOperation};
use crate::error::{AnilistError, Result};
use crate::index::DisplayIndex;
use crate::model::Model;

use super::helpers::edit_displayed;

pub const GENRE_ONLY_CONSTRAINTS: &str =
    "The genre command only changes genres; use edit for other fields";

/// Adds or deletes genres on the anime at `index`.
///
/// The descriptor must carry a genre update and nothing else. Adding a genre
/// the anime already has, or deleting one it lacks, is not an error.
pub fn run(
    model: &mut Model,
    index: DisplayIndex,
    descriptor: &AnimeDescriptor,
) -> Result<CmdResult> {
    let update = descriptor.genres().ok_or(AnilistError::EmptyEdit)?;
    if !descriptor.is_genre_only() {
        return Err(AnilistError::InvalidFormat {
            constraints: GENRE_ONLY_CONSTRAINTS,
        });
    }
    let outcome = edit_displayed(model, index, descriptor)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Updated genres of anime {} ({}): {}",
        index, update, outcome.after.anime
    )));

    if outcome.after.anime.genres() == outcome.before.genres() {
        let note = match update.operation() {
            GenreOperation::Add => "The anime already had every given genre",
            GenreOperation::Delete => "The anime had none of the given genres",
        };
        result.add_message(CmdMessage::warning(note));
    }

    result.affected_animes.push(outcome.after);
    Ok(result)
}
