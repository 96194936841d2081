use crate::anime::Anime;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AnilistError, Result};
use crate::index::DisplayAnime;
use crate::model::Model;

use super::helpers::displayed_index_of;

pub fn run(model: &mut Model, anime: Anime) -> Result<CmdResult> {
    if model.has_anime(&anime) {
        return Err(AnilistError::DuplicateAnime(anime.name().to_string()));
    }

    model.add_anime(anime.clone());
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("New anime added: {}", anime)));

    match displayed_index_of(model, &anime) {
        Some(index) => result.affected_animes.push(DisplayAnime { anime, index }),
        None => result.add_message(CmdMessage::info(format!(
            "It is hidden by the current filter ({})",
            model.filter()
        ))),
    }

    Ok(result)
}
