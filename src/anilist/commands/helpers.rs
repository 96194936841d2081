use crate::anime::Anime;
use crate::descriptor::AnimeDescriptor;
use crate::error::{AnilistError, Result};
use crate::filter::AnimeFilter;
use crate::index::{DisplayAnime, DisplayIndex};
use crate::model::Model;

/// Builds the replacement for `anime` described by `descriptor`.
///
/// Scalar slots overwrite their field. The genre slot merges into the current
/// set (union for add, difference for delete). `anime` itself is untouched.
pub fn apply_descriptor(anime: &Anime, descriptor: &AnimeDescriptor) -> Anime {
    let mut edited = anime.clone();
    if let Some(name) = descriptor.name() {
        edited = edited.with_name(name.clone());
    }
    if let Some(status) = descriptor.status() {
        edited = edited.with_status(status);
    }
    if let Some(episode) = descriptor.episode() {
        edited = edited.with_episode(episode);
    }
    if let Some(update) = descriptor.genres() {
        edited = edited.with_genres(update.apply_to(anime.genres()));
    }
    edited
}

/// Position of `anime` in the displayed list, if it is shown.
pub fn displayed_index_of(model: &Model, anime: &Anime) -> Option<DisplayIndex> {
    model
        .filtered_animes()
        .position(|a| a == anime)
        .map(DisplayIndex::from_zero_based)
}

#[derive(Debug)]
pub struct EditOutcome {
    pub before: Anime,
    pub after: DisplayAnime,
}

/// The edit path shared by the edit family.
///
/// Validates, resolves the index against the displayed list, applies the
/// descriptor, commits the replacement and resets the filter to show all.
/// Nothing is mutated unless every check passes.
pub fn edit_displayed(
    model: &mut Model,
    index: DisplayIndex,
    descriptor: &AnimeDescriptor,
) -> Result<EditOutcome> {
    if !descriptor.is_any_field_updated() {
        return Err(AnilistError::EmptyEdit);
    }

    let before = model.resolve_displayed_index(index)?.clone();
    let edited = apply_descriptor(&before, descriptor);

    if edited.name() != before.name() && model.has_anime(&edited) {
        return Err(AnilistError::DuplicateAnime(edited.name().to_string()));
    }

    model.set_anime(&before, edited.clone())?;
    model.update_filter(AnimeFilter::ShowAll);

    let new_index = displayed_index_of(model, &edited).unwrap_or(index);
    tracing::info!(index = %index, new_index = %new_index, changes = %descriptor, "Edited anime");

    Ok(EditOutcome {
        before,
        after: DisplayAnime {
            anime: edited,
            index: new_index,
        },
    })
}
