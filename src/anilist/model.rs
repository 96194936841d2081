//! # The Anime List Model
//!
//! [`Model`] owns two things:
//!
//! 1. **The backing list**: every stored [`Anime`], in insertion order.
//! 2. **The displayed list**: the backing list projected through the current
//!    [`AnimeFilter`], order preserved.
//!
//! The displayed list is stored as positions into the backing list and is
//! recomputed eagerly after every mutation and every filter change, so an
//! index lookup always sees the current state.
//!
//! Records are never edited in place. [`Model::set_anime`] finds the old
//! record by equality and swaps in the replacement.

use crate::anime::Anime;
use crate::error::{AnilistError, Result};
use crate::filter::AnimeFilter;
use crate::index::{index_animes, DisplayAnime, DisplayIndex};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    animes: Vec<Anime>,
    filter: AnimeFilter,
    displayed: Vec<usize>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_animes(animes: Vec<Anime>) -> Self {
        let mut model = Self {
            animes,
            filter: AnimeFilter::ShowAll,
            displayed: Vec::new(),
        };
        model.refresh();
        model
    }

    /// The full backing list, for persistence.
    pub fn animes(&self) -> &[Anime] {
        &self.animes
    }

    pub fn filter(&self) -> &AnimeFilter {
        &self.filter
    }

    pub fn filtered_animes(&self) -> impl Iterator<Item = &Anime> + '_ {
        self.displayed.iter().map(|&pos| &self.animes[pos])
    }

    pub fn filtered_len(&self) -> usize {
        self.displayed.len()
    }

    /// The displayed list numbered the way users address it.
    pub fn displayed_animes(&self) -> Vec<DisplayAnime> {
        index_animes(self.filtered_animes())
    }

    pub fn update_filter(&mut self, filter: AnimeFilter) {
        tracing::debug!(filter = %filter, "Updating displayed list filter");
        self.filter = filter;
        self.refresh();
    }

    /// Resolves a one-based index against the displayed list.
    pub fn resolve_displayed_index(&self, index: DisplayIndex) -> Result<&Anime> {
        self.displayed
            .get(index.zero_based())
            .map(|&pos| &self.animes[pos])
            .ok_or(AnilistError::IndexOutOfRange {
                index: index.one_based(),
                size: self.displayed.len(),
            })
    }

    /// Two anime are the same entry when their names match.
    pub fn has_anime(&self, anime: &Anime) -> bool {
        self.animes.iter().any(|a| a.name() == anime.name())
    }

    pub fn add_anime(&mut self, anime: Anime) {
        self.animes.push(anime);
        self.refresh();
    }

    pub fn delete_anime(&mut self, target: &Anime) -> Result<()> {
        let pos = self.position_of(target)?;
        self.animes.remove(pos);
        self.refresh();
        Ok(())
    }

    pub fn set_anime(&mut self, target: &Anime, edited: Anime) -> Result<()> {
        let pos = self.position_of(target)?;
        self.animes[pos] = edited;
        self.refresh();
        Ok(())
    }

    pub fn clear(&mut self) {
        self.animes.clear();
        self.refresh();
    }

    fn position_of(&self, target: &Anime) -> Result<usize> {
        self.animes
            .iter()
            .position(|a| a == target)
            .ok_or_else(|| AnilistError::AnimeNotFound(target.name().to_string()))
    }

    fn refresh(&mut self) {
        let filter = &self.filter;
        self.displayed = self
            .animes
            .iter()
            .enumerate()
            .filter(|(_, anime)| filter.matches(anime))
            .map(|(pos, _)| pos)
            .collect();
    }
}
