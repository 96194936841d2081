//! Commands that only change what is displayed.
//!
//! `find` narrows the list by name keywords. `list` shows everything, or
//! whatever the given genre/status filter selects. Neither touches the
//! backing list.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::AnimeFilter;
use crate::model::Model;

pub fn run(model: &mut Model, filter: AnimeFilter) -> Result<CmdResult> {
    show(model, filter)
}

pub fn list(model: &mut Model, filter: AnimeFilter) -> Result<CmdResult> {
    show(model, filter)
}

fn show(model: &mut Model, filter: AnimeFilter) -> Result<CmdResult> {
    model.update_filter(filter);
    let listed = model.displayed_animes();

    let mut result = CmdResult::default();
    let summary = if model.filter().is_show_all() {
        format!("Listed all anime ({})", listed.len())
    } else {
        format!("{} anime listed!", listed.len())
    };
    result.add_message(CmdMessage::info(summary));
    Ok(result.with_listed_animes(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anime::Status;
    use crate::test_utils::{genres, typical_animes};

    #[test]
    fn find_matches_whole_words_any_keyword() {
        let mut model = Model::with_animes(typical_animes());
        let result = run(&mut model, AnimeFilter::name_keywords(["titan", "MONSTER"])).unwrap();

        let names: Vec<&str> = result
            .listed_animes
            .iter()
            .map(|d| d.anime.name().as_str())
            .collect();
        assert_eq!(names, vec!["Monster", "Attack on Titan"]);
        assert_eq!(result.listed_animes[1].index.one_based(), 2);
        assert_eq!(result.messages[0].content, "2 anime listed!");
    }

    #[test]
    fn find_does_not_mutate_backing_list() {
        let mut model = Model::with_animes(typical_animes());
        let before = model.animes().to_vec();

        run(&mut model, AnimeFilter::name_keywords(["nothing"])).unwrap();
        assert_eq!(model.animes(), before.as_slice());
        assert_eq!(model.filtered_len(), 0);
    }

    #[test]
    fn list_with_filters_and_show_all() {
        let mut model = Model::with_animes(typical_animes());

        let result = list(
            &mut model,
            AnimeFilter::all(vec![
                AnimeFilter::StatusIs(Status::Watching),
                AnimeFilter::GenreContains(genres(&["Action"])),
            ]),
        )
        .unwrap();
        assert_eq!(result.listed_animes.len(), 1);
        assert_eq!(result.listed_animes[0].anime.name().as_str(), "Attack on Titan");

        let result = list(&mut model, AnimeFilter::ShowAll).unwrap();
        assert_eq!(result.listed_animes.len(), 5);
        assert_eq!(result.messages[0].content, "Listed all anime (5)");
    }
}
