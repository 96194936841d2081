use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplayAnime, DisplayIndex};
use crate::model::Model;

pub fn run(model: &mut Model, index: DisplayIndex) -> Result<CmdResult> {
    let target = model.resolve_displayed_index(index)?.clone();
    model.delete_anime(&target)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Deleted anime ({}): {}",
        index, target
    )));
    result.affected_animes.push(DisplayAnime {
        anime: target,
        index,
    });
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anime::Status;
    use crate::error::AnilistError;
    use crate::filter::AnimeFilter;
    use crate::test_utils::typical_animes;

    fn idx(i: usize) -> DisplayIndex {
        DisplayIndex::from_one_based(i).unwrap()
    }

    #[test]
    fn removes_displayed_anime() {
        let mut model = Model::with_animes(typical_animes());
        let result = run(&mut model, idx(2)).unwrap();

        assert_eq!(model.animes().len(), 4);
        assert!(model.animes().iter().all(|a| a.name().as_str() != "Cowboy Bebop"));
        assert_eq!(result.affected_animes[0].anime.name().as_str(), "Cowboy Bebop");
    }

    #[test]
    fn resolves_against_filtered_list() {
        let mut model = Model::with_animes(typical_animes());
        model.update_filter(AnimeFilter::StatusIs(Status::ToWatch));

        run(&mut model, idx(2)).unwrap();

        assert!(model.animes().iter().all(|a| a.name().as_str() != "Mushishi"));
        assert_eq!(model.filter(), &AnimeFilter::StatusIs(Status::ToWatch));
        assert_eq!(model.filtered_len(), 1);
    }

    #[test]
    fn out_of_range_leaves_model_unchanged() {
        let mut model = Model::with_animes(typical_animes());
        let before = model.clone();

        let err = run(&mut model, idx(6)).unwrap_err();
        assert!(matches!(err, AnilistError::IndexOutOfRange { index: 6, size: 5 }));
        assert_eq!(model, before);
    }
}
