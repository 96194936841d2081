use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Model;

pub fn run(model: &mut Model) -> Result<CmdResult> {
    let removed = model.animes().len();
    model.clear();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Anime list has been cleared ({} removed)",
        removed
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::typical_animes;

    #[test]
    fn removes_everything() {
        let mut model = Model::with_animes(typical_animes());
        let result = run(&mut model).unwrap();

        assert!(model.animes().is_empty());
        assert_eq!(model.filtered_len(), 0);
        assert_eq!(
            result.messages[0].content,
            "Anime list has been cleared (5 removed)"
        );
    }

    #[test]
    fn clearing_empty_list_is_fine() {
        let mut model = Model::new();
        assert!(run(&mut model).is_ok());
    }
}
