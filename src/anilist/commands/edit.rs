use crate::commands::{CmdMessage, CmdResult};
use crate::descriptor::AnimeDescriptor;
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::model::Model;

use super::helpers::edit_displayed;

pub fn run(
    model: &mut Model,
    index: DisplayIndex,
    descriptor: &AnimeDescriptor,
) -> Result<CmdResult> {
    let outcome = edit_displayed(model, index, descriptor)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Edited anime {} ({}): {}",
        index, descriptor, outcome.after.anime
    )));
    if outcome.after.anime == outcome.before {
        result.add_message(CmdMessage::warning("Nothing changed"));
    }
    result.affected_animes.push(outcome.after);
    Ok(result)
}
