use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::FilterEngine;

/// Produce the current filtered view of the catalog.
pub fn run(engine: &FilterEngine) -> Result<CmdResult> {
    let listed: Vec<_> = engine.filtered().into_iter().cloned().collect();
    let mut result = CmdResult::default().with_listed_cars(listed);
    if result.listed_cars.is_empty() {
        result.add_message(CmdMessage::info("No cars match the current filters."));
    }
    Ok(result)
}
