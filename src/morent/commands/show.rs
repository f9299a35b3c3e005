use crate::commands::helpers::resolve_car;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter::FilterEngine;

/// Detail lookup by slug or id over the raw record set. The lookup
/// ignores active facets: a filtered-out car still has a detail page.
pub fn run(engine: &FilterEngine, key: &str) -> Result<CmdResult> {
    let car = resolve_car(engine.records(), key)?;
    Ok(CmdResult::default().with_car(car))
}
