use crate::commands::helpers::resolve_car;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::FilterEngine;
use crate::store::StorageBackend;
use crate::wishlist::Wishlist;

/// Flip wishlist membership of the car named by `key`. The success
/// message carries the notification text the presentation layer shows
/// transiently.
pub fn toggle<B: StorageBackend>(
    wishlist: &mut Wishlist<B>,
    engine: &FilterEngine,
    key: &str,
) -> Result<CmdResult> {
    let car = resolve_car(engine.records(), key)?;
    let outcome = wishlist.toggle(&car);
    let mut result = CmdResult::default().with_car(car.clone());
    result.add_message(CmdMessage::success(outcome.event(&car.name)));
    Ok(result)
}

/// List the current wishlist entries, newest last.
pub fn show<B: StorageBackend>(wishlist: &Wishlist<B>) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_wishlist(wishlist.entries().to_vec());
    if result.wishlist.is_empty() {
        result.add_message(CmdMessage::info("Wishlist is empty."));
    }
    Ok(result)
}
