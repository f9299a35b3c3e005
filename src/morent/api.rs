//! # API Facade
//!
//! The API layer is a thin facade over the command layer: the single entry
//! point for every operation regardless of the UI in front of it. It owns
//! the session's collaborators — the catalog source, the filter engine and
//! the wishlist — constructed once per session and torn down with it.
//!
//! The facade dispatches to commands and normalizes inputs; it holds no
//! business logic, performs no I/O of its own and never touches
//! stdout/stderr. Facet-change and wishlist-toggle intents from the
//! presentation layer map one-to-one onto methods here, each a complete
//! replacement of that facet's value.
//!
//! `RentalApi<C, B>` is generic over the catalog source and the storage
//! backend: production runs `FileSource`/`FileBackend`, tests run
//! `StaticSource`/`InMemoryBackend` without touching the filesystem.

use crate::commands::{self, CmdMessage, CmdResult, ConfigAction};
use crate::error::Result;
use crate::filter::{CapacityBucket, FilterEngine};
use crate::model::{Car, CarType, Tag};
use crate::source::{decode_documents, CatalogSource};
use crate::store::StorageBackend;
use crate::wishlist::Wishlist;
use std::path::PathBuf;

pub struct RentalApi<C: CatalogSource, B: StorageBackend> {
    source: C,
    engine: FilterEngine,
    wishlist: Wishlist<B>,
    data_dir: PathBuf,
}

impl<C: CatalogSource, B: StorageBackend> RentalApi<C, B> {
    /// Construct the session: loads the persisted wishlist (fail-soft) and
    /// starts with an empty engine and no active facets.
    pub fn new(source: C, backend: B, data_dir: PathBuf) -> Self {
        Self {
            source,
            engine: FilterEngine::new(),
            wishlist: Wishlist::load(backend),
            data_dir,
        }
    }

    /// Fire the single catalog fetch, decode at the boundary and load the
    /// engine's raw set. Malformed documents are excluded with their
    /// reasons reported; a top-level fetch failure propagates.
    pub fn fetch_catalog(&mut self) -> Result<CmdResult> {
        let documents = self.source.fetch()?;
        let decoded = decode_documents(&documents);

        let mut result = CmdResult::default();
        if !decoded.skipped.is_empty() {
            result.add_message(CmdMessage::warning(format!(
                "{} malformed record(s) excluded from the catalog.",
                decoded.skipped.len()
            )));
        }
        result.skipped = decoded.skipped;
        self.engine.load(decoded.cars);
        Ok(result)
    }

    pub fn select_type(&mut self, car_type: Option<CarType>) {
        self.engine.set_type(car_type);
    }

    pub fn select_capacity(&mut self, bucket: Option<CapacityBucket>) {
        self.engine.set_capacity(bucket);
    }

    /// Replace the price ceiling; out-of-range values are rejected and the
    /// prior selection stays in place.
    pub fn select_price_ceiling(&mut self, value: f64) -> Result<()> {
        self.engine.set_price_ceiling(value)
    }

    pub fn select_search(&mut self, term: Option<String>) {
        self.engine.set_search(term);
    }

    pub fn select_fuel_capacity(&mut self, liters: Option<f64>) {
        self.engine.set_fuel_capacity(liters);
    }

    pub fn select_tag(&mut self, tag: Option<Tag>) {
        self.engine.set_tag(tag);
    }

    /// The current filtered view, with the display-only favorite flag
    /// stamped from the authoritative wishlist.
    pub fn listing(&self) -> Result<CmdResult> {
        let mut result = commands::browse::run(&self.engine)?;
        for car in &mut result.listed_cars {
            car.favorite = Some(self.wishlist.contains(car));
        }
        Ok(result)
    }

    /// Detail lookup by slug or id.
    pub fn show(&self, key: &str) -> Result<CmdResult> {
        let mut result = commands::show::run(&self.engine, key)?;
        if let Some(car) = &mut result.car {
            car.favorite = Some(self.wishlist.contains(car));
        }
        Ok(result)
    }

    pub fn toggle_wishlist(&mut self, key: &str) -> Result<CmdResult> {
        commands::wishlist::toggle(&mut self.wishlist, &self.engine, key)
    }

    pub fn wishlist(&self) -> Result<CmdResult> {
        commands::wishlist::show(&self.wishlist)
    }

    pub fn is_wishlisted(&self, car: &Car) -> bool {
        self.wishlist.contains(car)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.data_dir, action)
    }
}
