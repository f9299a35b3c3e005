//! Multi-facet catalog filtering.
//!
//! The engine holds the raw record set fetched from the catalog source and
//! the current [`FacetSelection`], and derives the filtered view from the
//! two. Filtering is a pure function of its inputs: re-deriving the view at
//! any time yields the same subsequence of the raw records, in the raw
//! order. Facets compose with logical AND; an inactive facet matches
//! everything.

use crate::error::{MorentError, Result};
use crate::model::{Car, CarType, Tag};
use std::fmt;
use std::str::FromStr;

/// Upper bound of the price-per-day facet, matching the presentation
/// layer's slider range.
pub const MAX_PRICE_CEILING: f64 = 500.0;

/// Seating-capacity bucket. Each bucket maps to a minimum seat count and
/// matching is `seating_capacity >= minimum`, not exact membership: a
/// 7-seat car also satisfies the "4 Person" bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapacityBucket {
    TwoPerson,
    FourPerson,
    FivePerson,
    SixPerson,
    SevenOrMore,
}

impl CapacityBucket {
    pub fn min_seats(&self) -> u32 {
        match self {
            CapacityBucket::TwoPerson => 2,
            CapacityBucket::FourPerson => 4,
            CapacityBucket::FivePerson => 5,
            CapacityBucket::SixPerson => 6,
            CapacityBucket::SevenOrMore => 7,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CapacityBucket::TwoPerson => "2 Person",
            CapacityBucket::FourPerson => "4 Person",
            CapacityBucket::FivePerson => "5 Person",
            CapacityBucket::SixPerson => "6 Person",
            CapacityBucket::SevenOrMore => "7 or More",
        }
    }
}

impl fmt::Display for CapacityBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CapacityBucket {
    type Err = MorentError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "2" => Ok(CapacityBucket::TwoPerson),
            "4" => Ok(CapacityBucket::FourPerson),
            "5" => Ok(CapacityBucket::FivePerson),
            "6" => Ok(CapacityBucket::SixPerson),
            "7" | "7+" => Ok(CapacityBucket::SevenOrMore),
            other => Err(MorentError::Validation(format!(
                "unknown capacity bucket '{}' (expected 2, 4, 5, 6 or 7)",
                other
            ))),
        }
    }
}

/// The current filter state.
///
/// One value per facet, each a complete replacement on change. `None`
/// (or the default price ceiling) means the facet is inactive and passes
/// every record through.
#[derive(Debug, Clone, PartialEq)]
pub struct FacetSelection {
    pub car_type: Option<CarType>,
    pub capacity: Option<CapacityBucket>,
    pub price_ceiling: f64,
    /// Case-insensitive substring match on name or type label.
    pub search: Option<String>,
    /// Exact liters match, mirroring the sidebar's fixed checkboxes.
    pub fuel_capacity: Option<f64>,
    pub tag: Option<Tag>,
}

impl Default for FacetSelection {
    fn default() -> Self {
        Self {
            car_type: None,
            capacity: None,
            price_ceiling: MAX_PRICE_CEILING,
            search: None,
            fuel_capacity: None,
            tag: None,
        }
    }
}

impl FacetSelection {
    /// Whether a record satisfies every active facet (logical AND).
    pub fn matches(&self, car: &Car) -> bool {
        if let Some(selected) = self.car_type {
            if car.car_type != selected {
                return false;
            }
        }
        if let Some(bucket) = self.capacity {
            if car.seating_capacity < bucket.min_seats() {
                return false;
            }
        }
        if car.price_per_day > self.price_ceiling {
            return false;
        }
        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            let name_hit = car.name.to_lowercase().contains(&term);
            let type_hit = car.car_type.label().to_lowercase().contains(&term);
            if !name_hit && !type_hit {
                return false;
            }
        }
        if let Some(liters) = self.fuel_capacity {
            if car.fuel_capacity != liters {
                return false;
            }
        }
        if let Some(tag) = self.tag {
            if !car.has_tag(tag) {
                return false;
            }
        }
        true
    }
}

/// Derive the filtered view: a subsequence of `records` preserving their
/// relative order. Pure and idempotent; an empty result is a valid
/// terminal state, not a failure.
pub fn apply<'a>(records: &'a [Car], selection: &FacetSelection) -> Vec<&'a Car> {
    records.iter().filter(|car| selection.matches(car)).collect()
}

/// Holds the raw record set and the facet selection, keeping the filtered
/// view derivable whenever either changes.
#[derive(Debug, Default)]
pub struct FilterEngine {
    records: Vec<Car>,
    selection: FacetSelection,
}

impl FilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the raw record set with a freshly fetched batch. The facet
    /// selection is left untouched.
    pub fn load(&mut self, records: Vec<Car>) {
        self.records = records;
    }

    pub fn records(&self) -> &[Car] {
        &self.records
    }

    pub fn selection(&self) -> &FacetSelection {
        &self.selection
    }

    pub fn set_type(&mut self, car_type: Option<CarType>) {
        self.selection.car_type = car_type;
    }

    pub fn set_capacity(&mut self, bucket: Option<CapacityBucket>) {
        self.selection.capacity = bucket;
    }

    /// Replace the price ceiling. Values outside `[0, MAX_PRICE_CEILING]`
    /// (NaN included) are rejected and the prior ceiling is retained.
    pub fn set_price_ceiling(&mut self, value: f64) -> Result<()> {
        if !(0.0..=MAX_PRICE_CEILING).contains(&value) {
            return Err(MorentError::Validation(format!(
                "price ceiling must be between 0 and {}, got {}",
                MAX_PRICE_CEILING, value
            )));
        }
        self.selection.price_ceiling = value;
        Ok(())
    }

    pub fn set_search(&mut self, term: Option<String>) {
        self.selection.search = term.filter(|t| !t.trim().is_empty());
    }

    pub fn set_fuel_capacity(&mut self, liters: Option<f64>) {
        self.selection.fuel_capacity = liters;
    }

    pub fn set_tag(&mut self, tag: Option<Tag>) {
        self.selection.tag = tag;
    }

    /// Recompute the filtered view from the raw records and the current
    /// selection.
    pub fn filtered(&self) -> Vec<&Car> {
        apply(&self.records, &self.selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Transmission;

    fn car(id: &str, car_type: CarType, seats: u32, price: f64) -> Car {
        Car {
            id: id.to_string(),
            name: format!("Car {}", id),
            brand: "Test".to_string(),
            car_type,
            fuel_capacity: 70.0,
            transmission: Transmission::Automatic,
            seating_capacity: seats,
            price_per_day: price,
            original_price: None,
            tags: Vec::new(),
            image_url: String::new(),
            slug: id.to_string(),
            favorite: None,
        }
    }

    fn fleet() -> Vec<Car> {
        vec![
            car("a", CarType::Sport, 2, 99.0),
            car("b", CarType::Sedan, 4, 60.0),
            car("c", CarType::Sedan, 5, 80.0),
            car("d", CarType::Suv, 7, 150.0),
            car("e", CarType::Sedan, 4, 45.0),
        ]
    }

    fn ids(cars: &[&Car]) -> Vec<String> {
        cars.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn no_active_facet_passes_everything_through() {
        let records = fleet();
        let selection = FacetSelection::default();
        let filtered = apply(&records, &selection);
        assert_eq!(ids(&filtered), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn type_facet_selects_in_original_order() {
        // Raw set with types {Sport, Sedan, Sedan, SUV, Sedan}: selecting
        // Sedan yields the three sedans in their original relative order.
        let records = fleet();
        let mut selection = FacetSelection::default();
        selection.car_type = Some(CarType::Sedan);
        let filtered = apply(&records, &selection);
        assert_eq!(ids(&filtered), vec!["b", "c", "e"]);
    }

    #[test]
    fn recompute_is_idempotent() {
        let records = fleet();
        let mut selection = FacetSelection::default();
        selection.car_type = Some(CarType::Sedan);
        selection.price_ceiling = 70.0;
        let first = ids(&apply(&records, &selection));
        let second = ids(&apply(&records, &selection));
        assert_eq!(first, second);
    }

    #[test]
    fn output_is_a_subsequence_of_input() {
        let records = fleet();
        let mut selection = FacetSelection::default();
        selection.price_ceiling = 100.0;
        let filtered = apply(&records, &selection);
        let mut cursor = records.iter();
        for picked in filtered {
            assert!(cursor.any(|raw| raw.id == picked.id));
        }
    }

    #[test]
    fn capacity_bucket_is_a_minimum_not_exact_match() {
        let records = fleet();
        let mut selection = FacetSelection::default();
        selection.capacity = Some(CapacityBucket::FourPerson);
        let filtered = apply(&records, &selection);
        // The 7-seat SUV satisfies the "4 Person" bucket.
        assert_eq!(ids(&filtered), vec!["b", "c", "d", "e"]);
    }

    #[test]
    fn facets_compose_with_and() {
        let records = fleet();
        let mut selection = FacetSelection::default();
        selection.car_type = Some(CarType::Sedan);
        selection.capacity = Some(CapacityBucket::FourPerson);
        selection.price_ceiling = 70.0;
        let filtered = apply(&records, &selection);
        // Each survivor independently matches every active facet.
        for car in &filtered {
            assert_eq!(car.car_type, CarType::Sedan);
            assert!(car.seating_capacity >= 4);
            assert!(car.price_per_day <= 70.0);
        }
        assert_eq!(ids(&filtered), vec!["b", "e"]);
    }

    #[test]
    fn absent_facet_value_yields_empty_not_error() {
        let records = fleet();
        let mut selection = FacetSelection::default();
        selection.car_type = Some(CarType::Hatchback);
        assert!(apply(&records, &selection).is_empty());
    }

    #[test]
    fn empty_raw_set_yields_empty() {
        let selection = FacetSelection::default();
        assert!(apply(&[], &selection).is_empty());
    }

    #[test]
    fn price_ceiling_filters_above_threshold() {
        let records = fleet();
        let mut engine = FilterEngine::new();
        engine.load(records);
        engine.set_price_ceiling(90.0).unwrap();
        assert_eq!(ids(&engine.filtered()), vec!["b", "c", "e"]);
    }

    #[test]
    fn out_of_range_ceiling_is_rejected_and_state_retained() {
        let mut engine = FilterEngine::new();
        engine.load(fleet());
        engine.set_price_ceiling(120.0).unwrap();
        let before = engine.selection().clone();

        assert!(engine.set_price_ceiling(501.0).is_err());
        assert!(engine.set_price_ceiling(-1.0).is_err());
        assert!(engine.set_price_ceiling(f64::NAN).is_err());
        assert_eq!(engine.selection(), &before);
    }

    #[test]
    fn setters_replace_the_previous_value() {
        let mut engine = FilterEngine::new();
        engine.load(fleet());
        engine.set_type(Some(CarType::Sport));
        engine.set_type(Some(CarType::Sedan));
        assert_eq!(ids(&engine.filtered()), vec!["b", "c", "e"]);
        engine.set_type(None);
        assert_eq!(engine.filtered().len(), 5);
    }

    #[test]
    fn search_matches_name_or_type_case_insensitively() {
        let mut records = fleet();
        records[0].name = "Koenigsegg".to_string();
        let mut selection = FacetSelection::default();
        selection.search = Some("koenig".to_string());
        assert_eq!(ids(&apply(&records, &selection)), vec!["a"]);

        selection.search = Some("SEDAN".to_string());
        assert_eq!(ids(&apply(&records, &selection)), vec!["b", "c", "e"]);
    }

    #[test]
    fn blank_search_is_cleared() {
        let mut engine = FilterEngine::new();
        engine.set_search(Some("   ".to_string()));
        assert_eq!(engine.selection().search, None);
    }

    #[test]
    fn fuel_facet_matches_exact_liters() {
        let mut records = fleet();
        records[1].fuel_capacity = 50.0;
        let mut selection = FacetSelection::default();
        selection.fuel_capacity = Some(50.0);
        assert_eq!(ids(&apply(&records, &selection)), vec!["b"]);
    }

    #[test]
    fn tag_facet_matches_membership() {
        let mut records = fleet();
        records[2].tags = vec![Tag::Popular, Tag::New];
        let mut selection = FacetSelection::default();
        selection.tag = Some(Tag::Popular);
        assert_eq!(ids(&apply(&records, &selection)), vec!["c"]);
    }

    #[test]
    fn capacity_bucket_parsing() {
        assert_eq!(
            "4".parse::<CapacityBucket>().unwrap(),
            CapacityBucket::FourPerson
        );
        assert_eq!(
            "7+".parse::<CapacityBucket>().unwrap(),
            CapacityBucket::SevenOrMore
        );
        assert!("3".parse::<CapacityBucket>().is_err());
    }
}
