use crate::error::{MorentError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Category of a car, matching the content schema's enumerated values.
///
/// The wire representation is the lowercase canonical value (`"sport"`,
/// `"suv"`, ...). Facet matching is plain enum equality, so it is exact and
/// case-sensitive on the canonical value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarType {
    Sport,
    Suv,
    Sedan,
    Hybrid,
    Hatchback,
    Luxury,
}

impl CarType {
    pub fn label(&self) -> &'static str {
        match self {
            CarType::Sport => "Sport",
            CarType::Suv => "SUV",
            CarType::Sedan => "Sedan",
            CarType::Hybrid => "Hybrid",
            CarType::Hatchback => "Hatchback",
            CarType::Luxury => "Luxury",
        }
    }
}

impl fmt::Display for CarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CarType {
    type Err = MorentError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "sport" => Ok(CarType::Sport),
            "suv" => Ok(CarType::Suv),
            "sedan" => Ok(CarType::Sedan),
            "hybrid" => Ok(CarType::Hybrid),
            "hatchback" => Ok(CarType::Hatchback),
            "luxury" => Ok(CarType::Luxury),
            other => Err(MorentError::Validation(format!(
                "unknown car type '{}' (expected sport, suv, sedan, hybrid, hatchback or luxury)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transmission {
    Manual,
    Automatic,
}

impl fmt::Display for Transmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transmission::Manual => f.write_str("manual"),
            Transmission::Automatic => f.write_str("automatic"),
        }
    }
}

/// Editorial tag attached to a record by the content team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Popular,
    Recommended,
    New,
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Popular => f.write_str("popular"),
            Tag::Recommended => f.write_str("recommended"),
            Tag::New => f.write_str("new"),
        }
    }
}

impl FromStr for Tag {
    type Err = MorentError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "popular" => Ok(Tag::Popular),
            "recommended" => Ok(Tag::Recommended),
            "new" => Ok(Tag::New),
            other => Err(MorentError::Validation(format!(
                "unknown tag '{}' (expected popular, recommended or new)",
                other
            ))),
        }
    }
}

/// A catalog record as fetched from the content store.
///
/// Records are read-only snapshots: identity is stable and unique within a
/// fetched batch and nothing mutates them locally. The `favorite` flag is
/// display-only; authoritative favorite state lives in the wishlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(rename = "type")]
    pub car_type: CarType,
    /// Fuel capacity in liters.
    pub fuel_capacity: f64,
    pub transmission: Transmission,
    pub seating_capacity: u32,
    /// Rental price per day in USD.
    pub price_per_day: f64,
    /// Pre-discount price, used only for strikethrough display. No
    /// original >= current invariant is enforced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub image_url: String,
    /// URL-safe identifier minted by the content store.
    #[serde(default)]
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
}

impl Car {
    /// Decode one catalog document into a typed record.
    ///
    /// The content schema declares the price fields as numbers, so a
    /// textual price (even one that would parse) fails coercion here and
    /// the record is excluded from the raw set.
    pub fn from_document(doc: &Value) -> Result<Self> {
        let id = doc
            .get("_id")
            .and_then(Value::as_str)
            .unwrap_or("<missing id>")
            .to_string();
        let car: Car = serde_json::from_value(doc.clone())
            .map_err(|e| MorentError::Data(format!("{}: {}", id, e)))?;
        car.validate()
    }

    fn validate(self) -> Result<Self> {
        if self.id.is_empty() {
            return Err(MorentError::Data("record has an empty id".to_string()));
        }
        if self.seating_capacity == 0 {
            return Err(MorentError::Data(format!(
                "{}: seating capacity must be positive",
                self.id
            )));
        }
        if !self.price_per_day.is_finite() || self.price_per_day < 0.0 {
            return Err(MorentError::Data(format!(
                "{}: price per day must be a non-negative number",
                self.id
            )));
        }
        if let Some(original) = self.original_price {
            if !original.is_finite() || original < 0.0 {
                return Err(MorentError::Data(format!(
                    "{}: original price must be a non-negative number",
                    self.id
                )));
            }
        }
        if !self.fuel_capacity.is_finite() || self.fuel_capacity < 0.0 {
            return Err(MorentError::Data(format!(
                "{}: fuel capacity must be a non-negative number",
                self.id
            )));
        }
        Ok(self)
    }

    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }
}
