use crate::error::{MorentError, Result};
use crate::model::Car;

/// Resolve a user-supplied key against the raw record set. Both detail
/// routes of the original site exist, one keyed by slug and one by id, so
/// either resolves here.
pub fn resolve_car(records: &[Car], key: &str) -> Result<Car> {
    records
        .iter()
        .find(|car| car.id == key || (!car.slug.is_empty() && car.slug == key))
        .cloned()
        .ok_or_else(|| MorentError::CarNotFound(key.to_string()))
}

#[cfg(test)]
pub mod fixtures {
    use crate::model::{Car, CarType, Transmission};

    pub fn car(id: &str, car_type: CarType, seats: u32, price: f64) -> Car {
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
            slug: format!("car-{}", id),
            favorite: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::car;
    use super::*;
    use crate::model::CarType;

    #[test]
    fn resolves_by_id_and_by_slug() {
        let records = vec![car("a", CarType::Sedan, 4, 60.0)];
        assert_eq!(resolve_car(&records, "a").unwrap().id, "a");
        assert_eq!(resolve_car(&records, "car-a").unwrap().id, "a");
    }

    #[test]
    fn unknown_key_is_car_not_found() {
        let records = vec![car("a", CarType::Sedan, 4, 60.0)];
        assert!(matches!(
            resolve_car(&records, "zzz"),
            Err(MorentError::CarNotFound(_))
        ));
    }

    #[test]
    fn empty_slug_never_matches() {
        let mut records = vec![car("a", CarType::Sedan, 4, 60.0)];
        records[0].slug = String::new();
        assert!(resolve_car(&records, "").is_err());
    }
}
