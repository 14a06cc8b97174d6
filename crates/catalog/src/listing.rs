use serde::{Deserialize, Serialize};

use lockwatch_core::{DomainError, DomainResult};

/// A car offered for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarListing {
    brand: String,
    model: String,
    price: u64,
    year: u16,
}

impl CarListing {
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        price: u64,
        year: u16,
    ) -> DomainResult<Self> {
        let brand = brand.into();
        let model = model.into();
        if brand.trim().is_empty() {
            return Err(DomainError::validation("brand cannot be empty"));
        }
        if model.trim().is_empty() {
            return Err(DomainError::validation("model cannot be empty"));
        }
        Ok(Self {
            brand,
            model,
            price,
            year,
        })
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn year(&self) -> u16 {
        self.year
    }
}

/// Sum of all listing prices. Zero for no listings.
pub fn total_price(listings: &[CarListing]) -> DomainResult<u64> {
    listings.iter().try_fold(0u64, |total, listing| {
        total
            .checked_add(listing.price)
            .ok_or_else(|| DomainError::invariant("price total overflow"))
    })
}

/// Listings priced strictly above `min_price`, in input order.
pub fn expensive_cars(listings: &[CarListing], min_price: u64) -> Vec<&CarListing> {
    listings.iter().filter(|l| l.price > min_price).collect()
}

/// One-line description: `"<brand> <model> <price> <year>"`.
pub fn describe(listing: &CarListing) -> String {
    format!(
        "{} {} {} {}",
        listing.brand, listing.model, listing.price, listing.year
    )
}

/// The two demo listings.
pub fn sample_listings() -> Vec<CarListing> {
    vec![
        CarListing {
            brand: "Audi".to_string(),
            model: "A4".to_string(),
            price: 30_000,
            year: 2020,
        },
        CarListing {
            brand: "BMW".to_string(),
            model: "M5".to_string(),
            price: 50_000,
            year: 2022,
        },
    ]
}
