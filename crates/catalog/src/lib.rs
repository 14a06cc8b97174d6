//! Small record collections: car listings, a car registry and a student
//! roster, with the map/filter/fold queries run over them.

pub mod listing;
pub mod registry;
pub mod roster;

pub use listing::{CarListing, describe, expensive_cars, sample_listings, total_price};
pub use registry::{CarRegistry, RegisteredCar};
pub use roster::{Student, adults, first_names, sample_roster};
