//! Lockable parts (doors, windows) and the securable things that own them
//! (cars, houses).
//!
//! Pure in-memory domain logic: no IO, no logging.

pub mod car;
pub mod door;
pub mod house;
pub mod window;

pub use car::Car;
pub use door::Door;
pub use house::House;
pub use window::Window;
