//! Security checks over anything [`Securable`](lockwatch_core::Securable).
//!
//! The service knows nothing about cars or houses; each subject decides for
//! itself what "secured" means and the service only reports it.

pub mod service;
pub mod status;

pub use service::SecurityService;
pub use status::SecurityStatus;
