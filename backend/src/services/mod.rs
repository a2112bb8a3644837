//! Business logic services for the inventory platform

pub mod audit;
pub mod catalog;
pub mod email;
pub mod movement;
pub mod product;
pub mod purchase_order;
pub mod sequence;
pub mod stock;
pub mod supplier;
pub mod user;

pub use audit::AuditService;
pub use email::EmailService;
pub use sequence::SequenceService;
