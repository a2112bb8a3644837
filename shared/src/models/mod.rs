//! Domain models for the inventory platform

mod audit;
mod catalog;
mod movement;
mod partner;
mod product;
mod purchase_order;
mod stock;

pub use audit::*;
pub use catalog::*;
pub use movement::*;
pub use partner::*;
pub use product::*;
pub use purchase_order::*;
pub use stock::*;
