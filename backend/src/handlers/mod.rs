//! HTTP handlers

pub mod audit;
pub mod health;
pub mod movement;
pub mod product;
pub mod purchase_order;
pub mod registry;
pub mod user;

pub use audit::*;
pub use health::*;
pub use movement::*;
pub use product::*;
pub use purchase_order::*;
pub use registry::*;
pub use user::*;
