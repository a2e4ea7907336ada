//! Row types for the five marketplace tables.

pub mod chef;
pub mod hire;
pub mod ingredient;
pub mod recipe;
pub mod user;

pub use chef::*;
pub use hire::*;
pub use ingredient::*;
pub use recipe::*;
pub use user::*;
