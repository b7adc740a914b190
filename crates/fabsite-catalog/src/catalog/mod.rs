//! Product catalog module.
//!
//! Contains the markup attribute boundary and the product types parsed
//! from it.

mod attributes;
mod product;

pub use attributes::Attributes;
pub use product::{Badge, Product};
