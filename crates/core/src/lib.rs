//! `stockroute-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the allocation
//! engine (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{ItemId, WarehouseName};
pub use value_object::ValueObject;

/// Unit count of a single item (requested or on hand).
///
/// Unsigned on purpose: negative stock or negative demand cannot be expressed.
pub type Quantity = u32;
