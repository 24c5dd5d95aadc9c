//! Order allocation across priority-ordered warehouses.
//!
//! This crate contains the fulfillment rules, implemented purely as
//! deterministic domain logic (no IO, no storage). Given an order and a
//! warehouse list, [`allocate`] drains warehouses in list order and returns one
//! shipment fragment per contributing warehouse, or an empty plan when the
//! combined stock cannot cover every requested item.

pub mod allocator;
pub mod model;
pub mod validation;

pub use allocator::{AllocationError, Allocator, allocate};
pub use model::{Order, ShipmentFragment, ShipmentPlan, Warehouse};
pub use validation::validate_warehouses;

pub use stockroute_core::{ItemId, Quantity, WarehouseName};
