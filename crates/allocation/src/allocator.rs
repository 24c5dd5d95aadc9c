use std::collections::BTreeMap;

use thiserror::Error;

use stockroute_core::{DomainResult, ItemId, Quantity};

use crate::model::{Order, ShipmentFragment, ShipmentPlan, Warehouse};
use crate::validation::validate_warehouses;

/// Why an order could not be turned into a shipment plan.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AllocationError {
    /// Combined stock across all warehouses is short for at least one item.
    ///
    /// `shortfalls` maps each short item to the units that could not be drawn.
    #[error("order cannot be fulfilled, short on {}", describe(.shortfalls))]
    Infeasible { shortfalls: BTreeMap<ItemId, Quantity> },
}

impl AllocationError {
    pub fn shortfalls(&self) -> &BTreeMap<ItemId, Quantity> {
        match self {
            AllocationError::Infeasible { shortfalls } => shortfalls,
        }
    }
}

fn describe(shortfalls: &BTreeMap<ItemId, Quantity>) -> String {
    shortfalls
        .iter()
        .map(|(item, missing)| format!("{item} ({missing} missing)"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Fulfills orders from a fixed, priority-ordered warehouse list.
///
/// Index 0 is drained first for every item; later warehouses only cover what
/// earlier ones could not. The list is never mutated, so one allocator can
/// serve any number of orders (and threads).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Allocator {
    warehouses: Vec<Warehouse>,
}

impl Allocator {
    /// Build an allocator without checking warehouse names.
    pub fn new(warehouses: Vec<Warehouse>) -> Self {
        Self { warehouses }
    }

    /// Build an allocator, rejecting blank or duplicate warehouse names.
    pub fn try_new(warehouses: Vec<Warehouse>) -> DomainResult<Self> {
        validate_warehouses(&warehouses)?;
        Ok(Self { warehouses })
    }

    pub fn warehouses(&self) -> &[Warehouse] {
        &self.warehouses
    }

    /// Shipment plan for `order`, or an empty plan when it cannot be fulfilled.
    pub fn allocate(&self, order: &Order) -> ShipmentPlan {
        self.try_allocate(order).unwrap_or_default()
    }

    /// Like [`Allocator::allocate`], but reports which items were short.
    ///
    /// An order requesting nothing yields `Ok` with an empty plan.
    pub fn try_allocate(&self, order: &Order) -> Result<ShipmentPlan, AllocationError> {
        draw_greedy(order, &self.warehouses)
    }
}

/// Shipment plan for `order` drawn from `warehouses` in list order.
///
/// Returns an empty plan if any positive line cannot be fully covered; partial
/// plans are never returned.
pub fn allocate(order: &Order, warehouses: &[Warehouse]) -> ShipmentPlan {
    draw_greedy(order, warehouses).unwrap_or_default()
}

fn draw_greedy(order: &Order, warehouses: &[Warehouse]) -> Result<ShipmentPlan, AllocationError> {
    // Private copy; the caller's order is never touched.
    let mut remaining = order.items().clone();
    let mut fragments = Vec::new();

    for warehouse in warehouses {
        let mut drawn_here = BTreeMap::new();

        for (item, left) in remaining.iter_mut() {
            if *left == 0 {
                continue;
            }
            let available = warehouse.available(item.as_str());
            if available == 0 {
                continue;
            }

            let drawn = (*left).min(available);
            *left -= drawn;
            tracing::trace!(
                warehouse = %warehouse.name(),
                item = %item,
                drawn,
                still_needed = *left,
                "drew stock"
            );
            drawn_here.insert(item.clone(), drawn);
        }

        if !drawn_here.is_empty() {
            fragments.push(ShipmentFragment::new(warehouse.name().clone(), drawn_here));
        }
    }

    let shortfalls: BTreeMap<ItemId, Quantity> =
        remaining.into_iter().filter(|&(_, left)| left > 0).collect();

    if !shortfalls.is_empty() {
        tracing::debug!(
            items = order.len(),
            warehouses = warehouses.len(),
            short_items = shortfalls.len(),
            "order infeasible, discarding tentative plan"
        );
        return Err(AllocationError::Infeasible { shortfalls });
    }

    tracing::debug!(
        items = order.len(),
        warehouses = warehouses.len(),
        fragments = fragments.len(),
        "order allocated"
    );
    Ok(ShipmentPlan::from_fragments(fragments))
}
