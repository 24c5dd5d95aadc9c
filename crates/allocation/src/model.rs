use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stockroute_core::{DomainError, Entity, ItemId, Quantity, ValueObject, WarehouseName};

/// Requested quantities per item.
///
/// Serialized as a plain map: `{"apple": 10, "orange": 2}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Order {
    items: BTreeMap<ItemId, Quantity>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style line insertion. A repeated item overwrites the earlier quantity.
    pub fn with_item(mut self, item: impl Into<ItemId>, quantity: Quantity) -> Self {
        self.items.insert(item.into(), quantity);
        self
    }

    /// Requested quantity for `item`, zero when the order does not mention it.
    pub fn quantity(&self, item: &str) -> Quantity {
        self.items.get(item).copied().unwrap_or(0)
    }

    pub fn items(&self) -> &BTreeMap<ItemId, Quantity> {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when nothing is actually requested (no lines, or only zero-quantity lines).
    ///
    /// `allocate` returns an empty plan for such an order, exactly as it does
    /// for an infeasible one; callers that need to tell the two apart check
    /// this first or use `Allocator::try_allocate`.
    pub fn is_empty_request(&self) -> bool {
        self.items.values().all(|&q| q == 0)
    }
}

impl FromIterator<(ItemId, Quantity)> for Order {
    fn from_iter<T: IntoIterator<Item = (ItemId, Quantity)>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl From<BTreeMap<ItemId, Quantity>> for Order {
    fn from(items: BTreeMap<ItemId, Quantity>) -> Self {
        Self { items }
    }
}

/// A named inventory source.
///
/// Items missing from `inventory` count as zero on hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouse {
    name: WarehouseName,
    #[serde(default)]
    inventory: BTreeMap<ItemId, Quantity>,
}

impl Warehouse {
    pub fn new(name: impl Into<WarehouseName>) -> Self {
        Self {
            name: name.into(),
            inventory: BTreeMap::new(),
        }
    }

    pub fn with_inventory(name: impl Into<WarehouseName>, inventory: BTreeMap<ItemId, Quantity>) -> Self {
        Self {
            name: name.into(),
            inventory,
        }
    }

    /// Builder-style stock insertion.
    pub fn with_item(mut self, item: impl Into<ItemId>, quantity: Quantity) -> Self {
        self.inventory.insert(item.into(), quantity);
        self
    }

    pub fn name(&self) -> &WarehouseName {
        &self.name
    }

    pub fn inventory(&self) -> &BTreeMap<ItemId, Quantity> {
        &self.inventory
    }

    /// Units of `item` on hand here.
    pub fn available(&self, item: &str) -> Quantity {
        self.inventory.get(item).copied().unwrap_or(0)
    }
}

impl Entity for Warehouse {
    type Id = WarehouseName;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}

/// The part of an order drawn from one warehouse.
///
/// Serialized as a single-entry map keyed by warehouse name:
/// `{"owd": {"apple": 5}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    into = "BTreeMap<WarehouseName, BTreeMap<ItemId, Quantity>>",
    try_from = "BTreeMap<WarehouseName, BTreeMap<ItemId, Quantity>>"
)]
pub struct ShipmentFragment {
    warehouse: WarehouseName,
    items: BTreeMap<ItemId, Quantity>,
}

impl ShipmentFragment {
    pub fn new(warehouse: impl Into<WarehouseName>, items: BTreeMap<ItemId, Quantity>) -> Self {
        Self {
            warehouse: warehouse.into(),
            items,
        }
    }

    pub fn warehouse(&self) -> &WarehouseName {
        &self.warehouse
    }

    pub fn items(&self) -> &BTreeMap<ItemId, Quantity> {
        &self.items
    }

    pub fn quantity(&self, item: &str) -> Quantity {
        self.items.get(item).copied().unwrap_or(0)
    }
}

impl ValueObject for ShipmentFragment {}

impl From<ShipmentFragment> for BTreeMap<WarehouseName, BTreeMap<ItemId, Quantity>> {
    fn from(fragment: ShipmentFragment) -> Self {
        BTreeMap::from([(fragment.warehouse, fragment.items)])
    }
}

impl TryFrom<BTreeMap<WarehouseName, BTreeMap<ItemId, Quantity>>> for ShipmentFragment {
    type Error = DomainError;

    fn try_from(value: BTreeMap<WarehouseName, BTreeMap<ItemId, Quantity>>) -> Result<Self, Self::Error> {
        if value.len() != 1 {
            return Err(DomainError::validation(format!(
                "shipment fragment must name exactly one warehouse, got {}",
                value.len()
            )));
        }
        let Some((warehouse, items)) = value.into_iter().next() else {
            return Err(DomainError::validation("shipment fragment is empty"));
        };
        if items.is_empty() || items.values().any(|&q| q == 0) {
            return Err(DomainError::validation(format!(
                "shipment fragment for {warehouse} must draw a positive quantity of every listed item"
            )));
        }
        Ok(Self { warehouse, items })
    }
}

/// Ordered fragments, one per contributing warehouse, in warehouse priority order.
///
/// An empty plan means the order cannot be fulfilled (or requested nothing).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShipmentPlan {
    fragments: Vec<ShipmentFragment>,
}

impl ShipmentPlan {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn from_fragments(fragments: Vec<ShipmentFragment>) -> Self {
        Self { fragments }
    }

    pub fn fragments(&self) -> &[ShipmentFragment] {
        &self.fragments
    }

    pub fn into_fragments(self) -> Vec<ShipmentFragment> {
        self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Fragment shipped from `name`, if that warehouse contributed.
    pub fn warehouse(&self, name: &str) -> Option<&ShipmentFragment> {
        self.fragments.iter().find(|f| f.warehouse.as_str() == name)
    }

    /// Units of `item` across all fragments.
    pub fn total_for(&self, item: &str) -> u64 {
        self.fragments.iter().map(|f| u64::from(f.quantity(item))).sum()
    }
}

impl IntoIterator for ShipmentPlan {
    type Item = ShipmentFragment;
    type IntoIter = std::vec::IntoIter<ShipmentFragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.into_iter()
    }
}

impl<'a> IntoIterator for &'a ShipmentPlan {
    type Item = &'a ShipmentFragment;
    type IntoIter = std::slice::Iter<'a, ShipmentFragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.iter()
    }
}
