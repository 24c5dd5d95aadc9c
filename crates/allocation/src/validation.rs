//! Warehouse list checks for callers that want to reject malformed input up front.

use stockroute_core::{DomainError, DomainResult, Entity, WarehouseName};

use crate::model::Warehouse;

/// Reject blank or duplicate warehouse names.
///
/// `allocate` itself accepts both and treats every list entry as a separate
/// source; this check is opt-in.
pub fn validate_warehouses(warehouses: &[Warehouse]) -> DomainResult<()> {
    for (index, warehouse) in warehouses.iter().enumerate() {
        warehouse.id().as_str().parse::<WarehouseName>()?;
        if warehouses[..index].iter().any(|earlier| earlier.same_identity(warehouse)) {
            return Err(DomainError::validation(format!(
                "duplicate warehouse name: {}",
                warehouse.id()
            )));
        }
    }
    Ok(())
}
