use crate::domain::errors::RepositoryError;
use crate::domain::inventory::errors::InventoryError;
use crate::domain::shared::value_objects::ProductId;

/// Cart operation that talks to the inventory, used to label gateway failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    Add,
    Update,
}

impl std::fmt::Display for CartOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CartOperation::Add => write!(f, "add"),
            CartOperation::Update => write!(f, "update"),
        }
    }
}

/// Rejection reasons for cart operations.
/// Every variant except `PersistenceFailure` leaves the cart unchanged.
#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.out_of_stock")]
    OutOfStock,
    #[error("cart.product_not_in_cart")]
    ProductNotInCart,
    #[error("cart.invalid_amount")]
    InvalidAmount,
    #[error("cart.{operation}_failed")]
    GatewayFailure {
        operation: CartOperation,
        #[source]
        source: InventoryError,
    },
    /// The in-memory commit succeeded but the snapshot could not be written.
    #[error("cart.persistence_failed")]
    PersistenceFailure(#[source] RepositoryError),
    #[error("cart.snapshot_invalid")]
    Snapshot(#[from] SnapshotError),
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("cart.snapshot.malformed")]
    Malformed(#[from] serde_json::Error),
    #[error("cart.snapshot.duplicate_product")]
    DuplicateProduct(ProductId),
    #[error("cart.snapshot.zero_amount")]
    ZeroAmount(ProductId),
}
