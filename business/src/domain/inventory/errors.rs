#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("inventory.not_found")]
    NotFound,
    #[error("inventory.unavailable")]
    Unavailable,
    #[error("inventory.invalid_response")]
    InvalidResponse,
}
