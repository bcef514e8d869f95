//! Cell store port definition.

use crate::domain::{AppError, CellAddress};

/// Port for reading and writing single cells of the active sheet.
pub trait CellStore {
    /// Read a cell. Empty and out-of-range cells yield `None`.
    fn get(&self, address: &CellAddress) -> Result<Option<String>, AppError>;

    /// Overwrite a cell with `value`.
    fn set(&self, address: &CellAddress, value: &str) -> Result<(), AppError>;
}
