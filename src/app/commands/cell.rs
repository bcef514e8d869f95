//! Direct cell access on the active sheet.

use crate::domain::{AppError, CellAddress};
use crate::ports::CellStore;

/// Read one cell; `None` when empty.
pub fn get<S: CellStore>(sheet: &S, address: &str) -> Result<Option<String>, AppError> {
    let address = CellAddress::parse(address)?;
    sheet.get(&address)
}

/// Write one cell and return the normalized address.
pub fn set<S: CellStore>(sheet: &S, address: &str, value: &str) -> Result<CellAddress, AppError> {
    let address = CellAddress::parse(address)?;
    sheet.set(&address, value)?;
    Ok(address)
}
