use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, CellAddress};
use crate::ports::CellStore;

/// In-memory cell store, shared across clones.
#[derive(Debug, Clone, Default)]
pub struct MemorySheetStore {
    cells: Arc<Mutex<BTreeMap<CellAddress, String>>>,
}

impl MemorySheetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every non-empty cell, ordered by row then column.
    pub fn cells(&self) -> BTreeMap<CellAddress, String> {
        self.cells.lock().map(|cells| cells.clone()).unwrap_or_default()
    }
}

impl CellStore for MemorySheetStore {
    fn get(&self, address: &CellAddress) -> Result<Option<String>, AppError> {
        let cells = self.cells.lock().map_err(|e| AppError::Sheet {
            path: "<memory>".to_string(),
            details: e.to_string(),
        })?;
        Ok(cells.get(address).filter(|v| !v.is_empty()).cloned())
    }

    fn set(&self, address: &CellAddress, value: &str) -> Result<(), AppError> {
        let mut cells = self.cells.lock().map_err(|e| AppError::Sheet {
            path: "<memory>".to_string(),
            details: e.to_string(),
        })?;
        cells.insert(*address, value.to_string());
        Ok(())
    }
}
