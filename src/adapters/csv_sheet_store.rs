//! Cell store backed by a local CSV/TSV file.

use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use tracing::{debug, info};

use crate::domain::{AppError, CellAddress};
use crate::ports::CellStore;

/// Header-less, ragged CSV grid on disk. Row 1 is the first record.
#[derive(Debug, Clone)]
pub struct CsvSheetStore {
    path: PathBuf,
}

impl CsvSheetStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn delimiter(&self) -> u8 {
        match self.path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("tsv") => b'\t',
            _ => b',',
        }
    }

    fn sheet_error(&self, details: impl ToString) -> AppError {
        AppError::Sheet { path: self.path.display().to_string(), details: details.to_string() }
    }

    fn read_grid(&self) -> Result<Vec<Vec<String>>, AppError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter())
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| self.sheet_error(e))?;

        reader
            .records()
            .map(|record| {
                record
                    .map(|r| r.iter().map(str::to_string).collect::<Vec<String>>())
                    .map_err(|e| self.sheet_error(e))
            })
            .collect()
    }

    /// Write the grid to a sibling temp file, then rename it over the sheet.
    fn write_grid(&self, grid: &[Vec<String>]) -> Result<(), AppError> {
        let dir = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                std::fs::create_dir_all(parent)?;
                parent
            }
            None => Path::new("."),
        };

        let staged = NamedTempFile::new_in(dir)?;
        {
            let mut writer = csv::WriterBuilder::new()
                .delimiter(self.delimiter())
                .flexible(true)
                .from_writer(staged.as_file());

            for row in grid {
                // csv writes an empty record as a blank line, which the reader then skips
                if row.is_empty() {
                    writer.write_record([""]).map_err(|e| self.sheet_error(e))?;
                } else {
                    writer.write_record(row).map_err(|e| self.sheet_error(e))?;
                }
            }
            writer.flush()?;
        }

        staged.persist(&self.path).map_err(|e| self.sheet_error(e.error))?;
        Ok(())
    }
}

impl CellStore for CsvSheetStore {
    fn get(&self, address: &CellAddress) -> Result<Option<String>, AppError> {
        let grid = self.read_grid()?;
        Ok(grid
            .get(address.row())
            .and_then(|row| row.get(address.col()))
            .filter(|value| !value.is_empty())
            .cloned())
    }

    fn set(&self, address: &CellAddress, value: &str) -> Result<(), AppError> {
        let mut grid = self.read_grid()?;
        debug!(path = %self.path.display(), rows = grid.len(), "loaded sheet");

        if grid.len() <= address.row() {
            grid.resize_with(address.row() + 1, Vec::new);
        }
        let row = &mut grid[address.row()];
        if row.len() <= address.col() {
            row.resize(address.col() + 1, String::new());
        }
        row[address.col()] = value.to_string();

        self.write_grid(&grid)?;
        info!(cell = %address, path = %self.path.display(), "cell written");
        Ok(())
    }
}
