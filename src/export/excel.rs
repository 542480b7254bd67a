//! Zápis souhrnného výstupu do Excelu

use crate::error::{is_locked, EbcError, Result};
use ebc_common::export::excel_core::{generate_table_buffer, DEFAULT_SHEET_NAME};
use ebc_common::Table;
use std::io;
use std::path::Path;

/// Zapíše tabulku do `output_path` (přepíše existující soubor)
///
/// Soubor otevřený v Excelu vrací `OutputLocked`.
pub fn write_report(table: &Table, output_path: &Path) -> Result<()> {
    let buffer = generate_table_buffer(table, DEFAULT_SHEET_NAME)
        .map_err(|e| EbcError::ExcelGeneration(e.to_string()))?;

    std::fs::write(output_path, buffer).map_err(|e| write_error(e, output_path))
}

fn write_error(e: io::Error, output_path: &Path) -> EbcError {
    if is_locked(&e) {
        EbcError::OutputLocked(output_path.display().to_string())
    } else {
        EbcError::Io(e)
    }
}
