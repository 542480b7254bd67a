//! Načtení prvního listu sešitu do tabulky (calamine)

use crate::error::{is_locked, EbcError, LoadError, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};
use ebc_common::{CellValue, ReferenceTable, Table};
use std::fs::File;
use std::io;
use std::path::Path;

/// Načtený první list
#[derive(Debug, Clone)]
pub struct LoadedSheet {
    /// Názvy všech listů sešitu
    pub sheet_names: Vec<String>,
    pub table: Table,
}

/// Načtená referenční tabulka
#[derive(Debug, Clone)]
pub struct LoadedReference {
    pub sheet_names: Vec<String>,
    pub rows: usize,
    pub reference: ReferenceTable,
}

/// Otevře sešit a načte první list
///
/// Hlavička se ořeže o mezery; sešit bez listů nebo prázdný list je chyba.
pub fn load_first_sheet(path: &Path) -> std::result::Result<LoadedSheet, LoadError> {
    // zámek Excelu se projeví už při otevření souboru
    if let Err(e) = File::open(path) {
        return Err(classify_io(e));
    }

    let mut workbook = open_workbook_auto(path).map_err(classify_error)?;
    let sheet_names = workbook.sheet_names();
    let first = sheet_names.first().cloned().ok_or(LoadError::NoSheets)?;

    let range = workbook.worksheet_range(&first).map_err(classify_error)?;
    let table = range_to_table(&range);
    if table.width() == 0 {
        return Err(LoadError::EmptySheet);
    }

    Ok(LoadedSheet { sheet_names, table })
}

/// Načte referenční soubor; jakákoli chyba je fatální
pub fn load_reference(path: &Path) -> Result<LoadedReference> {
    let display_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    if !path.exists() {
        return Err(EbcError::ReferenceNotFound(path.display().to_string()));
    }

    let loaded = load_first_sheet(path).map_err(|e| reference_error(&display_name, e))?;

    let reference = ReferenceTable::from_table(&loaded.table).map_err(|e| {
        EbcError::ReferenceInvalid(display_name.clone(), format!("{} – nelze párovat", e))
    })?;

    Ok(LoadedReference {
        sheet_names: loaded.sheet_names,
        rows: loaded.table.len(),
        reference,
    })
}

fn reference_error(display_name: &str, e: LoadError) -> EbcError {
    match e {
        LoadError::Locked => EbcError::ReferenceLocked(display_name.to_string()),
        other => EbcError::ReferenceInvalid(display_name.to_string(), other.to_string()),
    }
}

fn classify_io(e: io::Error) -> LoadError {
    if is_locked(&e) {
        LoadError::Locked
    } else {
        LoadError::Io(e)
    }
}

fn classify_error(e: calamine::Error) -> LoadError {
    match e {
        calamine::Error::Io(io) => classify_io(io),
        other => LoadError::InvalidWorkbook(other.to_string()),
    }
}

/// Převede rozsah listu na tabulku
///
/// Rozsah calamine začíná prvním použitým sloupcem; prázdné sloupce před ním
/// se doplní, aby číslování i první sloupec odpovídaly listu.
fn range_to_table(range: &Range<Data>) -> Table {
    let leading = range.start().map(|(_, col)| col as usize).unwrap_or(0);
    let pad = |cells: Vec<CellValue>| -> Vec<CellValue> {
        let mut row = vec![CellValue::Empty; leading];
        row.extend(cells);
        row
    };

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Table::default();
    };

    let header = pad(header_row.iter().map(convert_header_cell).collect());
    let body: Vec<Vec<CellValue>> = rows
        .map(|row| pad(row.iter().map(convert_cell).collect()))
        .collect();

    Table::from_sheet(&header, body)
}

/// Buňka hlavičky: text se nepovažuje za chybějící hodnotu
fn convert_header_cell(cell: &Data) -> CellValue {
    match cell {
        Data::String(s) => CellValue::Text(s.clone()),
        other => convert_cell(other),
    }
}

pub fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(s) => CellValue::from_sheet_text(s),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::DateTime(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}
