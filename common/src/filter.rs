//! Výběr položek požadovaných pro EBC

use crate::error::{Error, Result};
use crate::table::{CellValue, Table};

pub const EBC_COLUMN: &str = "EBC požadovaný stav";
pub const EBC2_COLUMN: &str = "EBC 2 požadovaný stav";

/// Hodnota, která znamená požadavek na aktivaci (porovnává se bez ohledu na velikost písmen)
pub const REQUESTED_VALUE: &str = "ano";

/// Indexy obou sloupců EBC v tabulce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EbcColumns {
    pub primary: usize,
    pub secondary: usize,
}

impl EbcColumns {
    /// Najde sloupce podle podřetězce v názvu; chybí-li kterýkoli, vrací chybu
    pub fn locate(table: &Table) -> Result<Self> {
        let primary = table.find_column_containing(EBC_COLUMN);
        let secondary = table.find_column_containing(EBC2_COLUMN);

        match (primary, secondary) {
            (Some(primary), Some(secondary)) => Ok(Self { primary, secondary }),
            (None, Some(_)) => Err(Error::MissingColumn(format!("'{}'", EBC_COLUMN))),
            (Some(_), None) => Err(Error::MissingColumn(format!("'{}'", EBC2_COLUMN))),
            (None, None) => Err(Error::MissingColumn(format!(
                "'{}' a '{}'",
                EBC_COLUMN, EBC2_COLUMN
            ))),
        }
    }
}

/// Je hodnota buňky požadavkem na aktivaci?
///
/// Uvažuje se jen text; čísla, logické hodnoty a prázdné buňky nikdy.
pub fn is_requested(value: &CellValue) -> bool {
    value
        .as_text()
        .map(|s| s.to_lowercase() == REQUESTED_VALUE)
        .unwrap_or(false)
}

/// Ponechá řádky, kde aspoň jeden ze sloupců EBC je „ano“
pub fn filter_requested(mut table: Table, columns: EbcColumns) -> Table {
    table.retain_rows(|row| {
        row.get(columns.primary).map(is_requested).unwrap_or(false)
            || row.get(columns.secondary).map(is_requested).unwrap_or(false)
    });
    table
}
