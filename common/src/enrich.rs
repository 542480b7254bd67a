//! Doplnění fotografií a anotací z referenční tabulky
//!
//! Levé spojení vyfiltrovaných řádků s referenční tabulkou podle prvního
//! sloupce, klasifikace stavu dat a připojení názvu zdrojového souboru.

use crate::reference::{ReferenceTable, ANNOTATION_COLUMN, ID_COLUMN, PHOTO_COLUMN};
use crate::status::DataStatus;
use crate::table::{CellValue, Table};

pub const STATUS_COLUMN: &str = "Stav dat";
pub const SOURCE_COLUMN: &str = "Zdrojový soubor";

/// Sloupce, které se před spojením odstraní, aby nekolidovaly
pub const COLLIDING_COLUMNS: [&str; 3] = [PHOTO_COLUMN, ANNOTATION_COLUMN, ID_COLUMN];

/// Levé spojení s referenční tabulkou
///
/// `keys` jsou hodnoty klíče pro každý řádek. Připojí sloupce
/// `OID_zbozi`, `Fotografie` a `Anotace`; řádky bez shody zůstanou
/// s prázdnými hodnotami.
pub fn join_reference(table: &mut Table, keys: &[CellValue], reference: &ReferenceTable) {
    let mut ids = Vec::with_capacity(keys.len());
    let mut photos = Vec::with_capacity(keys.len());
    let mut annotations = Vec::with_capacity(keys.len());

    for key in keys {
        match reference.get(key) {
            Some(entry) => {
                ids.push(entry.id.clone());
                photos.push(entry.photo.clone());
                annotations.push(entry.annotation.clone());
            }
            None => {
                ids.push(CellValue::Empty);
                photos.push(CellValue::Empty);
                annotations.push(CellValue::Empty);
            }
        }
    }

    table.set_column(ID_COLUMN, ids);
    table.set_column(PHOTO_COLUMN, photos);
    table.set_column(ANNOTATION_COLUMN, annotations);
}

/// Index sloupce fotografie/anotace po spojení
///
/// Bere poslední sloupec, jehož název (ořezaný, malými písmeny) začíná
/// na `prefix`. Pokud žádný není, vloží prázdný sloupec `fallback`.
pub fn resolve_column(table: &mut Table, prefix: &str, fallback: &str) -> usize {
    let found = table
        .columns()
        .iter()
        .rposition(|c| c.trim().to_lowercase().starts_with(prefix));

    match found {
        Some(idx) => idx,
        None => table.set_column(fallback, Vec::new()),
    }
}

/// Celé obohacení jednoho souboru
///
/// Klíč se čte z prvního sloupce ještě před odstraněním kolizních sloupců.
pub fn enrich(mut table: Table, reference: &ReferenceTable, source_name: &str) -> Table {
    let keys: Vec<CellValue> = table.column_values(0).cloned().collect();

    for column in COLLIDING_COLUMNS {
        table.drop_column(column);
    }

    join_reference(&mut table, &keys, reference);

    let photo_idx = resolve_column(&mut table, "fotografie", PHOTO_COLUMN);
    let annotation_idx = resolve_column(&mut table, "anotace", ANNOTATION_COLUMN);

    let statuses: Vec<CellValue> = table
        .rows()
        .iter()
        .map(|row| {
            let status = DataStatus::classify(&row[photo_idx], &row[annotation_idx]);
            CellValue::Text(status.label().to_string())
        })
        .collect();
    table.set_column(STATUS_COLUMN, statuses);

    let sources = vec![CellValue::Text(source_name.to_string()); table.len()];
    table.set_column(SOURCE_COLUMN, sources);

    table
}
