//! Referenční tabulka zboží (good.xlsx)

use crate::error::{Error, Result};
use crate::table::{CellValue, Table};
use std::collections::HashMap;

pub const ID_COLUMN: &str = "OID_zbozi";
pub const PHOTO_COLUMN: &str = "Fotografie";
pub const ANNOTATION_COLUMN: &str = "Anotace";

/// Jeden záznam referenční tabulky
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceEntry {
    pub id: CellValue,
    pub photo: CellValue,
    pub annotation: CellValue,
}

/// Index referenční tabulky podle identifikátoru zboží
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    entries: HashMap<String, ReferenceEntry>,
    duplicate_keys: usize,
    has_photo_column: bool,
    has_annotation_column: bool,
}

impl ReferenceTable {
    /// Sestaví index z načtené tabulky
    ///
    /// Sloupec `OID_zbozi` je povinný. Chybějící sloupce fotografie
    /// a anotace se chovají jako prázdné. Při opakovaném klíči platí první
    /// výskyt.
    pub fn from_table(table: &Table) -> Result<Self> {
        let id_idx = table
            .column_index(ID_COLUMN)
            .ok_or_else(|| Error::MissingColumn(format!("'{}'", ID_COLUMN)))?;
        let photo_idx = table.column_index(PHOTO_COLUMN);
        let annotation_idx = table.column_index(ANNOTATION_COLUMN);

        let mut reference = Self {
            has_photo_column: photo_idx.is_some(),
            has_annotation_column: annotation_idx.is_some(),
            ..Self::default()
        };

        for row in table.rows() {
            let id = row[id_idx].clone();
            let Some(key) = id.join_key() else {
                continue;
            };
            if reference.entries.contains_key(&key) {
                reference.duplicate_keys += 1;
                continue;
            }

            let pick = |idx: Option<usize>| idx.map(|i| row[i].clone()).unwrap_or_default();
            reference.insert(ReferenceEntry {
                id,
                photo: pick(photo_idx),
                annotation: pick(annotation_idx),
            });
        }

        Ok(reference)
    }

    pub fn get(&self, key: &CellValue) -> Option<&ReferenceEntry> {
        key.join_key().and_then(|k| self.entries.get(&k))
    }

    /// Vloží záznam; existující klíč se nepřepisuje
    pub fn insert(&mut self, entry: ReferenceEntry) {
        if let Some(key) = entry.id.join_key() {
            self.entries.entry(key).or_insert(entry);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Počet řádků, které byly přeskočeny kvůli opakovanému klíči
    pub fn duplicate_keys(&self) -> usize {
        self.duplicate_keys
    }

    pub fn has_photo_column(&self) -> bool {
        self.has_photo_column
    }

    pub fn has_annotation_column(&self) -> bool {
        self.has_annotation_column
    }
}
