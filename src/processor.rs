//! Zpracování jednoho vstupního sešitu: načtení, filtr EBC, obohacení

use crate::error::LoadError;
use crate::loader;
use crate::scanner::is_lock_file;
use ebc_common::filter::{filter_requested, EbcColumns, EBC2_COLUMN, EBC_COLUMN};
use ebc_common::{enrich, ReferenceTable, Table};
use std::path::Path;

/// Důvod přeskočení souboru
#[derive(Debug)]
pub enum SkipReason {
    /// Dočasný/zámkový soubor Excelu
    LockFile,
    Load(LoadError),
    MissingEbcColumns,
    NoRequestedItems,
    /// Zpracování souboru spadlo
    Crashed(String),
}

#[derive(Debug)]
pub enum Outcome {
    Processed(Table),
    Skipped(SkipReason),
}

/// Výsledek zpracování jednoho souboru
#[derive(Debug)]
pub struct FileOutcome {
    pub file_name: String,
    pub outcome: Outcome,
}

impl FileOutcome {
    pub fn into_table(self) -> Option<Table> {
        match self.outcome {
            Outcome::Processed(table) if !table.is_empty() => Some(table),
            _ => None,
        }
    }

    pub fn is_processed(&self) -> bool {
        matches!(self.outcome, Outcome::Processed(_))
    }

    /// Zpráva pro konzoli
    pub fn message(&self) -> String {
        let name = &self.file_name;
        match &self.outcome {
            Outcome::Processed(table) => {
                format!("✅ Zpracováno: {} (položek: {})", name, table.len())
            }
            Outcome::Skipped(SkipReason::LockFile) => {
                format!("ℹ️ {}: přeskočeno (dočasný/lock soubor).", name)
            }
            Outcome::Skipped(SkipReason::Load(LoadError::InvalidWorkbook(_))) => {
                format!("ℹ️ {}: přeskočeno (neplatný/rozpracovaný sešit).", name)
            }
            Outcome::Skipped(SkipReason::Load(LoadError::Locked)) => {
                format!("ℹ️ {}: přeskočeno (soubor je právě uzamčen).", name)
            }
            Outcome::Skipped(SkipReason::Load(LoadError::NoSheets)) => format!(
                "⚠️ {}: žádné listy – pravděpodobně poškozený nebo neplatný soubor.",
                name
            ),
            Outcome::Skipped(SkipReason::Load(LoadError::EmptySheet)) => {
                format!("⚠️ {}: prázdný list.", name)
            }
            Outcome::Skipped(SkipReason::Load(e @ LoadError::Io(_))) => {
                format!("ℹ️ {}: přeskočeno ({}).", name, e)
            }
            Outcome::Skipped(SkipReason::MissingEbcColumns) => format!(
                "⚠️ {}: chybí sloupce '{}' a/nebo '{}'.",
                name, EBC_COLUMN, EBC2_COLUMN
            ),
            Outcome::Skipped(SkipReason::NoRequestedItems) => {
                format!("ℹ️ {}: žádné položky s EBC = ano.", name)
            }
            Outcome::Skipped(SkipReason::Crashed(cause)) => {
                format!("❌ {}: chyba při zpracování ({}).", name, cause)
            }
        }
    }
}

/// Zpracuje jeden soubor; chyby se nevrací, ale popisují ve výsledku
pub fn process_file(path: &Path, reference: &ReferenceTable) -> FileOutcome {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    let outcome = process_inner(path, &file_name, reference);
    FileOutcome { file_name, outcome }
}

fn process_inner(path: &Path, file_name: &str, reference: &ReferenceTable) -> Outcome {
    if is_lock_file(file_name) {
        return Outcome::Skipped(SkipReason::LockFile);
    }

    let sheet = match loader::load_first_sheet(path) {
        Ok(sheet) => sheet,
        Err(e) => return Outcome::Skipped(SkipReason::Load(e)),
    };

    let Ok(columns) = EbcColumns::locate(&sheet.table) else {
        return Outcome::Skipped(SkipReason::MissingEbcColumns);
    };

    let filtered = filter_requested(sheet.table, columns);
    if filtered.is_empty() {
        return Outcome::Skipped(SkipReason::NoRequestedItems);
    }

    Outcome::Processed(enrich(filtered, reference, file_name))
}
