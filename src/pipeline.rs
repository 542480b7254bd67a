//! Celý běh: reference → vstupní soubory → souhrnný výstup

use crate::batch;
use crate::config::Config;
use crate::error::{EbcError, Result};
use crate::export;
use crate::loader;
use crate::processor::FileOutcome;
use crate::report::{self, ProcessLog};
use crate::scanner;
use ebc_common::{StatusSummary, Table, STATUS_COLUMN};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Nastavení jednoho běhu
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub folder: PathBuf,
    pub reference_file: String,
    pub output_file: String,
    pub workers: usize,
    pub verbose: bool,
    pub show_summary: bool,
    pub log_path: Option<PathBuf>,
}

impl RunSettings {
    pub fn from_config(config: &Config, folder: PathBuf) -> Self {
        Self {
            folder,
            reference_file: config.reference_file.clone(),
            output_file: config.output_file.clone(),
            workers: config.worker_count(),
            verbose: false,
            show_summary: config.show_summary,
            log_path: None,
        }
    }
}

/// Co se stalo s výstupním souborem
#[derive(Debug, Clone, PartialEq)]
pub enum OutputState {
    Written { path: PathBuf, rows: usize },
    /// Žádný soubor nepřispěl položkami, nic se nezapisuje
    NoItems,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct RunReport {
    /// Počet nalezených vstupních souborů
    pub files: usize,
    /// Počet souborů, které přispěly položkami
    pub processed: usize,
    /// Zprávy v pořadí dokončení
    pub messages: Vec<String>,
    pub summary: StatusSummary,
    pub output: OutputState,
}

/// Provede celý běh
///
/// Chybu vrací jen při fatálním selhání (složka, referenční soubor).
/// Chyby jednotlivých souborů i zápisu výstupu jsou součástí `RunReport`.
pub fn run(settings: &RunSettings) -> Result<RunReport> {
    let folder = &settings.folder;
    if !folder.is_dir() {
        return Err(EbcError::FolderNotFound(folder.display().to_string()));
    }

    // 1. Referenční tabulka
    let reference_path = folder.join(&settings.reference_file);
    let loaded = loader::load_reference(&reference_path)?;
    println!(
        "✅ Nalezené listy v {}: {:?}",
        settings.reference_file, loaded.sheet_names
    );
    if settings.verbose {
        println!(
            "   řádků: {}, identifikátorů: {}",
            loaded.rows,
            loaded.reference.len()
        );
    }
    if !loaded.reference.has_photo_column() {
        println!("ℹ️ {}: chybí sloupec 'Fotografie', bere se jako prázdný.", settings.reference_file);
    }
    if !loaded.reference.has_annotation_column() {
        println!("ℹ️ {}: chybí sloupec 'Anotace', bere se jako prázdný.", settings.reference_file);
    }
    if loaded.reference.duplicate_keys() > 0 {
        println!(
            "⚠️ {}: {} opakovaných OID_zbozi, použit první výskyt.",
            settings.reference_file,
            loaded.reference.duplicate_keys()
        );
    }

    // 2. Vstupní soubory
    let files = scanner::scan_folder(
        folder,
        &[settings.reference_file.as_str(), settings.output_file.as_str()],
    )?;
    println!("🔎 Vstupních souborů: {}", files.len());
    if settings.verbose {
        for file in &files {
            println!("   {}", file.display());
        }
    }

    // 3. Paralelní zpracování
    let mut log = ProcessLog::new();
    let pb = batch::make_progress_bar(files.len());
    let start_pb = pb.clone();
    let verbose = settings.verbose;
    let outcomes = batch::process_batch(
        &files,
        Arc::new(loaded.reference),
        settings.workers,
        move |path: &Path| {
            if verbose {
                let name = path.file_name().unwrap_or(path.as_os_str()).to_string_lossy();
                start_pb.suspend(|| println!("🔄 Zpracovávám soubor: {}", name));
            }
        },
        |outcome| {
            let message = outcome.message();
            pb.suspend(|| println!("{}", message));
            pb.inc(1);
            log.push(message);
        },
    );
    pb.finish_and_clear();

    let processed = outcomes.iter().filter(|o| o.is_processed()).count();
    let tables: Vec<Table> = outcomes
        .into_iter()
        .filter_map(FileOutcome::into_table)
        .collect();

    // 4. Výstup
    let (summary, output) = if tables.is_empty() {
        let message = "⚠️ Nebyly nalezeny žádné položky pro zpracování.";
        println!("{}", message);
        log.push(message);
        (StatusSummary::default(), OutputState::NoItems)
    } else {
        let combined = Table::concat(tables);
        let summary = StatusSummary::from_table(&combined, STATUS_COLUMN);
        if settings.show_summary {
            report::print_summary(&summary);
        }

        let path = export::output_path(folder, &settings.output_file);
        let output = match export::write_report(&combined, &path) {
            Ok(()) => {
                println!("\n✅ HOTOVO! Výstup uložen jako:\n{}", path.display());
                log.push(format!("✅ Výstup: {} (řádků: {})", path.display(), combined.len()));
                OutputState::Written {
                    path,
                    rows: combined.len(),
                }
            }
            Err(e) => {
                eprintln!("❌ {}", e);
                log.push(format!("❌ {}", e));
                OutputState::Failed(e.to_string())
            }
        };
        (summary, output)
    };

    if let Some(log_path) = &settings.log_path {
        match log.write_to(log_path) {
            Ok(()) => {
                if settings.verbose {
                    println!("📝 Protokol: {}", log_path.display());
                }
            }
            Err(e) => eprintln!("⚠️ Protokol nelze zapsat ({}): {}", log_path.display(), e),
        }
    }

    Ok(RunReport {
        files: files.len(),
        processed,
        messages: log.messages().to_vec(),
        summary,
        output,
    })
}
