//! Paralelní zpracování souborů
//!
//! Každý soubor je samostatná úloha v poolu vláken. Referenční tabulka se
//! sdílí jen pro čtení. Výsledky se předávají v pořadí dokončení.

use crate::processor::{process_file, FileOutcome, Outcome, SkipReason};
use ebc_common::ReferenceTable;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use rayon::ThreadPoolBuilder;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

/// Zpracuje soubory v `workers` vláknech
///
/// `on_start` se volá ve vlákně, které soubor začíná zpracovávat,
/// `on_outcome` v hlavním vlákně pro každý dokončený soubor.
/// Když pool nejde vytvořit, zpracuje se vše sériově.
pub fn process_batch<S, F>(
    files: &[PathBuf],
    reference: Arc<ReferenceTable>,
    workers: usize,
    on_start: S,
    mut on_outcome: F,
) -> Vec<FileOutcome>
where
    S: Fn(&Path) + Send + Sync + 'static,
    F: FnMut(&FileOutcome),
{
    let mut outcomes = Vec::with_capacity(files.len());
    if files.is_empty() {
        return outcomes;
    }

    let pool = match ThreadPoolBuilder::new().num_threads(workers.max(1)).build() {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("⚠️ Nelze vytvořit pool vláken ({}), zpracovávám sériově.", e);
            for path in files {
                on_start(path);
                let outcome = process_isolated(path, &reference);
                on_outcome(&outcome);
                outcomes.push(outcome);
            }
            return outcomes;
        }
    };

    let on_start = Arc::new(on_start);
    let (tx, rx) = mpsc::channel();
    for path in files {
        let tx = tx.clone();
        let reference = Arc::clone(&reference);
        let on_start = Arc::clone(&on_start);
        let path = path.clone();
        pool.spawn(move || {
            on_start(&path);
            let outcome = process_isolated(&path, &reference);
            // příjemce žije až do konce dávky
            let _ = tx.send(outcome);
        });
    }
    drop(tx);

    for outcome in rx {
        on_outcome(&outcome);
        outcomes.push(outcome);
    }

    outcomes
}

/// Pád při zpracování jednoho souboru neukončí dávku
fn process_isolated(path: &Path, reference: &ReferenceTable) -> FileOutcome {
    match panic::catch_unwind(AssertUnwindSafe(|| process_file(path, reference))) {
        Ok(outcome) => outcome,
        Err(payload) => {
            let cause = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "neznámá chyba".to_string());
            FileOutcome {
                file_name: path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.display().to_string()),
                outcome: Outcome::Skipped(SkipReason::Crashed(cause)),
            }
        }
    }
}

pub fn make_progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} [{elapsed_precise}] {pos}/{len} souborů {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_draw_target(ProgressDrawTarget::stderr_with_hz(12));
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}
