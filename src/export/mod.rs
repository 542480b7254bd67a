pub mod excel;

pub use excel::write_report;

use std::path::{Path, PathBuf};

/// Cesta výstupního souboru ve zpracovávané složce
pub fn output_path(folder: &Path, file_name: &str) -> PathBuf {
    folder.join(file_name)
}
