use crate::error::{EbcError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Předpona dočasných/zámkových souborů Excelu
pub const LOCK_FILE_PREFIX: &str = "~$";

pub fn is_lock_file(file_name: &str) -> bool {
    file_name.starts_with(LOCK_FILE_PREFIX)
}

pub fn is_spreadsheet(path: &Path) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            SPREADSHEET_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Najde vstupní sešity ve složce (bez podsložek)
///
/// Vynechá soubory ze seznamu `excluded` (bez ohledu na velikost písmen)
/// a zámkové soubory `~$...`.
pub fn scan_folder(folder: &Path, excluded: &[&str]) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Err(EbcError::FolderNotFound(folder.display().to_string()));
    }

    let excluded: Vec<String> = excluded.iter().map(|n| n.to_lowercase()).collect();
    let mut files = Vec::new();

    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() || !is_spreadsheet(path) {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if is_lock_file(&file_name) || excluded.contains(&file_name.to_lowercase()) {
            continue;
        }

        files.push(path.to_path_buf());
    }

    // pořadí odeslání do fronty; výsledky se sbírají v pořadí dokončení
    files.sort();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_is_spreadsheet() {
        assert!(is_spreadsheet(Path::new("a.xlsx")));
        assert!(is_spreadsheet(Path::new("a.XLSX")));
        assert!(is_spreadsheet(Path::new("a.ods")));
        assert!(!is_spreadsheet(Path::new("a.csv")));
        assert!(!is_spreadsheet(Path::new("xlsx")));
    }

    #[test]
    fn test_is_lock_file() {
        assert!(is_lock_file("~$data.xlsx"));
        assert!(!is_lock_file("data.xlsx"));
    }

    #[test]
    fn test_scan_folder_not_found() {
        let result = scan_folder(Path::new("/nonexistent/folder"), &[]);
        assert!(matches!(result, Err(EbcError::FolderNotFound(_))));
    }

    #[test]
    fn test_scan_folder_filters() {
        let dir = tempdir().unwrap();
        for name in [
            "b.xlsx",
            "a.xlsx",
            "Good.xlsx",
            "~$a.xlsx",
            "vystup.xlsx",
            "poznamky.txt",
        ] {
            File::create(dir.path().join(name)).unwrap();
        }
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        File::create(dir.path().join("sub").join("c.xlsx")).unwrap();

        let files = scan_folder(dir.path(), &["good.xlsx", "vystup.xlsx"]).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.xlsx", "b.xlsx"]);
    }

    #[test]
    fn test_scan_folder_empty() {
        let dir = tempdir().unwrap();
        assert!(scan_folder(dir.path(), &[]).unwrap().is_empty());
    }
}
