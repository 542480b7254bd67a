use std::io;
use thiserror::Error;

/// Windows: ERROR_SHARING_VIOLATION, ERROR_LOCK_VIOLATION
const WINDOWS_LOCK_CODES: [i32; 2] = [32, 33];

/// Soubor drží jiný proces (typicky otevřený v Excelu)
///
/// Na Windows se zámek Excelu hlásí kódem sdílení, ne `PermissionDenied`.
pub fn is_locked(e: &io::Error) -> bool {
    if e.kind() == io::ErrorKind::PermissionDenied {
        return true;
    }
    cfg!(windows)
        && e
            .raw_os_error()
            .is_some_and(|code| WINDOWS_LOCK_CODES.contains(&code))
}

/// Chyby při načítání jednoho sešitu
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("soubor je právě uzamčen")]
    Locked,

    #[error("neplatný/rozpracovaný sešit: {0}")]
    InvalidWorkbook(String),

    #[error("žádné listy – pravděpodobně poškozený nebo neplatný soubor")]
    NoSheets,

    #[error("prázdný list")]
    EmptySheet,

    #[error("{0}")]
    Io(#[from] io::Error),
}

#[derive(Error, Debug)]
pub enum EbcError {
    #[error("Chyba konfigurace: {0}")]
    Config(String),

    #[error("Složka nenalezena: {0}")]
    FolderNotFound(String),

    #[error("Referenční soubor nenalezen: {0}")]
    ReferenceNotFound(String),

    #[error("{0} je uzamčen (otevřen v Excelu). Zavřete ho a spusťte znovu.")]
    ReferenceLocked(String),

    #[error("Chyba při načítání {0}: {1}")]
    ReferenceInvalid(String, String),

    #[error("Nelze zapsat výstup – {0} je otevřený. Zavřete soubor a spusťte znovu.")]
    OutputLocked(String),

    #[error("Chyba generování Excelu: {0}")]
    ExcelGeneration(String),

    #[error("Chyba JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO chyba: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, EbcError>;
