//! Definice chyb

use thiserror::Error;

/// Společný typ chyby
#[derive(Error, Debug)]
pub enum Error {
    #[error("chybí sloupec: {0}")]
    MissingColumn(String),

    #[error("chyba Excelu: {0}")]
    Excel(String),
}

/// Alias pro Result
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_missing_column() {
        let error = Error::MissingColumn("'OID_zbozi'".to_string());
        assert_eq!(format!("{}", error), "chybí sloupec: 'OID_zbozi'");
    }

    #[test]
    fn test_error_display_excel() {
        let error = Error::Excel("příliš mnoho řádků".to_string());
        let display = format!("{}", error);
        assert!(display.contains("Excel"));
        assert!(display.contains("příliš mnoho řádků"));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::MissingColumn("Anotace".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("MissingColumn"));
        assert!(debug.contains("Anotace"));
    }
}
