//! EBC Common Library
//!
//! Datový model tabulky a čistá logika zpracování (filtr, spojení,
//! klasifikace), sdílená s CLI.

pub mod enrich;
pub mod error;
pub mod export;
pub mod filter;
pub mod reference;
pub mod status;
pub mod table;

pub use enrich::{enrich, SOURCE_COLUMN, STATUS_COLUMN};
pub use error::{Error, Result};
pub use filter::{filter_requested, EbcColumns};
pub use reference::{ReferenceEntry, ReferenceTable};
pub use status::{DataStatus, StatusSummary};
pub use table::{CellValue, Table};
