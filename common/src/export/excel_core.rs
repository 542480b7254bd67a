//! Generování Excelu (společná knihovna)
//!
//! Zapíše tabulku na jeden list: tučná hlavička, ukotvený první řádek,
//! hodnoty v nativních typech buněk.

use crate::error::{Error, Result};
use crate::table::{CellValue, Table};
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, XlsxError};

/// Název listu výstupního sešitu
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// Formát data a času
pub const DATETIME_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

const MAX_ROWS: usize = 1_048_576;
const MAX_COLUMNS: usize = 16_384;

fn excel_err(context: &str) -> impl Fn(XlsxError) -> Error + '_ {
    move |e| Error::Excel(format!("{}: {}", context, e))
}

/// Vygeneruje sešit s tabulkou do bufferu
pub fn generate_table_buffer(table: &Table, sheet_name: &str) -> Result<Vec<u8>> {
    if table.len() + 1 > MAX_ROWS {
        return Err(Error::Excel(format!(
            "příliš mnoho řádků: {} (max. {})",
            table.len(),
            MAX_ROWS - 1
        )));
    }
    if table.width() > MAX_COLUMNS {
        return Err(Error::Excel(format!(
            "příliš mnoho sloupců: {} (max. {})",
            table.width(),
            MAX_COLUMNS
        )));
    }

    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin);
    let datetime_format = Format::new().set_num_format(DATETIME_FORMAT);

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sheet_name)
        .map_err(excel_err("chyba názvu listu"))?;

    for (col, name) in table.columns().iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, name, &header_format)
            .map_err(excel_err("chyba zápisu hlavičky"))?;
    }

    for (row_idx, row) in table.rows().iter().enumerate() {
        let row_num = (row_idx + 1) as u32;
        for (col, value) in row.iter().enumerate() {
            let col = col as u16;
            match value {
                CellValue::Empty => {}
                CellValue::Text(s) => {
                    worksheet
                        .write_string(row_num, col, s)
                        .map_err(excel_err("chyba zápisu textu"))?;
                }
                CellValue::Number(n) if n.is_finite() => {
                    worksheet
                        .write_number(row_num, col, *n)
                        .map_err(excel_err("chyba zápisu čísla"))?;
                }
                CellValue::Number(_) => {}
                CellValue::Bool(b) => {
                    worksheet
                        .write_boolean(row_num, col, *b)
                        .map_err(excel_err("chyba zápisu logické hodnoty"))?;
                }
                CellValue::DateTime(serial) => {
                    worksheet
                        .write_number_with_format(row_num, col, *serial, &datetime_format)
                        .map_err(excel_err("chyba zápisu data"))?;
                }
            }
        }
    }

    if table.width() > 0 {
        worksheet
            .set_freeze_panes(1, 0)
            .map_err(excel_err("chyba ukotvení hlavičky"))?;
    }
    worksheet.autofit();

    workbook
        .save_to_buffer()
        .map_err(excel_err("chyba uložení Excelu"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_buffer() {
        let mut table = Table::new(vec!["OID".into(), "Počet".into(), "Datum".into(), "Ok".into()]);
        table.push_row(vec![
            CellValue::Text("A1".into()),
            CellValue::Number(3.0),
            CellValue::DateTime(45292.0),
            CellValue::Bool(true),
        ]);
        table.push_row(vec![CellValue::Empty, CellValue::Number(f64::NAN)]);

        let buffer = generate_table_buffer(&table, DEFAULT_SHEET_NAME).unwrap();
        // xlsx je zip archiv
        assert!(buffer.starts_with(b"PK"));
    }

    #[test]
    fn test_generate_buffer_empty_table() {
        let table = Table::default();
        let buffer = generate_table_buffer(&table, DEFAULT_SHEET_NAME).unwrap();
        assert!(!buffer.is_empty());
    }

    #[test]
    fn test_invalid_sheet_name() {
        let table = Table::new(vec!["a".into()]);
        let err = generate_table_buffer(&table, "neplatný[název]").unwrap_err();
        assert!(matches!(err, Error::Excel(_)));
    }
}
