//! Pomocné funkce pro testy: tvorba a čtení sešitů

#![allow(dead_code)]

use calamine::{open_workbook_auto, Reader};
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Buňka testovacího sešitu
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Blank,
}

pub use Cell::{Blank, Number, Text};

/// Zapíše sešit s jedním listem; řádky obsahují text
pub fn write_xlsx(path: &Path, rows: &[&[&str]]) {
    let rows: Vec<Vec<Cell>> = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|v| if v.is_empty() { Blank } else { Text(*v) })
                .collect()
        })
        .collect();
    write_cells(path, &rows);
}

pub fn write_cells(path: &Path, rows: &[Vec<Cell>]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            match cell {
                Text(s) => {
                    worksheet.write_string(r as u32, c as u16, *s).unwrap();
                }
                Number(n) => {
                    worksheet.write_number(r as u32, c as u16, *n).unwrap();
                }
                Blank => {}
            }
        }
    }
    workbook.save(path).unwrap();
}

/// Sešit s prázdným listem
pub fn write_empty_xlsx(path: &Path) {
    let mut workbook = Workbook::new();
    workbook.add_worksheet();
    workbook.save(path).unwrap();
}

/// Přečte první list jako text
pub fn read_xlsx(path: &Path) -> Vec<Vec<String>> {
    let mut workbook = open_workbook_auto(path).expect("sešit nelze otevřít");
    let first = workbook.sheet_names()[0].clone();
    let range = workbook.worksheet_range(&first).expect("list nelze načíst");
    range
        .rows()
        .map(|row| row.iter().map(|c| c.to_string()).collect())
        .collect()
}

/// Hodnota ve sloupci `column` pro řádek, jehož první buňka je `id`
pub fn value_for(rows: &[Vec<String>], id: &str, column: &str) -> Option<String> {
    let col = rows[0].iter().position(|h| h == column)?;
    rows.iter()
        .skip(1)
        .find(|r| r[0] == id)
        .map(|r| r[col].clone())
}

/// Standardní referenční soubor
pub fn write_reference(dir: &Path) {
    write_xlsx(
        &dir.join("good.xlsx"),
        &[
            &["OID_zbozi", "Fotografie", "Anotace"],
            &["A1", "img.jpg", ""],
            &["A2", "a2.jpg", "popis A2"],
            &["A3", "", "jen anotace"],
        ],
    );
}
