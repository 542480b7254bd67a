//! Tabulka načtená z prvního listu sešitu
//!
//! Řádkově orientovaná reprezentace: seznam názvů sloupců a řádky buněk
//! o stejné šířce. Názvy sloupců jsou vždy unikátní.

use chrono::{NaiveDate, TimeDelta};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Texty, které se při načítání listu chápou jako chybějící hodnota
pub const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Hodnota jedné buňky
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    /// Sériové číslo data v Excelu (systém 1900)
    DateTime(f64),
}

impl CellValue {
    /// Text z listu; značky chybějící hodnoty se převedou na `Empty`
    pub fn from_sheet_text(text: &str) -> Self {
        if MISSING_MARKERS.contains(&text) {
            CellValue::Empty
        } else {
            CellValue::Text(text.to_string())
        }
    }

    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Number(n) | CellValue::DateTime(n) => n.is_nan(),
            _ => false,
        }
    }

    /// Chybí, nebo je po ořezání mezer prázdná
    pub fn is_blank(&self) -> bool {
        self.is_missing() || self.to_string().trim().is_empty()
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Klíč pro párování s referenční tabulkou
    ///
    /// Celá čísla se porovnávají bez desetinné části, takže `123.0`,
    /// `123` i text `"123"` dají stejný klíč. Prázdná hodnota klíč nemá.
    pub fn join_key(&self) -> Option<String> {
        if self.is_missing() {
            return None;
        }
        let key = self.to_string();
        if key.is_empty() {
            None
        } else {
            Some(key)
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Number(n) => write!(f, "{}", format_number(*n)),
            CellValue::Bool(true) => write!(f, "True"),
            CellValue::Bool(false) => write!(f, "False"),
            CellValue::DateTime(serial) => write!(f, "{}", format_excel_datetime(*serial)),
        }
    }
}

fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Převod sériového čísla Excelu na `YYYY-MM-DD HH:MM:SS`
pub fn format_excel_datetime(serial: f64) -> String {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30).and_then(|d| d.and_hms_opt(0, 0, 0));
    let millis = (serial * 86_400_000.0).round();
    let datetime = epoch.and_then(|epoch| {
        if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
            return None;
        }
        TimeDelta::try_milliseconds(millis as i64).and_then(|delta| epoch.checked_add_signed(delta))
    });

    match datetime {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => format!("{}", serial),
    }
}

/// Normalizace hlavičky: ořezání mezer, pojmenování prázdných sloupců
/// a odlišení duplicit příponou `.1`, `.2`, ...
pub fn normalize_headers(raw: &[CellValue]) -> Vec<String> {
    let mut taken: HashSet<String> = HashSet::new();
    let mut counters: HashMap<String, usize> = HashMap::new();
    let mut headers = Vec::with_capacity(raw.len());

    for (idx, cell) in raw.iter().enumerate() {
        let trimmed = cell.to_string().trim().to_string();
        let base = if trimmed.is_empty() {
            format!("Unnamed: {}", idx)
        } else {
            trimmed
        };

        let mut name = base.clone();
        if taken.contains(&name) {
            let counter = counters.entry(base.clone()).or_insert(0);
            loop {
                *counter += 1;
                let candidate = format!("{}.{}", base, counter);
                if !taken.contains(&candidate) {
                    name = candidate;
                    break;
                }
            }
        }
        taken.insert(name.clone());
        headers.push(name);
    }

    headers
}

/// Tabulka: hlavička + řádky
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Sestavení z listu: surová hlavička se normalizuje
    pub fn from_sheet(header: &[CellValue], rows: Vec<Vec<CellValue>>) -> Self {
        let mut table = Self::new(normalize_headers(header));
        for row in rows {
            table.push_row(row);
        }
        table
    }

    /// Přidá řádek; chybějící buňky doplní prázdnými, přebývající zahodí
    pub fn push_row(&mut self, mut row: Vec<CellValue>) {
        row.resize(self.columns.len(), CellValue::Empty);
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// První sloupec, jehož název obsahuje `needle` (rozlišuje velikost písmen)
    pub fn find_column_containing(&self, needle: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.contains(needle))
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Buňka podle názvu sloupce
    pub fn get(&self, row: usize, column: &str) -> Option<&CellValue> {
        self.column_index(column).and_then(|idx| self.cell(row, idx))
    }

    pub fn column_values(&self, column: usize) -> impl Iterator<Item = &CellValue> + '_ {
        self.rows.iter().map(move |r| r.get(column).unwrap_or(&CellValue::Empty))
    }

    pub fn retain_rows<F>(&mut self, mut keep: F)
    where
        F: FnMut(&[CellValue]) -> bool,
    {
        self.rows.retain(|row| keep(row));
    }

    /// Odstraní sloupec; vrací `true`, pokud existoval
    pub fn drop_column(&mut self, name: &str) -> bool {
        let Some(idx) = self.column_index(name) else {
            return false;
        };
        self.columns.remove(idx);
        for row in &mut self.rows {
            row.remove(idx);
        }
        true
    }

    /// Nastaví hodnoty sloupce; existující sloupec přepíše, jinak jej připojí
    /// na konec. Vrací index sloupce.
    pub fn set_column(&mut self, name: &str, mut values: Vec<CellValue>) -> usize {
        values.resize(self.rows.len(), CellValue::Empty);

        if let Some(idx) = self.column_index(name) {
            for (row, value) in self.rows.iter_mut().zip(values) {
                row[idx] = value;
            }
            return idx;
        }

        self.columns.push(name.to_string());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
        self.columns.len() - 1
    }

    /// Spojení tabulek pod sebe
    ///
    /// Výsledné sloupce jsou sjednocením v pořadí prvního výskytu; buňky
    /// sloupců, které tabulka nemá, zůstanou prázdné.
    pub fn concat(tables: Vec<Table>) -> Table {
        let mut columns: Vec<String> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();
        for table in &tables {
            for name in &table.columns {
                if !positions.contains_key(name) {
                    positions.insert(name.clone(), columns.len());
                    columns.push(name.clone());
                }
            }
        }

        let total_rows = tables.iter().map(Table::len).sum();
        let mut combined = Table {
            columns,
            rows: Vec::with_capacity(total_rows),
        };

        for table in tables {
            let mapping: Vec<usize> = table.columns.iter().map(|c| positions[c]).collect();
            for row in table.rows {
                let mut out = vec![CellValue::Empty; combined.columns.len()];
                for (value, &target) in row.into_iter().zip(&mapping) {
                    out[target] = value;
                }
                combined.rows.push(out);
            }
        }

        combined
    }
}
