//! Stav dat: úplnost fotografie a anotace

use crate::table::{CellValue, Table};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataStatus {
    PhotoAndAnnotation,
    PhotoOnly,
    AnnotationOnly,
    Missing,
}

impl DataStatus {
    pub fn from_presence(has_photo: bool, has_annotation: bool) -> Self {
        match (has_photo, has_annotation) {
            (true, true) => DataStatus::PhotoAndAnnotation,
            (true, false) => DataStatus::PhotoOnly,
            (false, true) => DataStatus::AnnotationOnly,
            (false, false) => DataStatus::Missing,
        }
    }

    /// Klasifikace podle neprázdnosti buněk fotografie a anotace
    pub fn classify(photo: &CellValue, annotation: &CellValue) -> Self {
        Self::from_presence(!photo.is_blank(), !annotation.is_blank())
    }

    pub fn label(&self) -> &'static str {
        match self {
            DataStatus::PhotoAndAnnotation => "Fotografie + Anotace",
            DataStatus::PhotoOnly => "Pouze fotografie",
            DataStatus::AnnotationOnly => "Pouze anotace",
            DataStatus::Missing => "Chybí obojí",
        }
    }
}

impl fmt::Display for DataStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Četnosti hodnot sloupce stavu, seřazené sestupně
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSummary {
    counts: Vec<(String, usize)>,
}

impl StatusSummary {
    /// Spočítá četnosti hodnot ve sloupci `column`; prázdné buňky mají popisek `""`
    pub fn from_table(table: &Table, column: &str) -> Self {
        let Some(idx) = table.column_index(column) else {
            return Self::default();
        };

        let mut counts: Vec<(String, usize)> = Vec::new();
        for value in table.column_values(idx) {
            let label = value.to_string();
            match counts.iter_mut().find(|(l, _)| *l == label) {
                Some((_, n)) => *n += 1,
                None => counts.push((label, 1)),
            }
        }

        // stabilní řazení: shody ponechají pořadí prvního výskytu
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        Self { counts }
    }

    pub fn entries(&self) -> &[(String, usize)] {
        &self.counts
    }

    pub fn count(&self, status: DataStatus) -> usize {
        self.counts
            .iter()
            .find(|(label, _)| label == status.label())
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn test_from_presence_exhaustive() {
        assert_eq!(DataStatus::from_presence(true, true), DataStatus::PhotoAndAnnotation);
        assert_eq!(DataStatus::from_presence(true, false), DataStatus::PhotoOnly);
        assert_eq!(DataStatus::from_presence(false, true), DataStatus::AnnotationOnly);
        assert_eq!(DataStatus::from_presence(false, false), DataStatus::Missing);
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            DataStatus::classify(&text("img.jpg"), &text("popis")),
            DataStatus::PhotoAndAnnotation
        );
        assert_eq!(DataStatus::classify(&text("img.jpg"), &text("")), DataStatus::PhotoOnly);
        assert_eq!(
            DataStatus::classify(&text("  "), &text("popis")),
            DataStatus::AnnotationOnly
        );
        assert_eq!(
            DataStatus::classify(&CellValue::Empty, &CellValue::Empty),
            DataStatus::Missing
        );
        // čísla se počítají jako vyplněná
        assert_eq!(
            DataStatus::classify(&CellValue::Number(0.0), &CellValue::Empty),
            DataStatus::PhotoOnly
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(DataStatus::PhotoAndAnnotation.label(), "Fotografie + Anotace");
        assert_eq!(DataStatus::PhotoOnly.label(), "Pouze fotografie");
        assert_eq!(DataStatus::AnnotationOnly.label(), "Pouze anotace");
        assert_eq!(DataStatus::Missing.label(), "Chybí obojí");
    }

    #[test]
    fn test_summary_sorted_by_count() {
        let mut table = Table::new(vec!["Stav dat".into()]);
        for label in ["Pouze anotace", "Chybí obojí", "Chybí obojí", "Pouze fotografie", "Chybí obojí"] {
            table.push_row(vec![text(label)]);
        }

        let summary = StatusSummary::from_table(&table, "Stav dat");
        assert_eq!(
            summary.entries(),
            &[
                ("Chybí obojí".to_string(), 3),
                ("Pouze anotace".to_string(), 1),
                ("Pouze fotografie".to_string(), 1),
            ]
        );
        assert_eq!(summary.count(DataStatus::Missing), 3);
        assert_eq!(summary.count(DataStatus::PhotoAndAnnotation), 0);
        assert_eq!(summary.total(), 5);
    }

    #[test]
    fn test_summary_missing_column() {
        let table = Table::new(vec!["OID".into()]);
        assert!(StatusSummary::from_table(&table, "Stav dat").is_empty());
    }
}
