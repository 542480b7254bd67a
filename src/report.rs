//! Souhrn na konzoli a protokol zpracování

use crate::error::Result;
use chrono::{DateTime, Local};
use ebc_common::StatusSummary;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Řádky souhrnu stavů dat
pub fn summary_lines(summary: &StatusSummary) -> Vec<String> {
    let mut lines = vec!["📊 Souhrn stavů (všechny soubory):".to_string()];
    for (label, count) in summary.entries() {
        lines.push(format!("  - {}: {}", label, count));
    }
    lines
}

pub fn print_summary(summary: &StatusSummary) {
    if summary.is_empty() {
        return;
    }
    println!();
    for line in summary_lines(summary) {
        println!("{}", line);
    }
}

/// Zprávy o zpracování v pořadí dokončení
#[derive(Debug, Clone)]
pub struct ProcessLog {
    started: DateTime<Local>,
    messages: Vec<String>,
}

impl ProcessLog {
    pub fn new() -> Self {
        Self {
            started: Local::now(),
            messages: Vec::new(),
        }
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writeln!(
            writer,
            "Zpracování EBC – {}",
            self.started.format("%Y-%m-%d %H:%M:%S")
        )?;
        for message in &self.messages {
            writeln!(writer, "{}", message)?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl Default for ProcessLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ebc_common::Table;
    use ebc_common::CellValue;
    use tempfile::tempdir;

    #[test]
    fn test_summary_lines() {
        let mut table = Table::new(vec!["Stav dat".into()]);
        table.push_row(vec![CellValue::Text("Pouze anotace".into())]);
        table.push_row(vec![CellValue::Text("Pouze anotace".into())]);
        table.push_row(vec![CellValue::Text("Chybí obojí".into())]);

        let lines = summary_lines(&StatusSummary::from_table(&table, "Stav dat"));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "  - Pouze anotace: 2");
        assert_eq!(lines[2], "  - Chybí obojí: 1");
    }

    #[test]
    fn test_process_log_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("protokol.txt");

        let mut log = ProcessLog::new();
        log.push("✅ Zpracováno: a.xlsx (položek: 2)");
        log.push("ℹ️ b.xlsx: žádné položky s EBC = ano.");
        log.write_to(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Zpracování EBC – "));
        assert_eq!(lines[2], "ℹ️ b.xlsx: žádné položky s EBC = ano.");
    }
}
