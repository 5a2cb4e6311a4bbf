use colored::*;
use roster::api::{CmdMessage, DisplayStudent, MessageLevel};
use roster::config::RosterConfig;
use roster::error::FieldErrors;
use roster::model::Field;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MAX_CELL_WIDTH: usize = 32;
const COLUMN_GAP: &str = "  ";
pub const EMPTY_ROSTER: &str = "No students registered yet.";

/// Renders the roster as an aligned table, one row per student.
pub fn roster_table(students: &[DisplayStudent]) -> String {
    if students.is_empty() {
        return EMPTY_ROSTER.to_string();
    }

    let header: Vec<String> = std::iter::once("#".to_string())
        .chain(Field::ALL.iter().map(|f| f.label().to_string()))
        .collect();

    let rows: Vec<Vec<String>> = students
        .iter()
        .map(|ds| {
            let s = &ds.student;
            [
                ds.index.to_string(),
                s.name.clone(),
                s.student_id.clone(),
                s.email.clone(),
                s.contact.clone(),
            ]
            .into_iter()
            .map(|cell| truncate_to_width(&cell, MAX_CELL_WIDTH))
            .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            rows.iter()
                .map(|row| row[col].width())
                .chain(std::iter::once(header[col].width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = Vec::with_capacity(rows.len() + 1);
    out.push(format_row(&header, &widths).bold().to_string());
    for row in &rows {
        out.push(format_row(row, &widths));
    }
    out.join("\n")
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let padding = width.saturating_sub(cell.width());
            format!("{}{}", cell, " ".repeat(padding))
        })
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
        .trim_end()
        .to_string()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

/// One line per failing field: `<label>: <message>`.
pub fn field_errors(errors: &FieldErrors) -> Vec<String> {
    errors
        .iter()
        .map(|(field, message)| format!("{}: {}", field.label(), message))
        .collect()
}

pub fn config(config: &RosterConfig) -> Vec<String> {
    RosterConfig::keys()
        .iter()
        .filter_map(|key| config.get(key).map(|val| format!("{} = {}", key, val)))
        .collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_field_errors(errors: &FieldErrors) {
    for line in field_errors(errors) {
        eprintln!("{}", line.red());
    }
}
