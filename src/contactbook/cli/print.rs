use colored::Colorize;
use contactbook::api::{CmdMessage, MessageLevel};
use contactbook::model::{or_placeholder, Contact};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const HEADERS: [&str; 4] = ["Name", "Phone", "Email", "Address"];
const MAX_COLUMN_WIDTH: usize = 40;
const GAP: &str = "  ";

pub(super) fn format_message(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Info => message.content.dimmed().to_string(),
        MessageLevel::Success => message.content.green().to_string(),
        MessageLevel::Warning => message.content.yellow().to_string(),
    }
}

/// Renders contacts as an aligned Name/Phone/Email/Address table.
pub(super) fn render_table(contacts: &[Contact], placeholder: &str) -> String {
    let rows: Vec<[String; 4]> = contacts
        .iter()
        .map(|c| {
            [
                c.name.as_str(),
                or_placeholder(&c.details.phone, placeholder),
                or_placeholder(&c.details.email, placeholder),
                or_placeholder(&c.details.address, placeholder),
            ]
            .map(|cell| truncate_to_width(cell, MAX_COLUMN_WIDTH))
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut output = String::new();
    let header: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
    output.push_str(&render_row(&header, &widths).bold().to_string());
    output.push('\n');
    for row in &rows {
        output.push_str(&render_row(row, &widths));
        output.push('\n');
    }
    output
}

/// Renders one contact as labelled lines.
pub(super) fn render_details(contact: &Contact, placeholder: &str) -> String {
    let d = &contact.details;
    format!(
        "{} {}\n{} {}\n{} {}\n{} {}\n",
        "Name:".bold(),
        contact.name,
        "Phone:".bold(),
        or_placeholder(&d.phone, placeholder),
        "Email:".bold(),
        or_placeholder(&d.email, placeholder),
        "Address:".bold(),
        or_placeholder(&d.address, placeholder),
    )
}

fn render_row(cells: &[String], widths: &[usize; 4]) -> String {
    let last = cells.len().saturating_sub(1);
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        line.push_str(cell);
        if i < last {
            line.push_str(&" ".repeat(width.saturating_sub(cell.width())));
            line.push_str(GAP);
        }
    }
    line
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
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
