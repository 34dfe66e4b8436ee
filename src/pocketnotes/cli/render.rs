//! Terminal rendering for command results.
//!
//! Functions here build `String`s so the layout can be tested without a terminal;
//! the handlers in `commands.rs` do the printing.

use chrono::{DateTime, Utc};
use colored::Colorize;
use pocketnotes::api::{CmdMessage, MessageLevel, TagCount};
use pocketnotes::config::NotesConfig;
use pocketnotes::index::DisplayNote;
use pocketnotes::session::EmptyState;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const MIN_WIDTH: usize = 40;
const TIME_WIDTH: usize = 14;
const INDENT: &str = "     ";

/// Width to lay listings out at: the terminal's, or [`LINE_WIDTH`] when piped.
pub fn output_width() -> usize {
    let term = console::Term::stdout();
    if !term.is_term() {
        return LINE_WIDTH;
    }
    let (_rows, cols) = term.size();
    (cols as usize).max(MIN_WIDTH)
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub fn render_empty_state(state: EmptyState) -> String {
    format!("{}\n", state.message().dimmed())
}

/// One block per note: position, title and age on the first line, then up to
/// `preview_lines` lines of content and the note's tags.
pub fn render_note_list(notes: &[DisplayNote], preview_lines: usize, width: usize) -> String {
    let mut out = String::new();
    for (i, dn) in notes.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let position = format!("{:>3}.", dn.position);
        let time = format_time_ago(dn.note.updated_at);
        let title_room = width.saturating_sub(INDENT.len() + TIME_WIDTH + 1);
        let title = truncate_to_width(dn.note.display_title(), title_room);
        let padding = title_room.saturating_sub(title.width());

        out.push_str(&format!(
            "{} {}{} {}\n",
            position.yellow(),
            title.bold(),
            " ".repeat(padding),
            time.dimmed()
        ));

        let body_room = width.saturating_sub(INDENT.len());
        for line in preview(&dn.note.content, preview_lines) {
            out.push_str(INDENT);
            out.push_str(&truncate_to_width(line, body_room).dimmed().to_string());
            out.push('\n');
        }

        if !dn.note.tags.is_empty() {
            out.push_str(INDENT);
            out.push_str(&format_tags(&dn.note.tags).cyan().to_string());
            out.push('\n');
        }
    }
    out
}

pub fn render_full_notes(notes: &[DisplayNote]) -> String {
    let mut out = String::new();
    for (i, dn) in notes.iter().enumerate() {
        if i > 0 {
            out.push_str("\n================================\n\n");
        }
        out.push_str(&format!(
            "{} {}\n",
            dn.position.to_string().yellow(),
            dn.note.display_title().bold()
        ));
        if !dn.note.tags.is_empty() {
            out.push_str(&format!("{}\n", format_tags(&dn.note.tags).cyan()));
        }
        out.push_str(&format!(
            "{}\n",
            format!(
                "created {}, updated {}",
                dn.note.created_at.format("%Y-%m-%d %H:%M"),
                format_time_ago(dn.note.updated_at).trim_start()
            )
            .dimmed()
        ));
        out.push_str("--------------------------------\n");
        if !dn.note.content.is_empty() {
            out.push_str(&dn.note.content);
            out.push('\n');
        }
    }
    out
}

pub fn render_tags(tags: &[TagCount]) -> String {
    let name_width = tags.iter().map(|t| t.name.width() + 1).max().unwrap_or(0);
    tags.iter()
        .map(|t| {
            let name = format!("#{}", t.name);
            let padding = name_width.saturating_sub(name.width());
            format!(
                "{}{}  {}\n",
                name.cyan(),
                " ".repeat(padding),
                t.count.to_string().dimmed()
            )
        })
        .collect()
}

pub fn render_config(config: &NotesConfig) -> String {
    config
        .list_all()
        .into_iter()
        .map(|(key, value)| format!("{} = {}\n", key.bold(), value))
        .collect()
}

fn format_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ")
}

fn preview(content: &str, max_lines: usize) -> impl Iterator<Item = &str> {
    content
        .lines()
        .map(str::trim_end)
        .filter(|l| !l.trim().is_empty())
        .take(max_lines)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
