//! # Rendering
//!
//! Turns `CmdResult` data into terminal text. Every function returns a `String`
//! and takes an explicit `use_color` flag; the caller decides once, from the
//! terminal's capabilities, whether styling is wanted.
//!
//! Layout math (column widths, truncation) is Unicode-width aware so previews
//! containing wide characters still line up.

use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use snipz::api::{CmdMessage, MessageLevel};
use snipz::index::DisplaySnippet;
use unicode_width::UnicodeWidthStr;

pub const TIME_WIDTH: usize = 14;
const INDEX_WIDTH: usize = 5;
const EMPTY_LIST: &str = "No snippets saved yet.";

fn paint(text: &str, use_color: bool, style: fn(&str) -> ColoredString) -> String {
    if use_color {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

/// Renders the numbered snippet list.
pub fn render_snippet_list(snippets: &[DisplaySnippet], line_width: usize, use_color: bool) -> String {
    if snippets.is_empty() {
        return format!("{}\n", paint(EMPTY_LIST, use_color, |s| s.dimmed()));
    }

    let mut output = String::new();
    for ds in snippets {
        let idx_str = format!("{:>width$} ", format!("{}.", ds.index), width = INDEX_WIDTH - 1);

        let time_ago = ds
            .snippet
            .id
            .created_at()
            .map(format_time_ago)
            .unwrap_or_else(|| " ".repeat(TIME_WIDTH));

        let available = line_width.saturating_sub(INDEX_WIDTH + 1 + TIME_WIDTH);
        let preview = truncate_to_width(&ds.snippet.preview(), available);
        let padding = available.saturating_sub(preview.width());

        output.push_str(&format!(
            "{}{}{} {}\n",
            paint(&idx_str, use_color, |s| s.yellow()),
            preview,
            " ".repeat(padding),
            paint(&time_ago, use_color, |s| s.dimmed().italic()),
        ));
    }
    output
}

/// Renders the full text of each snippet under its index.
pub fn render_full_snippets(snippets: &[DisplaySnippet], use_color: bool) -> String {
    if snippets.is_empty() {
        return format!("{}\n", EMPTY_LIST);
    }

    let mut output = String::new();
    for (i, ds) in snippets.iter().enumerate() {
        if i > 0 {
            output.push_str(&format!("{}\n", paint("---", use_color, |s| s.dimmed())));
        }
        output.push_str(&format!("{}\n", paint(&format!("{}.", ds.index), use_color, |s| s.yellow().bold())));
        output.push_str(&ds.snippet.text);
        if !ds.snippet.text.ends_with('\n') {
            output.push('\n');
        }
    }
    output
}

pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    let mut output = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => paint(&message.content, use_color, |s| s.dimmed()),
            MessageLevel::Success => paint(&message.content, use_color, |s| s.green()),
            MessageLevel::Warning => paint(&message.content, use_color, |s| s.yellow()),
        };
        output.push_str(&line);
        output.push('\n');
    }
    output
}

pub fn render_config(entries: &[(&str, String)]) -> String {
    entries
        .iter()
        .map(|(key, value)| format!("{} = {}\n", key, value))
        .collect()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

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

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use snipz::index::DisplayIndex;
    use snipz::model::{Snippet, SnippetId};

    fn listed(index: usize, text: &str) -> DisplaySnippet {
        DisplaySnippet {
            index: DisplayIndex(index),
            snippet: Snippet::new(SnippetId(Utc::now().timestamp_millis() - 300_000), text),
        }
    }

    #[test]
    fn test_render_empty_list() {
        let output = render_snippet_list(&[], 100, false);
        assert_eq!(output.trim(), "No snippets saved yet.");
    }

    #[test]
    fn test_render_list_lines() {
        let output = render_snippet_list(&[listed(1, "first"), listed(2, "second")], 100, false);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  1. first"));
        assert!(lines[1].starts_with("  2. second"));
        assert!(lines[0].trim_end().ends_with("ago"));
    }

    #[test]
    fn test_render_list_respects_width() {
        let long = "x".repeat(300);
        let output = render_snippet_list(&[listed(1, &long)], 60, false);
        let line = output.lines().next().unwrap();
        assert!(line.contains('…'));
        assert!(line.width() <= 60);
    }

    #[test]
    fn test_render_list_flattens_newlines() {
        let output = render_snippet_list(&[listed(1, "one\ntwo")], 100, false);
        assert_eq!(output.lines().count(), 1);
        assert!(output.contains("one two"));
    }

    #[test]
    fn test_render_full_snippets() {
        let output = render_full_snippets(&[listed(1, "line a\nline b"), listed(3, "c")], false);
        assert_eq!(output, "1.\nline a\nline b\n---\n3.\nc\n");
    }

    #[test]
    fn test_render_messages() {
        let messages = vec![
            CmdMessage::success("Snippet saved: x"),
            CmdMessage::warning("careful"),
        ];
        assert_eq!(
            render_messages(&messages, false),
            "Snippet saved: x\ncareful\n"
        );
        assert!(render_messages(&[], false).is_empty());
    }

    #[test]
    fn test_render_config() {
        let entries = vec![("line-width", "100".to_string())];
        assert_eq!(render_config(&entries), "line-width = 100\n");
    }

    #[test]
    fn test_truncate_to_width_wide_chars() {
        let truncated = truncate_to_width("日本語のテキスト", 7);
        assert!(truncated.width() <= 7);
        assert!(truncated.ends_with('…'));
        assert_eq!(truncate_to_width("short", 10), "short");
    }
}
