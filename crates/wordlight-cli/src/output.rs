//! Rendering of highlight results.

use std::io::Write;

use serde::Serialize;
use wordlight::{HighlightRange, HighlightStyle};

const ANSI_RESET: &str = "\u{1b}[0m";

/// How highlighted spans are delimited in human output.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Decoration {
    /// 24-bit ANSI background colour of the highlight style.
    Ansi(HighlightStyle),
    /// Square brackets around each span.
    Brackets,
}

/// Renders `text` with every highlighted character span decorated.
///
/// Overlapping ranges, such as two prefixes of the same run, are merged
/// into one span.
#[must_use]
pub fn render_human(text: &str, ranges: &[HighlightRange], decoration: Decoration) -> String {
    let (open, close) = match decoration {
        Decoration::Ansi(style) => {
            let (red, green, blue) = style.rgb();
            (
                format!("\u{1b}[48;2;{red};{green};{blue}m"),
                ANSI_RESET.to_owned(),
            )
        }
        Decoration::Brackets => ("[".to_owned(), "]".to_owned()),
    };

    let mut rendered = String::with_capacity(text.len());
    let mut highlighted = false;
    for (index, ch) in text.chars().enumerate() {
        let covered = ranges
            .iter()
            .any(|range| range.start() <= index && index < range.end());
        if covered != highlighted {
            rendered.push_str(if covered { &open } else { &close });
            highlighted = covered;
        }
        rendered.push(ch);
    }
    if highlighted {
        rendered.push_str(&close);
    }
    rendered
}

/// Machine-readable highlight report.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    /// Wordbook the words came from, if one was loaded.
    pub wordbook: Option<String>,
    /// Number of active words.
    pub words: usize,
    /// Highlight colour as `#rrggbb`.
    pub color: String,
    /// Highlighted ranges in document order, as character offsets.
    pub ranges: &'a [HighlightRange],
}

/// Writes `report` as one line of JSON.
///
/// # Errors
///
/// Returns the serialisation error, which also covers IO failures on
/// `writer`.
pub fn write_json<W: Write>(writer: &mut W, report: &JsonReport<'_>) -> serde_json::Result<()> {
    serde_json::to_writer(&mut *writer, report)?;
    writeln!(writer).map_err(serde_json::Error::io)
}
