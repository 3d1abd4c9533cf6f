//! Output formatting for fetched entities.

use std::fmt::Display;
use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per entity.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Render a list of entities.
///
/// Text output ends with a count line so an empty result is still visible.
pub fn render_list<T, W>(out: &mut W, format: OutputFormat, label: &str, items: &[T]) -> io::Result<()>
where
    T: Display + Serialize,
    W: Write,
{
    match format {
        OutputFormat::Text => {
            for item in items {
                writeln!(out, "- {}", item)?;
            }
            writeln!(out, "{} {}", items.len(), label)
        }
        OutputFormat::Json => write_json(out, items),
    }
}

/// Render a single entity.
pub fn render_one<T, W>(out: &mut W, format: OutputFormat, item: &T) -> io::Result<()>
where
    T: Display + Serialize,
    W: Write,
{
    match format {
        OutputFormat::Text => writeln!(out, "{}", item),
        OutputFormat::Json => write_json(out, item),
    }
}

fn write_json<T: Serialize + ?Sized, W: Write>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use tgs_lib::{Country, Organization};

    use super::*;

    fn countries() -> Vec<Country> {
        vec![
            Country {
                id: 1,
                name: "United States".to_string(),
            },
            Country {
                id: 7,
                name: "Canada".to_string(),
            },
        ]
    }

    #[test]
    fn text_list_has_one_line_per_entity_and_count() {
        let mut buf = Vec::new();
        render_list(&mut buf, OutputFormat::Text, "countries", &countries()).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(
            text,
            "- United States (1)\n- Canada (7)\n2 countries\n"
        );
    }

    #[test]
    fn empty_text_list_still_reports_count() {
        let mut buf = Vec::new();
        render_list::<Organization, _>(&mut buf, OutputFormat::Text, "organizations", &[])
            .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "0 organizations\n");
    }

    #[test]
    fn json_list_is_parseable() {
        let mut buf = Vec::new();
        render_list(&mut buf, OutputFormat::Json, "countries", &countries()).unwrap();
        let parsed: Vec<Country> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed, countries());
    }

    #[test]
    fn single_entity_text() {
        let mut buf = Vec::new();
        render_one(&mut buf, OutputFormat::Text, &countries()[1]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Canada (7)\n");
    }
}
