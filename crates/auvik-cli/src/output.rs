//! Terminal rendering.
//!
//! Handlers hand their data to a [`Renderer`] built once per invocation
//! from the global options. The renderer owns the output format, the
//! quiet flag, and the color decision, so no handler re-checks flags.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};

pub struct Renderer {
    format: OutputFormat,
    quiet: bool,
    color: bool,
}

impl Renderer {
    pub fn new(global: &GlobalOpts) -> Self {
        let color = match global.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
        };
        Self {
            format: global.output.clone(),
            quiet: global.quiet,
            color,
        }
    }

    /// A section heading, bolded when color is on.
    pub fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_owned()
        }
    }

    /// Emits a collection. Table mode maps each item through `to_row`,
    /// plain mode prints one `key` per line, and the structured formats
    /// serialize the items as given.
    pub fn list<T, R>(&self, items: &[T], to_row: impl Fn(&T) -> R, key: impl Fn(&T) -> String)
    where
        T: Serialize,
        R: Tabled,
    {
        let rendered = match self.format {
            OutputFormat::Table => {
                let rows: Vec<R> = items.iter().map(to_row).collect();
                table(&rows)
            }
            OutputFormat::Plain => items.iter().map(key).collect::<Vec<_>>().join("\n"),
            _ => self.structured(items),
        };
        self.emit(&rendered);
    }

    /// Emits one item. Table mode delegates to `detail` since detail
    /// views build their own layout; plain mode prints its `key`.
    pub fn single<T>(&self, item: &T, detail: impl Fn(&T) -> String, key: impl Fn(&T) -> String)
    where
        T: Serialize,
    {
        let rendered = match self.format {
            OutputFormat::Table => detail(item),
            OutputFormat::Plain => key(item),
            _ => self.structured(item),
        };
        self.emit(&rendered);
    }

    fn structured<T: Serialize + ?Sized>(&self, data: &T) -> String {
        let result = match self.format {
            OutputFormat::Yaml => serde_yaml::to_string(data).map_err(|e| e.to_string()),
            OutputFormat::JsonCompact => serde_json::to_string(data).map_err(|e| e.to_string()),
            _ => serde_json::to_string_pretty(data).map_err(|e| e.to_string()),
        };
        result.unwrap_or_else(|e| format!("serialization error: {e}"))
    }

    /// Writes pre-rendered text to stdout unless quiet.
    pub fn emit(&self, text: &str) {
        if self.quiet || text.is_empty() {
            return;
        }
        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "{text}");
    }

    /// A side-channel notice on stderr, so it never pollutes piped
    /// output. Suppressed by `--quiet`.
    pub fn note(&self, message: &str) {
        if !self.quiet {
            eprintln!("{message}");
        }
    }
}

/// Rounded-border table over `Tabled` rows.
pub fn table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Two-decimal display for optional metrics; `-` when never reported.
pub fn opt_metric(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_owned(), |v| format!("{v:.2}"))
}
