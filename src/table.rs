use crate::merged::{CheckResult, MergeStatus};
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use std::fmt::Write;
use std::io::IsTerminal;

/// Tri-state color request from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Neither `--color` nor `--no-color` was given.
    Auto,
    On,
    Off,
}

/// What the terminal on stdout is capable of.
///
/// The decorated renderer needs a color-capable terminal; when that is
/// missing, `missing` names each reason so the fallback warning can report it.
pub struct TermCaps {
    pub color: bool,
    pub missing: Vec<String>,
}

impl TermCaps {
    pub fn detect() -> Self {
        let mut missing = Vec::new();

        if !std::io::stdout().is_terminal() {
            missing.push("stdout is not a terminal".to_string());
        }
        if std::env::var_os("NO_COLOR").is_some() {
            missing.push("NO_COLOR is set".to_string());
        }
        if std::env::var("TERM").is_ok_and(|term| term == "dumb") {
            missing.push("TERM is dumb".to_string());
        }

        Self {
            color: missing.is_empty(),
            missing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Renderer {
    Plain,
    Decorated,
}

/// Pick a renderer up front from the color request and terminal capability.
///
/// A missing capability downgrades to plain output; only an explicit
/// `--color` request makes the downgrade loud, as a warning for the caller to
/// put on stderr.
pub fn select_renderer(color: ColorMode, caps: &TermCaps) -> (Renderer, Option<String>) {
    match color {
        ColorMode::Off => (Renderer::Plain, None),
        ColorMode::Auto => {
            if caps.color {
                (Renderer::Decorated, None)
            } else {
                (Renderer::Plain, None)
            }
        }
        ColorMode::On => {
            if caps.color {
                (Renderer::Decorated, None)
            } else {
                let warning = format!(
                    "color output unavailable ({}); falling back to plain table",
                    caps.missing.join(", ")
                );
                (Renderer::Plain, Some(warning))
            }
        }
    }
}

fn status_text(status: MergeStatus) -> &'static str {
    match status {
        MergeStatus::Merged => "merged",
        MergeStatus::NotMerged => "NOT merged",
    }
}

impl Renderer {
    pub fn render(&self, results: &[CheckResult], integration: &str) -> String {
        match self {
            Renderer::Plain => render_plain(results, integration),
            Renderer::Decorated => render_decorated(results, integration),
        }
    }
}

/// Two left-aligned columns; the first is one wider than the longest branch.
fn render_plain(results: &[CheckResult], integration: &str) -> String {
    let width = results
        .iter()
        .map(|result| result.branch.len())
        .max()
        .unwrap_or(0)
        + 1;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<width$}Status (against {})",
        "Branch", integration
    );
    out.push('\n');
    for result in results {
        let _ = writeln!(out, "{:<width$}{}", result.branch, status_text(result.status));
    }
    out
}

fn render_decorated(results: &[CheckResult], integration: &str) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        "Branch".to_string(),
        format!("Status (against {})", integration),
    ]);

    for result in results {
        let color = match result.status {
            MergeStatus::Merged => Color::Green,
            MergeStatus::NotMerged => Color::Red,
        };
        table.add_row(vec![
            Cell::new(&result.branch).fg(color),
            Cell::new(status_text(result.status)).fg(color),
        ]);
    }

    format!("{table}\n")
}
