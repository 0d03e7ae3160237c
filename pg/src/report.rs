//! Verdict reporting
//!
//! Text output is line oriented and consumed by scripts that grep for `OK:`,
//! `ERROR:` and `  - <address>: actions=[...]`, so the line shapes are stable.

use colored::*;
use serde::Serialize;
use std::io::{self, Write};

use crate::cli::OutputFormat;
use crate::error::PlanError;
use crate::policy::Violation;
use crate::validator::Verdict;

/// Renders verdicts and input errors
#[derive(Debug, Clone, Copy)]
pub struct Reporter<'a> {
    prefix: &'a str,
    format: OutputFormat,
    color: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    status: &'static str,
    prefix: &'a str,
    violations: &'a [Violation],
}

impl<'a> Reporter<'a> {
    pub fn new(prefix: &'a str, format: OutputFormat, color: bool) -> Self {
        Self { prefix, format, color }
    }

    /// Write the verdict for a readable plan
    pub fn verdict(&self, verdict: &Verdict, out: &mut impl Write) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => self.verdict_text(verdict, out),
            OutputFormat::Json => self.verdict_json(verdict, out),
        }
    }

    /// Write a single `ERROR:` line describing unusable input
    pub fn input_error(&self, err: &PlanError, out: &mut impl Write) -> io::Result<()> {
        self.error_line(&err.to_string(), out)
    }

    /// Write a single `ERROR:` line for any other failure before validation
    ///
    /// Error lines go to stderr and are never coloured.
    pub fn error_line(&self, message: &str, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "ERROR: {}", message)
    }

    fn verdict_text(&self, verdict: &Verdict, out: &mut impl Write) -> io::Result<()> {
        match verdict {
            Verdict::Success => writeln!(
                out,
                "{} no protected resources (prefix '{}') are deleted or replaced.",
                self.tag("OK:", true),
                self.prefix
            ),
            Verdict::Violations(violations) => {
                writeln!(
                    out,
                    "{} protected resources scheduled for deletion or replacement:",
                    self.tag("ERROR:", false)
                )?;
                for v in violations {
                    writeln!(out, "  - {}: actions={}", v.address, format_actions(&v.actions))?;
                }
                writeln!(
                    out,
                    "Hint: remove the delete/replace of these resources from the plan, \
                     or rename them outside the '{}' convention if data loss is intended.",
                    self.prefix
                )
            }
        }
    }

    fn verdict_json(&self, verdict: &Verdict, out: &mut impl Write) -> io::Result<()> {
        let report = JsonReport {
            status: match verdict {
                Verdict::Success => "ok",
                Verdict::Violations(_) => "violations",
            },
            prefix: self.prefix,
            violations: verdict.violations(),
        };
        serde_json::to_writer(&mut *out, &report)?;
        writeln!(out)
    }

    fn tag(&self, tag: &str, ok: bool) -> String {
        match (self.color, ok) {
            (false, _) => tag.to_string(),
            (true, true) => tag.green().bold().to_string(),
            (true, false) => tag.red().bold().to_string(),
        }
    }
}

/// Format actions as a bracketed, quoted list: `['delete', 'create']`
pub fn format_actions(actions: &[String]) -> String {
    let quoted: Vec<String> = actions.iter().map(|a| format!("'{}'", a)).collect();
    format!("[{}]", quoted.join(", "))
}
