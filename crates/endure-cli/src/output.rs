//! Output management and formatting.
//!
//! Status lines go to stdout and are silenced by `--quiet`.  Errors go to
//! stderr.  Command results written through [`OutputManager::data`] are
//! never silenced.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::GlobalArgs;
use crate::config::AppConfig;

#[derive(Debug, Clone, Copy)]
enum Tone {
    Success,
    Error,
    Warning,
    Info,
}

impl Tone {
    fn symbol(self) -> &'static str {
        match self {
            Tone::Success => "\u{2713}", // ✓
            Tone::Error => "\u{2717}",   // ✗
            Tone::Warning => "\u{26a0}", // ⚠
            Tone::Info => "\u{2139}",    // ℹ
        }
    }

    fn paint(self, msg: &str) -> String {
        let symbol = self.symbol();
        match self {
            Tone::Success => format!("{} {}", symbol.green().bold(), msg.green()),
            Tone::Error => format!("{} {}", symbol.red().bold(), msg.red()),
            Tone::Warning => format!("{} {}", symbol.yellow().bold(), msg.yellow()),
            Tone::Info => format!("{} {}", symbol.blue().bold(), msg.blue()),
        }
    }
}

/// Manages CLI output based on flags and configuration.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    out: Term,
    err: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// Colour is also dropped when stdout is not a terminal.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let no_color = args.no_color || config.output.no_color || !io::stdout().is_terminal();
        Self::with_settings(args.quiet, no_color)
    }

    fn with_settings(quiet: bool, no_color: bool) -> Self {
        Self {
            quiet,
            no_color,
            out: Term::stdout(),
            err: Term::stderr(),
        }
    }

    fn line(&self, tone: Tone, msg: &str) -> String {
        if self.no_color {
            format!("{} {msg}", tone.symbol())
        } else {
            tone.paint(msg)
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Command result on stdout, written even in quiet mode.
    pub fn data(&self, msg: &str) -> io::Result<()> {
        self.out.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.out.write_line(&self.line(Tone::Success, msg))
    }

    /// Error indicator on stderr: `✗ <msg>`.  Not suppressed in quiet mode.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        self.err.write_line(&self.line(Tone::Error, msg))
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.out.write_line(&self.line(Tone::Warning, msg))
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.out.write_line(&self.line(Tone::Info, msg))
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.out.write_line(&line)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
