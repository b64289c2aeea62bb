//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.

use std::io::{self, Write};

use jlex_ir::LineIndex;

use crate::{Diagnostic, Label};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// The source a batch of diagnostics refers to.
struct SourceContext<'s> {
    path: &'s str,
    text: &'s str,
    index: LineIndex,
}

/// Terminal emitter with optional color support.
///
/// Without a source attached, labels print as raw byte spans. With
/// [`TerminalEmitter::with_source`], each primary label is rendered as
/// `path:line:col` followed by the source line and a caret underline.
pub struct TerminalEmitter<'s, W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceContext<'s>>,
}

impl<'s, W: Write> TerminalEmitter<'s, W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// # Arguments
    ///
    /// * `writer` - The output writer
    /// * `mode` - Color mode selection
    /// * `is_tty` - Whether output is a TTY (used for `ColorMode::Auto`)
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Attach the original source so labels render with snippets.
    #[must_use]
    pub fn with_source(mut self, path: &'s str, text: &'s str) -> Self {
        self.source = Some(SourceContext {
            path,
            text,
            index: LineIndex::build(text),
        });
        self
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    fn write_label_message(&mut self, label: &Label) {
        if label.is_primary {
            self.write_colored(&label.message, colors::ERROR);
        } else {
            self.write_colored(&label.message, colors::SECONDARY);
        }
    }

    /// `--> 0..5: message`
    fn write_bare_label(&mut self, label: &Label) {
        let marker = if label.is_primary { "-->" } else { "   " };
        let _ = write!(self.writer, "  {marker} {:?}: ", label.span);
        self.write_label_message(label);
        let _ = writeln!(self.writer);
    }

    /// ```text
    ///   --> Foo.java:3:9
    ///    |
    ///  3 |     s = "abc
    ///    |         ^^^^ message
    /// ```
    fn write_snippet_label(&mut self, label: &Label) {
        let Some(src) = &self.source else {
            self.write_bare_label(label);
            return;
        };
        let pos = src.index.position(src.text, label.span.start);
        let line_text = src.index.line_text(src.text, pos.line).unwrap_or("");
        let line_start = src.index.line_start(pos.line).unwrap_or(0) as usize;

        let indent: String = line_text
            .chars()
            .take(pos.column as usize - 1)
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        let start = label.span.start as usize;
        let end = (label.span.end as usize).clamp(start, line_start + line_text.len());
        let width = src.text.get(start..end).map_or(0, |s| s.chars().count()).max(1);
        let marker = (if label.is_primary { "^" } else { "-" }).repeat(width);

        let path = src.path;
        let gutter = " ".repeat(pos.line.to_string().len());
        let _ = writeln!(self.writer, "{gutter}--> {path}:{pos}");
        let _ = writeln!(self.writer, "{gutter} |");
        let _ = writeln!(self.writer, "{} | {line_text}", pos.line);
        let _ = write!(self.writer, "{gutter} | {indent}");
        if label.is_primary {
            self.write_colored(&marker, colors::ERROR);
        } else {
            self.write_colored(&marker, colors::SECONDARY);
        }
        let _ = write!(self.writer, " ");
        self.write_label_message(label);
        let _ = writeln!(self.writer);
    }
}

impl TerminalEmitter<'_, io::Stderr> {
    /// Create a terminal emitter for stderr with explicit color mode.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: error[CODE]: message
        self.write_colored("error", colors::ERROR);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            if self.source.is_some() {
                self.write_snippet_label(label);
            } else {
                self.write_bare_label(label);
            }
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            if self.colors {
                let _ = write!(self.writer, "{}note{}", colors::BOLD, colors::RESET);
            } else {
                let _ = write!(self.writer, "note");
            }
            let _ = writeln!(self.writer, ": {note}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize) {
        if error_count == 0 {
            return;
        }
        self.write_colored("error", colors::ERROR);
        if error_count == 1 {
            let _ = writeln!(self.writer, ": aborting due to previous error");
        } else {
            let _ = writeln!(self.writer, ": aborting due to {error_count} previous errors");
        }
    }
}
