//! Java lexer.
//!
//! Turns a compilation unit's source text into a stream of [`Token`]s for a
//! parser. Lexing is lossless (every byte of input belongs to exactly one
//! token or trivia run) and error tolerant (problems become `Invalid`
//! tokens plus a [`LexError`], and scanning carries on).
//!
//! # Pipeline
//!
//! ```text
//! source ─► translate (\uXXXX) ─► RawScanner ─► TokenCooker ─► Token
//!                 │                                  │
//!                 └────── OffsetMap ─────────────────┘ (original spans)
//! ```
//!
//! The first two stages live in `jlex_lexer_core`. This crate adds keyword
//! resolution, literal decoding, trivia attachment, and error reporting.
//!
//! # Example
//!
//! ```
//! use jlex_ir::{LiteralValue, TokenKind};
//!
//! let output = jlex_lexer::lex("int x = 0x1F;");
//! assert!(!output.has_errors());
//! assert_eq!(output.tokens[3].kind, TokenKind::IntegerLiteral);
//! assert_eq!(output.tokens[3].value, Some(LiteralValue::Int(31)));
//! ```

mod config;
mod cooker;
mod escape;
mod keywords;
mod lex_error;
mod lexer;
mod numeric;
mod text_block;

pub mod batch;

use std::sync::Once;

use jlex_diagnostic::queue::{DiagnosticConfig, DiagnosticQueue};
use jlex_diagnostic::Diagnostic;
use jlex_ir::Token;

pub use config::{ConfigError, LexerConfig, LATEST_RELEASE};
pub use lex_error::LexError;
pub use lexer::Lexer;

/// Every token of one source, plus the errors found while producing them.
///
/// `tokens` always ends with exactly one `EndOfFile` token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput<'src> {
    pub tokens: Vec<Token<'src>>,
    pub errors: Vec<LexError>,
}

impl LexOutput<'_> {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Errors as diagnostics, sorted by position and capped by `config`.
    pub fn diagnostics(&self, config: DiagnosticConfig) -> Vec<Diagnostic> {
        let mut queue = DiagnosticQueue::with_config(config);
        for error in &self.errors {
            if !queue.add(error.to_diagnostic(), error.position) {
                break;
            }
        }
        queue.flush()
    }

    /// Concatenate every token's leading trivia and lexeme. Equals the
    /// source text that was lexed.
    pub fn reconstruct(&self) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            token.write_source(&mut out);
        }
        out
    }
}

/// Lex `source` with the default configuration.
pub fn lex(source: &str) -> LexOutput<'_> {
    lex_with_config(source, LexerConfig::default())
}

/// Lex `source` eagerly under `config`.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex_with_config(source: &str, config: LexerConfig) -> LexOutput<'_> {
    let output = Lexer::with_config(source, config).tokenize();
    tracing::debug!(
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        "lexed"
    );
    output
}

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber that logs to stderr.
///
/// Does nothing unless `RUST_LOG` is set, and only the first call has any
/// effect. Filtering follows `RUST_LOG` syntax, for example
/// `RUST_LOG=jlex_lexer=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        if std::env::var("RUST_LOG").is_ok() {
            use tracing_subscriber::{fmt, prelude::*, EnvFilter};

            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
