//! Lexing many independent sources at once.
//!
//! Each source is lexed on its own with no shared state, so the work is
//! spread over rayon's global pool. Results keep the input order.

use rayon::prelude::*;

use crate::{lex_with_config, LexOutput, LexerConfig};

/// Lex every source in `sources` in parallel.
///
/// `outputs[i]` belongs to `sources[i]`.
///
/// ```
/// use jlex_lexer::{batch, LexerConfig};
///
/// let outputs = batch::lex_all(&["class A {}", "int 08;"], LexerConfig::default());
/// assert!(!outputs[0].has_errors());
/// assert!(outputs[1].has_errors());
/// ```
pub fn lex_all<S>(sources: &[S], config: LexerConfig) -> Vec<LexOutput<'_>>
where
    S: AsRef<str> + Sync,
{
    tracing::debug!(sources = sources.len(), "batch lex");
    sources
        .par_iter()
        .map(|source| lex_with_config(source.as_ref(), config))
        .collect()
}

/// Total error count over a batch.
pub fn error_count(outputs: &[LexOutput<'_>]) -> usize {
    outputs.iter().map(|output| output.errors.len()).sum()
}
