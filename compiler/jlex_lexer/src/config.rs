//! Language-level switches for the lexer.

use std::str::FromStr;

/// Newest language release the presets know about.
pub const LATEST_RELEASE: u16 = 25;

/// Invalid lexer configuration input.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("unsupported language release {0} (expected 1 through {LATEST_RELEASE})")]
    UnsupportedRelease(u16),
    #[error("invalid language release `{0}`")]
    InvalidRelease(String),
}

/// Which optional lexical forms are accepted.
///
/// `Default` is the latest language level with comments kept as tokens.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LexerConfig {
    /// `012` is octal. When off, a leading-zero integer is malformed.
    pub allow_legacy_octal: bool,
    /// `"""` opens a text block. When off, it is an empty string followed
    /// by the start of another string.
    pub allow_text_blocks: bool,
    /// `1_000`. When off, every underscore in a number is misplaced.
    pub allow_underscore_digit_separators: bool,
    /// Attach comments to the next token as trivia instead of emitting
    /// them as tokens.
    pub comments_as_trivia: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            allow_legacy_octal: true,
            allow_text_blocks: true,
            allow_underscore_digit_separators: true,
            comments_as_trivia: false,
        }
    }
}

impl LexerConfig {
    /// Preset for a language release: underscores in numbers from 7, text
    /// blocks from 15.
    pub fn for_release(release: u16) -> Result<Self, ConfigError> {
        if !(1..=LATEST_RELEASE).contains(&release) {
            return Err(ConfigError::UnsupportedRelease(release));
        }
        Ok(LexerConfig {
            allow_underscore_digit_separators: release >= 7,
            allow_text_blocks: release >= 15,
            ..LexerConfig::default()
        })
    }

    /// Latest language level without legacy octal literals.
    pub fn strict() -> Self {
        LexerConfig {
            allow_legacy_octal: false,
            ..LexerConfig::default()
        }
    }

    #[must_use]
    pub fn with_legacy_octal(mut self, allow: bool) -> Self {
        self.allow_legacy_octal = allow;
        self
    }

    #[must_use]
    pub fn with_text_blocks(mut self, allow: bool) -> Self {
        self.allow_text_blocks = allow;
        self
    }

    #[must_use]
    pub fn with_underscore_separators(mut self, allow: bool) -> Self {
        self.allow_underscore_digit_separators = allow;
        self
    }

    #[must_use]
    pub fn with_comments_as_trivia(mut self, enabled: bool) -> Self {
        self.comments_as_trivia = enabled;
        self
    }
}

/// Parses a release name: `"17"`, or `"1.8"` for release 8.
impl FromStr for LexerConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = trimmed.strip_prefix("1.").unwrap_or(trimmed);
        let release = number
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidRelease(s.to_string()))?;
        LexerConfig::for_release(release)
    }
}
