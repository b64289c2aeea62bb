//! Per-token metadata flags.

use bitflags::bitflags;

bitflags! {
    /// Trivia context and cooking results for one token, packed in a byte.
    ///
    /// Lets consumers reason about layout without walking leading trivia.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct TokenFlags: u8 {
        /// Whitespace preceded this token.
        const SPACE_BEFORE = 1 << 0;
        /// A line terminator preceded this token.
        const NEWLINE_BEFORE = 1 << 1;
        /// A comment (token or trivia) preceded this token.
        const COMMENT_BEFORE = 1 << 2;
        /// First token on its line.
        const LINE_START = 1 << 3;
        /// Token is `Invalid`.
        const HAS_ERROR = 1 << 4;
        /// Token is a contextual keyword.
        const CONTEXTUAL_KW = 1 << 5;
        /// The lexeme contains at least one `\uXXXX` escape.
        const UNICODE_ESCAPED = 1 << 6;
    }
}

impl TokenFlags {
    #[inline]
    pub const fn has_space_before(self) -> bool {
        self.contains(Self::SPACE_BEFORE)
    }

    #[inline]
    pub const fn has_newline_before(self) -> bool {
        self.contains(Self::NEWLINE_BEFORE)
    }

    #[inline]
    pub const fn is_line_start(self) -> bool {
        self.contains(Self::LINE_START)
    }

    #[inline]
    pub const fn has_error(self) -> bool {
        self.contains(Self::HAS_ERROR)
    }
}

const _: () = assert!(size_of::<TokenFlags>() == 1);
