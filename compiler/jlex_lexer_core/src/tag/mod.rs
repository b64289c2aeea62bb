//! Raw token tags.
//!
//! A [`RawTag`] says what the scanner saw, without any decoding. Keywords
//! are plain `Ident`s at this level; every numeric form is `Number`.

/// What kind of raw token was scanned.
///
/// Discriminants are grouped into ranges so category checks are a compare.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // === Identifiers & Literals (0-15) ===
    Ident = 0,
    /// Maximal run of literal-looking characters starting with a digit or
    /// `.digit`. Validated by the cooker.
    Number = 1,
    String = 2,
    Char = 3,
    /// `"""` ... `"""`. The opening line is validated by the cooker.
    TextBlock = 4,

    // === Operators (32-69) ===
    Assign = 32,
    Greater,
    Less,
    Bang,
    Tilde,
    Question,
    Colon,
    Arrow,
    EqualEqual,
    GreaterEqual,
    LessEqual,
    BangEqual,
    AndAnd,
    OrOr,
    PlusPlus,
    MinusMinus,
    Plus,
    Minus,
    Star,
    Slash,
    Amp,
    Pipe,
    Caret,
    Percent,
    Shl,
    Shr,
    UShr,
    PlusAssign,
    MinusAssign,
    StarAssign,
    SlashAssign,
    AmpAssign,
    PipeAssign,
    CaretAssign,
    PercentAssign,
    ShlAssign,
    ShrAssign,
    UShrAssign,

    // === Delimiters (80-91) ===
    LeftParen = 80,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Semicolon,
    Comma,
    Dot,
    Ellipsis,
    At,
    ColonColon,

    // === Trivia (112-116) ===
    Whitespace = 112,
    Newline,
    LineComment,
    BlockComment,
    DocComment,

    // === Errors (240-244) ===
    /// A character that cannot start any token (including interior NUL).
    InvalidChar = 240,
    UnterminatedString,
    UnterminatedChar,
    UnterminatedBlockComment,
    UnterminatedTextBlock,

    Eof = 255,
}

impl RawTag {
    /// Fixed source text for operator and delimiter tags.
    pub const fn lexeme(self) -> Option<&'static str> {
        Some(match self {
            RawTag::Assign => "=",
            RawTag::Greater => ">",
            RawTag::Less => "<",
            RawTag::Bang => "!",
            RawTag::Tilde => "~",
            RawTag::Question => "?",
            RawTag::Colon => ":",
            RawTag::Arrow => "->",
            RawTag::EqualEqual => "==",
            RawTag::GreaterEqual => ">=",
            RawTag::LessEqual => "<=",
            RawTag::BangEqual => "!=",
            RawTag::AndAnd => "&&",
            RawTag::OrOr => "||",
            RawTag::PlusPlus => "++",
            RawTag::MinusMinus => "--",
            RawTag::Plus => "+",
            RawTag::Minus => "-",
            RawTag::Star => "*",
            RawTag::Slash => "/",
            RawTag::Amp => "&",
            RawTag::Pipe => "|",
            RawTag::Caret => "^",
            RawTag::Percent => "%",
            RawTag::Shl => "<<",
            RawTag::Shr => ">>",
            RawTag::UShr => ">>>",
            RawTag::PlusAssign => "+=",
            RawTag::MinusAssign => "-=",
            RawTag::StarAssign => "*=",
            RawTag::SlashAssign => "/=",
            RawTag::AmpAssign => "&=",
            RawTag::PipeAssign => "|=",
            RawTag::CaretAssign => "^=",
            RawTag::PercentAssign => "%=",
            RawTag::ShlAssign => "<<=",
            RawTag::ShrAssign => ">>=",
            RawTag::UShrAssign => ">>>=",
            RawTag::LeftParen => "(",
            RawTag::RightParen => ")",
            RawTag::LeftBrace => "{",
            RawTag::RightBrace => "}",
            RawTag::LeftBracket => "[",
            RawTag::RightBracket => "]",
            RawTag::Semicolon => ";",
            RawTag::Comma => ",",
            RawTag::Dot => ".",
            RawTag::Ellipsis => "...",
            RawTag::At => "@",
            RawTag::ColonColon => "::",
            _ => return None,
        })
    }

    #[inline]
    pub const fn is_operator(self) -> bool {
        matches!(self as u8, 32..=69)
    }

    #[inline]
    pub const fn is_delimiter(self) -> bool {
        matches!(self as u8, 80..=91)
    }

    /// Whitespace, newlines, and comments.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(self as u8, 112..=116)
    }

    #[inline]
    pub const fn is_comment(self) -> bool {
        matches!(self, RawTag::LineComment | RawTag::BlockComment | RawTag::DocComment)
    }

    /// Tags the scanner already knows are errors.
    #[inline]
    pub const fn is_error(self) -> bool {
        matches!(self as u8, 240..=244)
    }
}

/// One scanned token: a tag and a byte length. Position is implicit in the
/// running sum of lengths.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

const _: () = assert!(size_of::<RawTag>() == 1);
const _: () = assert!(size_of::<RawToken>() == 8);
