//! Operator and punctuator tables.
//!
//! `>>` and `>>>` are always single operators here. Splitting them when a
//! nested type-argument list closes is left to the parser.

word_enum! {
    /// Expression operators, including `?`, `:`, and `->`.
    pub enum Operator {
        Assign => "=",
        Greater => ">",
        Less => "<",
        Bang => "!",
        Tilde => "~",
        Question => "?",
        Colon => ":",
        Arrow => "->",
        EqualEqual => "==",
        GreaterEqual => ">=",
        LessEqual => "<=",
        BangEqual => "!=",
        AndAnd => "&&",
        OrOr => "||",
        PlusPlus => "++",
        MinusMinus => "--",
        Plus => "+",
        Minus => "-",
        Star => "*",
        Slash => "/",
        Amp => "&",
        Pipe => "|",
        Caret => "^",
        Percent => "%",
        Shl => "<<",
        Shr => ">>",
        UShr => ">>>",
        PlusAssign => "+=",
        MinusAssign => "-=",
        StarAssign => "*=",
        SlashAssign => "/=",
        AmpAssign => "&=",
        PipeAssign => "|=",
        CaretAssign => "^=",
        PercentAssign => "%=",
        ShlAssign => "<<=",
        ShrAssign => ">>=",
        UShrAssign => ">>>=",
    }
}

word_enum! {
    /// Separators.
    pub enum Punctuator {
        LParen => "(",
        RParen => ")",
        LBrace => "{",
        RBrace => "}",
        LBracket => "[",
        RBracket => "]",
        Semicolon => ";",
        Comma => ",",
        Dot => ".",
        Ellipsis => "...",
        At => "@",
        ColonColon => "::",
    }
}
