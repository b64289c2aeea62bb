//! Reserved and contextual keywords.

word_enum! {
    /// Words that can never be identifiers.
    ///
    /// `true`, `false`, and `null` are literals, not keywords, and are absent
    /// here.
    pub enum Keyword {
        Underscore => "_",
        Abstract => "abstract",
        Assert => "assert",
        Boolean => "boolean",
        Break => "break",
        Byte => "byte",
        Case => "case",
        Catch => "catch",
        Char => "char",
        Class => "class",
        Const => "const",
        Continue => "continue",
        Default => "default",
        Do => "do",
        Double => "double",
        Else => "else",
        Enum => "enum",
        Extends => "extends",
        Final => "final",
        Finally => "finally",
        Float => "float",
        For => "for",
        Goto => "goto",
        If => "if",
        Implements => "implements",
        Import => "import",
        Instanceof => "instanceof",
        Int => "int",
        Interface => "interface",
        Long => "long",
        Native => "native",
        New => "new",
        Package => "package",
        Private => "private",
        Protected => "protected",
        Public => "public",
        Return => "return",
        Short => "short",
        Static => "static",
        Strictfp => "strictfp",
        Super => "super",
        Switch => "switch",
        Synchronized => "synchronized",
        This => "this",
        Throw => "throw",
        Throws => "throws",
        Transient => "transient",
        Try => "try",
        Void => "void",
        Volatile => "volatile",
        While => "while",
    }
}

word_enum! {
    /// Identifier-shaped words with meaning only in certain grammatical
    /// positions. The parser decides whether each occurrence is a keyword or
    /// a plain name.
    pub enum ContextualKeyword {
        Exports => "exports",
        Module => "module",
        Open => "open",
        Opens => "opens",
        Permits => "permits",
        Provides => "provides",
        Record => "record",
        Requires => "requires",
        Sealed => "sealed",
        To => "to",
        Transitive => "transitive",
        Uses => "uses",
        Var => "var",
        When => "when",
        With => "with",
        Yield => "yield",
    }
}
