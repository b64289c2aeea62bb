//! Keyword resolution for identifiers.
//!
//! Three tables share one lookup:
//! 1. **Reserved keywords**: never identifiers
//! 2. **Literal words**: `true`, `false`, `null`
//! 3. **Contextual keywords**: identifiers everywhere except in the grammar
//!    positions the parser gives them meaning
//!
//! The lookup uses the identifier's length as a first-pass filter (words
//! range from 1 to 12 bytes), then matches the words of that length.

use jlex_ir::{ContextualKeyword, Keyword};

/// Classification of an identifier-shaped word.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Word {
    Keyword(Keyword),
    Contextual(ContextualKeyword),
    Bool(bool),
    Null,
}

/// Look up a word by its (unicode-translated) text.
///
/// Returns `None` for plain identifiers.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<Word> {
    use ContextualKeyword as C;
    use Keyword as K;

    let bytes = text.as_bytes();
    if !(1..=12).contains(&bytes.len()) {
        return None;
    }
    if !(bytes[0].is_ascii_lowercase() || bytes[0] == b'_') {
        return None;
    }

    let kw = |k| Some(Word::Keyword(k));
    let ctx = |c| Some(Word::Contextual(c));

    match bytes.len() {
        1 => match text {
            "_" => kw(K::Underscore),
            _ => None,
        },
        2 => match text {
            "do" => kw(K::Do),
            "if" => kw(K::If),
            "to" => ctx(C::To),
            _ => None,
        },
        3 => match text {
            "for" => kw(K::For),
            "int" => kw(K::Int),
            "new" => kw(K::New),
            "try" => kw(K::Try),
            "var" => ctx(C::Var),
            _ => None,
        },
        4 => match text {
            "byte" => kw(K::Byte),
            "case" => kw(K::Case),
            "char" => kw(K::Char),
            "else" => kw(K::Else),
            "enum" => kw(K::Enum),
            "goto" => kw(K::Goto),
            "long" => kw(K::Long),
            "this" => kw(K::This),
            "void" => kw(K::Void),
            "true" => Some(Word::Bool(true)),
            "null" => Some(Word::Null),
            "open" => ctx(C::Open),
            "uses" => ctx(C::Uses),
            "when" => ctx(C::When),
            "with" => ctx(C::With),
            _ => None,
        },
        5 => match text {
            "break" => kw(K::Break),
            "catch" => kw(K::Catch),
            "class" => kw(K::Class),
            "const" => kw(K::Const),
            "final" => kw(K::Final),
            "float" => kw(K::Float),
            "short" => kw(K::Short),
            "super" => kw(K::Super),
            "throw" => kw(K::Throw),
            "while" => kw(K::While),
            "false" => Some(Word::Bool(false)),
            "opens" => ctx(C::Opens),
            "yield" => ctx(C::Yield),
            _ => None,
        },
        6 => match text {
            "assert" => kw(K::Assert),
            "double" => kw(K::Double),
            "import" => kw(K::Import),
            "native" => kw(K::Native),
            "public" => kw(K::Public),
            "return" => kw(K::Return),
            "static" => kw(K::Static),
            "switch" => kw(K::Switch),
            "throws" => kw(K::Throws),
            "module" => ctx(C::Module),
            "record" => ctx(C::Record),
            "sealed" => ctx(C::Sealed),
            _ => None,
        },
        7 => match text {
            "boolean" => kw(K::Boolean),
            "default" => kw(K::Default),
            "extends" => kw(K::Extends),
            "finally" => kw(K::Finally),
            "package" => kw(K::Package),
            "private" => kw(K::Private),
            "exports" => ctx(C::Exports),
            "permits" => ctx(C::Permits),
            _ => None,
        },
        8 => match text {
            "abstract" => kw(K::Abstract),
            "continue" => kw(K::Continue),
            "strictfp" => kw(K::Strictfp),
            "volatile" => kw(K::Volatile),
            "provides" => ctx(C::Provides),
            "requires" => ctx(C::Requires),
            _ => None,
        },
        9 => match text {
            "interface" => kw(K::Interface),
            "protected" => kw(K::Protected),
            "transient" => kw(K::Transient),
            _ => None,
        },
        10 => match text {
            "implements" => kw(K::Implements),
            "instanceof" => kw(K::Instanceof),
            "transitive" => ctx(C::Transitive),
            _ => None,
        },
        12 => match text {
            "synchronized" => kw(K::Synchronized),
            _ => None,
        },
        _ => None,
    }
}
