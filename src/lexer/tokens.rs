use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    /// Case-folded keyword lookup. Matched identifier text is lower-cased
    /// once before the lookup, which is what makes keyword recognition
    /// case-insensitive while identifiers stay case-sensitive.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("abstract", TokenKind::Abstract);
        map.insert("boolean", TokenKind::Boolean);
        map.insert("break", TokenKind::Break);
        map.insert("byte", TokenKind::Byte);
        map.insert("case", TokenKind::Case);
        map.insert("catch", TokenKind::Catch);
        map.insert("char", TokenKind::Char);
        map.insert("class", TokenKind::Class);
        map.insert("const", TokenKind::Const);
        map.insert("continue", TokenKind::Continue);
        map.insert("default", TokenKind::Default);
        map.insert("do", TokenKind::Do);
        map.insert("double", TokenKind::Double);
        map.insert("else", TokenKind::Else);
        map.insert("extends", TokenKind::Extends);
        map.insert("final", TokenKind::Final);
        map.insert("finally", TokenKind::Finally);
        map.insert("float", TokenKind::Float);
        map.insert("for", TokenKind::For);
        map.insert("goto", TokenKind::Goto);
        map.insert("if", TokenKind::If);
        map.insert("implements", TokenKind::Implements);
        map.insert("import", TokenKind::Import);
        map.insert("instanceof", TokenKind::Instanceof);
        map.insert("int", TokenKind::Int);
        map.insert("interface", TokenKind::Interface);
        map.insert("long", TokenKind::Long);
        map.insert("native", TokenKind::Native);
        map.insert("new", TokenKind::New);
        map.insert("package", TokenKind::Package);
        map.insert("private", TokenKind::Private);
        map.insert("protected", TokenKind::Protected);
        map.insert("public", TokenKind::Public);
        map.insert("return", TokenKind::Return);
        map.insert("short", TokenKind::Short);
        map.insert("static", TokenKind::Static);
        map.insert("super", TokenKind::Super);
        map.insert("switch", TokenKind::Switch);
        map.insert("synchronized", TokenKind::Synchronized);
        map.insert("this", TokenKind::This);
        map.insert("throw", TokenKind::Throw);
        map.insert("throws", TokenKind::Throws);
        map.insert("transient", TokenKind::Transient);
        map.insert("try", TokenKind::Try);
        map.insert("void", TokenKind::Void);
        map.insert("volatile", TokenKind::Volatile);
        map.insert("while", TokenKind::While);
        map.insert("true", TokenKind::BooleanLiteral);
        map.insert("false", TokenKind::BooleanLiteral);
        map.insert("null", TokenKind::NullLiteral);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EndOfInput,

    Identifier,
    IntegerLiteral,
    FloatingPointLiteral,
    BooleanLiteral,
    NullLiteral,
    CharacterLiteral,
    StringLiteral,

    // Trivia
    Whitespace,
    Comment,

    // Separators
    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    OpenBracket,
    CloseBracket,
    Semicolon,
    Comma,
    Dot,

    Assignment,    // =
    Equals,        // ==
    Not,           // !
    NotEquals,     // !=
    Tilde,         // ~

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,            // ||
    And,           // &&
    BitOr,         // |
    BitAnd,        // &
    BitXor,        // ^

    ShiftLeft,
    ShiftRight,
    UnsignedShiftRight,

    Question,
    Colon,

    PlusPlus,
    MinusMinus,
    PlusEquals,
    MinusEquals,
    StarEquals,
    SlashEquals,
    PercentEquals,
    AndEquals,
    OrEquals,
    XorEquals,
    ShiftLeftEquals,
    ShiftRightEquals,
    UnsignedShiftRightEquals,

    Plus,
    Dash,
    Star,
    Slash,
    Percent,

    // Reserved
    Abstract,
    Boolean,
    Break,
    Byte,
    Case,
    Catch,
    Char,
    Class,
    Const,
    Continue,
    Default,
    Do,
    Double,
    Else,
    Extends,
    Final,
    Finally,
    Float,
    For,
    Goto,
    If,
    Implements,
    Import,
    Instanceof,
    Int,
    Interface,
    Long,
    Native,
    New,
    Package,
    Private,
    Protected,
    Public,
    Return,
    Short,
    Static,
    Super,
    Switch,
    Synchronized,
    This,
    Throw,
    Throws,
    Transient,
    Try,
    Void,
    Volatile,
    While,
}

impl TokenKind {
    /// Whitespace and comments carry no syntactic weight; the caller
    /// decides whether to filter them out.
    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The decoded semantic value attached to literal tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Bool(bool),
    Char(char),
    Str(String),
    None,
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub value: TokenValue,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token {{\nkind: {},\ntext: {}}}",
            self.kind, self.text
        )
    }
}

impl Token {
    fn is_one_of_many(&self, kinds: Vec<TokenKind>) -> bool {
        for kind in kinds {
            if kind == self.kind {
                return true;
            }
        }

        false
    }

    pub fn debug(&self) {
        if self.is_one_of_many(vec![
            TokenKind::Identifier,
            TokenKind::IntegerLiteral,
            TokenKind::FloatingPointLiteral,
            TokenKind::BooleanLiteral,
            TokenKind::CharacterLiteral,
            TokenKind::StringLiteral,
        ]) {
            println!("{} ({})", self.kind, self.text);
        } else {
            println!("{} ()", self.kind);
        }
    }
}
