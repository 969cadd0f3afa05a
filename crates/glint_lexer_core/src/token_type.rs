//! Semantic token categories.
//!
//! `TokenType` is a closed, `#[repr(u8)]` enumeration. Discriminants are
//! grouped into numeric ranges by category so that category tests are
//! range comparisons:
//!
//! | Range     | Category                 |
//! |-----------|--------------------------|
//! | 0-15      | Keywords                 |
//! | 16-47     | Names                    |
//! | 48-79     | Literals and strings     |
//! | 80-95     | Numbers                  |
//! | 96-103    | Operators                |
//! | 104-111   | Punctuation              |
//! | 112-127   | Comments                 |
//! | 128-143   | Generic (markup, diffs)  |
//! | 240-255   | Text, whitespace, errors |
//!
//! The set is append-only: new categories take a free slot in their range,
//! existing discriminants and short codes never change.

use std::fmt;

macro_rules! token_types {
    ($($(#[$meta:meta])* $variant:ident = $disc:literal => ($code:literal, $name:literal),)*) => {
        /// Semantic category of a token.
        ///
        /// Short codes are compatible with the Pygments CSS class names, so a
        /// stylesheet written for Pygments output styles `glint` output too.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(u8)]
        pub enum TokenType {
            $($(#[$meta])* $variant = $disc,)*
        }

        impl TokenType {
            /// Every token type, in discriminant order.
            pub const ALL: &'static [TokenType] = &[$(TokenType::$variant,)*];

            /// Short CSS-class code (`"kd"`, `"s2"`, `"err"`, ...).
            ///
            /// [`TokenType::Text`] is the only type with an empty code.
            pub const fn short_code(self) -> &'static str {
                match self {
                    $(TokenType::$variant => $code,)*
                }
            }

            /// Stable upper-case name (`"KEYWORD_DECLARATION"`).
            pub const fn name(self) -> &'static str {
                match self {
                    $(TokenType::$variant => $name,)*
                }
            }
        }
    };
}

token_types! {
    // ─── Keywords: 0-15 ───
    Keyword = 0 => ("k", "KEYWORD"),
    KeywordConstant = 1 => ("kc", "KEYWORD_CONSTANT"),
    KeywordDeclaration = 2 => ("kd", "KEYWORD_DECLARATION"),
    KeywordNamespace = 3 => ("kn", "KEYWORD_NAMESPACE"),
    KeywordPseudo = 4 => ("kp", "KEYWORD_PSEUDO"),
    KeywordReserved = 5 => ("kr", "KEYWORD_RESERVED"),
    KeywordType = 6 => ("kt", "KEYWORD_TYPE"),

    // ─── Names: 16-47 ───
    Name = 16 => ("n", "NAME"),
    NameAttribute = 17 => ("na", "NAME_ATTRIBUTE"),
    NameBuiltin = 18 => ("nb", "NAME_BUILTIN"),
    NameBuiltinPseudo = 19 => ("bp", "NAME_BUILTIN_PSEUDO"),
    NameClass = 20 => ("nc", "NAME_CLASS"),
    NameConstant = 21 => ("no", "NAME_CONSTANT"),
    NameDecorator = 22 => ("nd", "NAME_DECORATOR"),
    NameEntity = 23 => ("ni", "NAME_ENTITY"),
    NameException = 24 => ("ne", "NAME_EXCEPTION"),
    NameFunction = 25 => ("nf", "NAME_FUNCTION"),
    NameFunctionMagic = 26 => ("fm", "NAME_FUNCTION_MAGIC"),
    NameLabel = 27 => ("nl", "NAME_LABEL"),
    NameNamespace = 28 => ("nn", "NAME_NAMESPACE"),
    NameOther = 29 => ("nx", "NAME_OTHER"),
    NameProperty = 30 => ("py", "NAME_PROPERTY"),
    NameTag = 31 => ("nt", "NAME_TAG"),
    NameVariable = 32 => ("nv", "NAME_VARIABLE"),
    NameVariableClass = 33 => ("vc", "NAME_VARIABLE_CLASS"),
    NameVariableGlobal = 34 => ("vg", "NAME_VARIABLE_GLOBAL"),
    NameVariableInstance = 35 => ("vi", "NAME_VARIABLE_INSTANCE"),
    NameVariableMagic = 36 => ("vm", "NAME_VARIABLE_MAGIC"),

    // ─── Literals and strings: 48-79 ───
    Literal = 48 => ("l", "LITERAL"),
    LiteralDate = 49 => ("ld", "LITERAL_DATE"),
    String = 50 => ("s", "STRING"),
    StringAffix = 51 => ("sa", "STRING_AFFIX"),
    StringBacktick = 52 => ("sb", "STRING_BACKTICK"),
    StringChar = 53 => ("sc", "STRING_CHAR"),
    StringDelimiter = 54 => ("dl", "STRING_DELIMITER"),
    StringDoc = 55 => ("sd", "STRING_DOC"),
    StringDouble = 56 => ("s2", "STRING_DOUBLE"),
    StringEscape = 57 => ("se", "STRING_ESCAPE"),
    StringHeredoc = 58 => ("sh", "STRING_HEREDOC"),
    StringInterpol = 59 => ("si", "STRING_INTERPOL"),
    StringOther = 60 => ("sx", "STRING_OTHER"),
    StringRegex = 61 => ("sr", "STRING_REGEX"),
    StringSingle = 62 => ("s1", "STRING_SINGLE"),
    StringSymbol = 63 => ("ss", "STRING_SYMBOL"),

    // ─── Numbers: 80-95 ───
    Number = 80 => ("m", "NUMBER"),
    NumberBin = 81 => ("mb", "NUMBER_BIN"),
    NumberFloat = 82 => ("mf", "NUMBER_FLOAT"),
    NumberHex = 83 => ("mh", "NUMBER_HEX"),
    NumberInteger = 84 => ("mi", "NUMBER_INTEGER"),
    NumberIntegerLong = 85 => ("il", "NUMBER_INTEGER_LONG"),
    NumberOct = 86 => ("mo", "NUMBER_OCT"),

    // ─── Operators: 96-103 ───
    Operator = 96 => ("o", "OPERATOR"),
    OperatorWord = 97 => ("ow", "OPERATOR_WORD"),

    // ─── Punctuation: 104-111 ───
    Punctuation = 104 => ("p", "PUNCTUATION"),
    PunctuationMarker = 105 => ("pm", "PUNCTUATION_MARKER"),

    // ─── Comments: 112-127 ───
    Comment = 112 => ("c", "COMMENT"),
    CommentHashbang = 113 => ("ch", "COMMENT_HASHBANG"),
    CommentMultiline = 114 => ("cm", "COMMENT_MULTILINE"),
    CommentPreproc = 115 => ("cp", "COMMENT_PREPROC"),
    CommentPreprocFile = 116 => ("cpf", "COMMENT_PREPROCFILE"),
    CommentSingle = 117 => ("c1", "COMMENT_SINGLE"),
    CommentSpecial = 118 => ("cs", "COMMENT_SPECIAL"),

    // ─── Generic: 128-143 ───
    Generic = 128 => ("g", "GENERIC"),
    GenericDeleted = 129 => ("gd", "GENERIC_DELETED"),
    GenericEmph = 130 => ("ge", "GENERIC_EMPH"),
    GenericError = 131 => ("gr", "GENERIC_ERROR"),
    GenericHeading = 132 => ("gh", "GENERIC_HEADING"),
    GenericInserted = 133 => ("gi", "GENERIC_INSERTED"),
    GenericOutput = 134 => ("go", "GENERIC_OUTPUT"),
    GenericPrompt = 135 => ("gp", "GENERIC_PROMPT"),
    GenericStrong = 136 => ("gs", "GENERIC_STRONG"),
    GenericSubheading = 137 => ("gu", "GENERIC_SUBHEADING"),
    GenericTraceback = 138 => ("gt", "GENERIC_TRACEBACK"),

    // ─── Special: 240-255 ───
    /// Plain text with no particular meaning (Markdown/HTML content).
    Text = 240 => ("", "TEXT"),
    Whitespace = 241 => ("w", "WHITESPACE"),
    /// A character the scanner could not place in any construct.
    Error = 242 => ("err", "ERROR"),
    Other = 243 => ("x", "OTHER"),
}

impl TokenType {
    #[inline]
    pub const fn is_keyword(self) -> bool {
        (self as u8) < 16
    }

    #[inline]
    pub const fn is_name(self) -> bool {
        matches!(self as u8, 16..=47)
    }

    /// Strings and other non-numeric literals.
    #[inline]
    pub const fn is_string(self) -> bool {
        matches!(self as u8, 50..=79)
    }

    #[inline]
    pub const fn is_number(self) -> bool {
        matches!(self as u8, 80..=95)
    }

    #[inline]
    pub const fn is_comment(self) -> bool {
        matches!(self as u8, 112..=127)
    }

    /// Whitespace and comments: tokens that never affect what follows.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(self, TokenType::Whitespace) || self.is_comment()
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
