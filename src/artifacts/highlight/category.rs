//! Token classification
//!
//! Maps a leaf's lexical kind to a [`TokenCategory`]. The lookup is a set of
//! static `phf` tables: one shared by every grammar plus an optional override
//! table per language, consulted first. Supporting a new language means adding
//! a table and a line in [`Classifier::for_language`]; callers do not change.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    Comment,
    String,
    Link,
    Escape,
    Quote,
    Markup,
    Number,
    Field,
    Identifier,
    Type,
    BuiltinType,
    Export,
    Keyword,
    Accessor,
    Operator,
    Directive,
    ListMarker,
    Punctuation,
    Plain,
    /// Rainbow bracket, indexing the bracket palette.
    Bracket(u8),
}

impl TokenCategory {
    pub fn name(&self) -> &'static str {
        match self {
            TokenCategory::Comment => "comment",
            TokenCategory::String => "string",
            TokenCategory::Link => "link",
            TokenCategory::Escape => "escape",
            TokenCategory::Quote => "quote",
            TokenCategory::Markup => "markup",
            TokenCategory::Number => "number",
            TokenCategory::Field => "field",
            TokenCategory::Identifier => "identifier",
            TokenCategory::Type => "type",
            TokenCategory::BuiltinType => "builtin-type",
            TokenCategory::Export => "export",
            TokenCategory::Keyword => "keyword",
            TokenCategory::Accessor => "accessor",
            TokenCategory::Operator => "operator",
            TokenCategory::Directive => "directive",
            TokenCategory::ListMarker => "list-marker",
            TokenCategory::Punctuation => "punctuation",
            TokenCategory::Plain => "plain",
            TokenCategory::Bracket(_) => "bracket",
        }
    }

    pub const ALL: [TokenCategory; 19] = [
        TokenCategory::Comment,
        TokenCategory::String,
        TokenCategory::Link,
        TokenCategory::Escape,
        TokenCategory::Quote,
        TokenCategory::Markup,
        TokenCategory::Number,
        TokenCategory::Field,
        TokenCategory::Identifier,
        TokenCategory::Type,
        TokenCategory::BuiltinType,
        TokenCategory::Export,
        TokenCategory::Keyword,
        TokenCategory::Accessor,
        TokenCategory::Operator,
        TokenCategory::Directive,
        TokenCategory::ListMarker,
        TokenCategory::Punctuation,
        TokenCategory::Plain,
    ];
}

/// `keyword`, `plain`, ... and `bracket-3` for palette slot 3.
impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenCategory::Bracket(index) => write!(f, "bracket-{index}"),
            other => f.write_str(other.name()),
        }
    }
}

type KindTable = phf::Map<&'static str, TokenCategory>;

static COMMON_KINDS: KindTable = phf::phf_map! {
    "comment" => TokenCategory::Comment,
    "comment_content" => TokenCategory::Comment,
    "line_comment" => TokenCategory::Comment,
    "block_comment" => TokenCategory::Comment,
    "//" => TokenCategory::Comment,
    "/*" => TokenCategory::Comment,
    "*/" => TokenCategory::Comment,
    "shebang" => TokenCategory::Comment,
    "--" => TokenCategory::Comment,
    "string" => TokenCategory::String,
    "string_start" => TokenCategory::String,
    "string_end" => TokenCategory::String,
    "string_content" => TokenCategory::String,
    "string_fragment" => TokenCategory::String,
    "string_literal_content" => TokenCategory::String,
    "string_literal" => TokenCategory::String,
    "raw_string_literal" => TokenCategory::String,
    "raw_string_literal_content" => TokenCategory::String,
    "interpreted_string_literal" => TokenCategory::String,
    "interpreted_string_literal_content" => TokenCategory::String,
    "char_literal" => TokenCategory::String,
    "\"" => TokenCategory::String,
    "'" => TokenCategory::String,
    "`" => TokenCategory::String,
    "attribute_value" => TokenCategory::String,
    "escape_sequence" => TokenCategory::Escape,
    "number" => TokenCategory::Number,
    "int" => TokenCategory::Number,
    "float" => TokenCategory::Number,
    "int_literal" => TokenCategory::Number,
    "integer_literal" => TokenCategory::Number,
    "integer" => TokenCategory::Number,
    "float_literal" => TokenCategory::Number,
    "rune_literal" => TokenCategory::Number,
    "decimal_integer_literal" => TokenCategory::Number,
    "hex_integer_literal" => TokenCategory::Number,
    "octal_integer_literal" => TokenCategory::Number,
    "binary_integer_literal" => TokenCategory::Number,
    "number_literal" => TokenCategory::Number,
    "true" => TokenCategory::Number,
    "false" => TokenCategory::Number,
    "field_identifier" => TokenCategory::Field,
    "property_identifier" => TokenCategory::Field,
    "shorthand_field_identifier" => TokenCategory::Field,
    "attribute_name" => TokenCategory::Field,
    "identifier" => TokenCategory::Identifier,
    "tag_name" => TokenCategory::Identifier,
    "type_identifier" => TokenCategory::Type,
    "language" => TokenCategory::Type,
    "void_type" => TokenCategory::Type,
    "predefined_type" => TokenCategory::BuiltinType,
    "primitive_type" => TokenCategory::BuiltinType,
    "export" => TokenCategory::Export,
    "import" => TokenCategory::Keyword,
    "from" => TokenCategory::Keyword,
    "as" => TokenCategory::Keyword,
    "require" => TokenCategory::Keyword,
    "package" => TokenCategory::Keyword,
    "class" => TokenCategory::Keyword,
    "def" => TokenCategory::Keyword,
    "interface" => TokenCategory::Keyword,
    "enum" => TokenCategory::Keyword,
    "type" => TokenCategory::Keyword,
    "function" => TokenCategory::Keyword,
    "fn" => TokenCategory::Keyword,
    "fun" => TokenCategory::Keyword,
    "func" => TokenCategory::Keyword,
    "go" => TokenCategory::Keyword,
    "var" => TokenCategory::Keyword,
    "let" => TokenCategory::Keyword,
    "const" => TokenCategory::Keyword,
    "async" => TokenCategory::Keyword,
    "await" => TokenCategory::Keyword,
    "break" => TokenCategory::Keyword,
    "case" => TokenCategory::Keyword,
    "catch" => TokenCategory::Keyword,
    "continue" => TokenCategory::Keyword,
    "debugger" => TokenCategory::Keyword,
    "default" => TokenCategory::Keyword,
    "delete" => TokenCategory::Keyword,
    "do" => TokenCategory::Keyword,
    "else" => TokenCategory::Keyword,
    "finally" => TokenCategory::Keyword,
    "for" => TokenCategory::Keyword,
    "if" => TokenCategory::Keyword,
    "in" => TokenCategory::Keyword,
    "instanceof" => TokenCategory::Keyword,
    "new" => TokenCategory::Keyword,
    "return" => TokenCategory::Keyword,
    "switch" => TokenCategory::Keyword,
    "this" => TokenCategory::Keyword,
    "throw" => TokenCategory::Keyword,
    "try" => TokenCategory::Keyword,
    "typeof" => TokenCategory::Keyword,
    "void" => TokenCategory::Keyword,
    "while" => TokenCategory::Keyword,
    "with" => TokenCategory::Keyword,
    "yield" => TokenCategory::Keyword,
    "private" => TokenCategory::Keyword,
    "public" => TokenCategory::Keyword,
    "protected" => TokenCategory::Keyword,
    "internal" => TokenCategory::Keyword,
    "pub" => TokenCategory::Keyword,
    "use" => TokenCategory::Keyword,
    "mod" => TokenCategory::Keyword,
    "mut" => TokenCategory::Keyword,
    "satisfies" => TokenCategory::Keyword,
    "override" => TokenCategory::Keyword,
    "readonly" => TokenCategory::Keyword,
    "namespace" => TokenCategory::Keyword,
    "keyof" => TokenCategory::Keyword,
    "implements" => TokenCategory::Keyword,
    "abstract" => TokenCategory::Keyword,
    "declare" => TokenCategory::Keyword,
    "using" => TokenCategory::Keyword,
    "static" => TokenCategory::Keyword,
    "except" => TokenCategory::Keyword,
    "local" => TokenCategory::Keyword,
    "then" => TokenCategory::Keyword,
    "end" => TokenCategory::Keyword,
    "elseif" => TokenCategory::Keyword,
    "struct" => TokenCategory::Keyword,
    "impl" => TokenCategory::Keyword,
    "trait" => TokenCategory::Keyword,
    "where" => TokenCategory::Keyword,
    "match" => TokenCategory::Keyword,
    "loop" => TokenCategory::Keyword,
    "self" => TokenCategory::Keyword,
    "crate" => TokenCategory::Keyword,
    "super" => TokenCategory::Keyword,
    "ref" => TokenCategory::Keyword,
    "move" => TokenCategory::Keyword,
    "unsafe" => TokenCategory::Keyword,
    "dyn" => TokenCategory::Keyword,
    "lambda" => TokenCategory::Keyword,
    "pass" => TokenCategory::Keyword,
    "raise" => TokenCategory::Keyword,
    "not" => TokenCategory::Keyword,
    "and" => TokenCategory::Keyword,
    "or" => TokenCategory::Keyword,
    "is" => TokenCategory::Keyword,
    "null" => TokenCategory::Keyword,
    "none" => TokenCategory::Keyword,
    "nil" => TokenCategory::Keyword,
    "assembly" => TokenCategory::Accessor,
    "get" => TokenCategory::Accessor,
    "set" => TokenCategory::Accessor,
    "operator" => TokenCategory::Operator,
    ":=" => TokenCategory::Operator,
    "=" => TokenCategory::Operator,
    "+" => TokenCategory::Operator,
    "-" => TokenCategory::Operator,
    "~" => TokenCategory::Operator,
    "*" => TokenCategory::Operator,
    "/" => TokenCategory::Operator,
    "%" => TokenCategory::Operator,
    "==" => TokenCategory::Operator,
    "!=" => TokenCategory::Operator,
    "===" => TokenCategory::Operator,
    "!==" => TokenCategory::Operator,
    "=>" => TokenCategory::Operator,
    "==>" => TokenCategory::Operator,
    "<-" => TokenCategory::Operator,
    "->" => TokenCategory::Operator,
    "<<" => TokenCategory::Operator,
    ">>" => TokenCategory::Operator,
    "<" => TokenCategory::Operator,
    ">" => TokenCategory::Operator,
    "/>" => TokenCategory::Operator,
    "</" => TokenCategory::Operator,
    "<=" => TokenCategory::Operator,
    ">=" => TokenCategory::Operator,
    "&&" => TokenCategory::Operator,
    "||" => TokenCategory::Operator,
    "!" => TokenCategory::Operator,
    "|" => TokenCategory::Operator,
    "&" => TokenCategory::Operator,
    "$" => TokenCategory::Operator,
    "@" => TokenCategory::Operator,
    "+=" => TokenCategory::Operator,
    "-=" => TokenCategory::Operator,
    "*=" => TokenCategory::Operator,
    "/=" => TokenCategory::Operator,
    "^" => TokenCategory::Operator,
    "punctuation" => TokenCategory::Punctuation,
    "(" => TokenCategory::Punctuation,
    ")" => TokenCategory::Punctuation,
    "[" => TokenCategory::Punctuation,
    "]" => TokenCategory::Punctuation,
    "{" => TokenCategory::Punctuation,
    "}" => TokenCategory::Punctuation,
    ";" => TokenCategory::Punctuation,
    "?" => TokenCategory::Punctuation,
    ":" => TokenCategory::Punctuation,
    "," => TokenCategory::Punctuation,
    "." => TokenCategory::Punctuation,
    "..." => TokenCategory::Punctuation,
    ".." => TokenCategory::Punctuation,
    "::" => TokenCategory::Punctuation,
    "#" => TokenCategory::Punctuation,
};

static MARKDOWN_KINDS: KindTable = phf::phf_map! {
    "fenced_code_block_delimiter" => TokenCategory::String,
    "indented_code_block" => TokenCategory::String,
    "fenced_code_block" => TokenCategory::String,
    "link_title" => TokenCategory::String,
    "code_span_delimiter" => TokenCategory::String,
    "link_destination" => TokenCategory::Link,
    "link_label" => TokenCategory::Link,
    "uri_autolink" => TokenCategory::Link,
    "backslash_escape" => TokenCategory::Escape,
    "block_continuation" => TokenCategory::Quote,
    "block_quote_marker" => TokenCategory::Quote,
    "_line" => TokenCategory::Markup,
    "emphasis_delimiter" => TokenCategory::Markup,
    "list_marker_plus" => TokenCategory::ListMarker,
    "list_marker_minus" => TokenCategory::ListMarker,
    "list_marker_star" => TokenCategory::ListMarker,
    "list_marker_dot" => TokenCategory::ListMarker,
    "list_marker_parenthesis" => TokenCategory::ListMarker,
    "thematic_break" => TokenCategory::ListMarker,
    "atx_h1_marker" => TokenCategory::Punctuation,
    "atx_h2_marker" => TokenCategory::Punctuation,
    "atx_h3_marker" => TokenCategory::Punctuation,
    "atx_h4_marker" => TokenCategory::Punctuation,
    "atx_h5_marker" => TokenCategory::Punctuation,
    "atx_h6_marker" => TokenCategory::Punctuation,
    "setext_h1_underline" => TokenCategory::Punctuation,
    "setext_h2_underline" => TokenCategory::Punctuation,
};

static C_KINDS: KindTable = phf::phf_map! {
    "#if" => TokenCategory::Directive,
    "#else" => TokenCategory::Directive,
    "#elif" => TokenCategory::Directive,
    "#endif" => TokenCategory::Directive,
    "#ifdef" => TokenCategory::Directive,
    "#ifndef" => TokenCategory::Directive,
    "#include" => TokenCategory::Directive,
    "#define" => TokenCategory::Directive,
    "preproc_arg" => TokenCategory::Directive,
    "preproc_directive" => TokenCategory::Directive,
    "typedef" => TokenCategory::Keyword,
    "sizeof" => TokenCategory::Keyword,
    "extern" => TokenCategory::Keyword,
    "register" => TokenCategory::Keyword,
    "volatile" => TokenCategory::Keyword,
    "goto" => TokenCategory::Keyword,
    "union" => TokenCategory::Keyword,
    "unsigned" => TokenCategory::Keyword,
    "signed" => TokenCategory::Keyword,
};

static GO_KINDS: KindTable = phf::phf_map! {
    "chan" => TokenCategory::Keyword,
    "range" => TokenCategory::Keyword,
    "select" => TokenCategory::Keyword,
    "defer" => TokenCategory::Keyword,
    "map" => TokenCategory::Keyword,
    "fallthrough" => TokenCategory::Keyword,
};

static RUST_KINDS: KindTable = phf::phf_map! {
    "doc_comment" => TokenCategory::Comment,
    "outer_doc_comment_marker" => TokenCategory::Comment,
    "inner_doc_comment_marker" => TokenCategory::Comment,
    "mutable_specifier" => TokenCategory::Keyword,
};

static PYTHON_KINDS: KindTable = phf::phf_map! {
    "elif" => TokenCategory::Keyword,
    "assert" => TokenCategory::Keyword,
    "global" => TokenCategory::Keyword,
    "nonlocal" => TokenCategory::Keyword,
    "del" => TokenCategory::Keyword,
    "decorator" => TokenCategory::Accessor,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    overrides: Option<&'static KindTable>,
}

impl Classifier {
    pub fn for_language(language: &str) -> Self {
        let overrides = match language {
            "markdown" => Some(&MARKDOWN_KINDS),
            "c" | "cpp" => Some(&C_KINDS),
            "go" => Some(&GO_KINDS),
            "python" => Some(&PYTHON_KINDS),
            "rust" => Some(&RUST_KINDS),
            _ => None,
        };

        Self { overrides }
    }

    pub fn lookup(&self, kind: &str) -> Option<TokenCategory> {
        self.overrides
            .and_then(|table| table.get(kind))
            .or_else(|| COMMON_KINDS.get(kind))
            .copied()
    }

    /// Total lookup: unmatched kinds come back as `(Plain, false)`.
    pub fn classify(&self, kind: &str) -> (TokenCategory, bool) {
        match self.lookup(kind) {
            Some(category) => (category, true),
            None => (TokenCategory::Plain, false),
        }
    }

    /// Classify by kind, retrying with the grammar name before settling on plain.
    pub fn classify_leaf(&self, kind: &str, grammar_name: &str) -> TokenCategory {
        self.lookup(kind)
            .or_else(|| self.lookup(grammar_name))
            .unwrap_or(TokenCategory::Plain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn classifier() -> Classifier {
        Classifier::default()
    }

    #[rstest]
    #[case("line_comment", TokenCategory::Comment)]
    #[case("/*", TokenCategory::Comment)]
    #[case("*/", TokenCategory::Comment)]
    #[case("raw_string_literal_content", TokenCategory::String)]
    #[case("raw_string_literal", TokenCategory::String)]
    #[case("\"", TokenCategory::String)]
    #[case("integer_literal", TokenCategory::Number)]
    #[case("true", TokenCategory::Number)]
    #[case("field_identifier", TokenCategory::Field)]
    #[case("identifier", TokenCategory::Identifier)]
    #[case("type_identifier", TokenCategory::Type)]
    #[case("primitive_type", TokenCategory::BuiltinType)]
    #[case("fn", TokenCategory::Keyword)]
    #[case("=>", TokenCategory::Operator)]
    #[case("::", TokenCategory::Punctuation)]
    #[case("(", TokenCategory::Punctuation)]
    fn test_classify_known_kinds(
        classifier: Classifier,
        #[case] kind: &str,
        #[case] expected: TokenCategory,
    ) {
        assert_eq!(classifier.classify(kind), (expected, true));
    }

    #[rstest]
    fn test_unknown_kind_is_plain_and_unmatched(classifier: Classifier) {
        assert_eq!(
            classifier.classify("some_node_nobody_heard_of"),
            (TokenCategory::Plain, false)
        );
    }

    #[rstest]
    fn test_grammar_name_fallback(classifier: Classifier) {
        // aliased kinds keep their grammar name
        assert_eq!(
            classifier.classify_leaf("aliased_thing", "string_content"),
            TokenCategory::String
        );
        assert_eq!(
            classifier.classify_leaf("identifier", "string_content"),
            TokenCategory::Identifier
        );
        assert_eq!(classifier.classify_leaf("???", "???"), TokenCategory::Plain);
    }

    #[rstest]
    #[case("go", "chan", TokenCategory::Keyword)]
    #[case("c", "#include", TokenCategory::Directive)]
    #[case("cpp", "#ifdef", TokenCategory::Directive)]
    #[case("markdown", "list_marker_minus", TokenCategory::ListMarker)]
    #[case("markdown", "link_destination", TokenCategory::Link)]
    #[case("python", "elif", TokenCategory::Keyword)]
    #[case("rust", "doc_comment", TokenCategory::Comment)]
    #[case("rust", "inner_doc_comment_marker", TokenCategory::Comment)]
    fn test_language_overrides(
        #[case] language: &str,
        #[case] kind: &str,
        #[case] expected: TokenCategory,
    ) {
        assert_eq!(Classifier::for_language(language).lookup(kind), Some(expected));
        assert_eq!(Classifier::default().lookup(kind), None);
    }

    #[test]
    fn test_overrides_fall_through_to_shared_table() {
        assert_eq!(
            Classifier::for_language("go").lookup("identifier"),
            Some(TokenCategory::Identifier)
        );
    }

    #[test]
    fn test_category_display() {
        assert_eq!(TokenCategory::BuiltinType.to_string(), "builtin-type");
        assert_eq!(TokenCategory::Bracket(3).to_string(), "bracket-3");
        assert_eq!(TokenCategory::Bracket(3).name(), "bracket");
    }
}
