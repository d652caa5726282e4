//! Lexical patterns and the ignore list.

/// Identifier immediately followed by an opening parenthesis.
pub const CALL_PATTERN: &str = r"([A-Za-z_][A-Za-z0-9_]*)\(";

/// Capitalized word immediately following a markup `<`.
pub const MARKUP_PATTERN: &str = r"<([A-Z][A-Za-z0-9_]*)";

/// Tokens that look like references but are language keywords, builtins,
/// built-in type names or placeholders.
pub const DEFAULT_IGNORE: &[&str] = &[
    // control keywords that precede a parenthesis
    "if", "for", "switch", "while", "catch", "return", "func", "function", "go", "defer",
    "select", "range", "case", "typeof", "sizeof", "super", "await",
    // Go builtins
    "append", "cap", "close", "complex", "copy", "delete", "imag", "len", "make", "new",
    "panic", "print", "println", "real", "recover", "require",
    // built-in type names and conversions, with their capitalized variants
    "any", "bool", "byte", "rune", "error", "Error", "string", "String", "int", "int8",
    "int16", "int32", "int64", "uint", "uint8", "uint16", "uint32", "uint64", "uintptr",
    "float32", "float64", "complex64", "complex128", "map", "chan", "struct", "interface",
    "Number", "Boolean", "Object", "Array", "Promise", "Symbol",
    // placeholders
    "TODO", "FIXME", "XXX", "T", "_",
];
