//! Emacs TAGS format parser.
//!
//! A TAGS file is a sequence of sections, each introduced by a form feed
//! line and a `<file>,<size>` header, followed by one line per definition:
//!
//! ```text
//! <definition text>\x7f<name>\x01<line>,<byte offset>
//! ```
//!
//! The `\x01<name>` part is optional; when absent the name is the last
//! identifier in the definition text.

use super::types::Tag;
use crate::error::{Result, TagdiffError};

const SEP_TAG: char = '\x7f';
const SEP_NAME: char = '\x01';
const SEP_COL: char = ',';

/// Parse etags output into tags.
///
/// Kind is the text of the definition before the name (e.g. `func`), and
/// signature the text after it with any trailing `{` removed.
pub fn parse_etags(output: &str) -> Result<Vec<Tag>> {
    let mut tags = Vec::new();
    let mut current_file: Option<String> = None;

    for line in output.lines() {
        if line.trim().is_empty() || line.starts_with('!') {
            continue;
        }

        let Some(tag_idx) = line.find(SEP_TAG) else {
            current_file = Some(parse_file_header(line)?);
            continue;
        };

        let Some(file) = &current_file else {
            return Err(TagdiffError::TagError(format!(
                "tags line parsing error: symbol before any file header, line was {:?}",
                line
            )));
        };

        let def = &line[..tag_idx];
        let rest = &line[tag_idx + SEP_TAG.len_utf8()..];

        let (name, position) = match rest.split_once(SEP_NAME) {
            Some((name, position)) => (name.to_string(), position),
            None => {
                let name = implicit_name(def).ok_or_else(|| {
                    TagdiffError::TagError(format!(
                        "tags line parsing error: no name in definition, line was {:?}",
                        line
                    ))
                })?;
                (name, rest)
            }
        };

        let Some((line_no, _byte_offset)) = position.split_once(SEP_COL) else {
            return Err(TagdiffError::TagError(format!(
                "tags line parsing error: could not find character {:?}, line was {:?}",
                SEP_COL, line
            )));
        };
        let line_no: i64 = line_no.parse().map_err(|_| {
            TagdiffError::TagError(format!(
                "tags line parsing error: could not parse line number, line was {:?}",
                line
            ))
        })?;

        let (kind, signature) = split_definition(def, &name);
        tags.push(Tag {
            file: file.clone(),
            name,
            kind,
            signature,
            line: line_no,
        });
    }

    Ok(tags)
}

/// Parse a `<file>,<size>` section header.
fn parse_file_header(line: &str) -> Result<String> {
    let (file, size) = line.rsplit_once(SEP_COL).ok_or_else(|| {
        TagdiffError::TagError(format!(
            "tags line parsing error: unrecognized format, line was {:?}",
            line
        ))
    })?;
    if size.parse::<u64>().is_err() {
        return Err(TagdiffError::TagError(format!(
            "tags line parsing error: invalid section size, line was {:?}",
            line
        )));
    }
    Ok(file.replace('\\', "/"))
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// The last identifier in `def`, used when the explicit name is omitted.
fn implicit_name(def: &str) -> Option<String> {
    let trimmed = def.trim_end_matches(|c: char| !is_ident_char(c));
    let start = trimmed
        .char_indices()
        .rev()
        .find(|&(_, c)| !is_ident_char(c))
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    let name = &trimmed[start..];
    (!name.is_empty()).then(|| name.to_string())
}

/// Split definition text around the first occurrence of `name`.
fn split_definition(def: &str, name: &str) -> (String, String) {
    match def.find(name) {
        Some(idx) => {
            let keyword = def[..idx].trim().to_string();
            let signature = def[idx + name.len()..]
                .trim()
                .trim_end_matches('{')
                .trim_end()
                .to_string();
            (keyword, signature)
        }
        None => (String::new(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_explicit_names() {
        let output = "\x0c\nmain.go,120\nfunc Foo(x int) error {\x7fFoo\x011,0\ntype Bar struct {\x7fBar\x017,60\n";

        let tags = parse_etags(output).unwrap();

        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0], Tag::new("main.go", "Foo", "func", "(x int) error", 1));
        assert_eq!(tags[1], Tag::new("main.go", "Bar", "type", "struct", 7));
    }

    #[test]
    fn test_parse_implicit_name() {
        let output = "\x0c\nlib.py,30\ndef handler(\x7f3,12\n";

        let tags = parse_etags(output).unwrap();

        assert_eq!(tags[0].name, "handler");
        assert_eq!(tags[0].kind, "def");
        assert_eq!(tags[0].signature, "(");
        assert_eq!(tags[0].line, 3);
    }

    #[test]
    fn test_parse_multiple_sections() {
        let output = "\x0c\na.go,10\nfunc A()\x7fA\x012,5\n\x0c\nb.go,10\nfunc B()\x7fB\x014,9\n";

        let tags = parse_etags(output).unwrap();

        assert_eq!(tags[0].file, "a.go");
        assert_eq!(tags[1].file, "b.go");
    }

    #[test]
    fn test_malformed_header_is_error() {
        let err = parse_etags("\x0c\nnot-a-header\n").unwrap_err();
        assert!(matches!(err, TagdiffError::TagError(_)));
    }

    #[test]
    fn test_bad_line_number_is_error() {
        let err = parse_etags("\x0c\na.go,10\nfunc A()\x7fA\x01x,5\n").unwrap_err();
        assert!(err.to_string().contains("could not parse line number"));
    }

    #[test]
    fn test_symbol_without_file_is_error() {
        assert!(parse_etags("func A()\x7fA\x012,5\n").is_err());
    }

    #[test]
    fn test_implicit_name_helper() {
        assert_eq!(implicit_name("func Foo("), Some("Foo".to_string()));
        assert_eq!(implicit_name("x = 1"), Some("1".to_string()));
        assert_eq!(implicit_name("(("), None);
    }
}
