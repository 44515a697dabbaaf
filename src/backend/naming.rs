//! Identifier helpers shared by the synthesizers and the emitter.

use proc_macro2::{Ident, Span};
use quote::format_ident;

/// Strict and reserved Rust keywords (2024 edition).
const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern", "false", "fn",
    "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return", "self",
    "Self", "static", "struct", "super", "trait", "true", "type", "unsafe", "use", "where", "while", "abstract",
    "become", "box", "do", "final", "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Keywords that cannot be written as raw identifiers.
const NON_RAW_KEYWORDS: &[&str] = &["self", "Self", "super", "crate", "_"];

pub fn is_keyword(name: &str) -> bool {
    RUST_KEYWORDS.contains(&name)
}

/// Build an identifier, escaping keywords.
///
/// Keywords become raw identifiers (`r#type`); the few that cannot be raw get a trailing underscore.
pub fn ident(name: &str) -> Ident {
    let name = name.strip_prefix("r#").unwrap_or(name);
    if NON_RAW_KEYWORDS.contains(&name) {
        format_ident!("{}_", name)
    } else if is_keyword(name) {
        Ident::new_raw(name, Span::call_site())
    } else {
        format_ident!("{}", name)
    }
}

/// Build one segment of a type path. `self`, `Self`, `super` and `crate` are valid here as written.
pub fn path_ident(segment: &str) -> Ident {
    if NON_RAW_KEYWORDS.contains(&segment) && segment != "_" {
        Ident::new(segment, Span::call_site())
    } else {
        ident(segment)
    }
}

/// Convert a `snake_case` method name into `UpperCamelCase` for generated type names.
pub fn upper_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = true;
    for ch in name.trim_start_matches("r#").chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Convert an `UpperCamelCase` trait name into `snake_case` for field prefixes.
pub fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for ch in name.trim_start_matches("r#").chars() {
        if ch.is_uppercase() && prev_lower {
            out.push('_');
        }
        prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
        out.extend(ch.to_lowercase());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_camel() {
        assert_eq!(upper_camel("get"), "Get");
        assert_eq!(upper_camel("get_all_records"), "GetAllRecords");
        assert_eq!(upper_camel("r#type"), "Type");
        assert_eq!(upper_camel("Fetch"), "Fetch");
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(snake_case("Closer"), "closer");
        assert_eq!(snake_case("ReadCloser"), "read_closer");
        assert_eq!(snake_case("HTTPConn"), "httpconn");
        assert_eq!(snake_case("Store2Sync"), "store2_sync");
    }

    #[test]
    fn test_ident_escapes_keywords() {
        assert_eq!(ident("key").to_string(), "key");
        assert_eq!(ident("type").to_string(), "r#type");
        assert_eq!(ident("r#match").to_string(), "r#match");
        assert_eq!(ident("self").to_string(), "self_");
    }

    #[test]
    fn test_path_ident_keeps_path_keywords() {
        assert_eq!(path_ident("crate").to_string(), "crate");
        assert_eq!(path_ident("Self").to_string(), "Self");
        assert_eq!(path_ident("Record").to_string(), "Record");
        assert_eq!(path_ident("type").to_string(), "r#type");
    }
}
