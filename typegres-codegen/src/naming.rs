//! Identifier naming transforms.
//!
//! These are deliberately narrow rules, not general-purpose casing helpers:
//! only an underscore followed by a lowercase ASCII letter collapses when
//! casing, the first character is case-flipped independently, and
//! `pluralize` knows a single suffix rule with no irregular-plural table.

/// Convert to PascalCase: "hello_world" -> "HelloWorld".
///
/// Digits, doubled underscores, and a leading underscore pass through
/// unchanged.
pub fn pascal_case(name: &str) -> String {
    cased(name, true)
}

/// Convert to camelCase: "hello_world" -> "helloWorld".
pub fn camel_case(name: &str) -> String {
    cased(name, false)
}

/// Convert to snake_case: "helloWorld" -> "hello_world". Inverse of the
/// camel/pascal rule.
pub fn snake_case(name: &str) -> String {
    let mut chars = name.chars();
    let mut out = String::with_capacity(name.len());
    if let Some(first) = chars.next() {
        out.extend(first.to_lowercase());
    }
    for c in chars {
        if c.is_uppercase() {
            out.push('_');
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Strip a trailing `_id`. Used when deriving a one-to-one field name from a
/// foreign-key column, before any case transform.
pub fn remove_id(name: &str) -> &str {
    name.strip_suffix("_id").unwrap_or(name)
}

/// Naive English pluralization: sibilant endings get "es", everything else
/// gets "s".
pub fn pluralize(name: &str) -> String {
    const ES_SUFFIXES: [&str; 5] = ["z", "x", "ch", "sh", "s"];
    if ES_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) {
        format!("{}es", name)
    } else {
        format!("{}s", name)
    }
}

fn cased(name: &str, upper_first: bool) -> String {
    let mut chars = name.chars();
    let mut out = String::with_capacity(name.len());
    if let Some(first) = chars.next() {
        if upper_first {
            out.extend(first.to_uppercase());
        } else {
            out.extend(first.to_lowercase());
        }
    }
    let mut rest = chars.peekable();
    while let Some(c) = rest.next() {
        if c == '_' {
            match rest.peek() {
                Some(&next) if next.is_ascii_lowercase() => {
                    out.push(next.to_ascii_uppercase());
                    rest.next();
                }
                _ => out.push(c),
            }
        } else {
            out.push(c);
        }
    }
    out
}
