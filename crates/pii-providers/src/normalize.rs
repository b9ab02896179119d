//! Field-name normalization and alias delimiter variants.
//!
//! Observed field names come in many spellings of the same phrase:
//! `user name`, `user_name`, `user-name`, `userName`. The registry
//! keys every alias by its normalized form, which makes lookup
//! delimiter-insensitive without storing each variant separately.

/// Normalize a field name or alias: trim, case-fold, split camelCase
/// boundaries, and collapse space/underscore/hyphen runs into single
/// spaces.
///
/// `userName`, `User-Name`, and `user_name` all normalize to
/// `user name`.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_lower = false;
    let mut prev_space = true; // suppress leading separators
    for c in text.trim().chars() {
        if c == ' ' || c == '_' || c == '-' || c == '.' {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !prev_space {
            out.push(' ');
        }
        for lc in c.to_lowercase() {
            out.push(lc);
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        prev_space = false;
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out
}

/// Derive the delimiter variants of a spaced alias: underscore-joined,
/// hyphen-joined, and camel-joined. Aliases without spaces have no
/// variants.
///
/// All variants normalize back to the original alias, so they resolve
/// to the same provider.
pub fn delimiter_variants(alias: &str) -> Vec<String> {
    if !alias.contains(' ') {
        return Vec::new();
    }
    let words: Vec<&str> = alias.split_whitespace().collect();
    let camel: String = words
        .iter()
        .enumerate()
        .map(|(i, w)| {
            if i == 0 {
                w.to_string()
            } else {
                let mut chars = w.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        })
        .collect();
    vec![words.join("_"), words.join("-"), camel]
}
