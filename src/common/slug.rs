// src/common/slug.rs
//! Company code derivation
//!
//! Company codes are slugs computed server-side from the display name at
//! creation time: lowercase ASCII alphanumerics separated by single hyphens.

const MAX_CODE_LEN: usize = 40;

/// Turn a display name into a URL-safe lowercase hyphenated code.
///
/// Runs of non-alphanumeric ASCII collapse into one hyphen; the result never
/// starts or ends with a hyphen and is capped at `MAX_CODE_LEN` bytes.
pub fn slugify(name: &str) -> String {
    let mut code = String::with_capacity(name.len());

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            code.push(ch.to_ascii_lowercase());
        } else if ch.is_ascii() && !code.is_empty() && !code.ends_with('-') {
            code.push('-');
        }
        // Non-ASCII characters are skipped entirely.
    }

    if code.len() > MAX_CODE_LEN {
        code.truncate(MAX_CODE_LEN);
    }

    while code.ends_with('-') {
        code.pop();
    }

    code
}
