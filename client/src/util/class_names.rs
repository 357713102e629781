//! Conditional CSS class composition.

#[cfg(test)]
#[path = "class_names_test.rs"]
mod class_names_test;

/// Join the enabled class fragments into a single `class` attribute value.
///
/// Each fragment is trimmed; disabled or blank fragments are skipped. Order is
/// preserved and duplicates are kept as given.
pub fn class_names<'a>(parts: impl IntoIterator<Item = (&'a str, bool)>) -> String {
    let mut out = String::new();
    for (part, enabled) in parts {
        let part = part.trim();
        if !enabled || part.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(part);
    }
    out
}
