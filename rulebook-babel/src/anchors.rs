//! Anchor names and annex letters derived from heading titles.

/// Lower-cased title with spaces replaced by hyphens. Nothing else is touched.
pub fn anchor(title: &str) -> String {
    title.to_lowercase().replace(' ', "-")
}

pub fn annex_anchor(title: &str) -> String {
    format!("annex-{}", anchor(title))
}

/// `A` for the first annex, `B` for the second, and so on up the code point range.
pub fn annex_letter(index: usize) -> String {
    u32::try_from(index)
        .ok()
        .and_then(|i| i.checked_add('A' as u32))
        .and_then(char::from_u32)
        .map(String::from)
        .unwrap_or_default()
}
