// ABOUTME: Utility functions for slugs and error-body previews
// ABOUTME: Slug derivation is the natural key for pages, so it must be deterministic

pub fn slugify(text: &str) -> String {
    slug::slugify(text)
}

pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.len() <= max_chars {
        return s.to_string();
    }

    // Find a valid UTF-8 boundary at or before max_chars
    let mut boundary = max_chars;
    while boundary > 0 && !s.is_char_boundary(boundary) {
        boundary -= 1;
    }

    if boundary == 0 {
        return String::new();
    }

    format!("{}...", &s[..boundary])
}
