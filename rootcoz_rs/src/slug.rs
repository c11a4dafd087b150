//! URL-fragment identifiers derived from FAQ questions.

/// Lowercases `text` and collapses every run of characters outside
/// `[a-z0-9]` into a single `-`. Leading and trailing dashes are dropped so
/// `"Is there a free trial?"` becomes `is-there-a-free-trial`.
///
/// Two questions that normalize identically share a slug; the first one in
/// catalog order wins on lookup.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for ch in text.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Strips the leading `#` a `location.hash` value carries.
pub fn fragment_slug(fragment: &str) -> &str {
    fragment.strip_prefix('#').unwrap_or(fragment)
}
