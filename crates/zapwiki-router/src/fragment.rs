//! Encoding of the current slug in the location fragment

/// Separator marker followed by the leading path delimiter
pub const FRAGMENT_PREFIX: &str = "#/";

/// Location fragment for a slug, e.g. `#/dashboard`
pub fn fragment_for(slug: &str) -> String {
    format!("{}{}", FRAGMENT_PREFIX, slug)
}

/// Slug encoded in a location fragment
///
/// Strips the `#` marker and one leading `/`; an empty remainder means the
/// home slug.
pub fn slug_from_fragment(fragment: &str, home_slug: &str) -> String {
    let path = fragment.strip_prefix('#').unwrap_or(fragment);
    let slug = path.strip_prefix('/').unwrap_or(path);
    if slug.is_empty() {
        home_slug.to_string()
    } else {
        slug.to_string()
    }
}
