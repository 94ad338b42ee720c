/// URL slug for a title: ASCII-folded, lower-case, alphanumeric runs joined by `-`.
///
/// Applying it to its own output returns the same string. Two titles can map
/// to the same slug; nothing here makes slugs unique.
pub fn generate_slug(title: &str) -> String {
    slug::slugify(title)
}
