//! Title slugs for display and outbound links.

use deunicode::deunicode;

/// Normalize a display title into a compact lowercase slug.
///
/// Non-ASCII characters are transliterated, `&` becomes `and`, apostrophes
/// are dropped and every run of other non-word characters collapses into a
/// single `_`, including runs at either end of the title.
///
/// # Examples
///
/// ```
/// use screenscore_common::slug::format_title;
///
/// assert_eq!(format_title("Spider-Man: No Way Home"), "spider_man_no_way_home");
/// assert_eq!(format_title("Schindler's List"), "schindlers_list");
/// assert_eq!(format_title("Alien!"), "alien_");
/// ```
pub fn format_title(title: &str) -> String {
    let title = deunicode(title)
        .to_lowercase()
        .replace('&', "and")
        .replace('\'', "");

    let mut collapsed = String::with_capacity(title.len());
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            collapsed.push(ch);
        } else if !collapsed.ends_with(' ') {
            collapsed.push(' ');
        }
    }

    collapsed.replace(' ', "_")
}
