//! Plain-text extraction helpers.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Anything from `<` to the next `>`. Not an HTML parser: a stray `<` with
/// no closing `>` is left in place, and `a < b > c` loses ` b `.
static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Remove inline markup tags from text.
///
/// Borrows the input when it contains no tags.
///
/// # Examples
///
/// ```
/// use grove_search::strip_tags;
///
/// assert_eq!(strip_tags("Use <code>air</code> for reload."), "Use air for reload.");
/// assert_eq!(strip_tags("1 < 2"), "1 < 2");
/// ```
#[must_use]
pub fn strip_tags(text: &str) -> Cow<'_, str> {
    TAG_PATTERN.replace_all(text, "")
}
