// SPDX-License-Identifier: MPL-2.0
//! Delimited locator lists exchanged with the product form.
//!
//! The hidden form field carries stored image locators as a single string
//! joined by [`DELIMITER`]. Locators themselves must not contain the delimiter.

/// Separator between locators in the form field.
pub const DELIMITER: char = ',';

/// Splits a form field value into locators, in order.
///
/// Segments are trimmed and empty segments are dropped, so an empty or
/// whitespace-only value yields no locators.
pub fn split(value: &str) -> Vec<String> {
    value
        .split(DELIMITER)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins locators into a form field value.
pub fn join<I, S>(locators: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut value = String::new();
    for (index, locator) in locators.into_iter().enumerate() {
        if index > 0 {
            value.push(DELIMITER);
        }
        value.push_str(locator.as_ref());
    }
    value
}

/// Stands in for [`DELIMITER`] inside placeholder file names.
const DELIMITER_REPLACEMENT: char = '_';

/// Placeholder locator for a file that has no storage location yet.
///
/// Delimiters in `file_name` are replaced so the placeholder stays a single
/// locator in the joined field.
pub fn placeholder(prefix: &str, file_name: &str) -> String {
    let file_name = file_name.replace(DELIMITER, &DELIMITER_REPLACEMENT.to_string());
    format!("{prefix}{file_name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_empty_value_yields_nothing() {
        assert!(split("").is_empty());
        assert!(split("   ").is_empty());
    }

    #[test]
    fn split_preserves_order() {
        assert_eq!(split("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn split_trims_and_skips_empty_segments() {
        assert_eq!(
            split(" /static/images/1.jpg , ,/static/images/2.jpg,"),
            vec!["/static/images/1.jpg", "/static/images/2.jpg"]
        );
    }

    #[test]
    fn join_uses_delimiter_without_trailing_separator() {
        assert_eq!(join(["x", "y", "z"]), "x,y,z");
        assert_eq!(join(Vec::<String>::new()), "");
    }

    #[test]
    fn placeholder_prepends_prefix() {
        assert_eq!(placeholder("/static/images/", "a.png"), "/static/images/a.png");
    }

    #[test]
    fn placeholder_replaces_delimiter_in_file_name() {
        let locator = placeholder("/static/images/", "front, left.png");
        assert_eq!(locator, "/static/images/front_ left.png");
        assert_eq!(split(&locator).len(), 1);
    }
}
