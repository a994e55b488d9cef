//! Cypher identifier quoting
//!
//! Label names, relationship types and the configured id property are
//! interpolated into statement text as identifiers, not parameters, so the
//! core escapes them itself rather than trusting the caller.

use crate::events::Label;

/// Prefix every batched statement iterates the parameter list with
pub const UNWIND: &str = "UNWIND $events AS event";

/// Quote a string for use as a Cypher identifier
///
/// Plain identifiers (letter or underscore, then letters, digits or
/// underscores) pass through untouched; anything else is wrapped in
/// backticks with embedded backticks doubled.
pub fn quote(ident: &str) -> String {
    let mut chars = ident.chars();
    let plain = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };
    if plain {
        ident.to_string()
    } else {
        format!("`{}`", ident.replace('`', "``"))
    }
}

/// Render a label set as a `A:B:C` fragment with each label quoted
pub fn labels_as_string<'a>(labels: impl IntoIterator<Item = &'a Label>) -> String {
    labels
        .into_iter()
        .map(|label| quote(label.as_str()))
        .collect::<Vec<_>>()
        .join(":")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_identifiers_pass_through() {
        assert_eq!(quote("sourceId"), "sourceId");
        assert_eq!(quote("Source_Event2"), "Source_Event2");
        assert_eq!(quote("_hidden"), "_hidden");
    }

    #[test]
    fn test_non_identifiers_are_backticked() {
        assert_eq!(quote("Source Event"), "`Source Event`");
        assert_eq!(quote("2fast"), "`2fast`");
        assert_eq!(quote(""), "``");
        assert_eq!(quote("weird`name"), "`weird``name`");
    }

    #[test]
    fn test_labels_as_string() {
        let labels = vec![Label::new("Person"), Label::new("Has Space")];
        assert_eq!(labels_as_string(&labels), "Person:`Has Space`");
    }
}
