//! Directory filter expressions.
//!
//! Cognito accepts filters of the form `attribute = "value"`. The value is
//! interpolated verbatim: a candidate containing `"` yields an expression the
//! directory rejects, which surfaces as an `InvalidFilter` lookup failure.

use std::fmt;

use super::CandidateEmail;

const EMAIL_ATTRIBUTE: &str = "email";

/// A single-attribute filter expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFilter(String);

impl UserFilter {
    /// Exact match on the `email` attribute.
    ///
    /// # Examples
    /// ```
    /// use presignup::domain::{CandidateEmail, UserFilter};
    ///
    /// let filter = UserFilter::email_equals(&CandidateEmail::new("a@x.com"));
    /// assert_eq!(filter.as_str(), r#"email = "a@x.com""#);
    /// ```
    pub fn email_equals(email: &CandidateEmail) -> Self {
        Self(format!("{EMAIL_ATTRIBUTE} = \"{email}\""))
    }

    /// The expression as sent to the directory.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Split a well-formed equality filter into `(attribute, value)`.
    ///
    /// Returns `None` when the quoted value itself contains a quote, i.e. when
    /// the interpolated candidate broke the expression.
    pub fn equality(&self) -> Option<(&str, &str)> {
        let (attribute, quoted) = self.0.split_once(" = ")?;
        let value = quoted.strip_prefix('"')?.strip_suffix('"')?;
        if attribute.is_empty() || value.contains('"') {
            return None;
        }
        Some((attribute, value))
    }
}

impl AsRef<str> for UserFilter {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UserFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("a@x.com", r#"email = "a@x.com""#)]
    #[case::case_preserved("A.B@X.COM", r#"email = "A.B@X.COM""#)]
    #[case::quote_not_escaped(r#"a"b@x.com"#, r#"email = "a"b@x.com""#)]
    #[case::backslash_not_escaped(r"a\b@x.com", r#"email = "a\b@x.com""#)]
    #[case::empty("", r#"email = """#)]
    fn embeds_candidate_verbatim(#[case] email: &str, #[case] expected: &str) {
        let filter = UserFilter::email_equals(&CandidateEmail::new(email));
        assert_eq!(filter.as_str(), expected);
    }

    #[test]
    fn well_formed_filter_splits_into_attribute_and_value() {
        let filter = UserFilter::email_equals(&CandidateEmail::new("a@x.com"));
        assert_eq!(filter.equality(), Some(("email", "a@x.com")));
    }

    #[test]
    fn quote_in_candidate_breaks_the_expression() {
        let filter = UserFilter::email_equals(&CandidateEmail::new(r#"a"b@x.com"#));
        assert_eq!(filter.equality(), None);
    }
}
