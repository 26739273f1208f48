//! Row skip rule
//!
//! A skip rule has the form `name=value1;value2;...`: a posting row is
//! skipped when its first dimension called `name` has a non-empty value that
//! equals one of the listed values.

use crate::types::bank_statement::{find_dimension, Dimension};
use crate::types::TransformError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipRule {
    dimension: String,
    values: Vec<String>,
}

impl SkipRule {
    /// Parse a rule
    ///
    /// # Errors
    ///
    /// `TransformError::InvalidSkipRule` unless the text splits on `=` into
    /// exactly two parts.
    pub fn parse(rule: &str) -> Result<Self, TransformError> {
        let mut parts = rule.split('=');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(dimension), Some(values), None) => Ok(SkipRule {
                dimension: dimension.to_string(),
                values: values.split(';').map(str::to_string).collect(),
            }),
            _ => Err(TransformError::invalid_skip_rule(rule)),
        }
    }

    /// Parse an optional setting; absent or empty text means "never skip"
    pub fn parse_optional(rule: Option<&str>) -> Result<Option<Self>, TransformError> {
        match rule {
            Some(text) if !text.is_empty() => Self::parse(text).map(Some),
            _ => Ok(None),
        }
    }

    pub fn dimension(&self) -> &str {
        &self.dimension
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn matches(&self, dimensions: &[Dimension]) -> bool {
        match find_dimension(dimensions, &self.dimension) {
            Some(value) if !value.is_empty() => self.values.iter().any(|v| v == value),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parse_valid_rule() {
        let rule = SkipRule::parse("Dept=CLOSED;ARCHIVED").unwrap();
        assert_eq!(rule.dimension(), "Dept");
        assert_eq!(rule.values(), ["CLOSED", "ARCHIVED"]);
    }

    #[rstest]
    #[case::three_parts("A=B=C")]
    #[case::no_separator("Dept")]
    #[case::trailing_equals("Dept=X=")]
    fn test_parse_rejects_malformed(#[case] text: &str) {
        assert_eq!(
            SkipRule::parse(text),
            Err(TransformError::invalid_skip_rule(text))
        );
    }

    #[rstest]
    #[case::absent(None)]
    #[case::empty(Some(""))]
    fn test_parse_optional_disabled(#[case] text: Option<&str>) {
        assert_eq!(SkipRule::parse_optional(text), Ok(None));
    }

    #[test]
    fn test_parse_optional_propagates_errors() {
        assert!(SkipRule::parse_optional(Some("A=B=C")).is_err());
    }

    #[rstest]
    #[case::listed_first(vec![Dimension::new("Dept", "CLOSED")], true)]
    #[case::listed_second(vec![Dimension::new("Dept", "ARCHIVED")], true)]
    #[case::not_listed(vec![Dimension::new("Dept", "OPEN")], false)]
    #[case::partial_value(vec![Dimension::new("Dept", "CLOSE")], false)]
    #[case::case_differs(vec![Dimension::new("Dept", "closed")], false)]
    #[case::absent(vec![Dimension::new("Cost", "CLOSED")], false)]
    #[case::first_match_only(
        vec![Dimension::new("Dept", "OPEN"), Dimension::new("Dept", "CLOSED")],
        false
    )]
    fn test_matches(#[case] dimensions: Vec<Dimension>, #[case] expected: bool) {
        let rule = SkipRule::parse("Dept=CLOSED;ARCHIVED").unwrap();
        assert_eq!(rule.matches(&dimensions), expected);
    }

    #[test]
    fn test_empty_value_never_matches() {
        // "Dept=;X" lists the empty string, but empty dimension values never skip
        let rule = SkipRule::parse("Dept=;X").unwrap();
        assert!(!rule.matches(&[Dimension::new("Dept", "")]));
        assert!(rule.matches(&[Dimension::new("Dept", "X")]));
    }
}
