//! Account display value templates
//!
//! A template such as `{MainAccount}-{Department}` names dimensions in curly
//! braces; everything else is copied literally, so any separator works.
//! A placeholder runs from `{` to the next `}` and may not contain another
//! `{`. Unmatched braces are literal text.

use crate::types::bank_statement::{find_dimension, Dimension};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTemplate {
    segments: Vec<Segment>,
}

impl DisplayTemplate {
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            let after_open = &rest[open + 1..];
            let close = match after_open.find('}') {
                Some(close) => close,
                None => break,
            };
            let token = &after_open[..close];

            if let Some(nested) = token.rfind('{') {
                // "{{A}": the earlier braces are literal, the innermost pair is the placeholder
                literal.push_str(&rest[..open + 1 + nested]);
                rest = &after_open[nested..];
                continue;
            }

            literal.push_str(&rest[..open]);
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Placeholder(token.to_string()));
            rest = &after_open[close + 1..];
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        DisplayTemplate { segments }
    }

    /// Dimension names referenced by the template, in order of appearance
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Substitute dimension values; missing dimensions render as empty
    pub fn render(&self, dimensions: &[Dimension]) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => {
                    out.push_str(find_dimension(dimensions, name).unwrap_or_default())
                }
            }
        }
        out
    }
}
