//! Dimension resolver
//!
//! Turns the dimensions of one posting row into the account display value and
//! the sales tax group pair, or decides that the row is skipped. The resolver
//! is built once per invocation from the configured template, tax group
//! dimension name and optional skip rule.

use crate::core::display_template::DisplayTemplate;
use crate::core::skip_rule::SkipRule;
use crate::core::traits::{ValueLookup, ValueLookupExt};
use crate::types::bank_statement::{find_dimension, Dimension};
use crate::types::{DimensionData, TransformError};

/// Conversion table for the sales tax group
pub const SALES_TAX_GROUP_TABLE: &str = "SalesTaxGroup";

/// Conversion table for the item sales tax group
pub const ITEM_SALES_TAX_GROUP_TABLE: &str = "ItemSalesTaxGroup";

/// Result of resolving one posting row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The row matches the skip rule and produces no output
    Skip,
    Resolved(DimensionData),
}

#[derive(Debug, Clone)]
pub struct DimensionResolver {
    template: DisplayTemplate,
    tax_group_dimension: String,
    skip_rule: Option<SkipRule>,
}

impl DimensionResolver {
    /// Build a resolver from configured text
    ///
    /// # Errors
    ///
    /// `TransformError::InvalidSkipRule` when `skip_rule` is present, non-empty
    /// and not of the form `name=value1;value2;...`.
    pub fn new(
        display_value_format: &str,
        tax_group_dimension: &str,
        skip_rule: Option<&str>,
    ) -> Result<Self, TransformError> {
        Ok(DimensionResolver {
            template: DisplayTemplate::parse(display_value_format),
            tax_group_dimension: tax_group_dimension.to_string(),
            skip_rule: SkipRule::parse_optional(skip_rule)?,
        })
    }

    /// Resolve one posting row
    ///
    /// Tax groups are converted through `lookup` with the tax group dimension
    /// value as key; each falls back to that raw value when the conversion
    /// table has no entry. A blank or absent tax group dimension yields no
    /// tax groups at all.
    pub fn resolve<L: ValueLookup + ?Sized>(
        &self,
        dimensions: &[Dimension],
        lookup: &L,
        partitions: &[&str],
    ) -> Resolution {
        if let Some(rule) = &self.skip_rule {
            if rule.matches(dimensions) {
                return Resolution::Skip;
            }
        }

        let account_display_value = self.template.render(dimensions);

        let (sales_tax_group, item_sales_tax_group) =
            match find_dimension(dimensions, &self.tax_group_dimension) {
                Some(tax_group) if !tax_group.trim().is_empty() => (
                    Some(lookup.convert_or_raw(SALES_TAX_GROUP_TABLE, tax_group, partitions)),
                    Some(lookup.convert_or_raw(ITEM_SALES_TAX_GROUP_TABLE, tax_group, partitions)),
                ),
                _ => (None, None),
            };

        Resolution::Resolved(DimensionData {
            account_display_value,
            sales_tax_group,
            item_sales_tax_group,
        })
    }
}
