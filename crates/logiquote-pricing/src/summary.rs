//! Presentation helpers
//!
//! The engine reports storage for the whole stay but fulfillment, additional
//! items, and shipping for a single month. [`QuoteSummary`] derives the two views
//! the quote builder shows from one engine result.

use logiquote_common::{round_money, saturating_div, CostBreakdown};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monthly and whole-stay views of a quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummary {
    /// Storage duration the views were built with
    pub months: Decimal,
    pub include_vat: bool,
    /// Cost of one month, storage included
    pub monthly: CostBreakdown,
    /// Cost of the whole stay
    pub total: CostBreakdown,
}

impl QuoteSummary {
    /// Build both views from an engine result; zero `months` means one month
    pub fn new(costs: &CostBreakdown, months: Decimal, include_vat: bool) -> Self {
        let months = if months.is_zero() { Decimal::ONE } else { months };

        let monthly = CostBreakdown::from_lines(
            saturating_div(costs.ambient_storage, months),
            saturating_div(costs.temp_controlled_storage, months),
            costs.fulfillment,
            costs.additional_items,
            costs.shipping,
            include_vat,
        );
        let total = CostBreakdown::from_lines(
            costs.ambient_storage,
            costs.temp_controlled_storage,
            costs.fulfillment.saturating_mul(months),
            costs.additional_items.saturating_mul(months),
            costs.shipping.saturating_mul(months),
            include_vat,
        );

        Self {
            months,
            include_vat,
            monthly,
            total,
        }
    }
}

/// Format an amount as pesos, e.g. `₱52,500.00`
pub fn format_php(amount: Decimal) -> String {
    let rounded = round_money(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let digits = rounded.abs().to_string();
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}₱{grouped}.{fraction}")
}
