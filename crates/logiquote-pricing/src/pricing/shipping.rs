//! Shipping cost aggregation
//!
//! Weight band and delivery zone are treated as independent: each band's cost is
//! the zone-weighted average of its two rates, and the bands are then weighted
//! by the weight distribution.

use logiquote_common::{rates::JT_SHIPPING_RATES, saturating_sum, QuoteData, Shipping};
use rust_decimal::Decimal;
use tracing::trace;

use super::PERCENT;

/// Blended shipping cost of a single order
pub fn average_shipping_cost_per_order(shipping: &Shipping) -> Decimal {
    let zones = &shipping.location_distribution;

    saturating_sum(JT_SHIPPING_RATES.iter().map(|row| {
        let metro = row.metro_manila.saturating_mul(zones.metro_manila) / PERCENT;
        let outside = row.outside_metro_manila.saturating_mul(zones.outside_metro_manila) / PERCENT;
        let band_cost = metro.saturating_add(outside);
        band_cost.saturating_mul(shipping.weight_distribution.share(row.weight)) / PERCENT
    }))
}

/// Monthly shipping cost for a quote
///
/// Zero when shipping is absent, disabled, or has no monthly orders.
pub fn calculate_shipping_costs(data: &QuoteData) -> Decimal {
    let Some(shipping) = data
        .shipping
        .as_ref()
        .filter(|shipping| shipping.enabled && !shipping.monthly_orders.is_zero())
    else {
        return Decimal::ZERO;
    };

    let per_order = average_shipping_cost_per_order(shipping);
    trace!(%per_order, monthly_orders = %shipping.monthly_orders, "shipping cost blended");
    per_order.saturating_mul(shipping.monthly_orders)
}
