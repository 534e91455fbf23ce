//! Fulfillment rate blending

use logiquote_common::{
    rates::FULFILLMENT_TIERS, saturating_sum, FulfillmentTier, ParcelSize, ParcelSizeDistribution,
};
use rust_decimal::Decimal;
use tracing::trace;

use super::PERCENT;

/// Fulfillment band for a monthly order volume
///
/// Each band's ceiling is inclusive and there is no floor, so zero or negative
/// volumes land in the first band.
pub fn fulfillment_tier(monthly_orders: Decimal) -> &'static FulfillmentTier {
    let last = &FULFILLMENT_TIERS[FULFILLMENT_TIERS.len() - 1];
    FULFILLMENT_TIERS
        .iter()
        .find(|tier| tier.covers(monthly_orders))
        .unwrap_or(last)
}

/// Per-order fulfillment rate weighted by the parcel size distribution
///
/// The distribution is not normalized: percentages summing below 100 scale the
/// rate down proportionally.
pub fn get_fulfillment_rate(
    monthly_orders: Decimal,
    distribution: &ParcelSizeDistribution,
) -> Decimal {
    let tier = fulfillment_tier(monthly_orders);
    let rate = saturating_sum(
        ParcelSize::ALL
            .iter()
            .map(|size| tier.rate(*size).saturating_mul(distribution.share(*size)) / PERCENT),
    );

    trace!(%monthly_orders, band = tier.order_range, %rate, "fulfillment rate blended");
    rate
}
