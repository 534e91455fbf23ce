//! Quote orchestration
//!
//! Storage lines are billed for the whole stay (multiplied by months).
//! Fulfillment, additional items, and shipping are single-month figures; scaling
//! them by duration belongs to [`crate::summary`].

use logiquote_common::{
    CostBreakdown, Fulfillment, QuoteData, StorageLine, StorageType, ADDITIONAL_ITEM_FEE,
};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use super::{calculate_shipping_costs, get_fulfillment_rate, get_storage_rate};

/// Storage cost of one line over `months`; zero unless enabled with a positive volume
pub fn storage_cost(line: &StorageLine, storage_type: StorageType, months: Decimal) -> Decimal {
    if !line.is_active() {
        return Decimal::ZERO;
    }
    line.average_volume
        .saturating_mul(get_storage_rate(line.average_volume, storage_type))
        .saturating_mul(months)
}

/// Monthly fee for items beyond the first in each order
pub fn additional_items_cost(fulfillment: &Fulfillment) -> Decimal {
    if fulfillment.average_items_per_order <= Decimal::ONE {
        return Decimal::ZERO;
    }
    (fulfillment.average_items_per_order - Decimal::ONE)
        .saturating_mul(fulfillment.monthly_orders)
        .saturating_mul(ADDITIONAL_ITEM_FEE)
}

/// Calculate the cost breakdown for a quote
///
/// Total over its input: any combination of values yields a breakdown.
#[instrument(level = "debug", skip(data))]
pub fn calculate_quote(data: &QuoteData, include_vat: bool) -> CostBreakdown {
    let months = data.months();
    let warehousing = &data.warehousing;
    let fulfillment = &data.fulfillment;

    let ambient_storage = storage_cost(&warehousing.ambient_storage, StorageType::Ambient, months);
    let temp_controlled_storage = storage_cost(
        &warehousing.temp_controlled_storage,
        StorageType::TempControlled,
        months,
    );
    let fulfillment_cost =
        get_fulfillment_rate(fulfillment.monthly_orders, &fulfillment.parcel_size_distribution)
            .saturating_mul(fulfillment.monthly_orders);
    let additional_items = additional_items_cost(fulfillment);
    let shipping = calculate_shipping_costs(data);

    let costs = CostBreakdown::from_lines(
        ambient_storage,
        temp_controlled_storage,
        fulfillment_cost,
        additional_items,
        shipping,
        include_vat,
    );

    debug!(
        %months,
        subtotal = %costs.subtotal,
        vat = %costs.vat,
        total = %costs.total,
        "quote calculated"
    );
    costs
}
