//! Read-only rate card for pricing overview pages

use logiquote_common::{
    rates::{
        AMBIENT_STORAGE_TIERS, FULFILLMENT_TIERS, JT_SHIPPING_RATES,
        TEMP_CONTROLLED_STORAGE_TIERS,
    },
    FulfillmentTier, PricingTier, ShippingRateRow, ADDITIONAL_ITEM_FEE, CURRENCY, VAT_RATE,
};
use rust_decimal::Decimal;
use serde::Serialize;

/// Snapshot of every rate the engine prices with
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateCard {
    pub currency: &'static str,
    pub ambient_storage_tiers: &'static [PricingTier],
    pub temp_controlled_storage_tiers: &'static [PricingTier],
    pub fulfillment_tiers: &'static [FulfillmentTier],
    pub jt_shipping_rates: &'static [ShippingRateRow],
    pub additional_item_fee: Decimal,
    pub vat_rate: Decimal,
}

impl RateCard {
    pub fn current() -> Self {
        Self {
            currency: CURRENCY,
            ambient_storage_tiers: &AMBIENT_STORAGE_TIERS,
            temp_controlled_storage_tiers: &TEMP_CONTROLLED_STORAGE_TIERS,
            fulfillment_tiers: &FULFILLMENT_TIERS,
            jt_shipping_rates: &JT_SHIPPING_RATES,
            additional_item_fee: ADDITIONAL_ITEM_FEE,
            vat_rate: VAT_RATE,
        }
    }
}
