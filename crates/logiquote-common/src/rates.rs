//! Static rate tables
//!
//! Process-wide, read-only reference data. Amounts are PHP.

use rust_decimal_macros::dec;

use crate::types::tiers::{FulfillmentTier, PricingTier, ShippingRateRow, StorageType, WeightBand};

/// Ambient storage, per CBM per month
pub static AMBIENT_STORAGE_TIERS: [PricingTier; 5] = [
    PricingTier::new(dec!(1), Some(dec!(25)), dec!(650)),
    PricingTier::new(dec!(26), Some(dec!(50)), dec!(625)),
    PricingTier::new(dec!(51), Some(dec!(100)), dec!(600)),
    PricingTier::new(dec!(101), Some(dec!(200)), dec!(575)),
    PricingTier::new(dec!(201), None, dec!(550)),
];

/// Temperature-controlled storage, per CBM per month
pub static TEMP_CONTROLLED_STORAGE_TIERS: [PricingTier; 5] = [
    PricingTier::new(dec!(1), Some(dec!(25)), dec!(750)),
    PricingTier::new(dec!(26), Some(dec!(50)), dec!(725)),
    PricingTier::new(dec!(51), Some(dec!(100)), dec!(700)),
    PricingTier::new(dec!(101), Some(dec!(200)), dec!(675)),
    PricingTier::new(dec!(201), None, dec!(650)),
];

/// Per-order fulfillment rates, banded by monthly order volume
pub static FULFILLMENT_TIERS: [FulfillmentTier; 5] = [
    FulfillmentTier {
        order_range: "0 - 1,000",
        max_orders: Some(dec!(1000)),
        small: dec!(30),
        medium: dec!(35),
        large: dec!(40),
        bulky: dec!(50),
    },
    FulfillmentTier {
        order_range: "1,001 - 5,000",
        max_orders: Some(dec!(5000)),
        small: dec!(25),
        medium: dec!(30),
        large: dec!(35),
        bulky: dec!(45),
    },
    FulfillmentTier {
        order_range: "5,001 - 10,000",
        max_orders: Some(dec!(10000)),
        small: dec!(20),
        medium: dec!(25),
        large: dec!(30),
        bulky: dec!(40),
    },
    FulfillmentTier {
        order_range: "10,001 - 20,000",
        max_orders: Some(dec!(20000)),
        small: dec!(17.5),
        medium: dec!(22.5),
        large: dec!(27.5),
        bulky: dec!(37.5),
    },
    FulfillmentTier {
        order_range: "20,001+",
        max_orders: None,
        small: dec!(15),
        medium: dec!(20),
        large: dec!(25),
        bulky: dec!(35),
    },
];

/// J&T flat shipping rates per order. Parcels over 7 kg are not priced.
pub static JT_SHIPPING_RATES: [ShippingRateRow; 5] = [
    ShippingRateRow {
        weight: WeightBand::UpTo1Kg,
        metro_manila: dec!(85),
        outside_metro_manila: dec!(95),
    },
    ShippingRateRow {
        weight: WeightBand::UpTo2Kg,
        metro_manila: dec!(115),
        outside_metro_manila: dec!(125),
    },
    ShippingRateRow {
        weight: WeightBand::UpTo3Kg,
        metro_manila: dec!(155),
        outside_metro_manila: dec!(165),
    },
    ShippingRateRow {
        weight: WeightBand::UpTo5Kg,
        metro_manila: dec!(225),
        outside_metro_manila: dec!(245),
    },
    ShippingRateRow {
        weight: WeightBand::UpTo7Kg,
        metro_manila: dec!(305),
        outside_metro_manila: dec!(325),
    },
];

/// Tier table for a storage product line
pub fn storage_tiers(storage_type: StorageType) -> &'static [PricingTier] {
    match storage_type {
        StorageType::Ambient => &AMBIENT_STORAGE_TIERS,
        StorageType::TempControlled => &TEMP_CONTROLLED_STORAGE_TIERS,
    }
}
