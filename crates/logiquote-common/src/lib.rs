//! # LogiQuote Common
//!
//! Shared types, static rate tables, and errors for the LogiQuote pricing engine.
//!
//! ## Core Types
//!
//! - [`QuoteData`]: warehousing, fulfillment, and optional shipping inputs
//! - [`CostBreakdown`]: itemized monthly cost lines, subtotal, VAT, and total
//! - [`PricingTier`]/[`FulfillmentTier`]/[`ShippingRateRow`]: rate table rows
//!
//! ## Rate Tables
//!
//! - [`rates::AMBIENT_STORAGE_TIERS`]: ambient storage, per CBM per month
//! - [`rates::TEMP_CONTROLLED_STORAGE_TIERS`]: temperature-controlled storage
//! - [`rates::FULFILLMENT_TIERS`]: per-order pick/pack rates by parcel size
//! - [`rates::JT_SHIPPING_RATES`]: flat per-order shipping by weight and zone

pub mod error;
pub mod money;
pub mod rates;
pub mod types;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// Re-export commonly used types at crate root
pub use error::{QuoteError, Result, ValidationIssue};
pub use money::{round_money, saturating_div, saturating_sum};
pub use types::{
    breakdown::CostBreakdown,
    quote::{
        Fulfillment, LocationDistribution, ParcelSize, ParcelSizeDistribution, QuoteData,
        Shipping, StorageLine, Warehousing, WeightDistribution,
    },
    tiers::{FulfillmentTier, PricingTier, ShippingRateRow, StorageType, WeightBand},
};

/// LogiQuote version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// ISO currency code of every amount the engine produces
pub const CURRENCY: &str = "PHP";

/// VAT rate applied to the subtotal when VAT is included (12%)
pub const VAT_RATE: Decimal = dec!(0.12);

/// Flat fee per item beyond the first in each order
pub const ADDITIONAL_ITEM_FEE: Decimal = dec!(5.00);

/// Decimal places every reported amount is rounded to
pub const MONEY_DP: u32 = 2;

/// Days a generated quote stays valid
pub const QUOTE_VALIDITY_DAYS: i64 = 30;
