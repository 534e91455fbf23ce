//! Pricing module
//!
//! Pure, synchronous cost calculation:
//! - Tiered storage rates by volume
//! - Weighted fulfillment rates across parcel sizes
//! - Weighted shipping cost across weight bands and delivery zones
//! - Top-level quote orchestration with optional VAT

pub mod engine;
pub mod fulfillment;
pub mod shipping;
pub mod storage;

pub use engine::{additional_items_cost, calculate_quote, storage_cost};
pub use fulfillment::{fulfillment_tier, get_fulfillment_rate};
pub use shipping::{average_shipping_cost_per_order, calculate_shipping_costs};
pub use storage::{get_storage_rate, storage_tier};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Percentages are expressed out of 100
pub(crate) const PERCENT: Decimal = dec!(100);
