//! Rate table row types
//!
//! Every banded table is contiguous, sorted ascending, and ends with exactly one
//! unbounded row. The unbounded upper limit is modelled as `None` rather than a
//! sentinel value.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::quote::ParcelSize;

/// A volume band mapped to a per-CBM monthly rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingTier {
    /// Inclusive lower bound
    pub min: Decimal,
    /// Inclusive upper bound; `None` for the final, unbounded tier
    pub max: Option<Decimal>,
    pub rate: Decimal,
}

impl PricingTier {
    pub const fn new(min: Decimal, max: Option<Decimal>, rate: Decimal) -> Self {
        Self { min, max, rate }
    }

    /// Whether `volume` falls inside this band
    pub fn contains(&self, volume: Decimal) -> bool {
        volume >= self.min && self.max.map_or(true, |max| volume <= max)
    }

    pub fn is_unbounded(&self) -> bool {
        self.max.is_none()
    }
}

/// Storage product lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StorageType {
    Ambient,
    TempControlled,
}

/// Per-order fulfillment rates for one monthly order-volume band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FulfillmentTier {
    /// Display label for the band, e.g. "1,001 - 5,000"
    pub order_range: &'static str,
    /// Inclusive upper bound on monthly orders; `None` for the final band
    pub max_orders: Option<Decimal>,
    pub small: Decimal,
    pub medium: Decimal,
    pub large: Decimal,
    pub bulky: Decimal,
}

impl FulfillmentTier {
    /// Per-order rate for a parcel size
    pub fn rate(&self, size: ParcelSize) -> Decimal {
        match size {
            ParcelSize::Small => self.small,
            ParcelSize::Medium => self.medium,
            ParcelSize::Large => self.large,
            ParcelSize::Bulky => self.bulky,
        }
    }

    /// Whether `monthly_orders` is at or below this band's ceiling
    pub fn covers(&self, monthly_orders: Decimal) -> bool {
        self.max_orders.map_or(true, |max| monthly_orders <= max)
    }
}

/// Shipping weight ceilings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightBand {
    #[serde(rename = "upTo1kg")]
    UpTo1Kg,
    #[serde(rename = "upTo2kg")]
    UpTo2Kg,
    #[serde(rename = "upTo3kg")]
    UpTo3Kg,
    #[serde(rename = "upTo5kg")]
    UpTo5Kg,
    #[serde(rename = "upTo7kg")]
    UpTo7Kg,
}

impl WeightBand {
    pub const ALL: [WeightBand; 5] = [
        WeightBand::UpTo1Kg,
        WeightBand::UpTo2Kg,
        WeightBand::UpTo3Kg,
        WeightBand::UpTo5Kg,
        WeightBand::UpTo7Kg,
    ];

    /// Human-readable label for rate cards
    pub fn label(&self) -> &'static str {
        match self {
            WeightBand::UpTo1Kg => "Up to 1 kg",
            WeightBand::UpTo2Kg => "Up to 2 kg",
            WeightBand::UpTo3Kg => "Up to 3 kg",
            WeightBand::UpTo5Kg => "Up to 5 kg",
            WeightBand::UpTo7Kg => "Up to 7 kg",
        }
    }
}

/// Flat per-order shipping price for one weight band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingRateRow {
    pub weight: WeightBand,
    pub metro_manila: Decimal,
    pub outside_metro_manila: Decimal,
}
