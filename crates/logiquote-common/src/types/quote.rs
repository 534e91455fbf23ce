//! Quote request types
//!
//! Everything here mirrors the quote builder's form payload. All fields default to
//! zero/false so a partially filled form still deserializes and prices.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::tiers::WeightBand;
use crate::money::saturating_sum;

/// A complete quote request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuoteData {
    pub warehousing: Warehousing,
    pub fulfillment: Fulfillment,
    /// Shipping is optional; absent means no shipping line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Shipping>,
}

impl QuoteData {
    pub fn new(warehousing: Warehousing, fulfillment: Fulfillment) -> Self {
        Self {
            warehousing,
            fulfillment,
            shipping: None,
        }
    }

    /// Attach a shipping configuration
    pub fn with_shipping(mut self, shipping: Shipping) -> Self {
        self.shipping = Some(shipping);
        self
    }

    /// Storage duration in months, with zero treated as one month
    pub fn months(&self) -> Decimal {
        self.warehousing.months()
    }
}

/// Warehousing inputs: two independent storage lines and a duration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Warehousing {
    pub ambient_storage: StorageLine,
    pub temp_controlled_storage: StorageLine,
    /// Storage duration multiplier; zero or unset means 1
    pub expected_months: Decimal,
}

impl Warehousing {
    /// Storage duration with the one-month default applied
    pub fn months(&self) -> Decimal {
        if self.expected_months.is_zero() {
            Decimal::ONE
        } else {
            self.expected_months
        }
    }
}

/// One storage line (ambient or temperature-controlled)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageLine {
    pub enabled: bool,
    /// Average occupied volume in CBM
    pub average_volume: Decimal,
}

impl StorageLine {
    pub fn enabled(average_volume: Decimal) -> Self {
        Self {
            enabled: true,
            average_volume,
        }
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    /// Whether this line contributes a cost
    pub fn is_active(&self) -> bool {
        self.enabled && self.average_volume > Decimal::ZERO
    }
}

/// Fulfillment inputs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Fulfillment {
    pub monthly_orders: Decimal,
    pub average_items_per_order: Decimal,
    pub parcel_size_distribution: ParcelSizeDistribution,
}

/// Parcel size categories used for fulfillment pricing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParcelSize {
    Small,
    Medium,
    Large,
    Bulky,
}

impl ParcelSize {
    pub const ALL: [ParcelSize; 4] = [
        ParcelSize::Small,
        ParcelSize::Medium,
        ParcelSize::Large,
        ParcelSize::Bulky,
    ];
}

/// Percentage of orders per parcel size; expected to sum to 100
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParcelSizeDistribution {
    pub small: Decimal,
    pub medium: Decimal,
    pub large: Decimal,
    pub bulky: Decimal,
}

impl ParcelSizeDistribution {
    pub fn new(small: Decimal, medium: Decimal, large: Decimal, bulky: Decimal) -> Self {
        Self {
            small,
            medium,
            large,
            bulky,
        }
    }

    /// Percentage assigned to a parcel size
    pub fn share(&self, size: ParcelSize) -> Decimal {
        match size {
            ParcelSize::Small => self.small,
            ParcelSize::Medium => self.medium,
            ParcelSize::Large => self.large,
            ParcelSize::Bulky => self.bulky,
        }
    }

    pub fn total(&self) -> Decimal {
        saturating_sum(ParcelSize::ALL.iter().map(|size| self.share(*size)))
    }
}

/// Shipping inputs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Shipping {
    pub enabled: bool,
    pub monthly_orders: Decimal,
    pub weight_distribution: WeightDistribution,
    pub location_distribution: LocationDistribution,
}

/// Percentage of orders per weight band; expected to sum to 100
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeightDistribution {
    pub up_to_1kg: Decimal,
    pub up_to_2kg: Decimal,
    pub up_to_3kg: Decimal,
    pub up_to_5kg: Decimal,
    pub up_to_7kg: Decimal,
}

impl WeightDistribution {
    /// Percentage assigned to a weight band
    pub fn share(&self, band: WeightBand) -> Decimal {
        match band {
            WeightBand::UpTo1Kg => self.up_to_1kg,
            WeightBand::UpTo2Kg => self.up_to_2kg,
            WeightBand::UpTo3Kg => self.up_to_3kg,
            WeightBand::UpTo5Kg => self.up_to_5kg,
            WeightBand::UpTo7Kg => self.up_to_7kg,
        }
    }

    pub fn total(&self) -> Decimal {
        saturating_sum(WeightBand::ALL.iter().map(|band| self.share(*band)))
    }
}

/// Percentage of orders per delivery zone; expected to sum to 100
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocationDistribution {
    pub metro_manila: Decimal,
    pub outside_metro_manila: Decimal,
}

impl LocationDistribution {
    pub fn total(&self) -> Decimal {
        self.metro_manila.saturating_add(self.outside_metro_manila)
    }
}
