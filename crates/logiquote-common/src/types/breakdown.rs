//! Cost breakdown produced by the pricing engine

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    money::{round_money, saturating_sum},
    VAT_RATE,
};

/// Itemized quote result
///
/// `subtotal` is the sum of the five cost lines, `vat` is 12% of the subtotal
/// when VAT is included (else zero), and `total = subtotal + vat`. Every field is
/// rounded to 2 decimal places.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    /// Ambient storage for the whole stay (already multiplied by months)
    pub ambient_storage: Decimal,
    /// Temperature-controlled storage for the whole stay
    pub temp_controlled_storage: Decimal,
    /// One month of fulfillment
    pub fulfillment: Decimal,
    /// One month of extra-item handling fees
    pub additional_items: Decimal,
    /// One month of shipping
    pub shipping: Decimal,
    pub subtotal: Decimal,
    pub vat: Decimal,
    pub total: Decimal,
}

impl CostBreakdown {
    /// Build a breakdown from the five cost lines, deriving subtotal, VAT, and
    /// total, then rounding every field
    pub fn from_lines(
        ambient_storage: Decimal,
        temp_controlled_storage: Decimal,
        fulfillment: Decimal,
        additional_items: Decimal,
        shipping: Decimal,
        include_vat: bool,
    ) -> Self {
        let subtotal = saturating_sum([
            ambient_storage,
            temp_controlled_storage,
            fulfillment,
            additional_items,
            shipping,
        ]);
        let vat = if include_vat {
            subtotal.saturating_mul(VAT_RATE)
        } else {
            Decimal::ZERO
        };

        Self {
            ambient_storage,
            temp_controlled_storage,
            fulfillment,
            additional_items,
            shipping,
            subtotal,
            vat,
            total: subtotal.saturating_add(vat),
        }
        .rounded()
    }

    /// Sum of the five cost lines
    pub fn line_sum(&self) -> Decimal {
        saturating_sum([
            self.ambient_storage,
            self.temp_controlled_storage,
            self.fulfillment,
            self.additional_items,
            self.shipping,
        ])
    }

    /// Round every field to 2 decimal places, half away from zero
    pub fn rounded(self) -> Self {
        Self {
            ambient_storage: round_money(self.ambient_storage),
            temp_controlled_storage: round_money(self.temp_controlled_storage),
            fulfillment: round_money(self.fulfillment),
            additional_items: round_money(self.additional_items),
            shipping: round_money(self.shipping),
            subtotal: round_money(self.subtotal),
            vat: round_money(self.vat),
            total: round_money(self.total),
        }
    }
}
