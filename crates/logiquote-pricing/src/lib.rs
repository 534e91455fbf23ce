//! # LogiQuote Pricing
//!
//! Tiered pricing engine for warehousing, fulfillment, and shipping quotes.
//!
//! ## Cost Lines
//!
//! ```text
//! Ambient/Temp storage = volume × tier_rate(volume) × months
//! Fulfillment          = Σ rate[size] × share[size] / 100 × monthly_orders
//! Additional items     = (items_per_order − 1) × monthly_orders × ₱5
//! Shipping             = Σ_band share[band] × Σ_zone rate[band, zone] × share[zone] × monthly_orders
//! Total                = subtotal + (12% VAT if included)
//! ```
//!
//! The engine is pure and total: every input produces a breakdown, nothing is
//! validated. Use [`validation`] when stricter guarantees are wanted.

pub mod document;
pub mod pricing;
pub mod rate_card;
pub mod summary;
pub mod validation;

pub use document::QuoteDocument;
pub use pricing::{
    calculate_quote, calculate_shipping_costs, get_fulfillment_rate, get_storage_rate,
};
pub use rate_card::RateCard;
pub use summary::{format_php, QuoteSummary};
pub use validation::{calculate_quote_checked, validate_quote};

use logiquote_common::{QuoteData, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Quote service configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteSettings {
    /// VAT flag used when a request does not specify one
    pub include_vat: bool,
    /// Reject requests that fail [`validate_quote`] instead of pricing them
    pub strict_validation: bool,
}

/// Quote service
pub struct QuoteService {
    settings: QuoteSettings,
}

impl QuoteService {
    pub fn new(settings: QuoteSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &QuoteSettings {
        &self.settings
    }

    /// Price a request and produce the document for rendering
    #[instrument(skip(self, quote))]
    pub fn quote(&self, quote: QuoteData, include_vat: Option<bool>) -> Result<QuoteDocument> {
        let include_vat = include_vat.unwrap_or(self.settings.include_vat);
        let document = if self.settings.strict_validation {
            QuoteDocument::build_checked(quote, include_vat)?
        } else {
            QuoteDocument::build(quote, include_vat)
        };

        info!(
            quote_id = %document.quote_id,
            total = %document.costs.total,
            "quote generated"
        );
        Ok(document)
    }

    pub fn rate_card(&self) -> RateCard {
        RateCard::current()
    }
}

impl Default for QuoteService {
    fn default() -> Self {
        Self::new(QuoteSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logiquote_common::{Fulfillment, ParcelSizeDistribution, QuoteError};
    use rust_decimal_macros::dec;

    fn lopsided_quote() -> QuoteData {
        QuoteData {
            fulfillment: Fulfillment {
                monthly_orders: dec!(10),
                average_items_per_order: dec!(1),
                parcel_size_distribution: ParcelSizeDistribution::new(
                    dec!(50),
                    dec!(0),
                    dec!(0),
                    dec!(0),
                ),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_default_vat_applies_when_unspecified() {
        let service = QuoteService::new(QuoteSettings {
            include_vat: true,
            strict_validation: false,
        });

        let doc = service.quote(lopsided_quote(), None).unwrap();
        assert!(doc.include_vat);
        assert_eq!(doc.costs.subtotal, dec!(150));
        assert_eq!(doc.costs.vat, dec!(18));

        let doc = service.quote(lopsided_quote(), Some(false)).unwrap();
        assert_eq!(doc.costs.vat, dec!(0));
    }

    #[test]
    fn test_strict_service_rejects_invalid() {
        let service = QuoteService::new(QuoteSettings {
            include_vat: false,
            strict_validation: true,
        });

        let err = service.quote(lopsided_quote(), None).unwrap_err();
        assert!(matches!(err, QuoteError::Validation(_)));
    }

    #[test]
    fn test_permissive_service_prices_invalid() {
        let doc = QuoteService::default().quote(lopsided_quote(), None).unwrap();
        assert_eq!(doc.costs.fulfillment, dec!(150));
    }
}
