//! Quote documents
//!
//! A [`QuoteDocument`] is everything the document renderer needs: the request,
//! the engine result, and the presentation views, stamped with an id and a
//! validity window.

use chrono::{DateTime, Duration, Utc};
use logiquote_common::{CostBreakdown, QuoteData, Result, CURRENCY, QUOTE_VALIDITY_DAYS};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{pricing::calculate_quote, summary::QuoteSummary, validation::calculate_quote_checked};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteDocument {
    pub quote_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    pub currency: String,
    pub include_vat: bool,
    pub quote: QuoteData,
    pub costs: CostBreakdown,
    pub summary: QuoteSummary,
}

impl QuoteDocument {
    /// Price a quote with the permissive engine and wrap the result
    pub fn build(quote: QuoteData, include_vat: bool) -> Self {
        let costs = calculate_quote(&quote, include_vat);
        Self::assemble(quote, costs, include_vat)
    }

    /// Like [`QuoteDocument::build`], rejecting requests that fail validation
    pub fn build_checked(quote: QuoteData, include_vat: bool) -> Result<Self> {
        let costs = calculate_quote_checked(&quote, include_vat)?;
        Ok(Self::assemble(quote, costs, include_vat))
    }

    fn assemble(quote: QuoteData, costs: CostBreakdown, include_vat: bool) -> Self {
        let now = Utc::now();
        let summary = QuoteSummary::new(&costs, quote.months(), include_vat);

        Self {
            quote_id: Uuid::new_v4(),
            generated_at: now,
            valid_until: now + Duration::days(QUOTE_VALIDITY_DAYS),
            currency: CURRENCY.to_string(),
            include_vat,
            quote,
            costs,
            summary,
        }
    }

    /// Check if the quote is still valid
    pub fn is_valid(&self) -> bool {
        Utc::now() < self.valid_until
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logiquote_common::{Fulfillment, ParcelSizeDistribution, QuoteError};
    use rust_decimal_macros::dec;

    fn quote() -> QuoteData {
        QuoteData {
            fulfillment: Fulfillment {
                monthly_orders: dec!(100),
                average_items_per_order: dec!(3),
                parcel_size_distribution: ParcelSizeDistribution::new(
                    dec!(0),
                    dec!(100),
                    dec!(0),
                    dec!(0),
                ),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_build_document() {
        let doc = QuoteDocument::build(quote(), false);

        assert_eq!(doc.currency, "PHP");
        assert_eq!(doc.costs.fulfillment, dec!(3500));
        assert_eq!(doc.costs.additional_items, dec!(1000));
        assert_eq!(doc.summary.months, dec!(1));
        assert_eq!(doc.valid_until - doc.generated_at, Duration::days(30));
        assert!(doc.is_valid());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = QuoteDocument::build(quote(), false);
        let b = QuoteDocument::build(quote(), false);
        assert_ne!(a.quote_id, b.quote_id);
    }

    #[test]
    fn test_build_checked_rejects_bad_distribution() {
        let mut data = quote();
        data.fulfillment.parcel_size_distribution.medium = dec!(80);

        let err = QuoteDocument::build_checked(data, false).unwrap_err();
        assert!(matches!(err, QuoteError::Validation(ref issues) if issues.len() == 1));
    }

    #[test]
    fn test_document_json_round_trip_keeps_costs() {
        let doc = QuoteDocument::build(quote(), true);
        let json = serde_json::to_string(&doc).unwrap();
        let parsed: QuoteDocument = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.quote_id, doc.quote_id);
        assert_eq!(parsed.costs, doc.costs);
        assert_eq!(parsed.quote, doc.quote);
    }
}
