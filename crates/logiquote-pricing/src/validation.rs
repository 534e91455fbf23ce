//! Opt-in validation layer
//!
//! The engine accepts anything. Callers that want stricter guarantees run the
//! request through [`validate_quote`] or use [`calculate_quote_checked`].

use logiquote_common::{CostBreakdown, QuoteData, QuoteError, Result, ValidationIssue};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::pricing::calculate_quote;

const FULL: Decimal = dec!(100);

/// Collect every issue in a quote request
pub fn validate_quote(data: &QuoteData) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let warehousing = &data.warehousing;
    let fulfillment = &data.fulfillment;

    check_non_negative(
        &mut issues,
        "warehousing.ambientStorage.averageVolume",
        warehousing.ambient_storage.average_volume,
    );
    check_non_negative(
        &mut issues,
        "warehousing.tempControlledStorage.averageVolume",
        warehousing.temp_controlled_storage.average_volume,
    );
    check_non_negative(
        &mut issues,
        "warehousing.expectedMonths",
        warehousing.expected_months,
    );
    check_non_negative(
        &mut issues,
        "fulfillment.monthlyOrders",
        fulfillment.monthly_orders,
    );
    check_non_negative(
        &mut issues,
        "fulfillment.averageItemsPerOrder",
        fulfillment.average_items_per_order,
    );
    check_sum(
        &mut issues,
        "fulfillment.parcelSizeDistribution",
        fulfillment.parcel_size_distribution.total(),
    );

    if let Some(shipping) = data.shipping.as_ref().filter(|s| s.enabled) {
        check_non_negative(&mut issues, "shipping.monthlyOrders", shipping.monthly_orders);
        check_sum(
            &mut issues,
            "shipping.weightDistribution",
            shipping.weight_distribution.total(),
        );
        check_sum(
            &mut issues,
            "shipping.locationDistribution",
            shipping.location_distribution.total(),
        );
    }

    issues
}

/// Validate, then calculate
pub fn calculate_quote_checked(data: &QuoteData, include_vat: bool) -> Result<CostBreakdown> {
    let issues = validate_quote(data);
    if !issues.is_empty() {
        debug!(count = issues.len(), "quote rejected by validation");
        return Err(QuoteError::Validation(issues));
    }
    Ok(calculate_quote(data, include_vat))
}

fn check_non_negative(issues: &mut Vec<ValidationIssue>, field: &'static str, value: Decimal) {
    if value.is_sign_negative() && !value.is_zero() {
        issues.push(ValidationIssue::NegativeValue { field, value });
    }
}

fn check_sum(issues: &mut Vec<ValidationIssue>, field: &'static str, total: Decimal) {
    if total != FULL {
        issues.push(ValidationIssue::DistributionSum { field, total });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logiquote_common::{
        Fulfillment, LocationDistribution, ParcelSizeDistribution, Shipping, StorageLine,
        Warehousing, WeightDistribution,
    };

    fn valid_quote() -> QuoteData {
        QuoteData::new(
            Warehousing {
                ambient_storage: StorageLine::enabled(dec!(40)),
                temp_controlled_storage: StorageLine::disabled(),
                expected_months: dec!(3),
            },
            Fulfillment {
                monthly_orders: dec!(1200),
                average_items_per_order: dec!(2),
                parcel_size_distribution: ParcelSizeDistribution::new(
                    dec!(60),
                    dec!(30),
                    dec!(10),
                    dec!(0),
                ),
            },
        )
    }

    #[test]
    fn test_valid_quote_has_no_issues() {
        assert!(validate_quote(&valid_quote()).is_empty());
        assert!(calculate_quote_checked(&valid_quote(), true).is_ok());
    }

    #[test]
    fn test_reports_every_issue() {
        let mut data = valid_quote();
        data.fulfillment.parcel_size_distribution.bulky = dec!(5);
        data.fulfillment.monthly_orders = dec!(-1);
        data.warehousing.ambient_storage.average_volume = dec!(-2);

        let issues = validate_quote(&data);
        let fields: Vec<_> = issues.iter().map(|i| i.field()).collect();
        assert_eq!(
            fields,
            vec![
                "warehousing.ambientStorage.averageVolume",
                "fulfillment.monthlyOrders",
                "fulfillment.parcelSizeDistribution",
            ]
        );
        assert!(issues.contains(&ValidationIssue::DistributionSum {
            field: "fulfillment.parcelSizeDistribution",
            total: dec!(105),
        }));
    }

    #[test]
    fn test_disabled_shipping_is_not_checked() {
        let data = valid_quote().with_shipping(Shipping {
            enabled: false,
            ..Default::default()
        });
        assert!(validate_quote(&data).is_empty());
    }

    #[test]
    fn test_enabled_shipping_distributions_checked() {
        let data = valid_quote().with_shipping(Shipping {
            enabled: true,
            monthly_orders: dec!(1200),
            weight_distribution: WeightDistribution {
                up_to_1kg: dec!(70),
                ..Default::default()
            },
            location_distribution: LocationDistribution {
                metro_manila: dec!(50),
                outside_metro_manila: dec!(50),
            },
        });

        let err = calculate_quote_checked(&data, false).unwrap_err();
        assert_eq!(
            err.issues(),
            &[ValidationIssue::DistributionSum {
                field: "shipping.weightDistribution",
                total: dec!(70),
            }]
        );
    }

    #[test]
    fn test_checked_matches_core_when_valid() {
        let data = valid_quote();
        assert_eq!(
            calculate_quote_checked(&data, true).unwrap(),
            calculate_quote(&data, true)
        );
    }
}
