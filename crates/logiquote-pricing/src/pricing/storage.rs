//! Storage rate lookup

use logiquote_common::{rates::storage_tiers, PricingTier, StorageType};
use rust_decimal::Decimal;
use tracing::trace;

/// Tier covering `volume`, if any
pub fn storage_tier(volume: Decimal, storage_type: StorageType) -> Option<&'static PricingTier> {
    storage_tiers(storage_type)
        .iter()
        .find(|tier| tier.contains(volume))
}

/// Per-CBM monthly rate for `volume`
///
/// Volumes no tier covers (below 1 CBM, or fractional volumes between two
/// integer bands) are priced at the last, unbounded tier's rate.
pub fn get_storage_rate(volume: Decimal, storage_type: StorageType) -> Decimal {
    let tiers = storage_tiers(storage_type);
    let rate = storage_tier(volume, storage_type)
        .or_else(|| tiers.last())
        .map_or(Decimal::ZERO, |tier| tier.rate);

    trace!(%volume, ?storage_type, %rate, "storage tier selected");
    rate
}
