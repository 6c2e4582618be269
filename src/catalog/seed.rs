//! Sample data for local runs and demos

use std::collections::HashSet;

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::error::Result;
use crate::models::NewProperty;
use crate::store::PropertyStore;

// == Sample Data ==
/// The eight demo listings.
pub fn sample_properties() -> Vec<NewProperty> {
    [
        (
            "Modern Downtown Apartment",
            "A beautiful 2-bedroom apartment in the heart of downtown with stunning city views.",
            250000,
            "Downtown",
        ),
        (
            "Cozy Suburban House",
            "A charming 3-bedroom house with a large backyard, perfect for families.",
            320000,
            "Suburbs",
        ),
        (
            "Luxury Penthouse",
            "An exclusive penthouse with panoramic views and premium amenities.",
            850000,
            "Uptown",
        ),
        (
            "Beach House Retreat",
            "A peaceful beach house just steps away from the ocean.",
            420000,
            "Beachfront",
        ),
        (
            "Urban Loft",
            "A trendy loft space in the arts district with exposed brick walls.",
            280000,
            "Arts District",
        ),
        (
            "Mountain Cabin",
            "A rustic cabin surrounded by nature, perfect for weekend getaways.",
            180000,
            "Mountains",
        ),
        (
            "Historic Brownstone",
            "A beautifully restored brownstone with original architectural details.",
            450000,
            "Historic District",
        ),
        (
            "Waterfront Condo",
            "A modern condo with direct water access and marina views.",
            380000,
            "Waterfront",
        ),
    ]
    .into_iter()
    .map(|(title, description, cents, location)| {
        NewProperty::new(title, description, Decimal::new(cents, 2), location)
    })
    .collect()
}

// == Seeding ==
/// Inserts the sample listings whose title is not already present.
///
/// Returns how many were created. Writes go through `store`, so an
/// [`InvalidatingStore`](crate::catalog::InvalidatingStore) evicts the snapshot.
pub async fn seed_sample_properties(store: &dyn PropertyStore) -> Result<usize> {
    let mut existing: HashSet<String> = store
        .get_all()
        .await?
        .into_iter()
        .map(|p| p.title)
        .collect();

    let mut created = 0;
    for sample in sample_properties() {
        if existing.contains(&sample.title) {
            warn!("Property already exists: {}", sample.title);
            continue;
        }
        let property = store.create(sample).await?;
        info!("Created property: {}", property.title);
        existing.insert(property.title);
        created += 1;
    }

    info!("Seeded {} new properties", created);
    Ok(created)
}
