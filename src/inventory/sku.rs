//! Donation SKU generation.
//!
//! The format is `<prefix>-<suffix>`: the category uppercased with
//! whitespace replaced by `_` and truncated to 4 characters, then a random
//! 5-digit zero-padded number. A bare random suffix can collide with an
//! existing SKU, so [`unique_sku`] retries against the current snapshot a
//! bounded number of times.

use rand::Rng;

use super::snapshot::Snapshot;

const SUFFIX_SPACE: u32 = 100_000;
const MAX_ATTEMPTS: usize = 16;

/// Derives the SKU prefix from a category name.
pub fn sku_prefix(category: &str) -> String {
    category
        .to_uppercase()
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .take(4)
        .collect()
}

/// Generates one candidate SKU for the category.
pub fn generate_sku(category: &str) -> String {
    let suffix = rand::thread_rng().gen_range(0..SUFFIX_SPACE);
    format!("{}-{:05}", sku_prefix(category), suffix)
}

/// Generates a SKU that does not collide with the snapshot.
///
/// The suffix space is small (10^5), so against a large inventory a clash is
/// plausible. If every attempt collides the last candidate is returned and
/// the server's uniqueness constraint gets the final say.
pub fn unique_sku(category: &str, snapshot: &Snapshot) -> String {
    let mut candidate = generate_sku(category);
    for _ in 0..MAX_ATTEMPTS {
        if snapshot.find_by_sku(&candidate).is_none() {
            return candidate;
        }
        candidate = generate_sku(category);
    }
    candidate
}
