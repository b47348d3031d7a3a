//! Short random identifiers for unkeyed and ungrouped entries.

use rand::distr::Alphanumeric;
use rand::Rng;

/// Length of generated keys and group names.
pub(crate) const IDENT_LEN: usize = 6;

/// Generates a random alphanumeric identifier.
///
/// Collisions are accepted, not engineered against: removal by a generated
/// key affects every entry that happens to share it.
pub(crate) fn random_ident() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(IDENT_LEN)
        .map(char::from)
        .collect()
}
