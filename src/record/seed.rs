//! Seed collection and the initializer policy applied on first access.

use serde::{Deserialize, Serialize};

use super::{sort_by_name, Record};

/// What the directory starts from when nothing has been persisted yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedPolicy {
    /// Materialize the built-in seed collection.
    #[default]
    Default,
    /// Start from an empty collection.
    Empty,
}

const SEED: [(&str, &str, &str); 11] = [
    ("1", "Danilo", "(31) 99876-0001"),
    ("2", "Beatriz", "(31) 99876-0002"),
    ("3", "Carlos", "(31) 99876-0003"),
    ("4", "Eduarda", "(31) 99876-0004"),
    ("5", "Fernanda", "(31) 99876-0005"),
    ("6", "Gabriel", "(31) 99876-0006"),
    ("7", "Helena", "(31) 99876-0007"),
    ("8", "Igor", "(31) 99876-0008"),
    ("9", "Juliana", "(31) 99876-0009"),
    ("10", "Marcos", "(31) 99876-0010"),
    ("11", "Renata", "(31) 99876-0011"),
];

/// The built-in seed collection, sorted by name.
pub fn seed_collection() -> Vec<Record> {
    let mut records: Vec<Record> = SEED
        .iter()
        .map(|(id, name, phone)| Record {
            id: (*id).to_string(),
            name: (*name).to_string(),
            phone: (*phone).to_string(),
        })
        .collect();
    sort_by_name(&mut records);
    records
}

/// Resolve the collection seen on first access.
///
/// A persisted collection always wins, even when empty. Only an absent blob
/// falls back to the policy.
pub fn initial_collection(persisted: Option<Vec<Record>>, policy: SeedPolicy) -> Vec<Record> {
    match (persisted, policy) {
        (Some(records), _) => records,
        (None, SeedPolicy::Default) => seed_collection(),
        (None, SeedPolicy::Empty) => Vec::new(),
    }
}
