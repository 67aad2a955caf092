//! Drug interaction table and pairwise resolution.
//!
//! The table is keyed by an unordered pair of normalized (lower-cased,
//! trimmed) drug names. Symmetry is established at insertion time: both
//! directions of every pair are stored, so a lookup never has to try the
//! reverse order.

use std::collections::{BTreeSet, HashMap};

/// Literal returned by the direct pair check when no interaction is stored
/// in either direction. This is a sentinel, not an error.
pub const NO_INTERACTION_DATA: &str = "No data available";

/// Result of checking a single named drug pair.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PairCheck {
    /// First drug name, title-cased for display.
    pub drug_a: String,
    /// Second drug name, title-cased for display.
    pub drug_b: String,
    /// Stored interaction description, or [`NO_INTERACTION_DATA`].
    pub interaction: String,
}

/// Symmetric lookup table of known drug interactions.
#[derive(Debug, Clone, Default)]
pub struct InteractionTable {
    pairs: HashMap<(String, String), String>,
    drugs: BTreeSet<String>,
}

impl InteractionTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an interaction between two drugs.
    ///
    /// Names are normalized before keying and both orderings are inserted,
    /// so `lookup` resolves regardless of argument order.
    pub fn insert(&mut self, drug_a: &str, drug_b: &str, description: impl Into<String>) {
        let a = normalize(drug_a);
        let b = normalize(drug_b);
        let description = description.into();
        self.pairs.insert((a.clone(), b.clone()), description.clone());
        self.pairs.insert((b.clone(), a.clone()), description);
        self.drugs.insert(a);
        self.drugs.insert(b);
    }

    /// Look up the interaction description for two already-normalized names.
    #[must_use]
    fn get(&self, a: &str, b: &str) -> Option<&str> {
        self.pairs
            .get(&(a.to_string(), b.to_string()))
            .map(String::as_str)
    }

    /// Report all pairwise known interactions within a medication list.
    ///
    /// Names are normalized for lookup without disturbing the positional
    /// order used for pair generation: pairs are `(i, j)` with `i < j`,
    /// emitted in that order. An empty or single-entry list can form no
    /// pair and always yields no warnings.
    #[must_use]
    pub fn resolve<S: AsRef<str>>(&self, medications: &[S]) -> Vec<String> {
        let normalized: Vec<String> = medications
            .iter()
            .map(|m| normalize(m.as_ref()))
            .collect();

        let mut warnings = Vec::new();
        for i in 0..normalized.len() {
            for j in (i + 1)..normalized.len() {
                if let Some(description) = self.get(&normalized[i], &normalized[j]) {
                    warnings.push(format!(
                        "{} + {}: {}",
                        title_case(&normalized[i]),
                        title_case(&normalized[j]),
                        description
                    ));
                }
            }
        }
        warnings
    }

    /// Check a single named pair of drugs directly.
    ///
    /// Returns the stored description, or the [`NO_INTERACTION_DATA`]
    /// sentinel when nothing is stored in either direction.
    #[must_use]
    pub fn check_pair(&self, drug_a: &str, drug_b: &str) -> PairCheck {
        let a = normalize(drug_a);
        let b = normalize(drug_b);
        let interaction = self
            .get(&a, &b)
            .unwrap_or(NO_INTERACTION_DATA)
            .to_string();
        PairCheck {
            drug_a: title_case(&a),
            drug_b: title_case(&b),
            interaction,
        }
    }

    /// All drug names appearing in any stored pair, sorted, for use in a
    /// selection UI.
    #[must_use]
    pub fn known_drugs(&self) -> Vec<String> {
        self.drugs.iter().cloned().collect()
    }
}

/// Lower-case and trim a drug name for table keying.
fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Capitalize every letter that follows a non-alphabetic boundary, so
/// hyphenated and parenthesized drug names display like the interaction
/// source spells them (e.g. `acetylsalicylic-acid` -> `Acetylsalicylic-Acid`).
fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_boundary = true;
    for c in name.chars() {
        if c.is_alphabetic() {
            if at_boundary {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            at_boundary = false;
        } else {
            out.push(c);
            at_boundary = true;
        }
    }
    out
}
