//! Symptom index and feature vectorization.
//!
//! The symptom index maps each known symptom name to a fixed position in
//! the classifier's input vector. It is built once from the ordered symptom
//! list shipped with the model artifact and never changes afterwards.

use std::collections::HashMap;

/// Mapping from symptom name to feature vector position.
///
/// Positions are contiguous `0..len()`, assigned in the order the symptom
/// names were provided. Symptom names are matched case-sensitively, exactly
/// as the training data spelled them (e.g. `skin_rash`).
#[derive(Debug, Clone)]
pub struct SymptomIndex {
    positions: HashMap<String, usize>,
}

impl SymptomIndex {
    /// Build an index from an ordered list of symptom names.
    ///
    /// # Errors
    /// Returns an error if the list contains a duplicate name, since that
    /// would leave one of the two occurrences without its own position.
    pub fn from_ordered<I, S>(names: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut positions = HashMap::new();
        for (position, name) in names.into_iter().enumerate() {
            let name = name.into();
            if positions.insert(name.clone(), position).is_some() {
                return Err(format!("Duplicate symptom name: {name}"));
            }
        }
        Ok(Self { positions })
    }

    /// Number of known symptoms, which is also the feature vector length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Look up the vector position of a symptom name.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Convert a list of reported symptoms into a binary feature vector.
    ///
    /// Every position whose symptom appears in `symptoms` is set to 1.0;
    /// all other positions stay 0.0. Names not present in the index are
    /// silently ignored, so the output length is always `len()` no matter
    /// what the caller reports.
    #[must_use]
    pub fn vectorize<S: AsRef<str>>(&self, symptoms: &[S]) -> Vec<f64> {
        let mut vector = vec![0.0; self.positions.len()];
        for symptom in symptoms {
            if let Some(position) = self.position(symptom.as_ref()) {
                vector[position] = 1.0;
            }
        }
        vector
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> SymptomIndex {
        SymptomIndex::from_ordered(["itching", "skin_rash", "cough", "fatigue"])
            .expect("Should build index")
    }

    #[test]
    fn test_vectorize_sets_known_positions() {
        let idx = index();
        let v = idx.vectorize(&["itching", "cough"]);
        assert_eq!(v, vec![1.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_vectorize_ignores_unknown_symptoms() {
        let idx = index();
        let v = idx.vectorize(&["itching", "no_such_symptom"]);
        assert_eq!(v, vec![1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_vectorize_empty_input() {
        let idx = index();
        let v = idx.vectorize::<&str>(&[]);
        assert_eq!(v.len(), 4);
        assert!(v.iter().all(|x| *x == 0.0));
    }

    #[test]
    fn test_vectorize_length_is_fixed() {
        let idx = index();
        let many: Vec<String> = (0..100).map(|i| format!("unknown_{i}")).collect();
        assert_eq!(idx.vectorize(&many).len(), 4);
    }

    #[test]
    fn test_duplicate_symptom_rejected() {
        let result = SymptomIndex::from_ordered(["itching", "itching"]);
        assert!(result.is_err());
    }
}
