//! Disease catalog: the classifier's output classes.

/// Ordered sequence of disease names.
///
/// The classifier predicts a class index; this catalog translates it back
/// to the disease name that keys all the reference table lookups.
#[derive(Debug, Clone)]
pub struct DiseaseCatalog {
    names: Vec<String>,
}

impl DiseaseCatalog {
    /// Create a catalog from an ordered list of disease names.
    #[must_use]
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Number of disease classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Translate a class index into a disease name.
    ///
    /// Returns `None` for indices outside the catalog; the caller decides
    /// whether that is fatal (it is, for classifier output).
    #[must_use]
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }
}
