//! Product catalog
//!
//! The selectable product names shown in the add-event form. Seeded with
//! the house defaults, mutable in-session, never persisted.

/// Default tap list shown on first launch.
pub const DEFAULT_PRODUCTS: [&str; 28] = [
    "Fosters",
    "Amstel",
    "Cruzcampo",
    "Birra Moretti",
    "Beavertown",
    "Strongbow",
    "Inch's Medium Apple Cider",
    "Shipyard",
    "Somersby Apple",
    "Estrella",
    "Carlsberg",
    "Wainwrights",
    "Peroni",
    "Somersby Black",
    "San Miguel",
    "Tetley's",
    "Kronenbourg",
    "Guinness",
    "Madri",
    "Carling",
    "Coors",
    "Worthington's",
    "Caffrey's",
    "Staropramen",
    "Pravha",
    "Strongbow Dark Fruit 50L",
    "John Smith's",
    "Heineken",
];

/// In-memory list of selectable product names. Invariant: names unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCatalog {
    names: Vec<String>,
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self {
            names: DEFAULT_PRODUCTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ProductCatalog {
    #[cfg(test)]
    pub fn empty() -> Self {
        Self { names: Vec::new() }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Appends the trimmed name if non-empty and not already present.
    /// Returns true when the catalog changed.
    pub fn add(&mut self, name: &str) -> bool {
        let trimmed = name.trim();
        if trimmed.is_empty() || self.contains(trimmed) {
            return false;
        }
        self.names.push(trimmed.to_string());
        true
    }

    /// Renames `old` to the trimmed new name. Rejected when the new name is
    /// empty or would duplicate an existing entry. Returns the applied name.
    pub fn rename(&mut self, old: &str, new: &str) -> Option<String> {
        let trimmed = new.trim();
        if trimmed.is_empty() || self.contains(trimmed) {
            return None;
        }
        let slot = self.names.iter_mut().find(|n| n.as_str() == old)?;
        *slot = trimmed.to_string();
        Some(trimmed.to_string())
    }

    /// Removes the named product. Returns true when it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }
}
