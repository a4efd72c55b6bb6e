//! Column selection parsing.
//!
//! The host configures which columns are banded with a single
//! comma-separated string of column identifiers. Parsing cannot fail:
//! a missing or empty configuration degrades to an empty selection and
//! the grid renders every cell as plain formatted text.

use std::collections::BTreeSet;

/// The set of column identifiers selected for value banding.
///
/// Membership is exact and case-sensitive; segments are trimmed and
/// empty segments are discarded, so stray commas never produce an
/// empty-string member. Duplicates collapse.
///
/// # Example
///
/// ```
/// use semaforo::ColumnSelection;
///
/// let selection = ColumnSelection::parse(Some(" Revenue ,, Margin,Revenue"));
/// assert_eq!(selection.len(), 2);
/// assert!(selection.contains("Revenue"));
/// assert!(selection.contains("Margin"));
/// assert!(!selection.contains("revenue"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSelection {
    names: BTreeSet<String>,
}

impl ColumnSelection {
    /// Parse a nullable comma-separated configuration string.
    pub fn parse(config: Option<&str>) -> Self {
        let names = config
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(str::to_owned)
            .collect();
        Self { names }
    }

    /// An empty selection (classify nothing).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the named column is selected for banding.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of selected columns.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no columns are selected.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over selected column names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
