//! Category/subcategory combos collected on the builder page.
//!
//! A [`Combo`] can only be built through [`Combo::new`], which trims and
//! validates its input, so everything in a [`ComboList`] is known-good.
//! The list only ever grows; a page reload is the only way to empty it.

use serde::Serialize;
use std::fmt;

/// Why a combo could not be added or the list could not be submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComboError {
    /// Category blank, or every subcategory field blank.
    Incomplete,
    /// `submit_all` with nothing collected.
    NothingToSubmit,
    /// Serializing the list for the hidden field failed.
    Encode(String),
}

impl fmt::Display for ComboError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComboError::Incomplete => write!(f, "Please enter a category and at least one subcategory."),
            ComboError::NothingToSubmit => write!(f, "No combos to submit."),
            ComboError::Encode(e) => write!(f, "Could not encode combos: {}", e),
        }
    }
}

impl std::error::Error for ComboError {}

/// One category and the subcategories that belong to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Combo {
    category: String,
    subcategories: Vec<String>,
}

impl Combo {
    /// Trim everything, drop blank subcategories, and require a category plus
    /// at least one subcategory.
    pub fn new<S: AsRef<str>>(category: &str, subcategories: &[S]) -> Result<Self, ComboError> {
        let category = category.trim();
        let subcategories: Vec<String> = subcategories
            .iter()
            .map(|s| s.as_ref().trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if category.is_empty() || subcategories.is_empty() {
            return Err(ComboError::Incomplete);
        }

        Ok(Self {
            category: category.to_string(),
            subcategories,
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn subcategories(&self) -> &[String] {
        &self.subcategories
    }

    /// Subcategories as shown in the results table.
    pub fn subcategory_summary(&self) -> String {
        self.subcategories.join(", ")
    }
}

/// Combos collected so far, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComboList {
    combos: Vec<Combo>,
}

impl ComboList {
    pub fn push(&mut self, combo: Combo) {
        self.combos.push(combo);
    }

    pub fn len(&self) -> usize {
        self.combos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combos.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Combo> {
        self.combos.iter()
    }

    /// JSON array carried by the `all_combos` hidden field.
    pub fn to_form_value(&self) -> Result<String, ComboError> {
        if self.combos.is_empty() {
            return Err(ComboError::NothingToSubmit);
        }
        serde_json::to_string(&self.combos).map_err(|e| ComboError::Encode(e.to_string()))
    }

    /// Hand the encoded list to `submit`. An empty list never gets that far.
    pub fn submit_with(&self, submit: impl FnOnce(&str)) -> Result<(), ComboError> {
        let json = self.to_form_value()?;
        submit(&json);
        Ok(())
    }
}

// ── Subcategory input rows ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
struct SubcategoryRow {
    key: usize,
    removable: bool,
}

/// The subcategory inputs under the category field.
///
/// Only the row structure lives here. What the user typed stays in the inputs
/// themselves and is read back on submit. Keys only exist so a keyed list can
/// render the rows; they are never reused, which makes a reset rebuild every
/// input from scratch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubcategoryRows {
    rows: Vec<SubcategoryRow>,
    next_key: usize,
}

impl Default for SubcategoryRows {
    fn default() -> Self {
        let mut rows = Self {
            rows: Vec::new(),
            next_key: 0,
        };
        rows.push_row(false);
        rows
    }
}

impl SubcategoryRows {
    fn push_row(&mut self, removable: bool) -> usize {
        let key = self.next_key;
        self.next_key += 1;
        self.rows.push(SubcategoryRow { key, removable });
        key
    }

    /// Append a blank row with a remove control; returns its key.
    pub fn add(&mut self) -> usize {
        self.push_row(true)
    }

    pub fn remove(&mut self, key: usize) {
        self.rows.retain(|row| row.key != key);
    }

    /// Back to the single blank row the page starts with.
    pub fn reset(&mut self) {
        self.rows.clear();
        self.push_row(false);
    }

    pub fn keys(&self) -> Vec<usize> {
        self.rows.iter().map(|row| row.key).collect()
    }

    pub fn is_removable(&self, key: usize) -> bool {
        self.rows.iter().any(|row| row.key == key && row.removable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_combo_trims_and_drops_blank_subcategories() {
        let combo = Combo::new("Network", &["VPN", "", " Firewall "]).unwrap();
        assert_eq!(combo.category(), "Network");
        assert_eq!(combo.subcategories(), ["VPN", "Firewall"]);
        assert_eq!(combo.subcategory_summary(), "VPN, Firewall");
    }

    #[test]
    fn test_combo_requires_category_and_subcategory() {
        assert_eq!(Combo::new("", &["VPN"]), Err(ComboError::Incomplete));
        assert_eq!(Combo::new("   ", &["VPN"]), Err(ComboError::Incomplete));
        assert_eq!(Combo::new("Network", &["", "  ", "\t"]), Err(ComboError::Incomplete));
        assert_eq!(Combo::new::<&str>("Network", &[]), Err(ComboError::Incomplete));
        assert_eq!(
            ComboError::Incomplete.to_string(),
            "Please enter a category and at least one subcategory."
        );
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let mut list = ComboList::default();
        let inputs = [("Hardware", "Laptop"), ("Software", "Office"), ("Network", "VPN")];
        for (category, sub) in inputs {
            list.push(Combo::new(category, &[sub]).unwrap());
        }

        assert_eq!(list.len(), 3);
        let categories: Vec<&str> = list.iter().map(Combo::category).collect();
        assert_eq!(categories, ["Hardware", "Software", "Network"]);
    }

    #[test]
    fn test_empty_list_has_nothing_to_submit() {
        let list = ComboList::default();
        assert_eq!(list.to_form_value(), Err(ComboError::NothingToSubmit));
        assert_eq!(ComboError::NothingToSubmit.to_string(), "No combos to submit.");
    }

    #[test]
    fn test_form_value_matches_list() {
        let mut list = ComboList::default();
        list.push(Combo::new("Network", &["VPN", "", " Firewall "]).unwrap());
        list.push(Combo::new(" Hardware ", &["Laptop"]).unwrap());

        let value: serde_json::Value = serde_json::from_str(&list.to_form_value().unwrap()).unwrap();
        assert_eq!(
            value,
            json!([
                {"category": "Network", "subcategories": ["VPN", "Firewall"]},
                {"category": "Hardware", "subcategories": ["Laptop"]},
            ])
        );
    }

    #[test]
    fn test_empty_list_never_reaches_submit() {
        let mut submitted = Vec::new();
        let result = ComboList::default().submit_with(|json| submitted.push(json.to_string()));
        assert_eq!(result, Err(ComboError::NothingToSubmit));
        assert!(submitted.is_empty());

        let mut list = ComboList::default();
        list.push(Combo::new("Network", &["VPN"]).unwrap());
        list.submit_with(|json| submitted.push(json.to_string())).unwrap();
        assert_eq!(submitted, [list.to_form_value().unwrap()]);
    }

    #[test]
    fn test_rows_start_with_one_fixed_row() {
        let rows = SubcategoryRows::default();
        assert_eq!(rows.keys().len(), 1);
        assert!(!rows.is_removable(rows.keys()[0]));
    }

    #[test]
    fn test_rows_add_remove() {
        let mut rows = SubcategoryRows::default();
        let first = rows.keys()[0];
        let second = rows.add();
        let third = rows.add();
        assert!(rows.is_removable(second));
        assert!(rows.is_removable(third));

        rows.remove(second);
        assert_eq!(rows.keys(), [first, third]);

        // The fixed first row has no remove control
        assert!(!rows.is_removable(first));
    }

    #[test]
    fn test_rows_reset_uses_fresh_key() {
        let mut rows = SubcategoryRows::default();
        let original = rows.keys()[0];
        rows.add();

        rows.reset();
        assert_eq!(rows.keys().len(), 1);
        assert_ne!(rows.keys()[0], original);
        assert!(!rows.is_removable(rows.keys()[0]));
    }
}
