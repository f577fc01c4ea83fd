//! Selection tracker for [`DataTable`](super::DataTable).
//!
//! Rows are tracked by a derived identity rather than by position, so the
//! selection survives re-sorting. Identity collisions are a documented caller
//! invariant: duplicate keys collapse entries and are not detected here.

use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use serde_json::Value;

use super::sort::display_text;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Identity of one row: a string or integer key read from the record, or the
/// row's positional index when no key field is available.
pub enum RowKey {
    /// Integer key.
    Int(i64),
    /// String key.
    Text(String),
    /// Positional fallback for rows without a key field.
    Index(usize),
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(key) => write!(f, "{key}"),
            Self::Text(key) => f.write_str(key),
            Self::Index(index) => write!(f, "#{index}"),
        }
    }
}

#[derive(Clone)]
/// How a row's identity is derived: by reading a named field, or through a
/// caller-supplied derivation function.
pub enum RowKeySpec {
    /// Read the named field from the record.
    Field(String),
    /// Apply the function to the record.
    Derive(Rc<dyn Fn(&Value) -> RowKey>),
}

impl Default for RowKeySpec {
    fn default() -> Self {
        Self::Field("id".to_string())
    }
}

impl fmt::Debug for RowKeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.debug_tuple("Field").field(name).finish(),
            Self::Derive(_) => f.write_str("Derive(..)"),
        }
    }
}

/// Derives the identity for one row.
///
/// Field reads fall back to the positional index when the field is absent or
/// null. Integral JSON numbers become [`RowKey::Int`]; every other present
/// value keys by its display text.
pub fn derive_row_key(record: &Value, index: usize, spec: &RowKeySpec) -> RowKey {
    match spec {
        RowKeySpec::Field(name) => match record.get(name) {
            None | Some(Value::Null) => RowKey::Index(index),
            Some(Value::String(key)) => RowKey::Text(key.clone()),
            Some(Value::Number(key)) => match key.as_i64() {
                Some(int) => RowKey::Int(int),
                None => RowKey::Text(key.to_string()),
            },
            Some(other) => RowKey::Text(display_text(other)),
        },
        RowKeySpec::Derive(derive) => derive(record),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// The set of selected row identities.
///
/// The set is mutated only by explicit selection actions; it is not pruned
/// when the dataset changes. Rows that leave the dataset simply stop
/// appearing in [`selected_records`](Self::selected_records), and the
/// all/partial predicates are recomputed against the current dataset size on
/// every read.
pub struct SelectionState {
    selected: HashSet<RowKey>,
}

impl SelectionState {
    /// Adds or removes one identity. Idempotent: re-selecting a selected row
    /// leaves the set unchanged.
    pub fn set_row_selected(&mut self, key: RowKey, selected: bool) {
        if selected {
            self.selected.insert(key);
        } else {
            self.selected.remove(&key);
        }
    }

    /// Replaces the set with exactly the given identities.
    pub fn select_all(&mut self, keys: impl IntoIterator<Item = RowKey>) {
        self.selected = keys.into_iter().collect();
    }

    /// Empties the set.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Membership test for one identity.
    pub fn is_selected(&self, key: &RowKey) -> bool {
        self.selected.contains(key)
    }

    /// Number of selected identities.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Whether every row of a dataset of the given size is selected. False
    /// for an empty selection, so an empty dataset never reads as fully
    /// selected.
    pub fn is_all_selected(&self, dataset_len: usize) -> bool {
        !self.selected.is_empty() && self.selected.len() == dataset_len
    }

    /// Whether some but not all rows are selected; drives the indeterminate
    /// checkbox visual.
    pub fn is_partially_selected(&self, dataset_len: usize) -> bool {
        !self.selected.is_empty() && self.selected.len() < dataset_len
    }

    /// Projects the selection onto the current dataset, preserving dataset
    /// order. Identities with no matching row are silently skipped.
    pub fn selected_records(&self, records: &[Value], spec: &RowKeySpec) -> Vec<Value> {
        records
            .iter()
            .enumerate()
            .filter(|(index, record)| self.is_selected(&derive_row_key(record, *index, spec)))
            .map(|(_, record)| record.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn users() -> Vec<Value> {
        vec![
            json!({ "id": 1, "name": "Bob" }),
            json!({ "id": 2, "name": "Amy" }),
            json!({ "id": 3, "name": "Cid" }),
        ]
    }

    fn keys_of(records: &[Value], spec: &RowKeySpec) -> Vec<RowKey> {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| derive_row_key(record, index, spec))
            .collect()
    }

    #[test]
    fn field_keys_read_strings_and_integers() {
        let record = json!({ "id": 7, "slug": "amy" });

        assert_eq!(
            derive_row_key(&record, 0, &RowKeySpec::default()),
            RowKey::Int(7)
        );
        assert_eq!(
            derive_row_key(&record, 0, &RowKeySpec::Field("slug".to_string())),
            RowKey::Text("amy".to_string())
        );
    }

    #[test]
    fn absent_or_null_field_falls_back_to_position() {
        let spec = RowKeySpec::default();

        assert_eq!(derive_row_key(&json!({ "name": "Amy" }), 4, &spec), RowKey::Index(4));
        assert_eq!(derive_row_key(&json!({ "id": null }), 2, &spec), RowKey::Index(2));
    }

    #[test]
    fn derivation_function_is_applied_verbatim() {
        let spec = RowKeySpec::Derive(Rc::new(|record: &Value| {
            RowKey::Text(format!(
                "{}-{}",
                record["id"],
                record["name"].as_str().unwrap_or_default()
            ))
        }));

        assert_eq!(
            derive_row_key(&json!({ "id": 2, "name": "Amy" }), 0, &spec),
            RowKey::Text("2-Amy".to_string())
        );
    }

    #[test]
    fn selecting_twice_is_idempotent() {
        let mut state = SelectionState::default();

        state.set_row_selected(RowKey::Int(2), true);
        state.set_row_selected(RowKey::Int(2), true);

        assert_eq!(state.len(), 1);
        assert!(state.is_selected(&RowKey::Int(2)));

        state.set_row_selected(RowKey::Int(2), false);
        assert!(state.is_empty());
    }

    #[test]
    fn select_all_then_clear_all() {
        let users = users();
        let spec = RowKeySpec::default();
        let mut state = SelectionState::default();

        state.select_all(keys_of(&users, &spec));
        assert!(state.is_all_selected(users.len()));
        assert!(!state.is_partially_selected(users.len()));
        assert_eq!(state.selected_records(&users, &spec), users);

        state.clear();
        assert!(!state.is_all_selected(users.len()));
        assert!(!state.is_partially_selected(users.len()));
        assert_eq!(state.selected_records(&users, &spec), Vec::<Value>::new());
    }

    #[test]
    fn select_all_replaces_a_partial_selection() {
        let users = users();
        let spec = RowKeySpec::default();
        let mut state = SelectionState::default();

        state.set_row_selected(RowKey::Int(2), true);
        state.select_all(keys_of(&users, &spec));

        // The projection follows dataset order, not selection order.
        assert_eq!(state.selected_records(&users, &spec), users);
        assert!(state.is_all_selected(users.len()));
    }

    #[test]
    fn one_of_many_reads_as_partial() {
        let users = users();
        let spec = RowKeySpec::default();
        let mut state = SelectionState::default();

        state.set_row_selected(RowKey::Int(2), true);

        assert!(state.is_partially_selected(users.len()));
        assert!(!state.is_all_selected(users.len()));
        assert_eq!(
            state.selected_records(&users, &spec),
            vec![json!({ "id": 2, "name": "Amy" })]
        );
    }

    #[test]
    fn empty_selection_is_neither_all_nor_partial() {
        let state = SelectionState::default();

        assert!(!state.is_all_selected(3));
        assert!(!state.is_partially_selected(3));
        assert!(!state.is_all_selected(0));
    }

    #[test]
    fn rows_removed_from_the_dataset_drop_out_of_the_projection() {
        let users = users();
        let spec = RowKeySpec::default();
        let mut state = SelectionState::default();

        state.select_all(keys_of(&users, &spec));

        let shrunk = vec![users[0].clone(), users[2].clone()];
        assert_eq!(state.selected_records(&shrunk, &spec), shrunk);
        // The stale identity stays in the set, so the predicates see three.
        assert_eq!(state.len(), 3);
        assert!(!state.is_all_selected(shrunk.len()));
    }

    #[test]
    fn projection_preserves_dataset_order() {
        let users = users();
        let spec = RowKeySpec::default();
        let mut state = SelectionState::default();

        state.set_row_selected(RowKey::Int(3), true);
        state.set_row_selected(RowKey::Int(1), true);

        assert_eq!(
            state.selected_records(&users, &spec),
            vec![users[0].clone(), users[2].clone()]
        );
    }
}
