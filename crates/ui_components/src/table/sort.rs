//! Sort controller for [`DataTable`](super::DataTable).
//!
//! Pure state transitions and a pure ordering function: header clicks cycle a
//! single column through ascending → descending → unsorted, and
//! [`sort_records`] derives a fresh ordered view from that state without
//! touching the input dataset.

use std::cmp::Ordering;

use serde_json::Value;

use super::Column;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Direction of an active column sort.
pub enum SortOrder {
    /// Smallest key first.
    Ascending,
    /// Largest key first.
    Descending,
}

impl SortOrder {
    /// Stable token used for `data-ui-sort` CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Which column is sorted and in which direction. The default is fully
/// unsorted: rows keep their insertion order.
pub struct SortState {
    /// Key of the sorted column, if any.
    pub column: Option<String>,
    /// Active direction, if any.
    pub order: Option<SortOrder>,
}

impl SortState {
    /// Advances the sort cycle for a clicked column header.
    ///
    /// Non-sortable columns are inert: the call is a silent no-op. Clicking a
    /// column other than the current one always restarts at ascending;
    /// clicking the current column steps ascending → descending → unsorted.
    pub fn toggle(&mut self, column: &Column) {
        if !column.sortable {
            return;
        }
        if self.column.as_deref() == Some(column.key.as_str()) {
            let next = match self.order {
                Some(SortOrder::Ascending) => Some(SortOrder::Descending),
                Some(SortOrder::Descending) => None,
                None => Some(SortOrder::Ascending),
            };
            self.column = next.map(|_| column.key.clone());
            self.order = next;
        } else {
            self.column = Some(column.key.clone());
            self.order = Some(SortOrder::Ascending);
        }
    }

    /// Active direction for the given column key, if it is the sorted one.
    pub fn order_for(&self, column_key: &str) -> Option<SortOrder> {
        (self.column.as_deref() == Some(column_key))
            .then_some(self.order)
            .flatten()
    }
}

/// Returns a fresh ordered view of `records` for the given sort state.
///
/// When the state is unsorted, or names a column key not present in
/// `columns`, the result is the dataset in insertion order. Otherwise rows
/// are compared on the sorted column's field: null or missing values sort
/// last in both directions, strings compare lexically, numbers numerically,
/// and mixed types by their display text. Ties keep their original relative
/// order via an explicit index tie-break, so the result is stable regardless
/// of the underlying sort primitive.
pub fn sort_records(records: &[Value], columns: &[Column], state: &SortState) -> Vec<Value> {
    let (Some(column_key), Some(order)) = (state.column.as_deref(), state.order) else {
        return records.to_vec();
    };
    let Some(column) = columns.iter().find(|column| column.key == column_key) else {
        return records.to_vec();
    };

    let mut decorated: Vec<(usize, &Value)> = records.iter().enumerate().collect();
    decorated.sort_by(|(left_index, left), (right_index, right)| {
        compare_cells(
            field_of(left, &column.data_index),
            field_of(right, &column.data_index),
            order,
        )
        .then_with(|| left_index.cmp(right_index))
    });
    decorated.into_iter().map(|(_, record)| record.clone()).collect()
}

fn field_of<'a>(record: &'a Value, data_index: &str) -> &'a Value {
    record.get(data_index).unwrap_or(&Value::Null)
}

fn compare_cells(left: &Value, right: &Value, order: SortOrder) -> Ordering {
    // Nulls sort last in both directions, so the direction flip applies only
    // to comparisons between two present values.
    match (left.is_null(), right.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ordering = match (left, right) {
                (Value::String(left), Value::String(right)) => compare_text(left, right),
                (Value::Number(left), Value::Number(right)) => left
                    .as_f64()
                    .unwrap_or(0.0)
                    .total_cmp(&right.as_f64().unwrap_or(0.0)),
                _ => compare_text(&display_text(left), &display_text(right)),
            };
            match order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        }
    }
}

fn compare_text(left: &str, right: &str) -> Ordering {
    // Dictionary-style ordering: case-insensitive first, case-sensitive
    // tie-break so distinct strings never compare equal.
    left.to_lowercase()
        .cmp(&right.to_lowercase())
        .then_with(|| left.cmp(right))
}

/// Display text for a cell value: strings verbatim, null empty, everything
/// else via its JSON rendering.
pub(crate) fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn columns() -> Vec<Column> {
        vec![
            Column::new("name", "Name", "name").sortable(),
            Column::new("age", "Age", "age").sortable(),
            Column::new("email", "Email", "email"),
        ]
    }

    fn person(id: u32, name: &str, age: i64) -> Value {
        json!({ "id": id, "name": name, "age": age })
    }

    fn names(records: &[Value]) -> Vec<&str> {
        records
            .iter()
            .map(|record| record["name"].as_str().unwrap_or_default())
            .collect()
    }

    #[test]
    fn first_click_on_a_new_column_starts_ascending() {
        let columns = columns();
        let mut state = SortState::default();

        state.toggle(&columns[0]);

        assert_eq!(state.column.as_deref(), Some("name"));
        assert_eq!(state.order, Some(SortOrder::Ascending));
        assert_eq!(state.order_for("name"), Some(SortOrder::Ascending));
        assert_eq!(state.order_for("age"), None);
    }

    #[test]
    fn switching_columns_restarts_at_ascending() {
        let columns = columns();
        let mut state = SortState::default();

        state.toggle(&columns[0]);
        state.toggle(&columns[0]);
        assert_eq!(state.order, Some(SortOrder::Descending));

        state.toggle(&columns[1]);
        assert_eq!(state.column.as_deref(), Some("age"));
        assert_eq!(state.order, Some(SortOrder::Ascending));
    }

    #[test]
    fn three_toggles_return_to_unsorted() {
        let columns = columns();
        let mut state = SortState::default();

        state.toggle(&columns[0]);
        state.toggle(&columns[0]);
        state.toggle(&columns[0]);

        assert_eq!(state, SortState::default());
    }

    #[test]
    fn non_sortable_column_is_inert() {
        let columns = columns();
        let mut state = SortState::default();

        state.toggle(&columns[2]);
        assert_eq!(state, SortState::default());

        state.toggle(&columns[0]);
        state.toggle(&columns[2]);
        assert_eq!(state.column.as_deref(), Some("name"));
        assert_eq!(state.order, Some(SortOrder::Ascending));
    }

    #[test]
    fn sort_cycle_restores_insertion_order() {
        let columns = columns();
        let records = vec![
            json!({ "id": 1, "name": "Bob" }),
            json!({ "id": 2, "name": "Amy" }),
            json!({ "id": 3, "name": "Cid" }),
        ];
        let mut state = SortState::default();

        state.toggle(&columns[0]);
        assert_eq!(names(&sort_records(&records, &columns, &state)), ["Amy", "Bob", "Cid"]);

        state.toggle(&columns[0]);
        assert_eq!(names(&sort_records(&records, &columns, &state)), ["Cid", "Bob", "Amy"]);

        state.toggle(&columns[0]);
        assert_eq!(names(&sort_records(&records, &columns, &state)), ["Bob", "Amy", "Cid"]);
    }

    #[test]
    fn numeric_columns_compare_numerically() {
        let columns = columns();
        let records = vec![
            person(1, "nine", 9),
            person(2, "ten", 10),
            person(3, "two", 2),
        ];
        let state = SortState {
            column: Some("age".to_string()),
            order: Some(SortOrder::Ascending),
        };

        assert_eq!(names(&sort_records(&records, &columns, &state)), ["two", "nine", "ten"]);
    }

    #[test]
    fn equal_keys_keep_their_relative_order() {
        let columns = columns();
        let records = vec![
            person(1, "first", 30),
            person(2, "second", 25),
            person(3, "third", 30),
            person(4, "fourth", 30),
        ];
        let state = SortState {
            column: Some("age".to_string()),
            order: Some(SortOrder::Ascending),
        };
        assert_eq!(
            names(&sort_records(&records, &columns, &state)),
            ["second", "first", "third", "fourth"]
        );

        let state = SortState {
            column: Some("age".to_string()),
            order: Some(SortOrder::Descending),
        };
        assert_eq!(
            names(&sort_records(&records, &columns, &state)),
            ["first", "third", "fourth", "second"]
        );
    }

    #[test]
    fn null_and_missing_values_sort_last_in_both_directions() {
        let columns = columns();
        let records = vec![
            json!({ "id": 1, "name": "Bob", "age": null }),
            json!({ "id": 2, "name": "Amy", "age": 41 }),
            json!({ "id": 3, "name": "Cid" }),
            json!({ "id": 4, "name": "Dee", "age": 29 }),
        ];

        let state = SortState {
            column: Some("age".to_string()),
            order: Some(SortOrder::Ascending),
        };
        assert_eq!(
            names(&sort_records(&records, &columns, &state)),
            ["Dee", "Amy", "Bob", "Cid"]
        );

        let state = SortState {
            column: Some("age".to_string()),
            order: Some(SortOrder::Descending),
        };
        assert_eq!(
            names(&sort_records(&records, &columns, &state)),
            ["Amy", "Dee", "Bob", "Cid"]
        );
    }

    #[test]
    fn mixed_types_compare_by_display_text() {
        let columns = vec![Column::new("code", "Code", "code").sortable()];
        let records = vec![
            json!({ "name": "bool", "code": true }),
            json!({ "name": "number", "code": 7 }),
            json!({ "name": "text", "code": "alpha" }),
        ];
        let state = SortState {
            column: Some("code".to_string()),
            order: Some(SortOrder::Ascending),
        };

        // "7" < "alpha" < "true" lexically.
        assert_eq!(names(&sort_records(&records, &columns, &state)), ["number", "text", "bool"]);
    }

    #[test]
    fn unknown_column_key_yields_insertion_order() {
        let columns = columns();
        let records = vec![person(1, "Bob", 30), person(2, "Amy", 25)];
        let state = SortState {
            column: Some("missing".to_string()),
            order: Some(SortOrder::Ascending),
        };

        assert_eq!(sort_records(&records, &columns, &state), records);
    }

    #[test]
    fn unsorted_state_clones_without_reordering() {
        let columns = columns();
        let records = vec![person(1, "Bob", 30), person(2, "Amy", 25)];

        let view = sort_records(&records, &columns, &SortState::default());

        assert_eq!(view, records);
    }

    #[test]
    fn string_compare_is_case_insensitive_first() {
        let columns = columns();
        let records = vec![
            person(1, "banana", 1),
            person(2, "Apple", 2),
            person(3, "cherry", 3),
        ];
        let state = SortState {
            column: Some("name".to_string()),
            order: Some(SortOrder::Ascending),
        };

        assert_eq!(
            names(&sort_records(&records, &columns, &state)),
            ["Apple", "banana", "cherry"]
        );
    }
}
