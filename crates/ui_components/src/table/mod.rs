//! Sortable, selectable data table.
//!
//! The component is a thin presentation layer over two pure controllers: the
//! sort state in [`sort`] and the selection set in [`selection`]. Every
//! render derives the visible row order and checkbox states from that state;
//! nothing about the ordering or the selection lives in the DOM.

use std::rc::Rc;

use leptos::*;
use serde_json::Value;

use crate::icon::{Icon, IconName, IconSize};
use crate::tokens::{bool_token, merge_layout_class, Theme};

pub mod selection;
pub mod sort;

use selection::{derive_row_key, RowKeySpec, SelectionState};
use sort::{display_text, sort_records, SortOrder, SortState};

/// Renders one table cell from the field value, the full record, and the row
/// index within the visible order.
pub type CellRender = Rc<dyn Fn(&Value, &Value, usize) -> View>;

#[derive(Clone)]
/// Describes one table column.
pub struct Column {
    /// Unique identifier within the column set. Uniqueness is a caller
    /// invariant; duplicates silently break sort indicators.
    pub key: String,
    /// Header display label.
    pub title: String,
    /// Field name read from each record.
    pub data_index: String,
    /// Whether header clicks cycle this column's sort order.
    pub sortable: bool,
    /// Optional CSS width hint forwarded to the header cell.
    pub width: Option<&'static str>,
    /// Optional presentation override for body cells.
    pub render: Option<CellRender>,
}

impl Column {
    /// Creates a plain, non-sortable column.
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        data_index: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            data_index: data_index.into(),
            sortable: false,
            width: None,
            render: None,
        }
    }

    /// Marks the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Sets the header width hint.
    pub fn width(mut self, width: &'static str) -> Self {
        self.width = Some(width);
        self
    }

    /// Installs a cell presentation override.
    pub fn render(mut self, render: impl Fn(&Value, &Value, usize) -> View + 'static) -> Self {
        self.render = Some(Rc::new(render));
        self
    }
}

#[component]
/// Tabular data display with single-column sorting and row selection.
///
/// Records are JSON objects; columns read one field each. `on_row_select`
/// fires with the full ordered selection after every selection-affecting
/// interaction — a single toggle, select-all, or clear-all.
pub fn DataTable(
    /// Ordered dataset. Insertion order is the unsorted display order.
    #[prop(into)]
    records: MaybeSignal<Vec<Value>>,
    /// Column definitions, in display order.
    columns: Vec<Column>,
    /// Shows a loading panel instead of the table while set.
    #[prop(optional, into)]
    loading: MaybeSignal<bool>,
    /// Adds the selection column and the select-all header checkbox.
    #[prop(optional)]
    selectable: bool,
    /// Receives the ordered selected records after every selection change.
    #[prop(optional)]
    on_row_select: Option<Callback<Vec<Value>>>,
    /// How row identities are derived. Defaults to reading the `id` field.
    #[prop(optional)]
    row_key: Option<RowKeySpec>,
    /// Message shown when the dataset is empty.
    #[prop(optional, into)]
    empty_message: Option<String>,
    /// Color scheme token.
    #[prop(default = Theme::Light)]
    theme: Theme,
    /// Alternating row background token.
    #[prop(default = true)]
    striped: bool,
    /// Row hover highlight token.
    #[prop(default = true)]
    hover: bool,
    /// Extra class merged onto the frame element.
    #[prop(optional)]
    layout_class: Option<&'static str>,
) -> impl IntoView {
    let records = Signal::derive(move || records.get());
    let loading = Signal::derive(move || loading.get());
    let columns = store_value(columns);
    let key_spec = store_value(row_key.unwrap_or_default());
    let empty_message =
        store_value(empty_message.unwrap_or_else(|| "No data available".to_string()));

    let sort = create_rw_signal(SortState::default());
    let selection = create_rw_signal(SelectionState::default());

    let visible = create_memo(move |_| {
        records.with(|records| columns.with_value(|columns| sort_records(records, columns, &sort.get())))
    });

    let all_selected = Signal::derive(move || {
        let len = records.with(Vec::len);
        selection.with(|selection| selection.is_all_selected(len))
    });
    let partially_selected = Signal::derive(move || {
        let len = records.with(Vec::len);
        selection.with(|selection| selection.is_partially_selected(len))
    });

    // Every selection transition completes (state update plus notification)
    // before the next event is processed.
    let notify = move || {
        if let Some(on_row_select) = on_row_select {
            let projected = records.with(|records| {
                key_spec
                    .with_value(|spec| selection.with(|selection| selection.selected_records(records, spec)))
            });
            on_row_select.call(projected);
        }
    };

    let handle_select_all = move |ev: web_sys::Event| {
        let checked = event_target_checked(&ev);
        selection.update(|selection| {
            if checked {
                let keys = records.with(|records| {
                    key_spec.with_value(|spec| {
                        records
                            .iter()
                            .enumerate()
                            .map(|(index, record)| derive_row_key(record, index, spec))
                            .collect::<Vec<_>>()
                    })
                });
                selection.select_all(keys);
            } else {
                selection.clear();
            }
        });
        notify();
    };

    let header_cells = move || {
        columns.with_value(|columns| {
            columns
                .iter()
                .cloned()
                .map(|column| {
                    let title = column.title.clone();
                    let width = column.width;
                    let sortable = column.sortable;
                    let indicator_key = column.key.clone();
                    let order = Signal::derive(move || {
                        sort.with(|sort| sort.order_for(&indicator_key))
                    });
                    view! {
                        <th
                            data-ui-slot="header-cell"
                            data-ui-sortable=bool_token(sortable)
                            style:width=width
                            data-ui-sort=move || order.get().map(SortOrder::token).unwrap_or("none")
                            on:click=move |_| sort.update(|sort| sort.toggle(&column))
                        >
                            <span data-ui-slot="header-label">{title}</span>
                            {sortable.then(|| {
                                view! {
                                    <span data-ui-slot="sort-indicator" aria-hidden="true">
                                        <span
                                            data-ui-slot="sort-up"
                                            data-ui-selected=move || {
                                                bool_token(order.get() == Some(SortOrder::Ascending))
                                            }
                                        >
                                            <Icon icon=IconName::ChevronUp size=IconSize::Xs />
                                        </span>
                                        <span
                                            data-ui-slot="sort-down"
                                            data-ui-selected=move || {
                                                bool_token(order.get() == Some(SortOrder::Descending))
                                            }
                                        >
                                            <Icon icon=IconName::ChevronDown size=IconSize::Xs />
                                        </span>
                                    </span>
                                }
                            })}
                        </th>
                    }
                })
                .collect_view()
        })
    };

    let body_rows = move || {
        visible
            .get()
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                let key = key_spec.with_value(|spec| derive_row_key(&record, index, spec));
                let key_token = key.to_string();
                let is_selected = {
                    let key = key.clone();
                    Signal::derive(move || selection.with(|selection| selection.is_selected(&key)))
                };
                let checkbox = selectable.then(|| {
                    let key = key.clone();
                    view! {
                        <td data-ui-slot="selection-cell">
                            <input
                                type="checkbox"
                                class="ui-checkbox"
                                data-ui-kind="checkbox"
                                aria-label="Select row"
                                prop:checked=move || is_selected.get()
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    selection.update(|selection| {
                                        selection.set_row_selected(key.clone(), checked)
                                    });
                                    notify();
                                }
                            />
                        </td>
                    }
                });
                let cells = columns.with_value(|columns| {
                    columns
                        .iter()
                        .map(|column| {
                            let value =
                                record.get(&column.data_index).cloned().unwrap_or(Value::Null);
                            let content = match &column.render {
                                Some(render) => render(&value, &record, index),
                                None => display_text(&value).into_view(),
                            };
                            view! { <td data-ui-slot="cell">{content}</td> }
                        })
                        .collect_view()
                });
                view! {
                    <tr
                        data-ui-slot="row"
                        data-row-key=key_token
                        data-ui-selected=move || bool_token(is_selected.get())
                        data-ui-striped=bool_token(striped && index % 2 == 1)
                        data-ui-hover=bool_token(hover)
                    >
                        {checkbox}
                        {cells}
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <div
            class=merge_layout_class("ui-data-table-frame", layout_class)
            data-ui-primitive="true"
            data-ui-kind="data-table-frame"
            data-ui-theme=theme.token()
        >
            {move || {
                if loading.get() {
                    view! {
                        <div data-ui-slot="status-panel" data-ui-state="loading" role="status">
                            <Icon icon=IconName::Spinner size=IconSize::Md />
                            <span data-ui-slot="status-label">"Loading data..."</span>
                        </div>
                    }
                    .into_view()
                } else if records.with(Vec::is_empty) {
                    view! {
                        <div data-ui-slot="status-panel" data-ui-state="empty">
                            <span data-ui-slot="status-label">
                                {empty_message.with_value(Clone::clone)}
                            </span>
                        </div>
                    }
                    .into_view()
                } else {
                    view! {
                        <div data-ui-slot="scroll">
                            <table class="ui-data-table" data-ui-kind="data-table">
                                <thead data-ui-slot="head">
                                    <tr>
                                        {selectable.then(|| {
                                            view! {
                                                <th data-ui-slot="selection-cell">
                                                    <input
                                                        type="checkbox"
                                                        class="ui-checkbox"
                                                        data-ui-kind="checkbox"
                                                        aria-label="Select all rows"
                                                        prop:checked=move || all_selected.get()
                                                        prop:indeterminate=move || {
                                                            partially_selected.get()
                                                        }
                                                        on:change=handle_select_all
                                                    />
                                                </th>
                                            }
                                        })}
                                        {header_cells()}
                                    </tr>
                                </thead>
                                <tbody data-ui-slot="body">{body_rows()}</tbody>
                            </table>
                        </div>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}
