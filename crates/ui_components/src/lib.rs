//! Shared UI component library for browser-rendered applications.
//!
//! The crate owns two presentational widgets — a sortable, selectable
//! [`DataTable`] and a validated [`InputField`] — together with a centralized
//! icon API and the stable `data-ui-*` DOM contract consumed by the host CSS
//! layers. Consumers compose these components instead of emitting ad hoc
//! table or form markup.
//!
//! The table's interactive state lives in two pure pieces, the sort
//! controller ([`SortState`]/[`sort_records`]) and the selection tracker
//! ([`SelectionState`]), so ordering and selection bookkeeping stay testable
//! without a DOM.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod input_field;
mod table;
mod tokens;

pub use icon::{Icon, IconName, IconSize};
pub use input_field::InputField;
pub use table::selection::{derive_row_key, RowKey, RowKeySpec, SelectionState};
pub use table::sort::{sort_records, SortOrder, SortState};
pub use table::{CellRender, Column, DataTable};
pub use tokens::{FieldSize, FieldVariant, InputKind, Theme};

/// Convenience imports for application crates consuming the component set.
pub mod prelude {
    pub use crate::{
        derive_row_key, sort_records, CellRender, Column, DataTable, FieldSize, FieldVariant,
        Icon, IconName, IconSize, InputField, InputKind, RowKey, RowKeySpec, SelectionState,
        SortOrder, SortState, Theme,
    };
}
