//! Screens shared by the offer, order, delivery note and invoice lists.
//!
//! - `table`: sortable `DocumentTable` and the `DocumentLinesModal`
//! - `model`: list state, date filter, conversion and PDF download

pub mod model;
pub mod table;

pub use model::{DocumentListModel, DocumentListPage};
pub use table::{DocumentLinesModal, DocumentTable, DocumentTableState};
