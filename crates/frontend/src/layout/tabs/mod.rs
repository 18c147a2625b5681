//! Tab management
//!
//! - `page`: `TabPage`, the wrapper that shows or hides one tab's content
//! - `registry`: tab key → view and tab key → required capability
//! - `tab_labels`: the single source of tab titles

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::tab_label_for_key;
