//! Offer editor tab, create and edit mode.
//!
//! - view_model.rs: draft state, catalog loading, save command
//! - view.rs: Leptos component

mod view;
mod view_model;

pub use view::OfferEditor;
pub use view_model::OfferEditorViewModel;
