//! Client modal shared by "Crear cliente" and "Editar cliente".

mod view;
mod view_model;

pub use view::ClientDetails;
pub use view_model::ClientDetailsViewModel;
