pub mod aggregate;
pub mod draft;

pub use aggregate::{CreateOfferDto, Offer, OfferLineDto, UpdateOfferDto};
pub use draft::{DraftLine, OfferDraft};
