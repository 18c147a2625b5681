pub mod date_input;
pub mod date_range_filter;
pub mod notice;
