//! Page category constants for tab pages.
//!
//! Every page rendered inside a tab declares an HTML `id` in the format
//! `{entity}--{category}` (e.g. `"a003_offer--list"`) and a
//! `data-page-category` taken from the constants below.

/// List of records with filters and row actions.
pub const PAGE_CAT_LIST: &str = "list";

/// Editor for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// System page (home, administration, placeholders).
pub const PAGE_CAT_SYSTEM: &str = "system";
