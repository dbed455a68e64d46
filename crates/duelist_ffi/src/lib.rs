//! Flutter/web bridge surface for `duelist_core`.

pub mod api;
