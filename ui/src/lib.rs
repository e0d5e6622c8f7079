//! Shared UI crate for the RIG site. The header view and its renderer-independent
//! element tree live here; platform crates only mount them.

pub mod core;

pub mod components {
    // Site header (components/site_header.rs)
    pub mod site_header;
    pub use site_header::{render, ElementNode, HeaderMarkup, SiteHeader};
}
