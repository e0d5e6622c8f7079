//! Renderer-independent building blocks shared by the views.

pub mod element;
pub mod nav;

pub use element::{Attribute, ElementKind, ElementTree};
pub use nav::{HeaderConfig, NavLink, SITE_HEADER};
