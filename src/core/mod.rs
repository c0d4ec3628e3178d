//! Core domain modules for EventLens.
//!
//! Contains the row model, the event catalog, alias-based field resolution,
//! the eligibility classifier, the record normalizer, pagination, and the
//! render-pass assembly that ties them together. Everything here is pure and
//! infallible.

pub mod alias;
pub mod catalog;
pub mod eligibility;
pub mod normalizer;
pub mod pagination;
pub mod record;
pub mod render_pass;
