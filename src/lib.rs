//! Aggregation layer over the article and folder domains.
//!
//! Articles are enriched with their folder context (name, path and
//! breadcrumb), listings can be scoped to a whole folder subtree, and the
//! cross-domain rules (no article filed in a missing folder, no deletion of a
//! folder that still holds articles) are enforced here.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
