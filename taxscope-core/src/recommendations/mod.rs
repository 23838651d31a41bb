//! Static tax-saving recommendations keyed by jurisdiction name.

pub mod catalog;
mod selector;

pub use selector::{applicable_recommendations, recommend};
