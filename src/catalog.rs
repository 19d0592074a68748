//! Water-source catalog and filtering.
//!
//! The catalog is read-only: it is built once (from seed data or a JSON file)
//! and filtering only ever returns borrowed views over it, in catalog order.
//!
//! ```text
//! JSON / seed ── Catalog::new (validate ids, distances) ── &[WaterSource]
//!                                                              │
//!           query + Selection<Availability> ──▶ filter_sources ┤
//!                                                              v
//!                                                     Vec<&WaterSource>
//! ```
//!
//! The map view runs the same inclusion rule over [`MapPoint`]s, keyed on
//! [`Category`] instead of [`Availability`]; both go through [`select_by`].

#[path = "catalog/filter.rs"]
pub(crate) mod filter;
#[path = "catalog/seed.rs"]
pub mod seed;
#[path = "catalog/source.rs"]
mod source;
#[path = "catalog/store.rs"]
mod store;

pub use filter::{AvailabilityFilter, CategoryFilter, FilterSummary, Searchable, Selection, select, select_by};
pub use source::{Availability, Category, MapPoint, SourceKind, WaterSource};
pub use store::Catalog;
