//! Search + selection filtering.
//!
//! An item is kept iff both hold:
//!
//! 1. **Text**: the (case-folded) query is empty, or is a substring of the
//!    case-folded name, or of the case-folded address.
//! 2. **Selection**: the selection is [`Selection::All`], or the item's field
//!    equals the selected variant.
//!
//! Output keeps catalog order; nothing is re-sorted (not even by distance).
//! The inclusion rule lives in [`select_by`] only. Availability and map
//! category filtering are instantiations of it.

use super::source::{Availability, Category, MapPoint, WaterSource};
use crate::{Error, Options};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Either "match all" or one specific variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T> Selection<T> {
    /// Whether an item whose field is `value` passes, under `matches`.
    pub fn admits_with<V: ?Sized>(&self, value: &V, matches: impl Fn(&V, &T) -> bool) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(selected) => matches(value, selected),
        }
    }

    pub fn admits(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.admits_with(value, |v, selected| v == selected)
    }
}

impl<T> FromStr for Selection<T>
where
    T: FromStr<Err = Error>,
{
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") { Ok(Selection::All) } else { s.parse().map(Selection::Only) }
    }
}

pub type AvailabilityFilter = Selection<Availability>;
pub type CategoryFilter = Selection<Category>;

/// Records that can be found by free-text search.
pub trait Searchable {
    fn name(&self) -> &str;
    fn address(&self) -> &str;
}

impl Searchable for WaterSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn address(&self) -> &str {
        &self.address
    }
}

impl Searchable for MapPoint {
    fn name(&self) -> &str {
        &self.name
    }

    fn address(&self) -> &str {
        &self.address
    }
}

/// Generic filter: text match plus `selection` checked by `matches`.
pub fn select_by<'a, R, T>(
    items: &'a [R],
    query: &str,
    selection: &Selection<T>,
    matches: impl Fn(&R, &T) -> bool,
    options: &Options,
) -> Vec<&'a R>
where
    R: Searchable,
{
    let needle = fold_query(query, options);

    items.iter().filter(|item| text_matches(*item, &needle) && selection.admits_with(*item, &matches)).collect()
}

/// Generic filter comparing the field extracted by `field` for equality.
pub fn select<'a, R, T>(
    items: &'a [R],
    query: &str,
    selection: &Selection<T>,
    field: impl Fn(&R) -> T,
    options: &Options,
) -> Vec<&'a R>
where
    R: Searchable,
    T: PartialEq,
{
    let needle = fold_query(query, options);

    items.iter().filter(|item| text_matches(*item, &needle) && selection.admits(&field(item))).collect()
}

pub(crate) fn filter_sources<'a>(
    catalog: &'a [WaterSource],
    query: &str,
    availability: &AvailabilityFilter,
    options: &Options,
) -> Vec<&'a WaterSource> {
    let out = select(catalog, query, availability, |s| s.availability, options);
    debug!(query, filter = ?availability, shown = out.len(), total = catalog.len(), "filtered sources");
    out
}

pub(crate) fn filter_map_points<'a>(
    points: &'a [MapPoint],
    query: &str,
    category: &CategoryFilter,
    options: &Options,
) -> Vec<&'a MapPoint> {
    let out = select(points, query, category, |p| p.category, options);
    debug!(query, filter = ?category, shown = out.len(), total = points.len(), "filtered map points");
    out
}

fn fold_query(query: &str, options: &Options) -> String {
    let query = if options.trim_query { query.trim() } else { query };
    query.to_lowercase()
}

fn text_matches<R: Searchable + ?Sized>(item: &R, needle: &str) -> bool {
    needle.is_empty()
        || item.name().to_lowercase().contains(needle)
        || item.address().to_lowercase().contains(needle)
}

/// "Showing N of M" counts for a filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSummary {
    pub shown: usize,
    pub total: usize,
}

impl FilterSummary {
    pub fn new(shown: usize, total: usize) -> Self {
        Self { shown, total }
    }
}

impl fmt::Display for FilterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {} of {}", self.shown, self.total)
    }
}
