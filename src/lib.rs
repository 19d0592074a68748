extern crate self as aquabot;

#[macro_use]
mod macros;
mod api;
mod catalog;
mod chat;
mod engine;
mod error;
mod rules;

pub use api::{
    Candidate, Context, Options, ResponseDetails, ResponseVerbose, default_engine, filter_map_points,
    filter_map_points_with, filter_sources, filter_sources_with, respond, respond_verbose, respond_verbose_with,
};
pub use catalog::{
    Availability, AvailabilityFilter, Catalog, Category, CategoryFilter, FilterSummary, MapPoint, Searchable,
    Selection, SourceKind, WaterSource, seed, select, select_by,
};
pub use chat::{ChatSession, ChatTurn, Speaker};
pub use engine::{IntentMask, ResponseEngine};
pub use error::{Error, Result};
pub use rules::{FALLBACK_REPLY, QUICK_RESPONSES, WELCOME_MESSAGE};

use std::fmt;

// --- Rule types ---------------------------------------------------------------

/// Conversational intent a keyword rule answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Hotline and nearest immediately available supplier.
    Emergency,
    /// Nearby source count and nearest option.
    Location,
    /// Nearby water ATMs and best rate.
    Atm,
    /// Current price range and cheapest supplier.
    Price,
    /// Certification / drinking-water standard statement.
    Quality,
    /// Direct contact numbers for booking.
    Booking,
    /// Greeting plus capability summary.
    Greeting,
    /// Nothing matched; capability menu.
    Fallback,
}

impl Intent {
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Emergency => "emergency",
            Intent::Location => "location",
            Intent::Atm => "atm",
            Intent::Price => "price",
            Intent::Quality => "quality",
            Intent::Booking => "booking",
            Intent::Greeting => "greeting",
            Intent::Fallback => "fallback",
        }
    }

    /// Bit for this intent in an [`IntentMask`]. `Fallback` has no bit.
    pub fn mask(&self) -> IntentMask {
        match self {
            Intent::Emergency => IntentMask::EMERGENCY,
            Intent::Location => IntentMask::LOCATION,
            Intent::Atm => IntentMask::ATM,
            Intent::Price => IntentMask::PRICE,
            Intent::Quality => IntentMask::QUALITY,
            Intent::Booking => IntentMask::BOOKING,
            Intent::Greeting => IntentMask::GREETING,
            Intent::Fallback => IntentMask::empty(),
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A keyword rule: when any of `triggers` occurs in the case-folded
/// utterance, `reply` is returned.
///
/// Rules are written with the `keyword_rule!` macro (see `src/macros.rs`) and
/// compiled into a [`ResponseEngine`]. Their position in the table is their
/// precedence: the earliest matching rule wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    pub name: &'static str,
    pub intent: Intent,
    /// Lowercase substrings; must be non-empty.
    pub triggers: &'static [&'static str],
    pub reply: &'static str,
}
