use crate::catalog::filter;
use crate::engine::ResponseEngine;
use crate::{AvailabilityFilter, CategoryFilter, Intent, IntentMask, MapPoint, WaterSource};
use chrono::{Local, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use std::time::Duration;

static DEFAULT_ENGINE: Lazy<ResponseEngine> =
    Lazy::new(|| ResponseEngine::new(crate::rules::chat::get()).expect("canonical chat rules are valid"));

/// Session context.
///
/// Holds the time new chat turns are stamped with.
#[derive(Debug, Clone)]
pub struct Context {
    pub reference_time: NaiveDateTime,
}

impl Context {
    pub fn now() -> Self {
        Self { reference_time: Local::now().naive_local() }
    }
}

impl Default for Context {
    fn default() -> Self {
        if cfg!(test) {
            let reference_time =
                NaiveDate::from_ymd_opt(2024, 5, 1).and_then(|d| d.and_hms_opt(9, 0, 0)).unwrap_or_default();
            Self { reference_time }
        } else {
            Self::now()
        }
    }
}

/// Options that affect filtering.
#[derive(Debug, Clone)]
pub struct Options {
    /// Strip surrounding whitespace from search queries before matching.
    /// When `false`, a whitespace-only query is a real substring target.
    pub trim_query: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { trim_query: true }
    }
}

/// A rule that had a trigger in the utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub rule: String,
    pub intent: Intent,
    pub trigger: String,
}

/// Additional details returned by [`respond_verbose`].
#[derive(Debug, Clone)]
pub struct ResponseDetails {
    /// The case-folded utterance the triggers were matched against.
    pub folded: String,
    /// Every trigger hit, in rule-table order. The first one won.
    pub candidates: Vec<Candidate>,
    /// Intents with at least one candidate, winner included.
    pub intents: IntentMask,
    /// Time spent folding and scanning.
    pub scan: Duration,
    pub total: Duration,
}

/// Result from [`respond_verbose`] and [`respond_verbose_with`].
#[derive(Debug, Clone)]
pub struct ResponseVerbose {
    pub text: String,
    pub reply: String,
    pub intent: Intent,
    /// Name of the winning rule, `None` for the fallback reply.
    pub rule: Option<String>,
    pub elapsed: Duration,
    pub details: ResponseDetails,
}

/// The engine built from the canonical chat rule table.
pub fn default_engine() -> &'static ResponseEngine {
    &DEFAULT_ENGINE
}

/// Reply to `text` using the canonical rule table.
///
/// # Example
/// ```
/// use aquabot::respond;
///
/// assert_eq!(respond("HELLO"), respond("hello"));
/// ```
pub fn respond(text: &str) -> &'static str {
    DEFAULT_ENGINE.respond(text)
}

pub fn respond_verbose(text: &str) -> ResponseVerbose {
    respond_verbose_with(&DEFAULT_ENGINE, text)
}

/// Reply to `text` with `engine` and return every candidate plus timings.
///
/// The reply is always the one [`ResponseEngine::respond`] would return.
pub fn respond_verbose_with(engine: &ResponseEngine, text: &str) -> ResponseVerbose {
    let run = engine.run(text);
    let intent = run.intent();

    let candidates = run
        .scan
        .hits
        .iter()
        .map(|hit| Candidate { rule: hit.rule_name.to_string(), intent: hit.intent, trigger: hit.trigger.to_string() })
        .collect();

    ResponseVerbose {
        text: text.to_string(),
        reply: run.reply.to_string(),
        intent,
        rule: run.winner.map(|rule| rule.name.to_string()),
        elapsed: run.metrics.total,
        details: ResponseDetails {
            folded: run.scan.folded,
            candidates,
            intents: run.scan.intents,
            scan: run.metrics.scan,
            total: run.metrics.total,
        },
    }
}

/// Sources whose name or address contains `query` and whose availability
/// passes `availability`, in catalog order.
pub fn filter_sources<'a>(
    catalog: &'a [WaterSource],
    query: &str,
    availability: &AvailabilityFilter,
) -> Vec<&'a WaterSource> {
    filter_sources_with(catalog, query, availability, &Options::default())
}

pub fn filter_sources_with<'a>(
    catalog: &'a [WaterSource],
    query: &str,
    availability: &AvailabilityFilter,
    options: &Options,
) -> Vec<&'a WaterSource> {
    filter::filter_sources(catalog, query, availability, options)
}

/// Map points matching `query` and `category`, in catalog order.
pub fn filter_map_points<'a>(points: &'a [MapPoint], query: &str, category: &CategoryFilter) -> Vec<&'a MapPoint> {
    filter_map_points_with(points, query, category, &Options::default())
}

pub fn filter_map_points_with<'a>(
    points: &'a [MapPoint],
    query: &str,
    category: &CategoryFilter,
    options: &Options,
) -> Vec<&'a MapPoint> {
    filter::filter_map_points(points, query, category, options)
}
