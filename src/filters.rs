//! Filter chain rejecting non-object regions.
//!
//! Three independent predicates, each a pure function of one record and its
//! threshold, composed by logical AND. Order never changes the surviving set
//! (only the short-circuit cost), so the chain applies them in the cheapest
//! order. Every rejection is logged at debug level with the reason, and the
//! chain reports per-kind rejection counts.
use crate::types::ObjectRecord;
use log::debug;
use serde::Serialize;

/// Which predicate rejected a region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    Position,
    Size,
    Shape,
}

/// A single composable predicate over one candidate record.
#[derive(Clone, Copy, Debug)]
pub enum RegionFilter {
    /// Rejects centroids inside the top margin band (fixed capture overlay).
    Position { top_margin_fraction: f64 },
    /// Rejects regions below a minimum pixel count.
    Size { min_area: u64 },
    /// Rejects elongations above a maximum (thin, text-like artifacts).
    Shape { max_aspect_ratio: f64 },
}

impl RegionFilter {
    pub fn kind(&self) -> FilterKind {
        match self {
            RegionFilter::Position { .. } => FilterKind::Position,
            RegionFilter::Size { .. } => FilterKind::Size,
            RegionFilter::Shape { .. } => FilterKind::Shape,
        }
    }

    /// True when the record passes this predicate.
    pub fn accept(&self, record: &ObjectRecord, image_height: usize) -> bool {
        match *self {
            RegionFilter::Position {
                top_margin_fraction,
            } => record.centroid_y >= top_margin_fraction * image_height as f64,
            RegionFilter::Size { min_area } => record.area >= min_area,
            RegionFilter::Shape { max_aspect_ratio } => record.aspect_ratio <= max_aspect_ratio,
        }
    }
}

/// Outcome of running a chain over the candidate list.
#[derive(Clone, Debug, Default, Serialize)]
pub struct FilterOutcome {
    /// Survivors in their original order.
    pub survivors: Vec<ObjectRecord>,
    pub rejected_position: usize,
    pub rejected_size: usize,
    pub rejected_shape: usize,
}

/// Ordered list of predicates applied by AND.
#[derive(Clone, Debug)]
pub struct FilterChain {
    filters: Vec<RegionFilter>,
}

impl FilterChain {
    pub fn new(filters: Vec<RegionFilter>) -> Self {
        Self { filters }
    }

    /// Apply every predicate to every candidate, preserving order.
    pub fn apply(&self, candidates: Vec<ObjectRecord>, image_height: usize) -> FilterOutcome {
        let mut outcome = FilterOutcome::default();
        'next: for record in candidates {
            for filter in &self.filters {
                if !filter.accept(&record, image_height) {
                    debug!(
                        "filter: region {} rejected by {:?} (area={} centroid_y={:.1} aspect={:.2})",
                        record.label,
                        filter.kind(),
                        record.area,
                        record.centroid_y,
                        record.aspect_ratio
                    );
                    match filter.kind() {
                        FilterKind::Position => outcome.rejected_position += 1,
                        FilterKind::Size => outcome.rejected_size += 1,
                        FilterKind::Shape => outcome.rejected_shape += 1,
                    }
                    continue 'next;
                }
            }
            outcome.survivors.push(record);
        }
        outcome
    }
}
