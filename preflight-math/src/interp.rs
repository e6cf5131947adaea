//! Bilinear interpolation over sparse two-key tables.
//!
//! Flight manual tables are published as irregular grids,
//! often with cells missing at the hot or high corners.
//! [`interpolate`] brackets the target on both keys,
//! blends the four surrounding records,
//! and degrades to the nearest available record when the grid has holes.

use std::time::Duration;

use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::Quantity;


/// A value that can be linearly blended between two table records.
pub trait Blend: Copy {
    /// Returns `self` at `s == 0` and `other` at `s == 1`.
    ///
    /// Implementations must reproduce the endpoints exactly.
    #[must_use]
    fn blend(self, other: Self, s: f32) -> Self;
}

impl Blend for f32 {
    fn blend(self, other: Self, s: f32) -> Self { self * (1.0 - s) + other * s }
}

impl<Base, Dt> Blend for Quantity<f32, Base, Dt> {
    fn blend(self, other: Self, s: f32) -> Self { self.lerp(other, s) }
}

impl Blend for Duration {
    fn blend(self, other: Self, s: f32) -> Self {
        if s <= 0.0 {
            return self;
        }
        if s >= 1.0 {
            return other;
        }
        self.mul_f32(1.0 - s) + other.mul_f32(s)
    }
}

/// A record of a two-key lookup table.
pub trait TableRecord {
    type Value: Blend;

    /// The two lookup keys of this record, as raw numbers in the table's units.
    fn keys(&self) -> [f32; 2];

    fn value(&self) -> Self::Value;
}

/// How an interpolated value was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, serde::Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    /// All four bracketing records exist.
    Bilinear,
    /// At least one bracketing record is missing,
    /// so the first available corner was returned as-is.
    CornerFallback,
    /// None of the bracketing records exist,
    /// so the record closest to the target was returned as-is.
    NearestRecord,
}

impl Method {
    /// Whether the value was not produced by a full bilinear blend.
    #[must_use]
    pub fn is_fallback(self) -> bool { self != Self::Bilinear }
}

/// An interpolated table value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interpolation<V> {
    pub value:  V,
    pub method: Method,
}

/// The pair of adjacent nodes around a target on one key.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Bracket {
    low:      f32,
    high:     f32,
    /// `(target - low) / (high - low)`, or 0 if `low == high`.
    fraction: f32,
}

impl Bracket {
    fn clamped(node: f32) -> Self { Self { low: node, high: node, fraction: 0.0 } }

    /// Finds the bracket of `target` in the sorted distinct `nodes`.
    ///
    /// Targets outside the node range clamp to the extreme node.
    /// A target equal to a node uses that node as the low endpoint.
    fn find(nodes: &[f32], target: f32) -> Option<Self> {
        let (&first, &last) = (nodes.first()?, nodes.last()?);
        if target <= first {
            return Some(Self::clamped(first));
        }
        if target >= last {
            return Some(Self::clamped(last));
        }

        let (low, high) = nodes
            .iter()
            .copied()
            .tuple_windows()
            .find(|&(low, high)| low <= target && target < high)?;
        let fraction = if high > low { (target - low) / (high - low) } else { 0.0 };
        Some(Self { low, high, fraction })
    }
}

fn distinct_keys<R: TableRecord>(records: &[R], dimension: usize) -> Vec<f32> {
    records
        .iter()
        .map(|record| record.keys()[dimension])
        .filter(|key| key.is_finite())
        .map(OrderedFloat)
        .sorted()
        .dedup()
        .map(|key| key.0)
        .collect()
}

fn find_record<R: TableRecord>(records: &[R], x: f32, y: f32) -> Option<&R> {
    records.iter().find(|record| record.keys() == [x, y])
}

fn nearest_record<R: TableRecord>(
    records: &[R],
    [x, y]: [f32; 2],
    [x_span, y_span]: [f32; 2],
) -> Option<&R> {
    records.iter().min_by_key(|record| {
        let [rx, ry] = record.keys();
        let dx = (rx - x) / x_span;
        let dy = (ry - y) / y_span;
        OrderedFloat(dx * dx + dy * dy)
    })
}

fn span(nodes: &[f32]) -> f32 {
    match (nodes.first(), nodes.last()) {
        (Some(&first), Some(&last)) if last > first => last - first,
        _ => 1.0,
    }
}

/// Interpolates the value of `records` at keys `(x, y)`.
///
/// Returns `None` if the table has no records with finite keys,
/// or if the target is not finite.
#[must_use]
pub fn interpolate<R: TableRecord>(
    records: &[R],
    x: f32,
    y: f32,
) -> Option<Interpolation<R::Value>> {
    if !x.is_finite() || !y.is_finite() {
        tracing::debug!("Non-finite interpolation target ({x}, {y})");
        return None;
    }

    let x_nodes = distinct_keys(records, 0);
    let y_nodes = distinct_keys(records, 1);
    let x_bracket = Bracket::find(&x_nodes, x)?;
    let y_bracket = Bracket::find(&y_nodes, y)?;

    let corners = [
        find_record(records, x_bracket.low, y_bracket.low),
        find_record(records, x_bracket.low, y_bracket.high),
        find_record(records, x_bracket.high, y_bracket.low),
        find_record(records, x_bracket.high, y_bracket.high),
    ];

    if let [Some(ll), Some(lh), Some(hl), Some(hh)] = corners {
        let at_x_low = ll.value().blend(lh.value(), y_bracket.fraction);
        let at_x_high = hl.value().blend(hh.value(), y_bracket.fraction);
        let value = at_x_low.blend(at_x_high, x_bracket.fraction);
        return Some(Interpolation { value, method: Method::Bilinear });
    }

    if let Some(corner) = corners.into_iter().flatten().next() {
        tracing::debug!("Table has holes around ({x}, {y}), using corner {:?}", corner.keys());
        return Some(Interpolation { value: corner.value(), method: Method::CornerFallback });
    }

    let nearest = nearest_record(records, [x, y], [span(&x_nodes), span(&y_nodes)])?;
    tracing::debug!("No bracketing records around ({x}, {y}), using nearest {:?}", nearest.keys());
    Some(Interpolation { value: nearest.value(), method: Method::NearestRecord })
}
