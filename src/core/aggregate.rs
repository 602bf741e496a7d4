use std::collections::HashMap;

use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;

use crate::core::types::{DataPoint, XValue};

/// Hashable identity of an X value for per-X accumulation.
///
/// Numbers compare with `-0 == 0`, dates by instant, strings by content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum XKey<'a> {
    Number(OrderedFloat<f64>),
    Date(DateTime<Utc>),
    Text(&'a str),
}

impl<'a> From<&'a XValue> for XKey<'a> {
    fn from(value: &'a XValue) -> Self {
        match value {
            XValue::Number(number) => Self::Number(OrderedFloat(*number)),
            XValue::Date(date) => Self::Date(*date),
            XValue::Text(text) => Self::Text(text),
        }
    }
}

/// Iterates the points of one chart in insertion order.
pub fn chart_points(points: &[DataPoint], chart_index: usize) -> impl Iterator<Item = &DataPoint> {
    points
        .iter()
        .filter(move |point| point.chart_index == chart_index)
}

/// Points of one chart, optionally stable-sorted by ascending `group_index`.
#[must_use]
pub fn flat_points(points: &[DataPoint], chart_index: usize, sorted: bool) -> Vec<&DataPoint> {
    let mut flat: Vec<&DataPoint> = chart_points(points, chart_index).collect();
    if sorted {
        // `sort_by_key` is stable: equal group indices keep insertion order.
        flat.sort_by_key(|point| point.group_index);
    }
    flat
}

/// Cumulative per-X sums in input order.
///
/// Each emitted copy carries the running total at its X, so the stack order
/// is whatever order the input arrives in. Callers control it upstream.
pub fn stack_points<'a, I>(points: I) -> Vec<DataPoint>
where
    I: IntoIterator<Item = &'a DataPoint>,
{
    let mut totals: HashMap<XKey<'a>, f64> = HashMap::new();
    points
        .into_iter()
        .map(|point| {
            let total = totals.entry(XKey::from(&point.x)).or_insert(0.0);
            *total += point.y;
            point.with_y(*total)
        })
        .collect()
}

/// Stacked series of one chart.
#[must_use]
pub fn stacked_points(points: &[DataPoint], chart_index: usize) -> Vec<DataPoint> {
    stack_points(chart_points(points, chart_index))
}

/// Each point's share of the total at its X, in percent.
///
/// X values whose total is zero report `0` for all of their points.
pub fn percentage_points<'a, I>(points: I) -> Vec<DataPoint>
where
    I: IntoIterator<Item = &'a DataPoint>,
    I::IntoIter: Clone,
{
    let points = points.into_iter();
    let mut totals: HashMap<XKey<'a>, f64> = HashMap::new();
    for point in points.clone() {
        *totals.entry(XKey::from(&point.x)).or_insert(0.0) += point.y;
    }

    points
        .map(|point| {
            let total = totals.get(&XKey::from(&point.x)).copied().unwrap_or(0.0);
            let share = if total == 0.0 {
                0.0
            } else {
                point.y / total * 100.0
            };
            point.with_y(share)
        })
        .collect()
}
