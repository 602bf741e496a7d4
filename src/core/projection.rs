use smallvec::SmallVec;
use tracing::{trace, warn};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::format::to_compact_string;
use crate::core::group_index::GroupKeySet;
use crate::core::record::{ProjectableRecord, Record, RecordGroup};
use crate::core::types::{DataPoint, MultiChartMode};
use crate::core::value::{parse_as_number, parse_as_x};
use crate::error::ChartResult;

/// Points emitted by a single record; most records carry only a few Y fields.
pub type EntryPoints = SmallVec<[DataPoint; 4]>;

/// Field selection shared by every record of a refresh.
#[derive(Debug, Clone, Copy)]
pub struct ProjectionFields<'a> {
    pub x_field: &'a str,
    pub y_fields: &'a [String],
    pub label_field: Option<&'a str>,
}

/// Projects one record into zero or more points, one per Y field with a
/// parseable value.
///
/// A record without a usable X value yields nothing. Any accessor failure is
/// returned so the caller can skip the record as a whole.
pub fn project_entry<R>(
    record: &R,
    fields: ProjectionFields<'_>,
    group_key_index: usize,
    mode: MultiChartMode,
) -> ChartResult<EntryPoints>
where
    R: Record + ?Sized,
{
    let Some(x) = parse_as_x(&record.value(fields.x_field)?) else {
        return Ok(EntryPoints::new());
    };
    let label = match fields.label_field {
        Some(label_field) => {
            let raw = record.value(label_field)?;
            (!raw.is_null()).then(|| to_compact_string(&raw))
        }
        None => None,
    };

    let mut points = EntryPoints::new();
    for (field_index, y_field) in fields.y_fields.iter().enumerate() {
        let Some(y) = parse_as_number(&record.value(y_field)?) else {
            trace!(
                file = record.file_path(),
                field = y_field.as_str(),
                "skipping field without numeric value"
            );
            continue;
        };

        let (group_index, chart_index) = match mode {
            MultiChartMode::Group => (field_index, group_key_index),
            MultiChartMode::Property => (group_key_index, field_index),
        };
        points.push(
            DataPoint::new(x.clone(), y, group_index, chart_index, record.file_path())
                .with_label(label.clone()),
        );
    }

    Ok(points)
}

/// Projects every record of every group, in group then entry order.
///
/// Failing records are logged and skipped. The output order is the insertion
/// order stacking relies on, with or without `parallel-projection`.
pub fn project_groups<R>(
    groups: &[RecordGroup<R>],
    fields: ProjectionFields<'_>,
    group_keys: &GroupKeySet,
    mode: MultiChartMode,
) -> Vec<DataPoint>
where
    R: ProjectableRecord,
{
    let mut points = Vec::new();
    for group in groups {
        let group_key_index = group_keys.index_for(group.key.as_deref());

        #[cfg(feature = "parallel-projection")]
        {
            let projected: Vec<EntryPoints> = group
                .entries
                .par_iter()
                .map(|record| project_or_skip(record, fields, group_key_index, mode))
                .collect();
            points.extend(projected.into_iter().flatten());
        }

        #[cfg(not(feature = "parallel-projection"))]
        {
            for record in &group.entries {
                points.extend(project_or_skip(record, fields, group_key_index, mode));
            }
        }
    }
    points
}

fn project_or_skip<R>(
    record: &R,
    fields: ProjectionFields<'_>,
    group_key_index: usize,
    mode: MultiChartMode,
) -> EntryPoints
where
    R: Record,
{
    project_entry(record, fields, group_key_index, mode).unwrap_or_else(|err| {
        warn!(
            file = record.file_path(),
            error = %err,
            "skipping record that could not be read"
        );
        EntryPoints::new()
    })
}
