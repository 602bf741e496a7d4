use std::collections::HashMap;
use std::sync::Arc;

use bases_charts::core::{
    COLOR_PALETTE, ChartKind, GroupKeySet, MapRecord, MultiChartMode, ProjectionFields,
    RawValue, RecordGroup, color_for, project_entry,
};
use bases_charts::{ChartViewConfig, process_data};
use proptest::prelude::*;

fn raw_y() -> impl Strategy<Value = RawValue> {
    prop_oneof![
        (-1_000i32..1_000).prop_map(|value| RawValue::Number(f64::from(value))),
        (-1_000i32..1_000).prop_map(|value| RawValue::Text(value.to_string())),
        Just(RawValue::Text("n/a".to_owned())),
        Just(RawValue::Null),
        Just(RawValue::Boolean(true)),
    ]
}

/// Records across up to three groups with small integer X values so many
/// points share an X.
fn grouped_records() -> impl Strategy<Value = Vec<(u8, i32, Vec<RawValue>)>> {
    proptest::collection::vec(
        (0u8..3, 0i32..4, proptest::collection::vec(raw_y(), 2)),
        0..40,
    )
}

fn build_groups(records: &[(u8, i32, Vec<RawValue>)]) -> Vec<RecordGroup<MapRecord>> {
    let mut groups: Vec<RecordGroup<MapRecord>> = Vec::new();
    for (index, (group, x, ys)) in records.iter().enumerate() {
        let key = format!("g{group}");
        let mut record = MapRecord::new(format!("{index}.md")).with_field("x", f64::from(*x));
        for (field, y) in ["y0", "y1"].iter().zip(ys) {
            record = record.with_field(*field, y.clone());
        }
        match groups.iter_mut().find(|entry| entry.key.as_deref() == Some(key.as_str())) {
            Some(entry) => entry.entries.push(record),
            None => groups.push(RecordGroup::keyed(key, vec![record])),
        }
    }
    groups
}

proptest! {
    #[test]
    fn emitted_point_count_matches_parseable_fields(ys in proptest::collection::vec(raw_y(), 0..6)) {
        let y_fields: Vec<String> = (0..ys.len()).map(|i| format!("y{i}")).collect();
        let mut record = MapRecord::new("r.md").with_field("x", 1.0);
        for (field, y) in y_fields.iter().zip(&ys) {
            record = record.with_field(field.clone(), y.clone());
        }
        let expected = ys
            .iter()
            .filter(|y| matches!(y, RawValue::Number(_)) || matches!(y, RawValue::Text(t) if t != "n/a"))
            .count();

        let fields = ProjectionFields { x_field: "x", y_fields: &y_fields, label_field: None };
        let points = project_entry(&record, fields, 0, MultiChartMode::Property).expect("project");
        prop_assert_eq!(points.len(), expected);
    }

    #[test]
    fn group_key_indices_follow_sorted_order(keys in proptest::collection::vec("[a-zA-Z0-9]{0,6}", 0..20)) {
        let set = GroupKeySet::from_keys(keys.iter().map(|key| Some(key.as_str())));
        let again = GroupKeySet::from_keys(keys.iter().map(|key| Some(key.as_str())));
        prop_assert_eq!(&set, &again);

        for pair in set.keys().windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        for key in &keys {
            let index = set.index_of(key).expect("known key");
            prop_assert_eq!(set.get(index), Some(key.as_str()));
        }
    }

    #[test]
    fn stacking_preserves_per_x_sums(records in grouped_records(), group_mode in any::<bool>()) {
        let mode = if group_mode { MultiChartMode::Group } else { MultiChartMode::Property };
        let config = Arc::new(ChartViewConfig::new(ChartKind::Bar, "x", ["y0", "y1"]).with_mode(mode));
        let data = process_data(&config, &build_groups(&records));

        for chart_index in 0..data.chart_identifiers().len() {
            let mut flat_sums: HashMap<i64, f64> = HashMap::new();
            for point in data.get_flat(chart_index, false) {
                let x = point.x.as_number().expect("numeric x") as i64;
                *flat_sums.entry(x).or_insert(0.0) += point.y;
            }

            // The last stacked point at each X carries the running total.
            let mut tops: HashMap<i64, f64> = HashMap::new();
            for point in data.get_stacked(chart_index) {
                let x = point.x.as_number().expect("numeric x") as i64;
                tops.insert(x, point.y);
            }
            prop_assert_eq!(flat_sums.len(), tops.len());
            for (x, sum) in flat_sums {
                prop_assert!((tops[&x] - sum).abs() <= 1e-9);
            }
        }
    }

    #[test]
    fn sorted_flat_is_stable(records in grouped_records()) {
        let config = Arc::new(ChartViewConfig::new(ChartKind::Scatter, "x", ["y0", "y1"]));
        let data = process_data(&config, &build_groups(&records));

        for chart_index in 0..data.chart_identifiers().len() {
            let original = data.get_flat(chart_index, false);
            let sorted = data.get_flat(chart_index, true);
            prop_assert_eq!(original.len(), sorted.len());
            for pair in sorted.windows(2) {
                prop_assert!(pair[0].group_index <= pair[1].group_index);
                if pair[0].group_index == pair[1].group_index {
                    let first = original.iter().position(|point| std::ptr::eq(*point, pair[0]));
                    let second = original.iter().position(|point| std::ptr::eq(*point, pair[1]));
                    prop_assert!(first < second);
                }
            }
        }
    }

    #[test]
    fn synced_domains_equal_global_extent(records in grouped_records()) {
        let config = Arc::new(
            ChartViewConfig::new(ChartKind::Line, "x", ["y0", "y1"]).with_synced_y_axes(true),
        );
        let data = process_data(&config, &build_groups(&records));

        let ys: Vec<f64> = data.points().iter().map(|point| point.y).collect();
        let expected = if ys.is_empty() {
            (0.0, 0.0)
        } else {
            (
                ys.iter().copied().fold(f64::INFINITY, f64::min),
                ys.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            )
        };
        for chart_index in 0..data.chart_identifiers().len() {
            prop_assert_eq!(data.get_y_domain_for_chart(chart_index), expected);
        }
    }

    #[test]
    fn palette_wraps_around(index in 0usize..1_000) {
        prop_assert_eq!(color_for(index + COLOR_PALETTE.len()), color_for(index));
    }
}
