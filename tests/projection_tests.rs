use bases_charts::core::{
    GroupKeySet, MapRecord, MultiChartMode, ProjectionFields, RawValue, Record, RecordGroup,
    XValue, project_entry, project_groups,
};
use bases_charts::{ChartError, ChartResult};

/// Record whose accessor fails for one field.
struct BrokenRecord {
    path: String,
    broken_field: &'static str,
}

impl Record for BrokenRecord {
    fn value(&self, field: &str) -> ChartResult<RawValue> {
        if field == self.broken_field {
            return Err(ChartError::RecordAccess {
                file: self.path.clone(),
                field: field.to_owned(),
                reason: "malformed frontmatter".to_owned(),
            });
        }
        Ok(RawValue::Number(1.0))
    }

    fn file_path(&self) -> &str {
        &self.path
    }
}

fn y_fields() -> Vec<String> {
    vec!["mass".to_owned(), "flipper".to_owned(), "bill".to_owned()]
}

fn fields(y_fields: &[String]) -> ProjectionFields<'_> {
    ProjectionFields {
        x_field: "year",
        y_fields,
        label_field: None,
    }
}

#[test]
fn emits_one_point_per_parseable_y_field() {
    let y_fields = y_fields();
    let record = MapRecord::new("penguins/0.md")
        .with_field("year", 2007.0)
        .with_field("mass", "3750")
        .with_field("flipper", "NA")
        .with_field("bill", 39.1);

    let points =
        project_entry(&record, fields(&y_fields), 0, MultiChartMode::Property).expect("project");
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].y, 3750.0);
    assert_eq!(points[0].chart_index, 0);
    assert_eq!(points[1].y, 39.1);
    assert_eq!(points[1].chart_index, 2);
    assert!(points.iter().all(|point| point.x == XValue::Number(2007.0)));
    assert!(points.iter().all(|point| point.file == "penguins/0.md"));
}

#[test]
fn record_without_x_value_emits_nothing() {
    let y_fields = y_fields();
    let record = MapRecord::new("penguins/1.md")
        .with_field("mass", 3800.0)
        .with_field("flipper", 181.0);

    let points =
        project_entry(&record, fields(&y_fields), 0, MultiChartMode::Property).expect("project");
    assert!(points.is_empty());
}

#[test]
fn group_mode_swaps_index_meaning() {
    let y_fields = y_fields();
    let record = MapRecord::new("a.md")
        .with_field("year", 2008.0)
        .with_field("mass", 1.0)
        .with_field("flipper", 2.0)
        .with_field("bill", 3.0);

    let group = project_entry(&record, fields(&y_fields), 4, MultiChartMode::Group).expect("group");
    let property =
        project_entry(&record, fields(&y_fields), 4, MultiChartMode::Property).expect("property");

    for (field_index, point) in group.iter().enumerate() {
        assert_eq!(point.group_index, field_index);
        assert_eq!(point.chart_index, 4);
        assert_eq!(point.y_field_index(MultiChartMode::Group), field_index);
        assert_eq!(point.group_key_index(MultiChartMode::Group), 4);
    }
    for (field_index, point) in property.iter().enumerate() {
        assert_eq!(point.group_index, 4);
        assert_eq!(point.chart_index, field_index);
        assert_eq!(point.y_field_index(MultiChartMode::Property), field_index);
        assert_eq!(point.group_key_index(MultiChartMode::Property), 4);
    }
}

#[test]
fn label_field_is_rendered_compactly_on_every_point() {
    let y_fields = vec!["mass".to_owned(), "bill".to_owned()];
    let record = MapRecord::new("a.md")
        .with_field("year", 2009.0)
        .with_field("mass", 4500.0)
        .with_field("bill", 45.0)
        .with_field("weight_total", 12_340.0);
    let fields = ProjectionFields {
        x_field: "year",
        y_fields: &y_fields,
        label_field: Some("weight_total"),
    };

    let points = project_entry(&record, fields, 0, MultiChartMode::Property).expect("project");
    assert_eq!(points.len(), 2);
    assert!(
        points
            .iter()
            .all(|point| point.label.as_deref() == Some("12.34K"))
    );
}

#[test]
fn accessor_failure_is_reported_for_the_record() {
    let y_fields = y_fields();
    let record = BrokenRecord {
        path: "broken.md".to_owned(),
        broken_field: "flipper",
    };
    let err = project_entry(&record, fields(&y_fields), 0, MultiChartMode::Property)
        .expect_err("accessor failure");
    assert!(matches!(err, ChartError::RecordAccess { .. }));
}

#[test]
fn failing_records_are_skipped_without_aborting_the_group() {
    let y_fields = vec!["mass".to_owned()];
    let groups = vec![RecordGroup::ungrouped(vec![
        BrokenRecord {
            path: "ok-1.md".to_owned(),
            broken_field: "unused",
        },
        BrokenRecord {
            path: "broken.md".to_owned(),
            broken_field: "mass",
        },
        BrokenRecord {
            path: "ok-2.md".to_owned(),
            broken_field: "unused",
        },
    ])];

    let points = project_groups(
        &groups,
        fields(&y_fields),
        &GroupKeySet::default(),
        MultiChartMode::Property,
    );
    let files: Vec<&str> = points.iter().map(|point| point.file.as_str()).collect();
    assert_eq!(files, ["ok-1.md", "ok-2.md"]);
}

#[test]
fn groups_project_in_input_order_with_sorted_key_indices() {
    let y_fields = vec!["mass".to_owned()];
    let record = |path: &str, year: f64| {
        MapRecord::new(path)
            .with_field("year", year)
            .with_field("mass", 1.0)
    };
    let groups = vec![
        RecordGroup::keyed("Torgersen", vec![record("t1.md", 1.0), record("t2.md", 2.0)]),
        RecordGroup::keyed("Biscoe", vec![record("b1.md", 1.0)]),
    ];
    let keys = GroupKeySet::from_groups(&groups);

    let points = project_groups(&groups, fields(&y_fields), &keys, MultiChartMode::Property);
    let summary: Vec<(&str, usize)> = points
        .iter()
        .map(|point| (point.file.as_str(), point.group_index))
        .collect();
    assert_eq!(summary, [("t1.md", 1), ("t2.md", 1), ("b1.md", 0)]);
}

fn labelled_fields(y_fields: &[String]) -> ProjectionFields<'_> {
    ProjectionFields {
        x_field: "year",
        y_fields,
        label_field: Some("label"),
    }
}

#[test]
fn label_read_failure_is_reported_for_the_record() {
    let y_fields = y_fields();
    let record = BrokenRecord {
        path: "broken-label.md".to_owned(),
        broken_field: "label",
    };
    let err = project_entry(&record, labelled_fields(&y_fields), 0, MultiChartMode::Property)
        .expect_err("label failure");
    assert!(matches!(err, ChartError::RecordAccess { ref field, .. } if field == "label"));
}

#[test]
fn label_read_failure_skips_the_whole_record() {
    let y_fields = y_fields();
    let groups = vec![RecordGroup::ungrouped(vec![
        BrokenRecord {
            path: "ok-1.md".to_owned(),
            broken_field: "unused",
        },
        BrokenRecord {
            path: "broken-label.md".to_owned(),
            broken_field: "label",
        },
        BrokenRecord {
            path: "ok-2.md".to_owned(),
            broken_field: "unused",
        },
    ])];

    let points = project_groups(
        &groups,
        labelled_fields(&y_fields),
        &GroupKeySet::default(),
        MultiChartMode::Property,
    );
    assert_eq!(points.len(), 2 * y_fields.len());
    assert!(points.iter().all(|point| point.file != "broken-label.md"));
    assert!(points.iter().all(|point| point.label.as_deref() == Some("1")));
}

#[cfg(not(feature = "parallel-projection"))]
mod single_threaded {
    use std::rc::Rc;
    use std::sync::Arc;

    use bases_charts::core::{ChartKind, MapRecord, RawValue, Record, RecordGroup};
    use bases_charts::{ChartResult, ChartViewConfig, process_data};

    /// Record sharing its fields through `Rc`, so it is not `Sync`.
    struct SharedRecord(Rc<MapRecord>);

    impl Record for SharedRecord {
        fn value(&self, field: &str) -> ChartResult<RawValue> {
            self.0.value(field)
        }

        fn file_path(&self) -> &str {
            self.0.file_path()
        }
    }

    #[test]
    fn non_sync_records_can_be_processed() {
        let shared = Rc::new(
            MapRecord::new("shared.md")
                .with_field("year", 2007.0)
                .with_field("mass", 3750.0),
        );
        let groups = vec![RecordGroup::ungrouped(vec![
            SharedRecord(Rc::clone(&shared)),
            SharedRecord(shared),
        ])];
        let config = Arc::new(ChartViewConfig::new(ChartKind::Scatter, "year", ["mass"]));

        let data = process_data(&config, &groups);
        assert_eq!(data.points().len(), 2);
        assert!(data.points().iter().all(|point| point.file == "shared.md"));
    }
}
