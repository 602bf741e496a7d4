use std::sync::Arc;

use crate::core::{
    ChartKind, ChartSeparation, DataPoint, GroupKeySet, IdentifierCatalog, MultiChartMode,
    SINGLE_ACCENT_COLOR, YDomainOverrides, YExtent, chart_points, color_for, flat_points,
    percentage_points, stack_points, stacked_points,
};

use super::ChartViewConfig;

/// Chart-ready result of one refresh.
///
/// Owns the flat point list and the refresh's group keys, and keeps a
/// shared reference to the view configuration for name lookups. Nothing is
/// mutated after construction; the synced Y domain is resolved once here.
#[derive(Debug, Clone)]
pub struct ChartData<S = MultiChartMode> {
    separation: S,
    config: Arc<ChartViewConfig>,
    points: Vec<DataPoint>,
    group_keys: GroupKeySet,
    y_domain: YDomainOverrides,
}

impl ChartData<MultiChartMode> {
    /// Result used when the configuration cannot produce charts.
    #[must_use]
    pub fn empty(config: Arc<ChartViewConfig>) -> Self {
        Self::new(
            MultiChartMode::Group,
            config,
            Vec::new(),
            GroupKeySet::default(),
        )
    }
}

impl<S: ChartSeparation> ChartData<S> {
    pub fn new(
        separation: S,
        config: Arc<ChartViewConfig>,
        points: Vec<DataPoint>,
        group_keys: GroupKeySet,
    ) -> Self {
        let mut data = Self {
            separation,
            config,
            points,
            group_keys,
            y_domain: YDomainOverrides::default(),
        };
        let overrides = data.config.resolve_overrides();
        let global = if overrides.synced {
            data.global_y_extent()
        } else {
            None
        };
        data.y_domain = overrides.backfill_synced(global);
        data
    }

    #[must_use]
    pub fn mode(&self) -> MultiChartMode {
        self.separation.mode()
    }

    #[must_use]
    pub fn chart_kind(&self) -> ChartKind {
        self.config.chart_kind
    }

    /// View configuration this result was computed from.
    #[must_use]
    pub fn config(&self) -> &ChartViewConfig {
        &self.config
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn group_keys(&self) -> &GroupKeySet {
        &self.group_keys
    }

    /// Y overrides after synced backfill.
    #[must_use]
    pub fn y_domain_overrides(&self) -> YDomainOverrides {
        self.y_domain
    }

    fn catalog(&self) -> IdentifierCatalog<'_> {
        IdentifierCatalog {
            group_keys: &self.group_keys,
            y_fields: &self.config.y_fields,
            display_names: &self.config.display_names,
        }
    }

    #[must_use]
    pub fn chart_identifiers(&self) -> Vec<&str> {
        self.separation
            .chart_source()
            .identifiers(self.catalog(), true)
    }

    #[must_use]
    pub fn group_identifiers(&self) -> Vec<&str> {
        self.separation
            .group_source()
            .identifiers(self.catalog(), false)
    }

    #[must_use]
    pub fn chart_name(&self, chart_index: usize) -> String {
        self.separation
            .chart_source()
            .display_name(self.catalog(), true, chart_index)
            .unwrap_or_else(|| format!("Chart {}", chart_index + 1))
    }

    #[must_use]
    pub fn group_name(&self, group_index: usize) -> String {
        self.separation
            .group_source()
            .display_name(self.catalog(), false, group_index)
            .unwrap_or_else(|| format!("Group {}", group_index + 1))
    }

    #[must_use]
    pub fn has_multiple_groups(&self) -> bool {
        self.group_identifiers().len() > 1
    }

    #[must_use]
    pub fn has_multiple_charts(&self) -> bool {
        self.chart_identifiers().len() > 1
    }

    /// Point-to-color function for the renderer.
    ///
    /// With a single coloring group every point gets the accent color.
    #[must_use]
    pub fn chart_group_color_fn(&self) -> impl Fn(&DataPoint) -> &'static str + 'static {
        let multiple_groups = self.has_multiple_groups();
        move |point: &DataPoint| -> &'static str {
            if multiple_groups {
                color_for(point.group_index)
            } else {
                SINGLE_ACCENT_COLOR
            }
        }
    }

    /// Points of one chart, optionally stable-sorted by coloring group.
    #[must_use]
    pub fn get_flat(&self, chart_index: usize, sorted: bool) -> Vec<&DataPoint> {
        flat_points(&self.points, chart_index, sorted)
    }

    /// Cumulative per-X series of one chart, in insertion order.
    ///
    /// Insertion order is group order then record order, so the first group
    /// (or Y field) sits at the bottom of each stack.
    #[must_use]
    pub fn get_stacked(&self, chart_index: usize) -> Vec<DataPoint> {
        stacked_points(&self.points, chart_index)
    }

    /// Per-X percentage shares of one chart, in insertion order.
    #[must_use]
    pub fn get_percentages(&self, chart_index: usize) -> Vec<DataPoint> {
        let flat = self.get_flat(chart_index, false);
        percentage_points(flat.iter().copied())
    }

    /// The series the renderer should draw for one chart.
    ///
    /// Bars honor the `show_percentages` and `stacked` settings (stacked
    /// percentages sum to 100 per X); other kinds get group-sorted flat points.
    #[must_use]
    pub fn get_series(&self, chart_index: usize) -> Vec<DataPoint> {
        let config = &self.config;
        if !config.chart_kind.supports_stacking() {
            return self.get_flat(chart_index, true).into_iter().cloned().collect();
        }

        match (config.show_percentages, config.stacked) {
            (true, true) => stack_points(&self.get_percentages(chart_index)),
            (true, false) => self.get_percentages(chart_index),
            (false, true) => self.get_stacked(chart_index),
            (false, false) => self.get_flat(chart_index, true).into_iter().cloned().collect(),
        }
    }

    /// Y range of one chart's points, `None` for an empty chart.
    #[must_use]
    pub fn chart_y_extent(&self, chart_index: usize) -> Option<YExtent> {
        YExtent::scan(chart_points(&self.points, chart_index))
    }

    /// Y range across every chart.
    #[must_use]
    pub fn global_y_extent(&self) -> Option<YExtent> {
        let chart_count = self.chart_identifiers().len();
        YExtent::scan(
            self.points
                .iter()
                .filter(|point| point.chart_index < chart_count),
        )
    }

    /// Y domain of one chart: explicit (or synced) overrides first, then the
    /// chart's own extent, then `0`.
    #[must_use]
    pub fn get_y_domain_for_chart(&self, chart_index: usize) -> (f64, f64) {
        self.y_domain.domain_for(self.chart_y_extent(chart_index))
    }
}
