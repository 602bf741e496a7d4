use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::{
    GroupKeySet, ProjectableRecord, ProjectionFields, RecordGroup, is_grouped, project_groups,
};
use crate::error::{ChartError, ChartResult};

use super::{ChartData, ChartViewConfig};

/// Runs one full transformation of `groups` under `config`.
///
/// Never fails: an invalid configuration degrades to [`ChartData::empty`]
/// and unreadable records are skipped during projection.
pub fn process_data<R>(config: &Arc<ChartViewConfig>, groups: &[RecordGroup<R>]) -> ChartData
where
    R: ProjectableRecord,
{
    match try_process_data(config, groups) {
        Ok(data) => data,
        Err(err @ ChartError::MissingXField) => {
            debug!(error = %err, "returning empty chart data");
            ChartData::empty(Arc::clone(config))
        }
        Err(err) => {
            warn!(error = %err, "returning empty chart data");
            ChartData::empty(Arc::clone(config))
        }
    }
}

fn try_process_data<R>(
    config: &Arc<ChartViewConfig>,
    groups: &[RecordGroup<R>],
) -> ChartResult<ChartData>
where
    R: ProjectableRecord,
{
    let mode = config.resolve_mode()?;
    let x_field = config.require_x_field()?;

    let group_keys = if is_grouped(groups) {
        GroupKeySet::from_groups(groups)
    } else {
        GroupKeySet::default()
    };
    let fields = ProjectionFields {
        x_field,
        y_fields: &config.y_fields,
        label_field: config.label_field.as_deref(),
    };
    let points = project_groups(groups, fields, &group_keys, mode);

    let data = ChartData::new(mode, Arc::clone(config), points, group_keys);
    debug!(
        mode = mode.as_str(),
        record_count = groups.iter().map(|group| group.entries.len()).sum::<usize>(),
        point_count = data.points().len(),
        chart_count = data.chart_identifiers().len(),
        "processed chart data"
    );
    Ok(data)
}

/// Identifies one refresh started through [`ChartView::begin_refresh`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RefreshTicket(u64);

impl RefreshTicket {
    #[must_use]
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Host-side owner of a view's configuration and latest result.
///
/// Refreshes are last-write-wins: only the most recently issued ticket may
/// publish its result, superseded ones are discarded.
#[derive(Debug)]
pub struct ChartView {
    config: Arc<ChartViewConfig>,
    data: Arc<ChartData>,
    issued: u64,
    published: Option<u64>,
}

impl ChartView {
    #[must_use]
    pub fn new(config: ChartViewConfig) -> Self {
        let config = Arc::new(config);
        let data = Arc::new(ChartData::empty(Arc::clone(&config)));
        Self {
            config,
            data,
            issued: 0,
            published: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &Arc<ChartViewConfig> {
        &self.config
    }

    /// Replaces the configuration. Results of refreshes started before this
    /// call can no longer be published.
    pub fn set_config(&mut self, config: ChartViewConfig) {
        self.config = Arc::new(config);
        self.issued += 1;
    }

    /// Latest published result.
    #[must_use]
    pub fn data(&self) -> Arc<ChartData> {
        Arc::clone(&self.data)
    }

    /// Starts a refresh; any earlier ticket becomes stale.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.issued += 1;
        RefreshTicket(self.issued)
    }

    /// Publishes `data` if `ticket` is the latest one issued.
    ///
    /// Returns `false` and drops `data` for superseded tickets.
    pub fn complete_refresh(&mut self, ticket: RefreshTicket, data: ChartData) -> bool {
        if ticket.0 != self.issued {
            warn!(
                ticket = ticket.0,
                latest = self.issued,
                "discarding superseded chart refresh"
            );
            return false;
        }
        self.data = Arc::new(data);
        self.published = Some(ticket.0);
        true
    }

    /// Generation of the latest published result, if any.
    #[must_use]
    pub fn published_generation(&self) -> Option<u64> {
        self.published
    }

    /// Recomputes the result from a fresh record snapshot.
    pub fn refresh<R>(&mut self, groups: &[RecordGroup<R>]) -> Arc<ChartData>
    where
        R: ProjectableRecord,
    {
        let ticket = self.begin_refresh();
        let data = process_data(&self.config, groups);
        self.complete_refresh(ticket, data);
        self.data()
    }
}
