use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{ChartKind, DomainBound, MultiChartMode, YDomainOverrides};
use crate::error::{ChartError, ChartResult};

/// Resolved view configuration supplied by the host.
///
/// This type is serializable so host applications can persist/load view
/// settings without inventing their own ad-hoc format. Every field has a
/// default, so partial documents deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartViewConfig {
    pub chart_kind: ChartKind,
    pub x_field: Option<String>,
    pub label_field: Option<String>,
    /// Y-bearing fields, in display order.
    pub y_fields: Vec<String>,
    /// Human labels keyed by field or group identifier.
    pub display_names: IndexMap<String, String>,
    /// Raw multi chart mode setting, parsed on every refresh.
    pub multi_chart_mode: Option<String>,
    pub y_min: Option<DomainBound>,
    pub y_max: Option<DomainBound>,
    pub y_synced: bool,
    pub stacked: bool,
    pub show_labels: bool,
    pub show_percentages: bool,
}

impl Default for ChartViewConfig {
    fn default() -> Self {
        Self {
            chart_kind: ChartKind::default(),
            x_field: None,
            label_field: None,
            y_fields: Vec::new(),
            display_names: IndexMap::new(),
            multi_chart_mode: None,
            y_min: None,
            y_max: None,
            y_synced: false,
            stacked: false,
            show_labels: true,
            show_percentages: false,
        }
    }
}

impl ChartViewConfig {
    /// Creates a config for `kind` plotting `y_fields` against `x_field`.
    #[must_use]
    pub fn new<I, S>(kind: ChartKind, x_field: impl Into<String>, y_fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            chart_kind: kind,
            x_field: Some(x_field.into()),
            y_fields: y_fields.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_label_field(mut self, field: impl Into<String>) -> Self {
        self.label_field = Some(field.into());
        self
    }

    #[must_use]
    pub fn with_display_name(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.display_names.insert(id.into(), name.into());
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: MultiChartMode) -> Self {
        self.multi_chart_mode = Some(mode.as_str().to_owned());
        self
    }

    /// Stores a raw mode setting verbatim, as hosts do with dropdown values.
    #[must_use]
    pub fn with_mode_setting(mut self, setting: impl Into<String>) -> Self {
        self.multi_chart_mode = Some(setting.into());
        self
    }

    #[must_use]
    pub fn with_y_min(mut self, min: impl Into<DomainBound>) -> Self {
        self.y_min = Some(min.into());
        self
    }

    #[must_use]
    pub fn with_y_max(mut self, max: impl Into<DomainBound>) -> Self {
        self.y_max = Some(max.into());
        self
    }

    #[must_use]
    pub fn with_synced_y_axes(mut self, synced: bool) -> Self {
        self.y_synced = synced;
        self
    }

    #[must_use]
    pub fn with_stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    #[must_use]
    pub fn with_show_labels(mut self, show: bool) -> Self {
        self.show_labels = show;
        self
    }

    #[must_use]
    pub fn with_show_percentages(mut self, show: bool) -> Self {
        self.show_percentages = show;
        self
    }

    /// Parses the mode setting; an absent setting selects property separation.
    pub fn resolve_mode(&self) -> ChartResult<MultiChartMode> {
        self.multi_chart_mode
            .as_deref()
            .map_or(Ok(MultiChartMode::default()), str::parse)
    }

    pub fn require_x_field(&self) -> ChartResult<&str> {
        self.x_field
            .as_deref()
            .filter(|field| !field.is_empty())
            .ok_or(ChartError::MissingXField)
    }

    #[must_use]
    pub fn resolve_overrides(&self) -> YDomainOverrides {
        YDomainOverrides::resolve(self.y_min.as_ref(), self.y_max.as_ref(), self.y_synced)
    }

    /// Registered display name of a field or group identifier.
    #[must_use]
    pub fn display_name(&self, id: &str) -> Option<&str> {
        self.display_names.get(id).map(String::as_str)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::Config(format!("failed to serialize view config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::Config(format!("failed to parse view config: {e}")))
    }
}
