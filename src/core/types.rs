use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::format::format_compact_number;
use crate::error::ChartError;

/// X coordinate of a projected point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum XValue {
    Number(f64),
    Date(DateTime<Utc>),
    Text(String),
}

impl XValue {
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }
}

impl fmt::Display for XValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => f.write_str(&format_compact_number(*number)),
            Self::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Chart-separation strategy selected per refresh.
///
/// The mode decides what the two raw indices of a [`DataPoint`] mean:
///
/// | mode       | `chart_index`   | `group_index`   |
/// |------------|-----------------|-----------------|
/// | `Group`    | group key index | Y field index   |
/// | `Property` | Y field index   | group key index |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MultiChartMode {
    /// One chart per group key, colored by Y field.
    Group,
    /// One chart per Y field, colored by group key.
    #[default]
    Property,
}

impl MultiChartMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::Property => "property",
        }
    }

    /// Label shown by host dropdowns for this mode.
    #[must_use]
    pub const fn display_label(self) -> &'static str {
        match self {
            Self::Group => "Separate by group",
            Self::Property => "Separate by property",
        }
    }
}

impl FromStr for MultiChartMode {
    type Err = ChartError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        for mode in [Self::Group, Self::Property] {
            if trimmed.eq_ignore_ascii_case(mode.as_str()) || trimmed == mode.display_label() {
                return Ok(mode);
            }
        }
        Err(ChartError::InvalidMode {
            value: value.to_owned(),
        })
    }
}

/// Chart kind drawn by the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    #[default]
    Scatter,
    Line,
    Bar,
}

impl ChartKind {
    /// Only bars are drawn as stacked or percentage series.
    #[must_use]
    pub const fn supports_stacking(self) -> bool {
        matches!(self, Self::Bar)
    }
}

/// One projected (record, Y field) sample.
///
/// Points are immutable after projection; stacking and percentage series
/// derive copies with a different `y`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: XValue,
    pub y: f64,
    /// Index used to pick the color. Meaning depends on [`MultiChartMode`].
    pub group_index: usize,
    /// Index of the chart this point belongs to. Meaning depends on [`MultiChartMode`].
    pub chart_index: usize,
    pub file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl DataPoint {
    #[must_use]
    pub fn new(
        x: XValue,
        y: f64,
        group_index: usize,
        chart_index: usize,
        file: impl Into<String>,
    ) -> Self {
        Self {
            x,
            y,
            group_index,
            chart_index,
            file: file.into(),
            label: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: Option<String>) -> Self {
        self.label = label;
        self
    }

    /// Returns a copy of this point carrying a different `y`.
    #[must_use]
    pub fn with_y(&self, y: f64) -> Self {
        Self { y, ..self.clone() }
    }

    /// Position of the point's Y field in the configured field list.
    #[must_use]
    pub fn y_field_index(&self, mode: MultiChartMode) -> usize {
        match mode {
            MultiChartMode::Group => self.group_index,
            MultiChartMode::Property => self.chart_index,
        }
    }

    /// Index of the point's group key in the refresh's sorted key set.
    #[must_use]
    pub fn group_key_index(&self, mode: MultiChartMode) -> usize {
        match mode {
            MultiChartMode::Group => self.chart_index,
            MultiChartMode::Property => self.group_index,
        }
    }
}
