use serde::{Deserialize, Serialize};

use crate::core::types::DataPoint;

/// User-supplied Y bound as stored by the host: a number or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DomainBound {
    Number(f64),
    Text(String),
}

impl DomainBound {
    /// Normalizes the bound. Blank, non-numeric and non-finite inputs
    /// disable the override.
    #[must_use]
    pub fn resolve(&self) -> Option<f64> {
        let value = match self {
            Self::Number(number) => *number,
            Self::Text(text) => text.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for DomainBound {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for DomainBound {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Y-axis overrides resolved once per refresh. `None` means "use the
/// computed extremum".
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct YDomainOverrides {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub synced: bool,
}

impl YDomainOverrides {
    #[must_use]
    pub fn resolve(min: Option<&DomainBound>, max: Option<&DomainBound>, synced: bool) -> Self {
        Self {
            min: min.and_then(DomainBound::resolve),
            max: max.and_then(DomainBound::resolve),
            synced,
        }
    }

    /// Fills still-unset bounds from the global extent when axes are synced.
    ///
    /// An explicit bound always wins; only the missing side is backfilled.
    #[must_use]
    pub fn backfill_synced(mut self, global: Option<YExtent>) -> Self {
        if self.synced {
            if let Some(global) = global {
                self.min.get_or_insert(global.min);
                self.max.get_or_insert(global.max);
            }
        }
        self
    }

    /// Domain of one chart; empty charts fall back to `0`.
    #[must_use]
    pub fn domain_for(self, chart: Option<YExtent>) -> (f64, f64) {
        let min = self.min.or(chart.map(|extent| extent.min)).unwrap_or(0.0);
        let max = self.max.or(chart.map(|extent| extent.max)).unwrap_or(0.0);
        (min, max)
    }
}

/// Minimum and maximum `y` of a point set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YExtent {
    pub min: f64,
    pub max: f64,
}

impl YExtent {
    /// Linear scan over `points`; `None` when the set is empty.
    pub fn scan<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a DataPoint>,
    {
        points.into_iter().fold(None, |extent, point| {
            Some(match extent {
                None => Self {
                    min: point.y,
                    max: point.y,
                },
                Some(Self { min, max }) => Self {
                    min: if point.y < min { point.y } else { min },
                    max: if point.y > max { point.y } else { max },
                },
            })
        })
    }
}
