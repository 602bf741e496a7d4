//! Chart-separation strategies.
//!
//! Both strategies share one traversal; they only differ in which identifier
//! source feeds the chart axis and which feeds the coloring axis.

use indexmap::IndexMap;

use crate::core::group_index::GroupKeySet;
use crate::core::types::MultiChartMode;

/// Chart identifier used when group-separated data has no grouping.
pub const NO_GROUP_IDENTIFIER: &str = "No group";

/// Everything identifier lookups read, borrowed from one refresh.
#[derive(Debug, Clone, Copy)]
pub struct IdentifierCatalog<'a> {
    pub group_keys: &'a GroupKeySet,
    pub y_fields: &'a [String],
    pub display_names: &'a IndexMap<String, String>,
}

/// Where a list of chart or group identifiers comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierSource {
    /// Sorted group keys of the refresh.
    GroupKeys,
    /// Configured Y fields, in configuration order.
    YFields,
}

impl IdentifierSource {
    /// Lists identifiers. `collapse_empty` substitutes the synthetic
    /// [`NO_GROUP_IDENTIFIER`] for an empty group key set.
    #[must_use]
    pub fn identifiers<'a>(
        self,
        catalog: IdentifierCatalog<'a>,
        collapse_empty: bool,
    ) -> Vec<&'a str> {
        match self {
            Self::GroupKeys if collapse_empty && catalog.group_keys.is_empty() => {
                vec![NO_GROUP_IDENTIFIER]
            }
            Self::GroupKeys => catalog.group_keys.keys().iter().map(String::as_str).collect(),
            Self::YFields => catalog.y_fields.iter().map(String::as_str).collect(),
        }
    }

    /// Resolves the human label of the identifier at `index`.
    ///
    /// Group keys are their own label unless a display name is registered;
    /// Y fields need a registered display name.
    #[must_use]
    pub fn display_name(
        self,
        catalog: IdentifierCatalog<'_>,
        collapse_empty: bool,
        index: usize,
    ) -> Option<String> {
        let identifiers = self.identifiers(catalog, collapse_empty);
        let identifier = *identifiers.get(index)?;
        let registered = catalog.display_names.get(identifier).cloned();
        match self {
            Self::GroupKeys => registered.or_else(|| Some(identifier.to_owned())),
            Self::YFields => registered,
        }
    }
}

/// Capability set of a chart-separation strategy.
pub trait ChartSeparation {
    fn mode(&self) -> MultiChartMode;

    /// Source of chart identifiers; the synthetic "No group" chart applies here.
    fn chart_source(&self) -> IdentifierSource;

    /// Source of coloring-group identifiers.
    fn group_source(&self) -> IdentifierSource;
}

/// One chart per group key, colored by Y field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GroupSeparated;

/// One chart per Y field, colored by group key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PropertySeparated;

impl ChartSeparation for GroupSeparated {
    fn mode(&self) -> MultiChartMode {
        MultiChartMode::Group
    }

    fn chart_source(&self) -> IdentifierSource {
        IdentifierSource::GroupKeys
    }

    fn group_source(&self) -> IdentifierSource {
        IdentifierSource::YFields
    }
}

impl ChartSeparation for PropertySeparated {
    fn mode(&self) -> MultiChartMode {
        MultiChartMode::Property
    }

    fn chart_source(&self) -> IdentifierSource {
        IdentifierSource::YFields
    }

    fn group_source(&self) -> IdentifierSource {
        IdentifierSource::GroupKeys
    }
}

/// Runtime-selected strategy.
impl ChartSeparation for MultiChartMode {
    fn mode(&self) -> MultiChartMode {
        *self
    }

    fn chart_source(&self) -> IdentifierSource {
        match self {
            Self::Group => GroupSeparated.chart_source(),
            Self::Property => PropertySeparated.chart_source(),
        }
    }

    fn group_source(&self) -> IdentifierSource {
        match self {
            Self::Group => GroupSeparated.group_source(),
            Self::Property => PropertySeparated.group_source(),
        }
    }
}
