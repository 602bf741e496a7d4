pub mod aggregate;
pub mod color;
pub mod domain;
pub mod format;
pub mod group_index;
pub mod projection;
pub mod record;
pub mod separation;
pub mod types;
pub mod value;

pub use aggregate::{chart_points, flat_points, percentage_points, stack_points, stacked_points};
pub use color::{COLOR_PALETTE, SINGLE_ACCENT_COLOR, color_for};
pub use domain::{DomainBound, YDomainOverrides, YExtent};
pub use format::{format_compact_number, to_compact_string};
pub use group_index::GroupKeySet;
pub use projection::{EntryPoints, ProjectionFields, project_entry, project_groups};
pub use record::{MapRecord, ProjectableRecord, Record, RecordGroup, is_grouped};
pub use separation::{
    ChartSeparation, GroupSeparated, IdentifierCatalog, IdentifierSource, NO_GROUP_IDENTIFIER,
    PropertySeparated,
};
pub use types::{ChartKind, DataPoint, MultiChartMode, XValue};
pub use value::{RawValue, parse_as_number, parse_as_x, parse_leading_float};
