/// Named colors handed to the rendering collaborator, in assignment order.
pub const COLOR_PALETTE: [&str; 8] = [
    "var(--color-blue)",
    "var(--color-orange)",
    "var(--color-red)",
    "var(--color-cyan)",
    "var(--color-green)",
    "var(--color-yellow)",
    "var(--color-purple)",
    "var(--color-pink)",
];

/// Color used for every point when a chart has a single coloring group.
pub const SINGLE_ACCENT_COLOR: &str = "var(--bases-charts-accent)";

/// Maps a coloring-group index to a palette color, cycling round-robin.
#[must_use]
pub fn color_for(group_index: usize) -> &'static str {
    COLOR_PALETTE[group_index % COLOR_PALETTE.len()]
}
