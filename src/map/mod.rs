mod builder;
mod error;
mod palette;
mod render;
mod scale;
mod types;

#[cfg(test)]
mod tests;

pub use builder::MapBuilder;
pub use error::MapError;
pub use palette::{
    CLUSTER_PALETTE, DEFAULT_COLOR, DEFAULT_MARKER_PALETTE, DEFAULT_RADIUS, RADIUS_RANGE,
    UTILIZATION_PALETTE, random_colors,
};
pub use render::legend_html;
pub use scale::min_max_scale;
pub use types::{CircleMarker, LeafletMap, Legend, LegendEntry, PinMarker, Tiles};
