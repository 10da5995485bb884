//! Glue between the dataset, the clusterer and the map annotator.

use crate::clusterer::{
    CENTROID_COLUMN, CLUSTER_COLUMN, ClusterError, ClusterResult, fit_som_clusters,
};
use crate::config::{ClusterConfig, MapConfig};
use crate::dataset::{
    HOSPITAL_NAME, LATITUDE, LICENSED_BEDS, LONGITUDE, StateTable, UTILIZATION,
};
use crate::map::{LeafletMap, MapBuilder, MapError, random_colors};

/// Cluster a state's hospitals and write `cluster`/`centroids` back into
/// its table
pub fn cluster_state(
    state: &mut StateTable,
    config: &ClusterConfig,
) -> Result<ClusterResult, ClusterError> {
    let features = state.table.select(&config.feature_refs())?;
    let model = config.build_som(features.columns().len(), features.len())?;
    let result = fit_som_clusters(&features, Some(model), config.epochs)?;
    result.apply_to(&mut state.table)?;
    Ok(result)
}

fn base_map(state: &StateTable, config: &MapConfig) -> MapBuilder {
    MapBuilder::new(LATITUDE, LONGITUDE, state.start)
        .zoom(config.zoom)
        .tiles(config.tiles)
        .popup(HOSPITAL_NAME)
        .size(LICENSED_BEDS)
        .maybe_seed(config.seed)
}

/// Circles sized by licensed beds, colored by utilization band
pub fn utilization_map(state: &StateTable, config: &MapConfig) -> Result<LeafletMap, MapError> {
    let mut builder = base_map(state, config).color(UTILIZATION);
    if !config.utilization_colors.is_empty() {
        builder = builder.colors(config.utilization_colors.iter().cloned());
    }
    builder.build(&state.table)
}

/// Circles sized by licensed beds, colored by cluster, with a legend.
/// `state` must already carry the columns written by [`cluster_state`].
///
/// A palette shorter than the map's cell count is topped up with random
/// colors.
pub fn cluster_map(
    state: &StateTable,
    result: &ClusterResult,
    config: &MapConfig,
) -> Result<LeafletMap, MapError> {
    let mut builder = base_map(state, config).color(CLUSTER_COLUMN).legend(true);
    if !config.cluster_colors.is_empty() {
        let mut colors = config.cluster_colors.clone();
        let cells = result.model.cell_count();
        if cells > colors.len() {
            let extra = cells - colors.len();
            tracing::debug!(extra, "extending cluster palette with random colors");
            colors.extend(random_colors(extra, config.seed));
        }
        builder = builder.colors(colors);
    }
    if config.pin_centroids {
        builder = builder
            .marker(CENTROID_COLUMN)
            .marker_palette(config.marker_colors.iter().cloned());
    }
    builder.build(&state.table)
}
