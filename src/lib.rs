// Public API exports
pub mod clusterer;
pub mod config;
pub mod dataset;
pub mod export;
pub mod logging;
pub mod map;
pub mod pipeline;
pub mod table;

// Re-export main types for convenience
pub use table::{CellValue, Column, Table, TableError};

pub use dataset::{
    Dataset, DatasetError, StateTable, UtilizationLevel, label_utilization, state_name,
};

pub use clusterer::{
    ClusterError, ClusterResult, SelfOrganizingMap, StandardScaler, fit_som_clusters,
};

pub use map::{LeafletMap, MapBuilder, MapError, Tiles};

pub use config::{AppConfig, GridSpec};
pub use export::{Manifest, MapExporter};
pub use pipeline::{cluster_map, cluster_state, utilization_map};
