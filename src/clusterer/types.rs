use crate::clusterer::scaler::StandardScaler;
use crate::clusterer::som::SelfOrganizingMap;
use crate::table::{Column, Table, TableError};
use serde::Serialize;
use std::collections::BTreeMap;

/// Column name for the flattened cluster id
pub const CLUSTER_COLUMN: &str = "cluster";

/// Column name for the 0/1 centroid flag
pub const CENTROID_COLUMN: &str = "centroids";

/// Number of rows assigned to one cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClusterPopulation {
    pub cluster: usize,
    pub count: usize,
}

/// Outcome of fitting the map to a batch of feature vectors.
///
/// `clusters` and `centroids` are aligned with the input rows.
#[derive(Debug, Clone)]
pub struct ClusterResult {
    pub clusters: Vec<usize>,
    pub centroids: Vec<u8>,
    pub model: SelfOrganizingMap,
    pub scaler: StandardScaler,
    pub feature_names: Vec<String>,
}

impl ClusterResult {
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    pub fn map_shape(&self) -> (usize, usize) {
        self.model.shape()
    }

    /// Number of distinct clusters that received at least one row
    pub fn cluster_count(&self) -> usize {
        self.populations().len()
    }

    /// Rows flagged as the real record nearest to some cell's weights
    pub fn centroid_count(&self) -> usize {
        self.centroids.iter().filter(|&&f| f == 1).count()
    }

    /// Populations by count descending, then cluster id ascending
    pub fn populations(&self) -> Vec<ClusterPopulation> {
        let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
        for &c in &self.clusters {
            *counts.entry(c).or_default() += 1;
        }

        let mut out: Vec<ClusterPopulation> = counts
            .into_iter()
            .map(|(cluster, count)| ClusterPopulation { cluster, count })
            .collect();
        out.sort_by_key(|p| std::cmp::Reverse(p.count));
        out
    }

    /// Map weights back to the original feature units
    pub fn centroid_features(&self) -> Vec<Vec<f64>> {
        self.scaler.inverse_transform(self.model.weights())
    }

    /// Write `cluster` and `centroids` columns into `table`, replacing any
    /// existing columns with those names
    pub fn apply_to(&self, table: &mut Table) -> Result<(), TableError> {
        table.set_column(Column::from_values(
            CLUSTER_COLUMN,
            self.clusters.iter().map(|&c| c as i64),
        ))?;
        table.set_column(Column::from_values(
            CENTROID_COLUMN,
            self.centroids.iter().map(|&f| f as i64),
        ))?;
        Ok(())
    }
}
