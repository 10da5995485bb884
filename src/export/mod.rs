//! Persist rendered maps, the clustered table and a JSON manifest.

#[cfg(test)]
mod tests;

use crate::clusterer::ClusterResult;
use crate::map::LeafletMap;
use crate::table::Table;
use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "manifest.json";
pub const CLUSTERS_FILE: &str = "clusters.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub version: String,
    pub created_at: String,
    pub generator: String,
    pub state: String,
    pub stats: ManifestStats,
    pub maps: Vec<String>,
    pub tables: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManifestStats {
    pub hospital_count: usize,
    pub grid_rows: usize,
    pub grid_cols: usize,
    pub cluster_count: usize,
    pub centroid_count: usize,
}

/// Writes one state's outputs into a directory
pub struct MapExporter {
    dir: PathBuf,
    manifest: Manifest,
}

impl MapExporter {
    /// Create the output directory if needed
    pub fn new(dir: impl AsRef<Path>, state: impl Into<String>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .context(format!("Failed to create output directory: {}", dir.display()))?;

        let manifest = Manifest {
            version: "1.0.0".to_string(),
            created_at: Utc::now().to_rfc3339(),
            generator: format!("bedmap v{}", env!("CARGO_PKG_VERSION")),
            state: state.into(),
            stats: ManifestStats::default(),
            maps: Vec::new(),
            tables: Vec::new(),
        };

        Ok(Self { dir, manifest })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Copy row count, grid shape and cluster counts into the manifest
    pub fn record_clusters(&mut self, result: &ClusterResult) {
        let (rows, cols) = result.map_shape();
        self.manifest.stats = ManifestStats {
            hospital_count: result.len(),
            grid_rows: rows,
            grid_cols: cols,
            cluster_count: result.cluster_count(),
            centroid_count: result.centroid_count(),
        };
    }

    /// Write `<name>.html` and `<name>.geojson`
    pub fn write_map(&mut self, name: &str, map: &LeafletMap) -> Result<PathBuf> {
        let html_path = self.dir.join(format!("{}.html", name));
        fs::write(&html_path, map.to_html())
            .context(format!("Failed to write map: {}", html_path.display()))?;

        let geo_path = self.dir.join(format!("{}.geojson", name));
        let geojson = serde_json::to_string_pretty(&map.to_geojson())
            .context("Failed to serialize GeoJSON")?;
        fs::write(&geo_path, geojson)
            .context(format!("Failed to write GeoJSON: {}", geo_path.display()))?;

        tracing::info!(
            map = name,
            circles = map.circles.len(),
            pins = map.pins.len(),
            path = %html_path.display(),
            "wrote map"
        );

        self.manifest.maps.push(format!("{}.html", name));
        Ok(html_path)
    }

    /// Write `table` as CSV under `file_name`
    pub fn write_table(&mut self, file_name: &str, table: &Table) -> Result<PathBuf> {
        let path = self.dir.join(file_name);
        let file = File::create(&path)
            .context(format!("Failed to create table file: {}", path.display()))?;
        table
            .write_csv(BufWriter::new(file))
            .context(format!("Failed to write table: {}", path.display()))?;

        tracing::info!(rows = table.len(), path = %path.display(), "wrote table");

        self.manifest.tables.push(file_name.to_string());
        Ok(path)
    }

    /// Write `manifest.json` and return its path
    pub fn finish(self) -> Result<PathBuf> {
        let path = self.dir.join(MANIFEST_FILE);
        let json = serde_json::to_string_pretty(&self.manifest)
            .context("Failed to serialize manifest")?;
        fs::write(&path, json)
            .context(format!("Failed to write manifest: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "wrote manifest");
        Ok(path)
    }
}

/// Read a manifest written by [`MapExporter::finish`]
pub fn read_manifest(dir: impl AsRef<Path>) -> Result<Manifest> {
    let path = dir.as_ref().join(MANIFEST_FILE);
    let text = fs::read_to_string(&path)
        .context(format!("Failed to read manifest: {}", path.display()))?;
    serde_json::from_str(&text).context("Failed to parse manifest.json")
}
