//! Run configuration, read from a TOML file.
//!
//! Every key is optional. Missing keys take the defaults below, which
//! reproduce the stock dashboard: a 3x2 Gaussian map over five capacity
//! features, zoom 6 on the positron tiles.

use crate::clusterer::{
    ActivationDistance, ClusterError, DEFAULT_EPOCHS, Neighborhood, SelfOrganizingMap,
};
use crate::dataset::CLUSTER_FEATURES;
use crate::map::{CLUSTER_PALETTE, DEFAULT_MARKER_PALETTE, Tiles, UTILIZATION_PALETTE};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Map grid: fixed `rows x cols`, or derived from the row count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GridSpec {
    Auto,
    Fixed { rows: usize, cols: usize },
}

impl Default for GridSpec {
    fn default() -> Self {
        GridSpec::Fixed { rows: 3, cols: 2 }
    }
}

impl fmt::Display for GridSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridSpec::Auto => f.write_str("auto"),
            GridSpec::Fixed { rows, cols } => write!(f, "{}x{}", rows, cols),
        }
    }
}

impl FromStr for GridSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("auto") {
            return Ok(GridSpec::Auto);
        }
        let (rows, cols) = s
            .split_once(|c: char| c.eq_ignore_ascii_case(&'x'))
            .ok_or_else(|| format!("grid must be ROWSxCOLS or auto, got {:?}", s))?;
        let rows: usize = rows.trim().parse().map_err(|_| format!("bad grid rows: {:?}", rows))?;
        let cols: usize = cols.trim().parse().map_err(|_| format!("bad grid cols: {:?}", cols))?;
        if rows == 0 || cols == 0 {
            return Err(format!("grid dimensions must be positive, got {}", s));
        }
        Ok(GridSpec::Fixed { rows, cols })
    }
}

impl TryFrom<String> for GridSpec {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GridSpec> for String {
    fn from(grid: GridSpec) -> Self {
        grid.to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Hospital CSV
    pub path: Option<PathBuf>,
    /// Full state name
    pub state: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterConfig {
    pub features: Vec<String>,
    pub grid: GridSpec,
    pub epochs: usize,
    pub sigma: f64,
    pub learning_rate: f64,
    pub neighborhood: Neighborhood,
    pub activation_distance: ActivationDistance,
    pub seed: Option<u64>,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            features: CLUSTER_FEATURES.iter().map(|s| s.to_string()).collect(),
            grid: GridSpec::default(),
            epochs: DEFAULT_EPOCHS,
            sigma: 1.0,
            learning_rate: 0.5,
            neighborhood: Neighborhood::Gaussian,
            activation_distance: ActivationDistance::Euclidean,
            seed: None,
        }
    }
}

impl ClusterConfig {
    /// The configured map for `n_rows` vectors of `input_len` features.
    /// An auto grid is square with side [`SelfOrganizingMap::default_side`].
    pub fn build_som(
        &self,
        input_len: usize,
        n_rows: usize,
    ) -> Result<SelfOrganizingMap, ClusterError> {
        let (rows, cols) = match self.grid {
            GridSpec::Auto => {
                let side = SelfOrganizingMap::default_side(n_rows);
                (side, side)
            }
            GridSpec::Fixed { rows, cols } => (rows, cols),
        };
        SelfOrganizingMap::builder(rows, cols, input_len)
            .sigma(self.sigma)
            .learning_rate(self.learning_rate)
            .neighborhood(self.neighborhood)
            .activation_distance(self.activation_distance)
            .maybe_seed(self.seed)
            .build()
    }

    pub fn feature_refs(&self) -> Vec<&str> {
        self.features.iter().map(String::as_str).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub zoom: u8,
    pub tiles: Tiles,
    pub utilization_colors: Vec<String>,
    pub cluster_colors: Vec<String>,
    pub marker_colors: Vec<String>,
    /// Pin the hospitals flagged as cluster centroids
    pub pin_centroids: bool,
    /// Seed for random colors when a palette is empty
    pub seed: Option<u64>,
}

impl Default for MapConfig {
    fn default() -> Self {
        let owned = |p: &[&str]| p.iter().map(|s| s.to_string()).collect();
        Self {
            zoom: 6,
            tiles: Tiles::CartoDbPositron,
            utilization_colors: owned(UTILIZATION_PALETTE),
            cluster_colors: owned(CLUSTER_PALETTE),
            marker_colors: owned(DEFAULT_MARKER_PALETTE),
            pin_centroids: true,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("bedmap-out"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data: DataConfig,
    pub cluster: ClusterConfig,
    pub map: MapConfig,
    pub output: OutputConfig,
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&text)
            .context(format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_dashboard() {
        let config = AppConfig::default();
        assert_eq!(config.cluster.grid, GridSpec::Fixed { rows: 3, cols: 2 });
        assert_eq!(config.cluster.epochs, 100);
        assert_eq!(config.cluster.features.len(), 5);
        assert_eq!(config.map.zoom, 6);
        assert_eq!(config.map.cluster_colors.len(), 22);
        assert_eq!(config.map.marker_colors, vec!["orange"; 3]);
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = AppConfig::from_toml_str(
            r#"
            [data]
            path = "beds.csv"
            state = "Illinois"

            [cluster]
            grid = "4x4"
            neighborhood = "bubble"
            seed = 7

            [map]
            tiles = "Stamen Toner"
            "#,
        )
        .unwrap();

        assert_eq!(config.data.state.as_deref(), Some("Illinois"));
        assert_eq!(config.cluster.grid, GridSpec::Fixed { rows: 4, cols: 4 });
        assert_eq!(config.cluster.neighborhood, Neighborhood::Bubble);
        assert_eq!(config.cluster.epochs, 100);
        assert_eq!(config.map.tiles, Tiles::StamenToner);
        assert_eq!(config.output.dir, PathBuf::from("bedmap-out"));
    }

    #[test]
    fn test_bad_grid_rejected() {
        assert!(AppConfig::from_toml_str("[cluster]\ngrid = \"0x3\"").is_err());
        assert!("3by2".parse::<GridSpec>().is_err());
        assert_eq!("auto".parse::<GridSpec>().unwrap(), GridSpec::Auto);
        assert_eq!(" 5X1 ".parse::<GridSpec>().unwrap(), GridSpec::Fixed { rows: 5, cols: 1 });
    }

    #[test]
    fn test_build_som() {
        let mut config = ClusterConfig::default();
        config.seed = Some(1);
        let som = config.build_som(5, 100).unwrap();
        assert_eq!(som.shape(), (3, 2));
        assert_eq!(som.input_len(), 5);

        config.grid = GridSpec::Auto;
        config.neighborhood = Neighborhood::Bubble;
        let auto = config.build_som(5, 100).unwrap();
        assert_eq!(auto.shape(), (7, 7));
        assert_eq!(auto.neighborhood(), Neighborhood::Bubble);
        assert_eq!(auto, config.build_som(5, 100).unwrap());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bedmap.toml");
        std::fs::write(&path, "[map]\nzoom = 9\n").unwrap();
        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.map.zoom, 9);

        let err = AppConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
