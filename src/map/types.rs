use crate::map::error::MapError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Base layer of the map
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Tiles {
    #[default]
    CartoDbPositron,
    OpenStreetMap,
    StamenTerrain,
    StamenToner,
}

impl Tiles {
    pub fn name(self) -> &'static str {
        match self {
            Tiles::CartoDbPositron => "cartodbpositron",
            Tiles::OpenStreetMap => "OpenStreetMap",
            Tiles::StamenTerrain => "Stamen Terrain",
            Tiles::StamenToner => "Stamen Toner",
        }
    }

    /// Leaflet tile URL template
    pub fn url(self) -> &'static str {
        match self {
            Tiles::CartoDbPositron => "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png",
            Tiles::OpenStreetMap => "https://tile.openstreetmap.org/{z}/{x}/{y}.png",
            Tiles::StamenTerrain => {
                "https://tiles.stadiamaps.com/tiles/stamen_terrain/{z}/{x}/{y}{r}.png"
            }
            Tiles::StamenToner => "https://tiles.stadiamaps.com/tiles/stamen_toner/{z}/{x}/{y}{r}.png",
        }
    }

    pub fn attribution(self) -> &'static str {
        match self {
            Tiles::CartoDbPositron => {
                "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors &copy; <a href=\"https://carto.com/attributions\">CARTO</a>"
            }
            Tiles::OpenStreetMap => {
                "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
            }
            Tiles::StamenTerrain | Tiles::StamenToner => {
                "&copy; <a href=\"https://stadiamaps.com/\">Stadia Maps</a> &copy; <a href=\"https://stamen.com/\">Stamen Design</a> &copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
            }
        }
    }
}

impl fmt::Display for Tiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tiles {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "cartodbpositron" => Ok(Tiles::CartoDbPositron),
            "openstreetmap" => Ok(Tiles::OpenStreetMap),
            "stamenterrain" => Ok(Tiles::StamenTerrain),
            "stamentoner" => Ok(Tiles::StamenToner),
            _ => Err(MapError::UnknownTiles(s.to_string())),
        }
    }
}

impl TryFrom<String> for Tiles {
    type Error = MapError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Tiles> for String {
    fn from(tiles: Tiles) -> Self {
        tiles.name().to_string()
    }
}

/// Filled circle at a hospital location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleMarker {
    /// `[latitude, longitude]`
    pub location: [f64; 2],
    pub radius: f64,
    pub color: String,
    pub fill: bool,
    pub popup: Option<String>,
}

/// Pin marker for a categorical highlight
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PinMarker {
    /// `[latitude, longitude]`
    pub location: [f64; 2],
    pub color: String,
    pub popup: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

/// Color key for the circle markers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: String,
    pub entries: Vec<LegendEntry>,
}

/// An annotated map, ready to render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeafletMap {
    /// `[latitude, longitude]` of the initial view
    pub start: [f64; 2],
    pub zoom: u8,
    pub tiles: Tiles,
    pub circles: Vec<CircleMarker>,
    pub pins: Vec<PinMarker>,
    pub legend: Option<Legend>,
}
