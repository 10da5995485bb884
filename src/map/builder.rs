use crate::map::{
    error::MapError,
    palette::{
        DEFAULT_COLOR, DEFAULT_MARKER_PALETTE, DEFAULT_RADIUS, RADIUS_RANGE, random_colors,
        to_owned_palette,
    },
    scale::min_max_scale,
    types::{CircleMarker, LeafletMap, Legend, LegendEntry, PinMarker, Tiles},
};
use crate::table::{CellValue, Table, position_in};

/// Describes how rows of a table become markers on a map.
///
/// Only the latitude and longitude columns are required. Every other
/// setting is optional and falls back to a fixed radius and color.
#[derive(Debug, Clone)]
pub struct MapBuilder {
    lat: String,
    lon: String,
    start: [f64; 2],
    zoom: u8,
    tiles: Tiles,
    popup: Option<String>,
    size: Option<String>,
    color: Option<String>,
    legend: bool,
    colors: Option<Vec<String>>,
    marker: Option<String>,
    marker_palette: Vec<String>,
    seed: Option<u64>,
}

impl MapBuilder {
    /// # Arguments
    /// * `lat` - Column holding latitude
    /// * `lon` - Column holding longitude
    /// * `start` - `[latitude, longitude]` of the initial view
    pub fn new(lat: impl Into<String>, lon: impl Into<String>, start: [f64; 2]) -> Self {
        Self {
            lat: lat.into(),
            lon: lon.into(),
            start,
            zoom: 12,
            tiles: Tiles::default(),
            popup: None,
            size: None,
            color: None,
            legend: false,
            colors: None,
            marker: None,
            marker_palette: to_owned_palette(DEFAULT_MARKER_PALETTE),
            seed: None,
        }
    }

    pub fn zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn tiles(mut self, tiles: Tiles) -> Self {
        self.tiles = tiles;
        self
    }

    /// Column whose text is shown when a circle is clicked
    pub fn popup(mut self, column: impl Into<String>) -> Self {
        self.popup = Some(column.into());
        self
    }

    /// Column rescaled into the radius range
    pub fn size(mut self, column: impl Into<String>) -> Self {
        self.size = Some(column.into());
        self
    }

    /// Categorical column that picks each circle's color
    pub fn color(mut self, column: impl Into<String>) -> Self {
        self.color = Some(column.into());
        self
    }

    /// Add a legend overlay for the color column
    pub fn legend(mut self, legend: bool) -> Self {
        self.legend = legend;
        self
    }

    /// Colors for the sorted distinct values of the color column.
    /// Without this, random colors are generated.
    pub fn colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    /// Categorical column that places pins
    pub fn marker(mut self, column: impl Into<String>) -> Self {
        self.marker = Some(column.into());
        self
    }

    pub fn marker_palette<I, S>(mut self, palette: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.marker_palette = palette.into_iter().map(Into::into).collect();
        self
    }

    /// Seed for the random color fallback
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Annotate every row of `table`. Fails without partial output.
    pub fn build(&self, table: &Table) -> Result<LeafletMap, MapError> {
        let lats = table.column(&self.lat)?.numeric()?;
        let lons = table.column(&self.lon)?.numeric()?;

        let popups = match &self.popup {
            Some(col) => Some(
                table
                    .column(col)?
                    .values()
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>(),
            ),
            None => None,
        };

        // 1. Colors by sorted distinct value
        let mut legend_entries = Vec::new();
        let colors: Vec<String> = match &self.color {
            Some(col) => {
                let column = table.column(col)?;
                let elements = column.distinct_sorted();
                let palette = match &self.colors {
                    Some(colors) => colors.clone(),
                    None => random_colors(elements.len(), self.seed),
                };
                if palette.len() < elements.len() {
                    return Err(MapError::PaletteTooSmall {
                        column: col.clone(),
                        distinct: elements.len(),
                        colors: palette.len(),
                    });
                }

                legend_entries = elements
                    .iter()
                    .zip(&palette)
                    .map(|(value, color)| LegendEntry {
                        label: value.to_string(),
                        color: color.clone(),
                    })
                    .collect();

                column
                    .values()
                    .iter()
                    .map(|v| {
                        let idx = position_in(&elements, v).unwrap_or_default();
                        palette[idx].clone()
                    })
                    .collect()
            }
            None => vec![DEFAULT_COLOR.to_string(); table.len()],
        };

        // 2. Radii from the size column
        let radii = match &self.size {
            Some(col) => min_max_scale(&table.column(col)?.numeric()?, RADIUS_RANGE),
            None => vec![DEFAULT_RADIUS; table.len()],
        };

        let circles: Vec<CircleMarker> = (0..table.len())
            .map(|row| CircleMarker {
                location: [lats[row], lons[row]],
                radius: radii[row],
                color: colors[row].clone(),
                fill: true,
                popup: popups.as_ref().map(|p| p[row].clone()),
            })
            .collect();

        let legend = match (&self.color, self.legend) {
            (Some(col), true) => Some(Legend {
                title: col.clone(),
                entries: legend_entries,
            }),
            _ => None,
        };

        // 3. Pins by marker category
        let pins = match &self.marker {
            Some(col) => self.pins(table, col, &lats, &lons)?,
            None => Vec::new(),
        };

        tracing::debug!(
            circles = circles.len(),
            pins = pins.len(),
            legend = legend.is_some(),
            "annotated map"
        );

        Ok(LeafletMap {
            start: self.start,
            zoom: self.zoom,
            tiles: self.tiles,
            circles,
            pins,
            legend,
        })
    }

    fn pins(
        &self,
        table: &Table,
        col: &str,
        lats: &[f64],
        lons: &[f64],
    ) -> Result<Vec<PinMarker>, MapError> {
        let column = table.column(col)?;
        let elements = column.distinct_sorted();
        let palette = &self.marker_palette;

        if elements.len() > palette.len() {
            return Err(MapError::MarkerCardinality {
                column: col.to_string(),
                distinct: elements.len(),
                palette: palette.len(),
            });
        }

        let pin_rows = |value: &CellValue, color: &str| -> Vec<PinMarker> {
            column
                .values()
                .iter()
                .enumerate()
                .filter(|(_, v)| v.same_as(value))
                .map(|(row, v)| PinMarker {
                    location: [lats[row], lons[row]],
                    color: color.to_string(),
                    popup: v.to_string(),
                })
                .collect()
        };

        // Binary column: only the second (higher) value is pinned
        if elements.len() == 2 {
            return Ok(pin_rows(&elements[1], palette[0].as_str()));
        }

        Ok(elements
            .iter()
            .zip(palette)
            .flat_map(|(value, color)| pin_rows(value, color.as_str()))
            .collect())
    }
}
