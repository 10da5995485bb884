use crate::map::types::{LeafletMap, Legend};
use serde_json::{Value, json};

const LEAFLET_VERSION: &str = "1.9.4";

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// JSON safe to inline in a `<script>` block
fn script_json(value: &impl serde::Serialize) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "null".to_string())
        .replace("</", "<\\/")
}

/// Fixed-position legend overlay
pub fn legend_html(legend: &Legend) -> String {
    let mut html = format!(
        "<div style=\"position:fixed; bottom:10px; left:10px; border:2px solid black; \
         z-index:9999; font-size:14px; background:white;\">&nbsp;<b>{}:</b><br>",
        escape_html(&legend.title)
    );
    for entry in &legend.entries {
        html.push_str(&format!(
            "&nbsp;<i class=\"fa fa-circle fa-1x\" style=\"color:{}\"></i>&nbsp;{}<br>",
            escape_html(&entry.color),
            escape_html(&entry.label)
        ));
    }
    html.push_str("</div>");
    html
}

impl LeafletMap {
    /// Standalone HTML page drawing the map with Leaflet
    pub fn to_html(&self) -> String {
        let legend = self.legend.as_ref().map(legend_html).unwrap_or_default();
        let tiles = json!({
            "url": self.tiles.url(),
            "attribution": self.tiles.attribution(),
        });

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<link rel="stylesheet" href="https://unpkg.com/leaflet@{version}/dist/leaflet.css">
<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/4.7.0/css/font-awesome.min.css">
<script src="https://unpkg.com/leaflet@{version}/dist/leaflet.js"></script>
<style>html, body, #map {{ width: 100%; height: 100%; margin: 0; padding: 0; }}</style>
</head>
<body>
<div id="map"></div>
{legend}
<script>
const tiles = {tiles};
const circles = {circles};
const pins = {pins};
const map = L.map("map").setView({start}, {zoom});
L.tileLayer(tiles.url, {{ attribution: tiles.attribution }}).addTo(map);
function popup(text) {{
  const el = document.createElement("div");
  el.textContent = text;
  return el;
}}
for (const c of circles) {{
  const m = L.circleMarker(c.location, {{ radius: c.radius, color: c.color, fill: c.fill }}).addTo(map);
  if (c.popup !== null) m.bindPopup(popup(c.popup));
}}
for (const p of pins) {{
  const icon = L.divIcon({{
    className: "",
    html: '<i class="fa fa-map-marker fa-3x"></i>',
    iconSize: [20, 36],
    iconAnchor: [10, 36],
  }});
  const m = L.marker(p.location, {{ icon: icon, draggable: false }}).addTo(map);
  m.getElement().firstChild.style.color = p.color;
  m.bindPopup(popup(p.popup));
}}
</script>
</body>
</html>
"#,
            version = LEAFLET_VERSION,
            legend = legend,
            tiles = script_json(&tiles),
            circles = script_json(&self.circles),
            pins = script_json(&self.pins),
            start = script_json(&self.start),
            zoom = self.zoom,
        )
    }

    /// GeoJSON FeatureCollection of circles and pins. Coordinates are
    /// `[longitude, latitude]`.
    pub fn to_geojson(&self) -> Value {
        let circles = self.circles.iter().map(|c| {
            json!({
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [c.location[1], c.location[0]] },
                "properties": {
                    "kind": "circle",
                    "radius": c.radius,
                    "color": c.color,
                    "popup": c.popup,
                },
            })
        });
        let pins = self.pins.iter().map(|p| {
            json!({
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [p.location[1], p.location[0]] },
                "properties": {
                    "kind": "pin",
                    "color": p.color,
                    "popup": p.popup,
                },
            })
        });

        json!({
            "type": "FeatureCollection",
            "features": circles.chain(pins).collect::<Vec<_>>(),
        })
    }
}
