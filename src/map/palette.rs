use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Circle color when no color column is given
pub const DEFAULT_COLOR: &str = "#3186cc";

/// Circle radius when no size column is given
pub const DEFAULT_RADIUS: f64 = 5.0;

/// Radius range for a size column
pub const RADIUS_RANGE: (f64, f64) = (3.0, 15.0);

/// Pin colors by marker category
pub const DEFAULT_MARKER_PALETTE: &[&str] = &["orange", "orange", "orange"];

/// Colors for the sorted utilization labels `high`, `low`, `medium`
pub const UTILIZATION_PALETTE: &[&str] = &["#e6194B", "#3cb44b", "#4363d8"];

/// Colors for cluster ids
pub const CLUSTER_PALETTE: &[&str] = &[
    "#e6194b", "#3cb44b", "#ffe119", "#4363d8", "#f58231", "#911eb4", "#46f0f0", "#f032e6",
    "#bcf60c", "#fabebe", "#008080", "#e6beff", "#9a6324", "#fffac8", "#800000", "#aaffc3",
    "#808000", "#ffd8b1", "#000075", "#808080", "#ffffff", "#000000",
];

/// `n` random `#RRGGBB` colors. Unseeded calls differ from run to run.
pub fn random_colors(n: usize, seed: Option<u64>) -> Vec<String> {
    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    (0..n)
        .map(|_| format!("#{:06X}", rng.gen_range(0..0xFFFFFFu32)))
        .collect()
}

pub fn to_owned_palette(colors: &[&str]) -> Vec<String> {
    colors.iter().map(|c| c.to_string()).collect()
}
