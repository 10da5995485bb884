/// Linearly rescale `values` so the batch minimum maps to `range.0` and the
/// maximum to `range.1`. A constant batch maps entirely to `range.0`.
pub fn min_max_scale(values: &[f64], range: (f64, f64)) -> Vec<f64> {
    let (lo, hi) = range;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = if max > min { max - min } else { 1.0 };

    values
        .iter()
        .map(|x| lo + (x - min) * (hi - lo) / span)
        .collect()
}
