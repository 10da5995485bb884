use crate::clusterer::similarity::squared_euclidean;

/// For each code vector, the index of the nearest observation and its
/// Euclidean distance. Ties resolve to the lowest observation index.
pub fn nearest_observations(codes: &[Vec<f64>], observations: &[Vec<f64>]) -> Vec<(usize, f64)> {
    codes
        .iter()
        .map(|code| {
            let mut best = (0, f64::INFINITY);
            for (i, obs) in observations.iter().enumerate() {
                let d = squared_euclidean(code, obs);
                if d < best.1 {
                    best = (i, d);
                }
            }
            (best.0, best.1.sqrt())
        })
        .collect()
}

/// 0/1 flag per observation: 1 when it is the nearest observation to at
/// least one code vector
pub fn centroid_flags(codes: &[Vec<f64>], observations: &[Vec<f64>]) -> Vec<u8> {
    let mut flags = vec![0u8; observations.len()];
    for (idx, _) in nearest_observations(codes, observations) {
        flags[idx] = 1;
    }
    flags
}
