use serde::{Deserialize, Serialize};

/// Zero-mean, unit-variance standardization fit on a single batch.
///
/// Uses the population standard deviation. Constant columns keep a scale of
/// 1 so they are centred but not divided by zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Fit on row-major data. `data` must be non-empty and rectangular.
    pub fn fit(data: &[Vec<f64>]) -> Self {
        let dim = data[0].len();
        let n = data.len() as f64;

        let mut mean = vec![0.0; dim];
        for row in data {
            for j in 0..dim {
                mean[j] += row[j];
            }
        }
        for m in mean.iter_mut() {
            *m /= n;
        }

        let mut var = vec![0.0; dim];
        for row in data {
            for j in 0..dim {
                let d = row[j] - mean[j];
                var[j] += d * d;
            }
        }

        let scale = var
            .into_iter()
            .map(|v| {
                let sd = (v / n).sqrt();
                if sd == 0.0 { 1.0 } else { sd }
            })
            .collect();

        Self { mean, scale }
    }

    pub fn transform(&self, data: &[Vec<f64>]) -> Vec<Vec<f64>> {
        data.iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(j, x)| (x - self.mean[j]) / self.scale[j])
                    .collect()
            })
            .collect()
    }

    pub fn fit_transform(data: &[Vec<f64>]) -> (Self, Vec<Vec<f64>>) {
        let scaler = Self::fit(data);
        let out = scaler.transform(data);
        (scaler, out)
    }

    pub fn inverse_transform(&self, data: &[Vec<f64>]) -> Vec<Vec<f64>> {
        data.iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(j, z)| z * self.scale[j] + self.mean[j])
                    .collect()
            })
            .collect()
    }
}
