use crate::clusterer::error::ClusterError;
use crate::clusterer::similarity::{ActivationDistance, euclidean_distance};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How strongly a winning cell pulls its grid neighbours
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Neighborhood {
    #[default]
    Gaussian,
    MexicanHat,
    Bubble,
    Triangle,
}

impl Neighborhood {
    /// Influence on grid cell (`i`, `j`) of a winner at `center`
    pub(crate) fn influence(self, center: (usize, usize), i: usize, j: usize, sigma: f64) -> f64 {
        let di = i as f64 - center.0 as f64;
        let dj = j as f64 - center.1 as f64;
        match self {
            Neighborhood::Gaussian => {
                let d = 2.0 * sigma * sigma;
                (-(di * di) / d).exp() * (-(dj * dj) / d).exp()
            }
            Neighborhood::MexicanHat => {
                let p = di * di + dj * dj;
                let d = 2.0 * sigma * sigma;
                (-p / d).exp() * (1.0 - 2.0 / d * p)
            }
            Neighborhood::Bubble => {
                let inside_i = di.abs() < sigma;
                let inside_j = dj.abs() < sigma;
                if inside_i && inside_j { 1.0 } else { 0.0 }
            }
            Neighborhood::Triangle => {
                let ti = (sigma - di.abs()).max(0.0);
                let tj = (sigma - dj.abs()).max(0.0);
                ti * tj
            }
        }
    }
}

impl fmt::Display for Neighborhood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Neighborhood::Gaussian => "gaussian",
            Neighborhood::MexicanHat => "mexican_hat",
            Neighborhood::Bubble => "bubble",
            Neighborhood::Triangle => "triangle",
        };
        f.write_str(name)
    }
}

impl FromStr for Neighborhood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gaussian" => Ok(Neighborhood::Gaussian),
            "mexican_hat" => Ok(Neighborhood::MexicanHat),
            "bubble" => Ok(Neighborhood::Bubble),
            "triangle" => Ok(Neighborhood::Triangle),
            other => Err(format!("unknown neighborhood function: {}", other)),
        }
    }
}

/// `value / (1 + t / (max_iter / 2))`
pub(crate) fn asymptotic_decay(value: f64, t: usize, max_iter: usize) -> f64 {
    value / (1.0 + t as f64 / (max_iter as f64 / 2.0))
}

/// Builder for a [`SelfOrganizingMap`]
#[derive(Debug, Clone)]
pub struct SomBuilder {
    rows: usize,
    cols: usize,
    input_len: usize,
    sigma: f64,
    learning_rate: f64,
    neighborhood: Neighborhood,
    distance: ActivationDistance,
    seed: Option<u64>,
}

impl SomBuilder {
    pub fn new(rows: usize, cols: usize, input_len: usize) -> Self {
        Self {
            rows,
            cols,
            input_len,
            sigma: 1.0,
            learning_rate: 0.5,
            neighborhood: Neighborhood::Gaussian,
            distance: ActivationDistance::Euclidean,
            seed: None,
        }
    }

    /// Initial neighbourhood radius
    pub fn sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }

    /// Initial learning rate
    pub fn learning_rate(mut self, rate: f64) -> Self {
        self.learning_rate = rate;
        self
    }

    pub fn neighborhood(mut self, neighborhood: Neighborhood) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    pub fn activation_distance(mut self, distance: ActivationDistance) -> Self {
        self.distance = distance;
        self
    }

    /// Fix the weight initialization. Unseeded maps draw from OS entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(self) -> Result<SelfOrganizingMap, ClusterError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ClusterError::InvalidGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.input_len == 0 {
            return Err(ClusterError::NoFeatures);
        }

        let mut rng = match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        // Uniform in [-1, 1), then scaled to unit length
        let weights = (0..self.rows * self.cols)
            .map(|_| {
                let mut w: Vec<f64> = (0..self.input_len)
                    .map(|_| rng.gen::<f64>() * 2.0 - 1.0)
                    .collect();
                let norm = w.iter().map(|x| x * x).sum::<f64>().sqrt();
                if norm > 0.0 {
                    w.iter_mut().for_each(|x| *x /= norm);
                }
                w
            })
            .collect();

        Ok(SelfOrganizingMap {
            rows: self.rows,
            cols: self.cols,
            input_len: self.input_len,
            sigma: self.sigma,
            learning_rate: self.learning_rate,
            neighborhood: self.neighborhood,
            distance: self.distance,
            weights,
        })
    }
}

/// A rectangular self-organizing map.
///
/// Weights are stored row-major: cell (`r`, `c`) lives at `r * cols + c`,
/// which is also its flattened cluster id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelfOrganizingMap {
    rows: usize,
    cols: usize,
    input_len: usize,
    sigma: f64,
    learning_rate: f64,
    neighborhood: Neighborhood,
    distance: ActivationDistance,
    weights: Vec<Vec<f64>>,
}

impl SelfOrganizingMap {
    pub fn builder(rows: usize, cols: usize, input_len: usize) -> SomBuilder {
        SomBuilder::new(rows, cols, input_len)
    }

    /// Grid side used when no map is supplied: `round(sqrt(5 * sqrt(n)))`
    pub fn default_side(n: usize) -> usize {
        ((5.0 * (n as f64).sqrt()).sqrt().round() as usize).max(1)
    }

    /// (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn input_len(&self) -> usize {
        self.input_len
    }

    pub fn neighborhood(&self) -> Neighborhood {
        self.neighborhood
    }

    pub fn activation_distance(&self) -> ActivationDistance {
        self.distance
    }

    /// All weight vectors, row-major
    pub fn weights(&self) -> &[Vec<f64>] {
        &self.weights
    }

    pub fn weight(&self, row: usize, col: usize) -> &[f64] {
        &self.weights[row * self.cols + col]
    }

    /// Flattened index of the best-matching unit. First minimum wins.
    pub fn winner_index(&self, x: &[f64]) -> usize {
        let mut best = (0, f64::INFINITY);
        for (idx, w) in self.weights.iter().enumerate() {
            let d = self.distance.distance(x, w);
            if d < best.1 {
                best = (idx, d);
            }
        }
        best.0
    }

    /// Grid coordinates of the best-matching unit
    pub fn winner(&self, x: &[f64]) -> (usize, usize) {
        let idx = self.winner_index(x);
        (idx / self.cols, idx % self.cols)
    }

    /// Train by visiting the rows of `data` in order, cycling until
    /// `num_iteration` updates have been applied.
    pub fn train_batch(&mut self, data: &[Vec<f64>], num_iteration: usize) {
        if data.is_empty() {
            return;
        }
        for t in 0..num_iteration {
            let x = &data[t % data.len()];
            let win = self.winner(x);
            self.update(x, win, t, num_iteration);
        }
    }

    fn update(&mut self, x: &[f64], win: (usize, usize), t: usize, max_iter: usize) {
        let eta = asymptotic_decay(self.learning_rate, t, max_iter);
        let sig = asymptotic_decay(self.sigma, t, max_iter);

        for i in 0..self.rows {
            for j in 0..self.cols {
                let g = self.neighborhood.influence(win, i, j, sig) * eta;
                if g == 0.0 {
                    continue;
                }
                let w = &mut self.weights[i * self.cols + j];
                for (wk, xk) in w.iter_mut().zip(x) {
                    *wk += g * (xk - *wk);
                }
            }
        }
    }

    /// Mean Euclidean distance between each vector and its winner's weights
    pub fn quantization_error(&self, data: &[Vec<f64>]) -> f64 {
        if data.is_empty() {
            return 0.0;
        }
        let total: f64 = data
            .iter()
            .map(|x| euclidean_distance(x, &self.weights[self.winner_index(x)]))
            .sum();
        total / data.len() as f64
    }
}
