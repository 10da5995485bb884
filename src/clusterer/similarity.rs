use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    squared_euclidean(a, b).sqrt()
}

pub fn squared_euclidean(a: &[f64], b: &[f64]) -> f64 {
    let mut sum = 0.0;
    for i in 0..a.len() {
        let d = a[i] - b[i];
        sum += d * d;
    }
    sum
}

pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let mut dot = 0.0;
    let mut na = 0.0;
    let mut nb = 0.0;

    for i in 0..a.len() {
        dot += a[i] * b[i];
        na += a[i] * a[i];
        nb += b[i] * b[i];
    }

    dot / (na.sqrt() * nb.sqrt() + 1e-8)
}

pub fn cosine_distance(a: &[f64], b: &[f64]) -> f64 {
    1.0 - cosine_similarity(a, b)
}

pub fn manhattan_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum()
}

pub fn chebyshev_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

/// Distance used to pick the best-matching unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationDistance {
    #[default]
    Euclidean,
    Cosine,
    Manhattan,
    Chebyshev,
}

impl ActivationDistance {
    pub fn distance(self, a: &[f64], b: &[f64]) -> f64 {
        match self {
            ActivationDistance::Euclidean => euclidean_distance(a, b),
            ActivationDistance::Cosine => cosine_distance(a, b),
            ActivationDistance::Manhattan => manhattan_distance(a, b),
            ActivationDistance::Chebyshev => chebyshev_distance(a, b),
        }
    }
}

impl fmt::Display for ActivationDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActivationDistance::Euclidean => "euclidean",
            ActivationDistance::Cosine => "cosine",
            ActivationDistance::Manhattan => "manhattan",
            ActivationDistance::Chebyshev => "chebyshev",
        };
        f.write_str(name)
    }
}

impl FromStr for ActivationDistance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "euclidean" => Ok(ActivationDistance::Euclidean),
            "cosine" => Ok(ActivationDistance::Cosine),
            "manhattan" => Ok(ActivationDistance::Manhattan),
            "chebyshev" => Ok(ActivationDistance::Chebyshev),
            other => Err(format!("unknown activation distance: {}", other)),
        }
    }
}
