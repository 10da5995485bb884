use crate::clusterer::{
    centroid::centroid_flags,
    error::ClusterError,
    scaler::StandardScaler,
    som::SelfOrganizingMap,
    types::ClusterResult,
};
use crate::table::Table;

/// Default number of training iterations
pub const DEFAULT_EPOCHS: usize = 100;

/// Cluster the rows of `features` (every column is a feature) on a
/// self-organizing map.
///
/// When `model` is `None`, a square map of side `round(sqrt(5 * sqrt(n)))`
/// is created with default parameters and an entropy seed.
pub fn fit_som_clusters(
    features: &Table,
    model: Option<SelfOrganizingMap>,
    epochs: usize,
) -> Result<ClusterResult, ClusterError> {
    let names = features.column_names();
    let data = features.numeric_matrix(&names)?;
    let names = names.into_iter().map(String::from).collect();
    fit_som_matrix(&data, names, model, epochs)
}

/// Same as [`fit_som_clusters`] for a row-major matrix
pub fn fit_som_matrix(
    data: &[Vec<f64>],
    feature_names: Vec<String>,
    model: Option<SelfOrganizingMap>,
    epochs: usize,
) -> Result<ClusterResult, ClusterError> {
    let dim = validate(data)?;
    if epochs == 0 {
        return Err(ClusterError::NoIterations);
    }

    // 1. Build or check the map
    let mut model = match model {
        Some(m) => m,
        None => {
            let side = SelfOrganizingMap::default_side(data.len());
            SelfOrganizingMap::builder(side, side, dim).build()?
        }
    };
    if model.input_len() != dim {
        return Err(ClusterError::InputLengthMismatch {
            expected: model.input_len(),
            got: dim,
        });
    }

    // 2. Standardize on this batch and train
    let (scaler, scaled) = StandardScaler::fit_transform(data);
    model.train_batch(&scaled, epochs);

    let (rows, cols) = model.shape();
    tracing::info!(rows, cols, epochs, "trained self-organizing map");

    // 3. Best-matching unit per row, flattened row-major
    let clusters: Vec<usize> = scaled.iter().map(|x| model.winner_index(x)).collect();

    // 4. Nearest real record to every cell's weights
    let centroids = centroid_flags(model.weights(), &scaled);

    let result = ClusterResult {
        clusters,
        centroids,
        model,
        scaler,
        feature_names,
    };

    tracing::info!(
        clusters = result.cluster_count(),
        centroids = result.centroid_count(),
        quantization_error = result.model.quantization_error(&scaled),
        "assigned clusters"
    );
    for p in result.populations() {
        tracing::debug!(cluster = p.cluster, count = p.count, "cluster population");
    }

    Ok(result)
}

/// Returns the feature dimension of a non-empty, rectangular, finite matrix
fn validate(data: &[Vec<f64>]) -> Result<usize, ClusterError> {
    let first = data.first().ok_or(ClusterError::EmptyInput)?;
    let dim = first.len();
    if dim == 0 {
        return Err(ClusterError::NoFeatures);
    }

    for (row, x) in data.iter().enumerate() {
        if x.len() != dim {
            return Err(ClusterError::RaggedInput {
                row,
                expected: dim,
                got: x.len(),
            });
        }
        if let Some(column) = x.iter().position(|v| !v.is_finite()) {
            return Err(ClusterError::NonFinite { row, column });
        }
    }

    Ok(dim)
}
