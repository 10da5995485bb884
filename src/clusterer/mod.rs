mod centroid;
mod error;
mod fit;
mod scaler;
mod similarity;
mod som;
mod types;


pub use centroid::{centroid_flags, nearest_observations};
pub use error::ClusterError;
pub use fit::{DEFAULT_EPOCHS, fit_som_clusters, fit_som_matrix};
pub use scaler::StandardScaler;
pub use similarity::ActivationDistance;
pub use som::{Neighborhood, SelfOrganizingMap, SomBuilder};
pub use types::{CENTROID_COLUMN, CLUSTER_COLUMN, ClusterPopulation, ClusterResult};
