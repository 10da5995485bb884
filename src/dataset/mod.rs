mod error;
mod loader;
mod record;
mod states;
mod utilization;


pub use error::DatasetError;
pub use loader::{Dataset, StateTable};
pub use record::*;
pub use states::{US_STATES, state_name};
pub use utilization::{
    HIGH_UTILIZATION_MIN, LOW_UTILIZATION_MAX, UtilizationLevel, label_utilization,
};
