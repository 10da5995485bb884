use crate::dataset::states::state_name;
use crate::dataset::utilization::{UtilizationLevel, label_utilization};
use serde::Deserialize;

pub const STATE: &str = "HQ_STATE";
pub const HOSPITAL_NAME: &str = "HOSPITAL_NAME";
pub const ADDRESS: &str = "HQ_ADDRESS";
pub const LONGITUDE: &str = "Longitude";
pub const LATITUDE: &str = "Latitude";
pub const LICENSED_BEDS: &str = "NUM_LICENSED_BEDS";
pub const STAFFED_BEDS: &str = "NUM_STAFFED_BEDS";
pub const ICU_BEDS: &str = "NUM_ICU_BEDS";
pub const ADULT_ICU_BEDS: &str = "ADULT_ICU_BEDS";
pub const PEDI_ICU_BEDS: &str = "PEDI_ICU_BEDS";
pub const BED_UTILIZATION: &str = "BED_UTILIZATION";
pub const POTENTIAL_INCREASE: &str = "Potential_Increase_In_Bed_Capac";
pub const AVG_VENTILATOR_USAGE: &str = "AVG_VENTILATOR_USAGE";
pub const UNSTAFFED_BEDS: &str = "UNSTAFFED_BEDS";
pub const UTILIZATION: &str = "UTILIZATION";
pub const ID: &str = "id";

/// Columns kept for a single-state view, after `id`
pub const DASHBOARD_COLUMNS: &[&str] = &[
    STATE,
    HOSPITAL_NAME,
    ADDRESS,
    LONGITUDE,
    LATITUDE,
    LICENSED_BEDS,
    ICU_BEDS,
    BED_UTILIZATION,
    POTENTIAL_INCREASE,
    UNSTAFFED_BEDS,
    UTILIZATION,
];

/// Features fed to the clusterer, in order
pub const CLUSTER_FEATURES: &[&str] = &[
    LICENSED_BEDS,
    ICU_BEDS,
    BED_UTILIZATION,
    POTENTIAL_INCREASE,
    UNSTAFFED_BEDS,
];

/// One hospital row of the source CSV.
///
/// The source names longitude `X` and latitude `Y`. Numeric cells that are
/// empty or unparseable are read as missing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HospitalRecord {
    #[serde(rename = "HOSPITAL_NAME", default)]
    pub hospital_name: Option<String>,
    #[serde(rename = "HQ_ADDRESS", default)]
    pub address: Option<String>,
    #[serde(rename = "HQ_STATE", default)]
    pub state: Option<String>,
    #[serde(rename = "X", default, deserialize_with = "csv::invalid_option")]
    pub longitude: Option<f64>,
    #[serde(rename = "Y", default, deserialize_with = "csv::invalid_option")]
    pub latitude: Option<f64>,
    #[serde(rename = "NUM_LICENSED_BEDS", default, deserialize_with = "csv::invalid_option")]
    pub licensed_beds: Option<f64>,
    #[serde(rename = "NUM_STAFFED_BEDS", default, deserialize_with = "csv::invalid_option")]
    pub staffed_beds: Option<f64>,
    #[serde(rename = "NUM_ICU_BEDS", default, deserialize_with = "csv::invalid_option")]
    pub icu_beds: Option<f64>,
    #[serde(rename = "ADULT_ICU_BEDS", default, deserialize_with = "csv::invalid_option")]
    pub adult_icu_beds: Option<f64>,
    #[serde(rename = "PEDI_ICU_BEDS", default, deserialize_with = "csv::invalid_option")]
    pub pedi_icu_beds: Option<f64>,
    #[serde(rename = "BED_UTILIZATION", default, deserialize_with = "csv::invalid_option")]
    pub bed_utilization: Option<f64>,
    #[serde(
        rename = "Potential_Increase_In_Bed_Capac",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub potential_increase: Option<f64>,
    #[serde(rename = "AVG_VENTILATOR_USAGE", default, deserialize_with = "csv::invalid_option")]
    pub avg_ventilator_usage: Option<f64>,
}

impl HospitalRecord {
    /// Licensed minus staffed beds
    pub fn unstaffed_beds(&self) -> Option<f64> {
        Some(self.licensed_beds? - self.staffed_beds?)
    }

    /// Utilization band; a missing ratio bands as high
    pub fn utilization(&self) -> UtilizationLevel {
        label_utilization(self.bed_utilization.unwrap_or(f64::NAN))
    }

    /// Full state name, if the state is known
    pub fn state_name(&self) -> Option<&str> {
        self.state.as_deref().map(state_name)
    }
}
