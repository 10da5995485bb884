use crate::dataset::error::DatasetError;
use crate::dataset::record::*;
use crate::table::{CellValue, Column, Table};
use std::io;
use std::path::Path;

/// All hospital records from one CSV
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<HospitalRecord>,
}

/// The hospitals of a single state, ready for clustering and mapping
#[derive(Debug, Clone)]
pub struct StateTable {
    /// Full state name
    pub state: String,
    /// `id` plus the dashboard columns, rows with missing cells removed
    pub table: Table,
    /// `[latitude, longitude]` of the first hospital, used as map start
    pub start: [f64; 2],
}

impl Dataset {
    pub fn from_records(records: Vec<HospitalRecord>) -> Self {
        Self { records }
    }

    /// Load a CSV file with a header row
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|source| DatasetError::Read {
                path: path.display().to_string(),
                source,
            })?;
        let dataset = Self::from_csv(reader)?;
        tracing::info!(path = %path.display(), rows = dataset.len(), "loaded hospital data");
        Ok(dataset)
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, DatasetError> {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        Self::from_csv(reader)
    }

    fn from_csv<R: io::Read>(mut reader: csv::Reader<R>) -> Result<Self, DatasetError> {
        let records = reader
            .deserialize()
            .collect::<Result<Vec<HospitalRecord>, csv::Error>>()?;
        Ok(Self::from_records(records))
    }

    pub fn records(&self) -> &[HospitalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Full state names in order of first appearance
    pub fn states(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for name in self.records.iter().filter_map(|r| r.state_name()) {
            if !out.iter().any(|s| s == name) {
                out.push(name.to_string());
            }
        }
        out
    }

    /// Every record as a table, with renamed coordinates, full state names
    /// and the derived `UNSTAFFED_BEDS` and `UTILIZATION` columns
    pub fn to_table(&self) -> Result<Table, DatasetError> {
        let r = &self.records;
        let text = |name: &str, f: fn(&HospitalRecord) -> Option<String>| {
            Column::from_values(name, r.iter().map(f))
        };
        let num = |name: &str, f: fn(&HospitalRecord) -> Option<f64>| {
            Column::from_values(name, r.iter().map(f))
        };

        let columns = vec![
            text(STATE, |h| h.state_name().map(String::from)),
            text(HOSPITAL_NAME, |h| h.hospital_name.clone()),
            text(ADDRESS, |h| h.address.clone()),
            num(LONGITUDE, |h| h.longitude),
            num(LATITUDE, |h| h.latitude),
            num(LICENSED_BEDS, |h| h.licensed_beds),
            num(STAFFED_BEDS, |h| h.staffed_beds),
            num(ICU_BEDS, |h| h.icu_beds),
            num(ADULT_ICU_BEDS, |h| h.adult_icu_beds),
            num(PEDI_ICU_BEDS, |h| h.pedi_icu_beds),
            num(BED_UTILIZATION, |h| h.bed_utilization),
            num(POTENTIAL_INCREASE, |h| h.potential_increase),
            num(AVG_VENTILATOR_USAGE, |h| h.avg_ventilator_usage),
            num(UNSTAFFED_BEDS, |h| h.unstaffed_beds()),
            text(UTILIZATION, |h| Some(h.utilization().to_string())),
        ];

        Ok(Table::from_columns(columns)?)
    }

    /// Hospitals of one state (full name), projected to the dashboard
    /// columns with a positional `id`, incomplete rows dropped
    pub fn state_table(&self, state: &str) -> Result<StateTable, DatasetError> {
        let selected = self
            .to_table()?
            .filter_eq(STATE, &CellValue::from(state))?
            .select(DASHBOARD_COLUMNS)?;
        if selected.is_empty() {
            return Err(DatasetError::UnknownState(state.to_string()));
        }

        let mut columns = vec![Column::from_values(ID, 0..selected.len() as i64)];
        columns.extend(selected.columns().iter().cloned());
        let table = Table::from_columns(columns)?.drop_missing();

        let (Some(lat), Some(lon)) = (
            table.value(LATITUDE, 0)?.as_f64(),
            table.value(LONGITUDE, 0)?.as_f64(),
        ) else {
            return Err(DatasetError::NoCompleteRows(state.to_string()));
        };

        tracing::info!(
            state,
            hospitals = selected.len(),
            complete = table.len(),
            "selected state"
        );

        Ok(StateTable {
            state: state.to_string(),
            table,
            start: [lat, lon],
        })
    }
}
