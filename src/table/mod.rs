mod error;
mod value;

#[cfg(test)]
mod tests;

pub use error::TableError;
pub use value::CellValue;

use std::io;

/// A named column of cells
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: Vec<CellValue>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Build a column from anything convertible into cells
    pub fn from_values<T: Into<CellValue>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = T>,
    ) -> Self {
        Self::new(name, values.into_iter().map(Into::into).collect())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[CellValue] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<&CellValue> {
        self.values.get(row)
    }

    /// Distinct values in [`CellValue::sort_cmp`] order
    pub fn distinct_sorted(&self) -> Vec<CellValue> {
        let mut out = self.values.clone();
        out.sort_by(|a, b| a.sort_cmp(b));
        out.dedup_by(|a, b| a.same_as(b));
        out
    }

    /// The column as floats. Missing and text cells are errors.
    pub fn numeric(&self) -> Result<Vec<f64>, TableError> {
        self.values
            .iter()
            .enumerate()
            .map(|(row, v)| match v {
                CellValue::Text(s) => Err(TableError::NotNumeric {
                    column: self.name.clone(),
                    row,
                    value: s.clone(),
                }),
                _ => v.as_f64().ok_or_else(|| TableError::MissingValue {
                    column: self.name.clone(),
                    row,
                }),
            })
            .collect()
    }
}

/// Position of `value` within a list produced by [`Column::distinct_sorted`]
pub fn position_in(sorted: &[CellValue], value: &CellValue) -> Option<usize> {
    sorted.binary_search_by(|probe| probe.sort_cmp(value)).ok()
}

/// In-memory column store standing in for a dataframe.
///
/// All columns share the same row count. Rows are addressed by position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    rows: usize,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_columns(columns: Vec<Column>) -> Result<Self, TableError> {
        let mut table = Self::new();
        for column in columns {
            table.push_column(column)?;
        }
        Ok(table)
    }

    /// Append a column. The first column fixes the row count.
    pub fn push_column(&mut self, column: Column) -> Result<(), TableError> {
        if self.has_column(column.name()) {
            return Err(TableError::DuplicateColumn(column.name));
        }
        self.check_length(&column)?;
        if self.columns.is_empty() {
            self.rows = column.len();
        }
        self.columns.push(column);
        Ok(())
    }

    /// Replace a column of the same name, or append it
    pub fn set_column(&mut self, column: Column) -> Result<(), TableError> {
        self.check_length(&column)?;
        match self.columns.iter().position(|c| c.name == column.name) {
            Some(idx) => self.columns[idx] = column,
            None => self.push_column(column)?,
        }
        Ok(())
    }

    fn check_length(&self, column: &Column) -> Result<(), TableError> {
        if !self.columns.is_empty() && column.len() != self.rows {
            return Err(TableError::LengthMismatch {
                name: column.name.clone(),
                expected: self.rows,
                got: column.len(),
            });
        }
        Ok(())
    }

    pub fn column(&self, name: &str) -> Result<&Column, TableError> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| TableError::UnknownColumn(name.to_string()))
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Cell at (`column`, `row`)
    pub fn value(&self, column: &str, row: usize) -> Result<&CellValue, TableError> {
        let col = self.column(column)?;
        Ok(col.get(row).unwrap_or(&CellValue::Missing))
    }

    /// New table holding only the named columns, in the given order
    pub fn select(&self, names: &[&str]) -> Result<Table, TableError> {
        let columns = names
            .iter()
            .map(|name| self.column(name).cloned())
            .collect::<Result<Vec<_>, _>>()?;
        Table::from_columns(columns)
    }

    /// Row-major numeric matrix over the named columns
    pub fn numeric_matrix(&self, names: &[&str]) -> Result<Vec<Vec<f64>>, TableError> {
        let columns = names
            .iter()
            .map(|name| self.column(name)?.numeric())
            .collect::<Result<Vec<_>, _>>()?;

        Ok((0..self.rows)
            .map(|row| columns.iter().map(|col| col[row]).collect())
            .collect())
    }

    /// Keep the rows for which `keep(row)` is true
    pub fn filter_rows<F: Fn(usize) -> bool>(&self, keep: F) -> Table {
        let rows: Vec<usize> = (0..self.rows).filter(|&r| keep(r)).collect();
        let columns = self
            .columns
            .iter()
            .map(|c| {
                let values = rows.iter().map(|&r| c.values[r].clone()).collect();
                Column::new(c.name.clone(), values)
            })
            .collect();
        Table {
            columns,
            rows: rows.len(),
        }
    }

    /// Rows whose `column` cell equals `value`
    pub fn filter_eq(&self, column: &str, value: &CellValue) -> Result<Table, TableError> {
        let col = self.column(column)?;
        Ok(self.filter_rows(|r| col.values[r].same_as(value)))
    }

    /// Drop every row that has a missing cell in any column
    pub fn drop_missing(&self) -> Table {
        self.filter_rows(|r| self.columns.iter().all(|c| !c.values[r].is_missing()))
    }

    /// Write the table as CSV with a header row
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(self.columns.iter().map(|c| c.name()))?;
        for row in 0..self.rows {
            wtr.write_record(self.columns.iter().map(|c| c.values[row].to_string()))?;
        }
        wtr.flush()?;
        Ok(())
    }
}
