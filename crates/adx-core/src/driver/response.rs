use crate::{Error, Result};

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

/// Tabular result of a management command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Value>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,

    /// Kusto type name as reported by the cluster (`string`, `datetime`, ...)
    pub ty: String,
}

/// Borrowed view over a single row of a [`Response`].
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    columns: &'a [Column],
    values: &'a [Value],
}

impl Response {
    pub fn new(columns: Vec<Column>, rows: Vec<Vec<Value>>) -> Self {
        Self { columns, rows }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a response with one row per record. Column names are taken from
    /// the serialized field names of the first record.
    pub fn from_records<T: Serialize>(records: &[T]) -> Result<Self> {
        let mut columns = Vec::new();
        let mut rows = Vec::with_capacity(records.len());

        for record in records {
            let Value::Object(fields) = serde_json::to_value(record).map_err(anyhow::Error::from)?
            else {
                return Err(Error::invalid_result("records must serialize to objects"));
            };

            if columns.is_empty() {
                columns = fields
                    .iter()
                    .map(|(name, value)| Column::new(name, Column::infer_ty(value)))
                    .collect();
            }

            rows.push(
                columns
                    .iter()
                    .map(|column| fields.get(&column.name).cloned().unwrap_or(Value::Null))
                    .collect(),
            );
        }

        Ok(Self { columns, rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(|values| Row {
            columns: &self.columns,
            values,
        })
    }

    /// Decodes every row into `T`, binding struct fields to columns by name.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        self.iter()
            .enumerate()
            .map(|(index, row)| {
                row.decode()
                    .map_err(|err| err.context(crate::err!("row {index}")))
            })
            .collect()
    }
}

impl Column {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    fn infer_ty(value: &Value) -> &'static str {
        match value {
            Value::Bool(_) => "bool",
            Value::Number(n) if n.is_i64() || n.is_u64() => "long",
            Value::Number(_) => "real",
            Value::Array(_) | Value::Object(_) => "dynamic",
            Value::String(_) | Value::Null => "string",
        }
    }
}

impl<'a> Row<'a> {
    /// Returns the value of the named column, if the response has it.
    pub fn get(&self, column: &str) -> Option<&'a Value> {
        let index = self.columns.iter().position(|c| c.name == column)?;
        self.values.get(index)
    }

    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        let record: Map<String, Value> = self
            .columns
            .iter()
            .zip(self.values)
            .map(|(column, value)| (column.name.clone(), value.clone()))
            .collect();

        serde_json::from_value(Value::Object(record))
            .map_err(|err| Error::invalid_result(err.to_string()))
    }
}
