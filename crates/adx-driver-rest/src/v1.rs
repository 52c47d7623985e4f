//! Kusto REST v1 wire format.

use adx_core::{
    driver::{Column, Response},
    Error, Result,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
pub(crate) struct Request<'a> {
    pub(crate) db: &'a str,
    pub(crate) csl: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DataSet {
    tables: Vec<Table>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Table {
    columns: Vec<TableColumn>,
    rows: Vec<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct TableColumn {
    column_name: String,
    column_type: Option<String>,
    data_type: Option<String>,
}

/// Decodes the primary result table of a v1 response.
///
/// Management commands return their result in the first table. A response
/// without tables decodes to an empty [`Response`].
pub(crate) fn decode(body: &str) -> Result<Response> {
    let data_set: DataSet = serde_json::from_str(body)
        .map_err(|err| Error::invalid_result(format!("malformed v1 response: {err}")))?;

    let Some(table) = data_set.tables.into_iter().next() else {
        return Ok(Response::empty());
    };

    let columns: Vec<Column> = table
        .columns
        .into_iter()
        .map(|column| {
            let ty = column.column_type.or(column.data_type).unwrap_or_default();
            Column::new(column.column_name, ty)
        })
        .collect();

    let mut rows = Vec::with_capacity(table.rows.len());

    for (index, row) in table.rows.into_iter().enumerate() {
        match row {
            Value::Array(values) if values.len() == columns.len() => rows.push(values),
            Value::Array(values) => {
                return Err(Error::invalid_result(format!(
                    "row {index} has {} values, expected {}",
                    values.len(),
                    columns.len()
                )))
            }
            // Row level failures are reported inline as objects
            other => {
                return Err(Error::invalid_result(format!(
                    "row {index} reported an error: {other}"
                )))
            }
        }
    }

    Ok(Response::new(columns, rows))
}
