//! Schema projection.

use polars::prelude::DataFrame;
use tracing::debug;

use adm_model::Schema;

use crate::error::{Result, TransformError};

/// Select exactly the schema columns, in schema order.
///
/// Extra source columns are dropped. A schema column that the source lacks
/// is a hard failure naming the first such column.
pub fn project(raw: &DataFrame, schema: &Schema) -> Result<DataFrame> {
    if let Some(missing) = schema
        .names()
        .find(|name| raw.get_column_index(name).is_none())
    {
        return Err(TransformError::MissingColumn {
            column: missing.to_string(),
        });
    }

    let dropped = raw.width().saturating_sub(schema.len());
    if dropped > 0 {
        debug!(dropped, "dropping source columns outside the schema");
    }

    Ok(raw.select(schema.names())?)
}
