use std::sync::Arc;

use arrow_schema::{DataType, Field, Schema, SchemaRef};

use crate::config::COLUMN_NAME;

pub fn gen_fixture_schema() -> Schema {
    Schema::new(vec![Field::new(COLUMN_NAME, DataType::Int32, true)])
}

pub fn fixture_schema_ref() -> SchemaRef {
    Arc::new(gen_fixture_schema())
}

/// True when `schema` has exactly the single `IntColumn: Int32` field.
///
/// Nullability is ignored, since readers are free to widen it.
pub fn is_fixture_schema(schema: &Schema) -> bool {
    let fields = schema.fields();
    fields.len() == 1
        && fields[0].name() == COLUMN_NAME
        && fields[0].data_type() == &DataType::Int32
}
