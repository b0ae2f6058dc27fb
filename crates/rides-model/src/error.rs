use thiserror::Error;

/// Fatal pipeline errors.
///
/// These indicate a breach of the input contract (malformed schema or
/// values) and abort the run. Per-record data-quality problems are never
/// errors; they are handled by removal plus audit counting.
#[derive(Debug, Error)]
pub enum EtlError {
    #[error("required column `{column}` is missing")]
    Schema { column: String },
    #[error("column `{column}` has non-numeric value `{value}`")]
    TypeCoercion { column: String, value: String },
    #[error("cannot parse `{value}` as a date/time")]
    TemporalParse { value: String },
}

pub type Result<T> = std::result::Result<T, EtlError>;
