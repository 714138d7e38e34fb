//! `error.*` attributes: describing how an operation failed.

use opentelemetry::{Key, KeyValue, StringValue};

/// Describes a class of error the operation ended with.
///
/// The `error.type` should be predictable and should have low
/// cardinality. When the operation has completed successfully,
/// instrumentations should not set `error.type`. If the type of failure
/// cannot be mapped to a well-defined class, set the attribute to
/// [`error_type_values::OTHER`].
///
/// # Examples
///
/// - `"timeout"`
/// - `"java.net.UnknownHostException"`
/// - `"server_certificate_invalid"`
/// - `"500"`
pub const ERROR_TYPE: Key = Key::from_static_str("error.type");

/// Builds a [`KeyValue`] for [`ERROR_TYPE`].
pub fn error_type(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(ERROR_TYPE, value.into())
}

/// Well-known values for [`ERROR_TYPE`].
pub mod error_type_values {
    /// A fallback error value to be used when the instrumentation doesn't
    /// define a custom value.
    pub const OTHER: &str = "_OTHER";
}
