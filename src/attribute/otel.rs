//! `otel.*` attributes: reporting on OpenTelemetry API and SDK internals.

use opentelemetry::{Key, KeyValue, StringValue};

/// Deprecated. Use the `otel.scope.name` attribute.
///
/// # Examples
///
/// - `"io.opentelemetry.contrib.mongodb"`
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Use the `otel.scope.name` attribute.")]
pub const OTEL_LIBRARY_NAME: Key = Key::from_static_str("otel.library.name");

/// Builds a [`KeyValue`] for [`OTEL_LIBRARY_NAME`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Use the `otel.scope.name` attribute.")]
pub fn otel_library_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(OTEL_LIBRARY_NAME, value.into())
}

/// Deprecated. Use the `otel.scope.version` attribute.
///
/// # Examples
///
/// - `"1.0.0"`
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Use the `otel.scope.version` attribute.")]
pub const OTEL_LIBRARY_VERSION: Key = Key::from_static_str("otel.library.version");

/// Builds a [`KeyValue`] for [`OTEL_LIBRARY_VERSION`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Use the `otel.scope.version` attribute.")]
pub fn otel_library_version(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(OTEL_LIBRARY_VERSION, value.into())
}

/// The name of the instrumentation scope (`InstrumentationScope.Name` in
/// OTLP).
///
/// # Examples
///
/// - `"io.opentelemetry.contrib.mongodb"`
pub const OTEL_SCOPE_NAME: Key = Key::from_static_str("otel.scope.name");

/// Builds a [`KeyValue`] for [`OTEL_SCOPE_NAME`].
pub fn otel_scope_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(OTEL_SCOPE_NAME, value.into())
}

/// The version of the instrumentation scope (`InstrumentationScope.Version`
/// in OTLP).
///
/// # Examples
///
/// - `"1.0.0"`
pub const OTEL_SCOPE_VERSION: Key = Key::from_static_str("otel.scope.version");

/// Builds a [`KeyValue`] for [`OTEL_SCOPE_VERSION`].
pub fn otel_scope_version(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(OTEL_SCOPE_VERSION, value.into())
}

/// Name of the code, either "OK" or "ERROR". Must not be set if the status
/// code is UNSET.
pub const OTEL_STATUS_CODE: Key = Key::from_static_str("otel.status_code");

/// Builds a [`KeyValue`] for [`OTEL_STATUS_CODE`].
pub fn otel_status_code(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(OTEL_STATUS_CODE, value.into())
}

/// Well-known values for [`OTEL_STATUS_CODE`].
pub mod otel_status_code_values {
    /// The operation has been validated by an Application developer or
    /// Operator to have completed successfully.
    pub const OK: &str = "OK";
    /// The operation contains an error.
    pub const ERROR: &str = "ERROR";
}

/// Description of the Status if it has a value, otherwise not set.
///
/// # Examples
///
/// - `"resource not found"`
pub const OTEL_STATUS_DESCRIPTION: Key = Key::from_static_str("otel.status_description");

/// Builds a [`KeyValue`] for [`OTEL_STATUS_DESCRIPTION`].
pub fn otel_status_description(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(OTEL_STATUS_DESCRIPTION, value.into())
}
