//! `exception.*` attributes: recording an exception on a span or log record.

use opentelemetry::{Key, KeyValue, StringValue};

/// Indicates that the exception is escaping the scope of the span.
#[deprecated(
    note = "It's no longer recommended to record exceptions that are handled and do not escape the scope of a span."
)]
pub const EXCEPTION_ESCAPED: Key = Key::from_static_str("exception.escaped");

/// Builds a [`KeyValue`] for [`EXCEPTION_ESCAPED`].
#[deprecated(
    note = "It's no longer recommended to record exceptions that are handled and do not escape the scope of a span."
)]
pub fn exception_escaped(value: bool) -> KeyValue {
    KeyValue::new(EXCEPTION_ESCAPED, value)
}

/// The exception message.
///
/// # Examples
///
/// - `"Division by zero"`
/// - `"Can't convert 'int' object to str implicitly"`
pub const EXCEPTION_MESSAGE: Key = Key::from_static_str("exception.message");

/// Builds a [`KeyValue`] for [`EXCEPTION_MESSAGE`].
pub fn exception_message(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(EXCEPTION_MESSAGE, value.into())
}

/// A stacktrace as a string in the natural representation for the
/// language runtime.
pub const EXCEPTION_STACKTRACE: Key = Key::from_static_str("exception.stacktrace");

/// Builds a [`KeyValue`] for [`EXCEPTION_STACKTRACE`].
pub fn exception_stacktrace(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(EXCEPTION_STACKTRACE, value.into())
}

/// The type of the exception (its fully-qualified class name, if
/// applicable). The dynamic type of the exception should be preferred
/// over the static type in languages that support it.
///
/// # Examples
///
/// - `"java.net.ConnectException"`
/// - `"OSError"`
pub const EXCEPTION_TYPE: Key = Key::from_static_str("exception.type");

/// Builds a [`KeyValue`] for [`EXCEPTION_TYPE`].
pub fn exception_type(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(EXCEPTION_TYPE, value.into())
}
