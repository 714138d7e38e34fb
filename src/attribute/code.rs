//! `code.*` attributes: source code locations reported by instrumentation.

use opentelemetry::{Key, KeyValue, StringValue};

/// Deprecated, use `code.column.number` instead.
///
/// # Examples
///
/// - `16`
#[deprecated(note = "Replaced by `code.column.number`.")]
pub const CODE_COLUMN: Key = Key::from_static_str("code.column");

/// Builds a [`KeyValue`] for [`CODE_COLUMN`].
#[deprecated(note = "Replaced by `code.column.number`.")]
pub fn code_column(value: i64) -> KeyValue {
    KeyValue::new(CODE_COLUMN, value)
}

/// The column number in `code.file.path` best representing the operation.
/// It should point within the code unit named in `code.function.name`.
///
/// # Examples
///
/// - `16`
pub const CODE_COLUMN_NUMBER: Key = Key::from_static_str("code.column.number");

/// Builds a [`KeyValue`] for [`CODE_COLUMN_NUMBER`].
pub fn code_column_number(value: i64) -> KeyValue {
    KeyValue::new(CODE_COLUMN_NUMBER, value)
}

/// The source code file name that identifies the code unit as uniquely as
/// possible (preferably an absolute file path).
///
/// # Examples
///
/// - `"/usr/local/MyApplication/content_root/app/index.php"`
pub const CODE_FILE_PATH: Key = Key::from_static_str("code.file.path");

/// Builds a [`KeyValue`] for [`CODE_FILE_PATH`].
pub fn code_file_path(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(CODE_FILE_PATH, value.into())
}

/// Deprecated, use `code.file.path` instead.
///
/// # Examples
///
/// - `"/usr/local/MyApplication/content_root/app/index.php"`
pub const CODE_FILEPATH: Key = Key::from_static_str("code.filepath");

/// Builds a [`KeyValue`] for [`CODE_FILEPATH`].
pub fn code_filepath(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(CODE_FILEPATH, value.into())
}

/// Deprecated, use `code.function.name` instead.
///
/// # Examples
///
/// - `"serveRequest"`
#[deprecated(note = "Replaced by `code.function.name`.")]
pub const CODE_FUNCTION: Key = Key::from_static_str("code.function");

/// Builds a [`KeyValue`] for [`CODE_FUNCTION`].
#[deprecated(note = "Replaced by `code.function.name`.")]
pub fn code_function(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(CODE_FUNCTION, value.into())
}

/// The method or function name, or equivalent (usually rightmost part of
/// the code unit's name).
///
/// # Examples
///
/// - `"serveRequest"`
pub const CODE_FUNCTION_NAME: Key = Key::from_static_str("code.function.name");

/// Builds a [`KeyValue`] for [`CODE_FUNCTION_NAME`].
pub fn code_function_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(CODE_FUNCTION_NAME, value.into())
}

/// The line number in `code.file.path` best representing the operation.
/// It should point within the code unit named in `code.function.name`.
///
/// # Examples
///
/// - `42`
pub const CODE_LINE_NUMBER: Key = Key::from_static_str("code.line.number");

/// Builds a [`KeyValue`] for [`CODE_LINE_NUMBER`].
pub fn code_line_number(value: i64) -> KeyValue {
    KeyValue::new(CODE_LINE_NUMBER, value)
}

/// Deprecated, use `code.line.number` instead.
///
/// # Examples
///
/// - `42`
#[deprecated(note = "Replaced by `code.line.number`.")]
pub const CODE_LINENO: Key = Key::from_static_str("code.lineno");

/// Builds a [`KeyValue`] for [`CODE_LINENO`].
#[deprecated(note = "Replaced by `code.line.number`.")]
pub fn code_lineno(value: i64) -> KeyValue {
    KeyValue::new(CODE_LINENO, value)
}

/// The "namespace" within which `code.function.name` is defined. Usually
/// the qualified class or module name, such that
/// `code.namespace` + some separator + `code.function.name` form a unique
/// identifier for the code unit.
///
/// # Examples
///
/// - `"com.example.MyHttpService"`
pub const CODE_NAMESPACE: Key = Key::from_static_str("code.namespace");

/// Builds a [`KeyValue`] for [`CODE_NAMESPACE`].
pub fn code_namespace(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(CODE_NAMESPACE, value.into())
}

/// A stacktrace as a string in the natural representation for the
/// language runtime.
///
/// # Examples
///
/// - `"at com.example.GenerateTrace.methodB(GenerateTrace.java:13)\\n at com.example.GenerateTrace.methodA(GenerateTrace.java:9)\\n"`
pub const CODE_STACKTRACE: Key = Key::from_static_str("code.stacktrace");

/// Builds a [`KeyValue`] for [`CODE_STACKTRACE`].
pub fn code_stacktrace(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(CODE_STACKTRACE, value.into())
}
