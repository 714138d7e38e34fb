//! `service.*` attributes: the logical unit emitting telemetry.

use opentelemetry::{Key, KeyValue, StringValue};

/// The string ID of the service instance.
///
/// Must be unique for each instance of the same
/// `service.namespace,service.name` pair (in other words
/// `service.namespace,service.name,service.instance.id` triplet must be
/// globally unique). The ID helps to distinguish instances of the same
/// service that exist at the same time (e.g. instances of a horizontally
/// scaled service).
///
/// # Examples
///
/// - `"627cc493-f310-47de-96bd-71410b7dec09"`
#[cfg(feature = "semconv_experimental")]
pub const SERVICE_INSTANCE_ID: Key = Key::from_static_str("service.instance.id");

/// Builds a [`KeyValue`] for [`SERVICE_INSTANCE_ID`].
#[cfg(feature = "semconv_experimental")]
pub fn service_instance_id(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(SERVICE_INSTANCE_ID, value.into())
}

/// Logical name of the service.
///
/// Must be the same for all instances of horizontally scaled services.
/// If the value was not specified, SDKs must fallback to `unknown_service:`
/// concatenated with `process.executable.name`, or `unknown_service` if
/// the process executable name is not available.
///
/// # Examples
///
/// - `"shoppingcart"`
pub const SERVICE_NAME: Key = Key::from_static_str("service.name");

/// Builds a [`KeyValue`] for [`SERVICE_NAME`].
pub fn service_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(SERVICE_NAME, value.into())
}

/// A namespace for `service.name`.
///
/// A string value having a meaning that helps to distinguish a group of
/// services, for example the team name that owns a group of services.
/// `service.name` is expected to be unique within the same namespace.
///
/// # Examples
///
/// - `"Shop"`
#[cfg(feature = "semconv_experimental")]
pub const SERVICE_NAMESPACE: Key = Key::from_static_str("service.namespace");

/// Builds a [`KeyValue`] for [`SERVICE_NAMESPACE`].
#[cfg(feature = "semconv_experimental")]
pub fn service_namespace(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(SERVICE_NAMESPACE, value.into())
}

/// The version string of the service API or implementation. The format is
/// not defined by these conventions.
///
/// # Examples
///
/// - `"2.0.0"`
/// - `"a01dbef8a"`
pub const SERVICE_VERSION: Key = Key::from_static_str("service.version");

/// Builds a [`KeyValue`] for [`SERVICE_VERSION`].
pub fn service_version(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(SERVICE_VERSION, value.into())
}
