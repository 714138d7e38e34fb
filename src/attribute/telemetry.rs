//! `telemetry.*` attributes: the SDK and distribution producing telemetry.

use opentelemetry::{Key, KeyValue, StringValue};

/// The name of the auto instrumentation agent or distribution, if used.
///
/// Official auto instrumentation agents and distributions should set the
/// `telemetry.distro.name` attribute to a string starting with
/// `opentelemetry-`, e.g. `opentelemetry-java-instrumentation`.
///
/// # Examples
///
/// - `"parts-unlimited-java"`
#[cfg(feature = "semconv_experimental")]
pub const TELEMETRY_DISTRO_NAME: Key = Key::from_static_str("telemetry.distro.name");

/// Builds a [`KeyValue`] for [`TELEMETRY_DISTRO_NAME`].
#[cfg(feature = "semconv_experimental")]
pub fn telemetry_distro_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(TELEMETRY_DISTRO_NAME, value.into())
}

/// The version string of the auto instrumentation agent or distribution,
/// if used.
///
/// # Examples
///
/// - `"1.2.3"`
#[cfg(feature = "semconv_experimental")]
pub const TELEMETRY_DISTRO_VERSION: Key = Key::from_static_str("telemetry.distro.version");

/// Builds a [`KeyValue`] for [`TELEMETRY_DISTRO_VERSION`].
#[cfg(feature = "semconv_experimental")]
pub fn telemetry_distro_version(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(TELEMETRY_DISTRO_VERSION, value.into())
}

/// The language of the telemetry SDK.
pub const TELEMETRY_SDK_LANGUAGE: Key = Key::from_static_str("telemetry.sdk.language");

/// Builds a [`KeyValue`] for [`TELEMETRY_SDK_LANGUAGE`].
pub fn telemetry_sdk_language(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(TELEMETRY_SDK_LANGUAGE, value.into())
}

/// Well-known values for [`TELEMETRY_SDK_LANGUAGE`].
pub mod telemetry_sdk_language_values {
    /// cpp
    pub const CPP: &str = "cpp";
    /// dotnet
    pub const DOTNET: &str = "dotnet";
    /// erlang
    pub const ERLANG: &str = "erlang";
    /// go
    pub const GO: &str = "go";
    /// java
    pub const JAVA: &str = "java";
    /// nodejs
    pub const NODEJS: &str = "nodejs";
    /// php
    pub const PHP: &str = "php";
    /// python
    pub const PYTHON: &str = "python";
    /// ruby
    pub const RUBY: &str = "ruby";
    /// rust
    pub const RUST: &str = "rust";
    /// swift
    pub const SWIFT: &str = "swift";
    /// webjs
    pub const WEBJS: &str = "webjs";
}

/// The name of the telemetry SDK as defined above.
///
/// The OpenTelemetry SDK must set this attribute to `opentelemetry`. If
/// another SDK is used, this SDK must set the attribute to the fully
/// qualified identifier of the SDK to avoid clashes.
///
/// # Examples
///
/// - `"opentelemetry"`
pub const TELEMETRY_SDK_NAME: Key = Key::from_static_str("telemetry.sdk.name");

/// Builds a [`KeyValue`] for [`TELEMETRY_SDK_NAME`].
pub fn telemetry_sdk_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(TELEMETRY_SDK_NAME, value.into())
}

/// The version string of the telemetry SDK.
///
/// # Examples
///
/// - `"1.2.3"`
pub const TELEMETRY_SDK_VERSION: Key = Key::from_static_str("telemetry.sdk.version");

/// Builds a [`KeyValue`] for [`TELEMETRY_SDK_VERSION`].
pub fn telemetry_sdk_version(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(TELEMETRY_SDK_VERSION, value.into())
}
