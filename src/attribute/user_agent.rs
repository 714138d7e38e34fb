//! `user_agent.*` attributes: describing a user agent string.

use opentelemetry::{Key, KeyValue, StringValue};

/// Name of the user-agent extracted from original. Usually refers to the
/// browser's name.
///
/// # Examples
///
/// - `"Safari"`
/// - `"YourApp"`
#[cfg(feature = "semconv_experimental")]
pub const USER_AGENT_NAME: Key = Key::from_static_str("user_agent.name");

/// Builds a [`KeyValue`] for [`USER_AGENT_NAME`].
#[cfg(feature = "semconv_experimental")]
pub fn user_agent_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(USER_AGENT_NAME, value.into())
}

/// Value of the [HTTP User-Agent](https://www.rfc-editor.org/rfc/rfc9110.html#field.user-agent)
/// header sent by the client.
///
/// # Examples
///
/// - `"CERN-LineMode/2.15 libwww/2.17b3"`
/// - `"Mozilla/5.0 (iPhone; CPU iPhone OS 14_7_1 like Mac OS X)"`
/// - `"YourApp/1.0.0 grpc-java-okhttp/1.27.2"`
pub const USER_AGENT_ORIGINAL: Key = Key::from_static_str("user_agent.original");

/// Builds a [`KeyValue`] for [`USER_AGENT_ORIGINAL`].
pub fn user_agent_original(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(USER_AGENT_ORIGINAL, value.into())
}

/// Specifies the category of synthetic traffic, such as tests or bots.
///
/// This attribute may be derived from the contents of the
/// `user_agent.original` attribute. Components that populate the attribute
/// are responsible for determining what they consider to be synthetic bot
/// or test traffic.
#[cfg(feature = "semconv_experimental")]
pub const USER_AGENT_SYNTHETIC_TYPE: Key = Key::from_static_str("user_agent.synthetic.type");

/// Builds a [`KeyValue`] for [`USER_AGENT_SYNTHETIC_TYPE`].
#[cfg(feature = "semconv_experimental")]
pub fn user_agent_synthetic_type(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(USER_AGENT_SYNTHETIC_TYPE, value.into())
}

/// Well-known values for [`USER_AGENT_SYNTHETIC_TYPE`].
#[cfg(feature = "semconv_experimental")]
pub mod user_agent_synthetic_type_values {
    /// Bot source.
    pub const BOT: &str = "bot";
    /// Synthetic test source.
    pub const TEST: &str = "test";
}

/// Version of the user-agent extracted from original. Usually refers to
/// the browser's version.
///
/// # Examples
///
/// - `"14.1.2"`
/// - `"1.0.0"`
#[cfg(feature = "semconv_experimental")]
pub const USER_AGENT_VERSION: Key = Key::from_static_str("user_agent.version");

/// Builds a [`KeyValue`] for [`USER_AGENT_VERSION`].
#[cfg(feature = "semconv_experimental")]
pub fn user_agent_version(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(USER_AGENT_VERSION, value.into())
}
