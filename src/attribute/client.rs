//! `client.*` attributes: the sender side of a network connection.

use opentelemetry::{Key, KeyValue, StringValue};

/// Client address - domain name if available without reverse DNS lookup; otherwise, IP address or Unix domain socket name.
///
/// When observed from the server side, and when communicating through an
/// intermediary, `client.address` should represent the client address
/// behind any intermediaries, for example proxies, if it's available.
///
/// # Examples
///
/// - `"client.example.com"`
/// - `"10.1.2.80"`
/// - `"/tmp/my.sock"`
pub const CLIENT_ADDRESS: Key = Key::from_static_str("client.address");

/// Builds a [`KeyValue`] for [`CLIENT_ADDRESS`].
pub fn client_address(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(CLIENT_ADDRESS, value.into())
}

/// Client port number.
///
/// When observed from the server side, and when communicating through an
/// intermediary, `client.port` should represent the client port behind
/// any intermediaries, for example proxies, if it's available.
///
/// # Examples
///
/// - `65123`
pub const CLIENT_PORT: Key = Key::from_static_str("client.port");

/// Builds a [`KeyValue`] for [`CLIENT_PORT`].
pub fn client_port(value: i64) -> KeyValue {
    KeyValue::new(CLIENT_PORT, value)
}
