//! `server.*` attributes: the receiver side of a network connection.

use opentelemetry::{Key, KeyValue, StringValue};

/// Server domain name if available without reverse DNS lookup; otherwise, IP address or Unix domain socket name.
///
/// When observed from the client side, and when communicating through an
/// intermediary, `server.address` should represent the server address
/// behind any intermediaries, for example proxies, if it's available.
///
/// # Examples
///
/// - `"example.com"`
/// - `"10.1.2.80"`
/// - `"/tmp/my.sock"`
pub const SERVER_ADDRESS: Key = Key::from_static_str("server.address");

/// Builds a [`KeyValue`] for [`SERVER_ADDRESS`].
pub fn server_address(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(SERVER_ADDRESS, value.into())
}

/// Server port number.
///
/// When observed from the client side, and when communicating through an
/// intermediary, `server.port` should represent the server port behind
/// any intermediaries, for example proxies, if it's available.
///
/// # Examples
///
/// - `80`
/// - `8080`
/// - `443`
pub const SERVER_PORT: Key = Key::from_static_str("server.port");

/// Builds a [`KeyValue`] for [`SERVER_PORT`].
pub fn server_port(value: i64) -> KeyValue {
    KeyValue::new(SERVER_PORT, value)
}
