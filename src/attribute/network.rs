//! `network.*` attributes: transport-level properties of a connection.

use opentelemetry::{Key, KeyValue, StringValue};

/// The ISO 3166-1 alpha-2 2-character country code associated with the
/// mobile carrier network.
///
/// # Examples
///
/// - `"DE"`
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CARRIER_ICC: Key = Key::from_static_str("network.carrier.icc");

/// Builds a [`KeyValue`] for [`NETWORK_CARRIER_ICC`].
#[cfg(feature = "semconv_experimental")]
pub fn network_carrier_icc(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(NETWORK_CARRIER_ICC, value.into())
}

/// The mobile carrier country code.
///
/// # Examples
///
/// - `"310"`
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CARRIER_MCC: Key = Key::from_static_str("network.carrier.mcc");

/// Builds a [`KeyValue`] for [`NETWORK_CARRIER_MCC`].
#[cfg(feature = "semconv_experimental")]
pub fn network_carrier_mcc(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(NETWORK_CARRIER_MCC, value.into())
}

/// The mobile carrier network code.
///
/// # Examples
///
/// - `"001"`
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CARRIER_MNC: Key = Key::from_static_str("network.carrier.mnc");

/// Builds a [`KeyValue`] for [`NETWORK_CARRIER_MNC`].
#[cfg(feature = "semconv_experimental")]
pub fn network_carrier_mnc(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(NETWORK_CARRIER_MNC, value.into())
}

/// The name of the mobile carrier.
///
/// # Examples
///
/// - `"sprint"`
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CARRIER_NAME: Key = Key::from_static_str("network.carrier.name");

/// Builds a [`KeyValue`] for [`NETWORK_CARRIER_NAME`].
#[cfg(feature = "semconv_experimental")]
pub fn network_carrier_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(NETWORK_CARRIER_NAME, value.into())
}

/// The state of network connection.
///
/// Connection states are defined as part of the [rfc9293](https://datatracker.ietf.org/doc/html/rfc9293#section-3.3.2).
///
/// # Examples
///
/// - `"close_wait"`
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_STATE: Key = Key::from_static_str("network.connection.state");

/// Builds a [`KeyValue`] for [`NETWORK_CONNECTION_STATE`].
#[cfg(feature = "semconv_experimental")]
pub fn network_connection_state(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(NETWORK_CONNECTION_STATE, value.into())
}

/// Well-known values for [`NETWORK_CONNECTION_STATE`].
#[cfg(feature = "semconv_experimental")]
pub mod network_connection_state_values {
    /// closed
    pub const CLOSED: &str = "closed";
    /// close_wait
    pub const CLOSE_WAIT: &str = "close_wait";
    /// closing
    pub const CLOSING: &str = "closing";
    /// established
    pub const ESTABLISHED: &str = "established";
    /// fin_wait_1
    pub const FIN_WAIT_1: &str = "fin_wait_1";
    /// fin_wait_2
    pub const FIN_WAIT_2: &str = "fin_wait_2";
    /// last_ack
    pub const LAST_ACK: &str = "last_ack";
    /// listen
    pub const LISTEN: &str = "listen";
    /// syn_received
    pub const SYN_RECEIVED: &str = "syn_received";
    /// syn_sent
    pub const SYN_SENT: &str = "syn_sent";
    /// time_wait
    pub const TIME_WAIT: &str = "time_wait";
}

/// This describes more details regarding the connection.type. It may be
/// the type of cell technology connection, but it could be used for
/// describing details about a wifi connection.
///
/// # Examples
///
/// - `"LTE"`
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_SUBTYPE: Key = Key::from_static_str("network.connection.subtype");

/// Builds a [`KeyValue`] for [`NETWORK_CONNECTION_SUBTYPE`].
#[cfg(feature = "semconv_experimental")]
pub fn network_connection_subtype(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(NETWORK_CONNECTION_SUBTYPE, value.into())
}

/// Well-known values for [`NETWORK_CONNECTION_SUBTYPE`].
#[cfg(feature = "semconv_experimental")]
pub mod network_connection_subtype_values {
    /// GPRS.
    pub const GPRS: &str = "gprs";
    /// EDGE.
    pub const EDGE: &str = "edge";
    /// UMTS.
    pub const UMTS: &str = "umts";
    /// CDMA.
    pub const CDMA: &str = "cdma";
    /// EVDO Rel. 0.
    pub const EVDO_0: &str = "evdo_0";
    /// EVDO Rev. A.
    pub const EVDO_A: &str = "evdo_a";
    /// CDMA2000 1XRTT.
    pub const CDMA2000_1XRTT: &str = "cdma2000_1xrtt";
    /// HSDPA.
    pub const HSDPA: &str = "hsdpa";
    /// HSUPA.
    pub const HSUPA: &str = "hsupa";
    /// HSPA.
    pub const HSPA: &str = "hspa";
    /// IDEN.
    pub const IDEN: &str = "iden";
    /// EVDO Rev. B.
    pub const EVDO_B: &str = "evdo_b";
    /// LTE.
    pub const LTE: &str = "lte";
    /// EHRPD.
    pub const EHRPD: &str = "ehrpd";
    /// HSPAP.
    pub const HSPAP: &str = "hspap";
    /// GSM.
    pub const GSM: &str = "gsm";
    /// TD-SCDMA.
    pub const TD_SCDMA: &str = "td_scdma";
    /// IWLAN.
    pub const IWLAN: &str = "iwlan";
    /// 5G NR (New Radio).
    pub const NR: &str = "nr";
    /// 5G NRNSA (New Radio Non-Standalone).
    pub const NRNSA: &str = "nrnsa";
    /// LTE CA.
    pub const LTE_CA: &str = "lte_ca";
}

/// The internet connection type.
///
/// # Examples
///
/// - `"wifi"`
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_TYPE: Key = Key::from_static_str("network.connection.type");

/// Builds a [`KeyValue`] for [`NETWORK_CONNECTION_TYPE`].
#[cfg(feature = "semconv_experimental")]
pub fn network_connection_type(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(NETWORK_CONNECTION_TYPE, value.into())
}

/// Well-known values for [`NETWORK_CONNECTION_TYPE`].
#[cfg(feature = "semconv_experimental")]
pub mod network_connection_type_values {
    /// wifi
    pub const WIFI: &str = "wifi";
    /// wired
    pub const WIRED: &str = "wired";
    /// cell
    pub const CELL: &str = "cell";
    /// unavailable
    pub const UNAVAILABLE: &str = "unavailable";
    /// unknown
    pub const UNKNOWN: &str = "unknown";
}

/// The network interface name.
///
/// # Examples
///
/// - `"lo"`
/// - `"eth0"`
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_INTERFACE_NAME: Key = Key::from_static_str("network.interface.name");

/// Builds a [`KeyValue`] for [`NETWORK_INTERFACE_NAME`].
#[cfg(feature = "semconv_experimental")]
pub fn network_interface_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(NETWORK_INTERFACE_NAME, value.into())
}

/// The network IO operation direction.
///
/// # Examples
///
/// - `"transmit"`
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_IO_DIRECTION: Key = Key::from_static_str("network.io.direction");

/// Builds a [`KeyValue`] for [`NETWORK_IO_DIRECTION`].
#[cfg(feature = "semconv_experimental")]
pub fn network_io_direction(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(NETWORK_IO_DIRECTION, value.into())
}

/// Well-known values for [`NETWORK_IO_DIRECTION`].
#[cfg(feature = "semconv_experimental")]
pub mod network_io_direction_values {
    /// transmit
    pub const TRANSMIT: &str = "transmit";
    /// receive
    pub const RECEIVE: &str = "receive";
}

/// Local address of the network connection - IP address or Unix domain
/// socket name.
///
/// # Examples
///
/// - `"10.1.2.80"`
/// - `"/tmp/my.sock"`
pub const NETWORK_LOCAL_ADDRESS: Key = Key::from_static_str("network.local.address");

/// Builds a [`KeyValue`] for [`NETWORK_LOCAL_ADDRESS`].
pub fn network_local_address(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(NETWORK_LOCAL_ADDRESS, value.into())
}

/// Local port number of the network connection.
///
/// # Examples
///
/// - `65123`
pub const NETWORK_LOCAL_PORT: Key = Key::from_static_str("network.local.port");

/// Builds a [`KeyValue`] for [`NETWORK_LOCAL_PORT`].
pub fn network_local_port(value: i64) -> KeyValue {
    KeyValue::new(NETWORK_LOCAL_PORT, value)
}

/// Peer address of the network connection - IP address or Unix domain
/// socket name.
///
/// # Examples
///
/// - `"10.1.2.80"`
/// - `"/tmp/my.sock"`
pub const NETWORK_PEER_ADDRESS: Key = Key::from_static_str("network.peer.address");

/// Builds a [`KeyValue`] for [`NETWORK_PEER_ADDRESS`].
pub fn network_peer_address(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(NETWORK_PEER_ADDRESS, value.into())
}

/// Peer port number of the network connection.
///
/// # Examples
///
/// - `65123`
pub const NETWORK_PEER_PORT: Key = Key::from_static_str("network.peer.port");

/// Builds a [`KeyValue`] for [`NETWORK_PEER_PORT`].
pub fn network_peer_port(value: i64) -> KeyValue {
    KeyValue::new(NETWORK_PEER_PORT, value)
}

/// [OSI application layer](https://wikipedia.org/wiki/Application_layer)
/// or non-OSI equivalent.
///
/// The value should be normalized to lowercase.
///
/// # Examples
///
/// - `"amqp"`
/// - `"http"`
/// - `"mqtt"`
pub const NETWORK_PROTOCOL_NAME: Key = Key::from_static_str("network.protocol.name");

/// Builds a [`KeyValue`] for [`NETWORK_PROTOCOL_NAME`].
pub fn network_protocol_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(NETWORK_PROTOCOL_NAME, value.into())
}

/// The actual version of the protocol used for network communication.
///
/// If protocol version is subject to negotiation (for example using
/// [ALPN](https://www.rfc-editor.org/rfc/rfc7301.html)), this attribute
/// should be set to the negotiated version. If the actual protocol
/// version is not known, this attribute should not be set.
///
/// # Examples
///
/// - `"1.1"`
/// - `"2"`
pub const NETWORK_PROTOCOL_VERSION: Key = Key::from_static_str("network.protocol.version");

/// Builds a [`KeyValue`] for [`NETWORK_PROTOCOL_VERSION`].
pub fn network_protocol_version(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(NETWORK_PROTOCOL_VERSION, value.into())
}

/// [OSI transport layer](https://wikipedia.org/wiki/Transport_layer) or
/// [inter-process communication method](https://wikipedia.org/wiki/Inter-process_communication).
///
/// The value should be normalized to lowercase.
///
/// Consider always setting the transport when setting a port number,
/// since a port number is ambiguous without knowing the transport.
///
/// # Examples
///
/// - `"tcp"`
/// - `"udp"`
pub const NETWORK_TRANSPORT: Key = Key::from_static_str("network.transport");

/// Builds a [`KeyValue`] for [`NETWORK_TRANSPORT`].
pub fn network_transport(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(NETWORK_TRANSPORT, value.into())
}

/// Well-known values for [`NETWORK_TRANSPORT`].
pub mod network_transport_values {
    /// TCP.
    pub const TCP: &str = "tcp";
    /// UDP.
    pub const UDP: &str = "udp";
    /// Named or anonymous pipe.
    pub const PIPE: &str = "pipe";
    /// Unix domain socket.
    pub const UNIX: &str = "unix";
    /// QUIC.
    pub const QUIC: &str = "quic";
}

/// [OSI network layer](https://wikipedia.org/wiki/Network_layer) or
/// non-OSI equivalent.
///
/// The value should be normalized to lowercase.
///
/// # Examples
///
/// - `"ipv4"`
/// - `"ipv6"`
pub const NETWORK_TYPE: Key = Key::from_static_str("network.type");

/// Builds a [`KeyValue`] for [`NETWORK_TYPE`].
pub fn network_type(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(NETWORK_TYPE, value.into())
}

/// Well-known values for [`NETWORK_TYPE`].
pub mod network_type_values {
    /// IPv4.
    pub const IPV4: &str = "ipv4";
    /// IPv6.
    pub const IPV6: &str = "ipv6";
}
