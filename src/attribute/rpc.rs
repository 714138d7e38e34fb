//! `rpc.*` attributes: remote procedure call spans.

use opentelemetry::{Key, KeyValue, StringValue};

/// The [error codes](https://connectrpc.com//docs/protocol/#error-codes)
/// of the Connect request. Error codes are always string values.
pub const RPC_CONNECT_RPC_ERROR_CODE: Key = Key::from_static_str("rpc.connect_rpc.error_code");

/// Builds a [`KeyValue`] for [`RPC_CONNECT_RPC_ERROR_CODE`].
pub fn rpc_connect_rpc_error_code(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(RPC_CONNECT_RPC_ERROR_CODE, value.into())
}

/// Well-known values for [`RPC_CONNECT_RPC_ERROR_CODE`].
pub mod rpc_connect_rpc_error_code_values {
    /// cancelled
    pub const CANCELLED: &str = "cancelled";
    /// unknown
    pub const UNKNOWN: &str = "unknown";
    /// invalid_argument
    pub const INVALID_ARGUMENT: &str = "invalid_argument";
    /// deadline_exceeded
    pub const DEADLINE_EXCEEDED: &str = "deadline_exceeded";
    /// not_found
    pub const NOT_FOUND: &str = "not_found";
    /// already_exists
    pub const ALREADY_EXISTS: &str = "already_exists";
    /// permission_denied
    pub const PERMISSION_DENIED: &str = "permission_denied";
    /// resource_exhausted
    pub const RESOURCE_EXHAUSTED: &str = "resource_exhausted";
    /// failed_precondition
    pub const FAILED_PRECONDITION: &str = "failed_precondition";
    /// aborted
    pub const ABORTED: &str = "aborted";
    /// out_of_range
    pub const OUT_OF_RANGE: &str = "out_of_range";
    /// unimplemented
    pub const UNIMPLEMENTED: &str = "unimplemented";
    /// internal
    pub const INTERNAL: &str = "internal";
    /// unavailable
    pub const UNAVAILABLE: &str = "unavailable";
    /// data_loss
    pub const DATA_LOSS: &str = "data_loss";
    /// unauthenticated
    pub const UNAUTHENTICATED: &str = "unauthenticated";
}

/// Connect request metadata, `<key>` being the normalized Connect Metadata
/// key (lowercase), the value being the metadata values.
///
/// The full key carries a caller-chosen metadata-key suffix, so no
/// fixed-key constructor is provided.
///
/// # Examples
///
/// - `rpc.connect_rpc.request.metadata.my-custom-key=["1.2.3.4", "1.2.3.5"]`
pub const RPC_CONNECT_RPC_REQUEST_METADATA: Key =
    Key::from_static_str("rpc.connect_rpc.request.metadata");

/// Connect response metadata, `<key>` being the normalized Connect
/// Metadata key (lowercase), the value being the metadata values.
///
/// The full key carries a caller-chosen metadata-key suffix, so no
/// fixed-key constructor is provided.
///
/// # Examples
///
/// - `rpc.connect_rpc.response.metadata.my-custom-key=["attribute_value"]`
pub const RPC_CONNECT_RPC_RESPONSE_METADATA: Key =
    Key::from_static_str("rpc.connect_rpc.response.metadata");

/// gRPC request metadata, `<key>` being the normalized gRPC Metadata key
/// (lowercase), the value being the metadata values.
///
/// The full key carries a caller-chosen metadata-key suffix, so no
/// fixed-key constructor is provided.
///
/// # Examples
///
/// - `rpc.grpc.request.metadata.my-custom-metadata-attribute=["1.2.3.4", "1.2.3.5"]`
pub const RPC_GRPC_REQUEST_METADATA: Key = Key::from_static_str("rpc.grpc.request.metadata");

/// gRPC response metadata, `<key>` being the normalized gRPC Metadata key
/// (lowercase), the value being the metadata values.
///
/// The full key carries a caller-chosen metadata-key suffix, so no
/// fixed-key constructor is provided.
///
/// # Examples
///
/// - `rpc.grpc.response.metadata.my-custom-metadata-attribute=["attribute_value"]`
pub const RPC_GRPC_RESPONSE_METADATA: Key = Key::from_static_str("rpc.grpc.response.metadata");

/// The [numeric status code](https://github.com/grpc/grpc/blob/v1.33.2/doc/statuscodes.md)
/// of the gRPC request.
pub const RPC_GRPC_STATUS_CODE: Key = Key::from_static_str("rpc.grpc.status_code");

/// Builds a [`KeyValue`] for [`RPC_GRPC_STATUS_CODE`].
pub fn rpc_grpc_status_code(value: i64) -> KeyValue {
    KeyValue::new(RPC_GRPC_STATUS_CODE, value)
}

/// Well-known values for [`RPC_GRPC_STATUS_CODE`].
pub mod rpc_grpc_status_code_values {
    /// OK.
    pub const OK: i64 = 0;
    /// CANCELLED.
    pub const CANCELLED: i64 = 1;
    /// UNKNOWN.
    pub const UNKNOWN: i64 = 2;
    /// INVALID_ARGUMENT.
    pub const INVALID_ARGUMENT: i64 = 3;
    /// DEADLINE_EXCEEDED.
    pub const DEADLINE_EXCEEDED: i64 = 4;
    /// NOT_FOUND.
    pub const NOT_FOUND: i64 = 5;
    /// ALREADY_EXISTS.
    pub const ALREADY_EXISTS: i64 = 6;
    /// PERMISSION_DENIED.
    pub const PERMISSION_DENIED: i64 = 7;
    /// RESOURCE_EXHAUSTED.
    pub const RESOURCE_EXHAUSTED: i64 = 8;
    /// FAILED_PRECONDITION.
    pub const FAILED_PRECONDITION: i64 = 9;
    /// ABORTED.
    pub const ABORTED: i64 = 10;
    /// OUT_OF_RANGE.
    pub const OUT_OF_RANGE: i64 = 11;
    /// UNIMPLEMENTED.
    pub const UNIMPLEMENTED: i64 = 12;
    /// INTERNAL.
    pub const INTERNAL: i64 = 13;
    /// UNAVAILABLE.
    pub const UNAVAILABLE: i64 = 14;
    /// DATA_LOSS.
    pub const DATA_LOSS: i64 = 15;
    /// UNAUTHENTICATED.
    pub const UNAUTHENTICATED: i64 = 16;
}

/// `error.code` property of response if it is an error response.
///
/// # Examples
///
/// - `-32700`
/// - `100`
pub const RPC_JSONRPC_ERROR_CODE: Key = Key::from_static_str("rpc.jsonrpc.error_code");

/// Builds a [`KeyValue`] for [`RPC_JSONRPC_ERROR_CODE`].
pub fn rpc_jsonrpc_error_code(value: i64) -> KeyValue {
    KeyValue::new(RPC_JSONRPC_ERROR_CODE, value)
}

/// `error.message` property of response if it is an error response.
///
/// # Examples
///
/// - `"Parse error"`
/// - `"User already exists"`
pub const RPC_JSONRPC_ERROR_MESSAGE: Key = Key::from_static_str("rpc.jsonrpc.error_message");

/// Builds a [`KeyValue`] for [`RPC_JSONRPC_ERROR_MESSAGE`].
pub fn rpc_jsonrpc_error_message(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(RPC_JSONRPC_ERROR_MESSAGE, value.into())
}

/// `id` property of request or response. Since protocol allows id to be
/// int, string, `null` or missing (for notifications), value is expected
/// to be cast to string for simplicity. Use empty string in case of
/// `null` value. Omit entirely if this is a notification.
///
/// # Examples
///
/// - `"10"`
/// - `"request-7"`
/// - `""`
pub const RPC_JSONRPC_REQUEST_ID: Key = Key::from_static_str("rpc.jsonrpc.request_id");

/// Builds a [`KeyValue`] for [`RPC_JSONRPC_REQUEST_ID`].
pub fn rpc_jsonrpc_request_id(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(RPC_JSONRPC_REQUEST_ID, value.into())
}

/// Protocol version as in `jsonrpc` property of request/response. Since
/// JSON-RPC 1.0 doesn't specify this, the value can be omitted.
///
/// # Examples
///
/// - `"2.0"`
/// - `"1.0"`
pub const RPC_JSONRPC_VERSION: Key = Key::from_static_str("rpc.jsonrpc.version");

/// Builds a [`KeyValue`] for [`RPC_JSONRPC_VERSION`].
pub fn rpc_jsonrpc_version(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(RPC_JSONRPC_VERSION, value.into())
}

/// Compressed size of the message in bytes.
pub const RPC_MESSAGE_COMPRESSED_SIZE: Key = Key::from_static_str("rpc.message.compressed_size");

/// Builds a [`KeyValue`] for [`RPC_MESSAGE_COMPRESSED_SIZE`].
pub fn rpc_message_compressed_size(value: i64) -> KeyValue {
    KeyValue::new(RPC_MESSAGE_COMPRESSED_SIZE, value)
}

/// Must be calculated as two different counters starting from `1` one for
/// sent messages and one for received message.
///
/// This way we guarantee that the values will be consistent between
/// different implementations.
pub const RPC_MESSAGE_ID: Key = Key::from_static_str("rpc.message.id");

/// Builds a [`KeyValue`] for [`RPC_MESSAGE_ID`].
pub fn rpc_message_id(value: i64) -> KeyValue {
    KeyValue::new(RPC_MESSAGE_ID, value)
}

/// Whether this is a received or sent message.
pub const RPC_MESSAGE_TYPE: Key = Key::from_static_str("rpc.message.type");

/// Builds a [`KeyValue`] for [`RPC_MESSAGE_TYPE`].
pub fn rpc_message_type(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(RPC_MESSAGE_TYPE, value.into())
}

/// Well-known values for [`RPC_MESSAGE_TYPE`].
pub mod rpc_message_type_values {
    /// sent
    pub const SENT: &str = "SENT";
    /// received
    pub const RECEIVED: &str = "RECEIVED";
}

/// Uncompressed size of the message in bytes.
pub const RPC_MESSAGE_UNCOMPRESSED_SIZE: Key =
    Key::from_static_str("rpc.message.uncompressed_size");

/// Builds a [`KeyValue`] for [`RPC_MESSAGE_UNCOMPRESSED_SIZE`].
pub fn rpc_message_uncompressed_size(value: i64) -> KeyValue {
    KeyValue::new(RPC_MESSAGE_UNCOMPRESSED_SIZE, value)
}

/// The name of the (logical) method being called, must be equal to the
/// $method part in the span name.
///
/// This is the logical name of the method from the RPC interface
/// perspective, which can be different from the name of any implementing
/// method/function. The `code.function.name` attribute may be used to
/// store the latter (e.g., method actually executing the call on the
/// server side, RPC client stub method on the client side).
///
/// # Examples
///
/// - `"exampleMethod"`
pub const RPC_METHOD: Key = Key::from_static_str("rpc.method");

/// Builds a [`KeyValue`] for [`RPC_METHOD`].
pub fn rpc_method(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(RPC_METHOD, value.into())
}

/// The full (logical) name of the service being called, including its
/// package name, if applicable.
///
/// This is the logical name of the service from the RPC interface
/// perspective, which can be different from the name of any implementing
/// class. The `code.namespace` attribute may be used to store the latter
/// (despite the attribute name, it may include a class name; e.g., class
/// with method actually executing the call on the server side, RPC client
/// stub class on the client side).
///
/// # Examples
///
/// - `"myservice.EchoService"`
pub const RPC_SERVICE: Key = Key::from_static_str("rpc.service");

/// Builds a [`KeyValue`] for [`RPC_SERVICE`].
pub fn rpc_service(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(RPC_SERVICE, value.into())
}

/// A string identifying the remoting system. See below for a list of
/// well-known identifiers.
pub const RPC_SYSTEM: Key = Key::from_static_str("rpc.system");

/// Builds a [`KeyValue`] for [`RPC_SYSTEM`].
pub fn rpc_system(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(RPC_SYSTEM, value.into())
}

/// Well-known values for [`RPC_SYSTEM`].
pub mod rpc_system_values {
    /// gRPC.
    pub const GRPC: &str = "grpc";
    /// Java RMI.
    pub const JAVA_RMI: &str = "java_rmi";
    /// .NET WCF.
    pub const DOTNET_WCF: &str = "dotnet_wcf";
    /// Apache Dubbo.
    pub const APACHE_DUBBO: &str = "apache_dubbo";
    /// Connect RPC.
    pub const CONNECT_RPC: &str = "connect_rpc";
}
