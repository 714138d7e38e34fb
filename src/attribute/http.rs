//! `http.*` attributes: HTTP client and server spans.

use opentelemetry::{Key, KeyValue, StringValue};

/// Deprecated, use `client.address` instead.
///
/// # Examples
///
/// - `"83.164.160.102"`
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `client.address`.")]
pub const HTTP_CLIENT_IP: Key = Key::from_static_str("http.client_ip");

/// Builds a [`KeyValue`] for [`HTTP_CLIENT_IP`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `client.address`.")]
pub fn http_client_ip(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(HTTP_CLIENT_IP, value.into())
}

/// State of the HTTP connection in the HTTP connection pool.
///
/// # Examples
///
/// - `"active"`
/// - `"idle"`
#[cfg(feature = "semconv_experimental")]
pub const HTTP_CONNECTION_STATE: Key = Key::from_static_str("http.connection.state");

/// Builds a [`KeyValue`] for [`HTTP_CONNECTION_STATE`].
#[cfg(feature = "semconv_experimental")]
pub fn http_connection_state(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(HTTP_CONNECTION_STATE, value.into())
}

/// Well-known values for [`HTTP_CONNECTION_STATE`].
#[cfg(feature = "semconv_experimental")]
pub mod http_connection_state_values {
    /// active state.
    pub const ACTIVE: &str = "active";
    /// idle state.
    pub const IDLE: &str = "idle";
}

/// Deprecated, use `network.protocol.name` instead.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `network.protocol.name`.")]
pub const HTTP_FLAVOR: Key = Key::from_static_str("http.flavor");

/// Builds a [`KeyValue`] for [`HTTP_FLAVOR`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `network.protocol.name`.")]
pub fn http_flavor(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(HTTP_FLAVOR, value.into())
}

/// Deprecated, use one of `server.address`, `client.address` or
/// `http.request.header.host` instead, depending on the usage.
///
/// # Examples
///
/// - `"www.example.org"`
#[cfg(feature = "semconv_experimental")]
#[deprecated(
    note = "Replaced by one of `server.address`, `client.address` or `http.request.header.host`, depending on the usage."
)]
pub const HTTP_HOST: Key = Key::from_static_str("http.host");

/// Builds a [`KeyValue`] for [`HTTP_HOST`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(
    note = "Replaced by one of `server.address`, `client.address` or `http.request.header.host`, depending on the usage."
)]
pub fn http_host(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(HTTP_HOST, value.into())
}

/// Deprecated, use `http.request.method` instead.
///
/// # Examples
///
/// - `"GET"`
/// - `"POST"`
/// - `"HEAD"`
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `http.request.method`.")]
pub const HTTP_METHOD: Key = Key::from_static_str("http.method");

/// Builds a [`KeyValue`] for [`HTTP_METHOD`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `http.request.method`.")]
pub fn http_method(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(HTTP_METHOD, value.into())
}

/// The size of the request payload body in bytes.
///
/// This is the number of bytes transferred excluding headers and is often,
/// but not always, present as the [Content-Length](https://www.rfc-editor.org/rfc/rfc9110.html#field.content-length)
/// header. For requests using transport encoding, this should be the
/// compressed size.
///
/// # Examples
///
/// - `3495`
#[cfg(feature = "semconv_experimental")]
pub const HTTP_REQUEST_BODY_SIZE: Key = Key::from_static_str("http.request.body.size");

/// Builds a [`KeyValue`] for [`HTTP_REQUEST_BODY_SIZE`].
#[cfg(feature = "semconv_experimental")]
pub fn http_request_body_size(value: i64) -> KeyValue {
    KeyValue::new(HTTP_REQUEST_BODY_SIZE, value)
}

/// HTTP request headers, `<key>` being the normalized HTTP Header name
/// (lowercase), the value being the header values.
///
/// The full key carries a caller-chosen header-name suffix, so no
/// fixed-key constructor is provided.
///
/// # Examples
///
/// - `http.request.header.content-type=["application/json"]`
/// - `http.request.header.x-forwarded-for=["1.2.3.4", "1.2.3.5"]`
pub const HTTP_REQUEST_HEADER: Key = Key::from_static_str("http.request.header");

/// HTTP request method.
///
/// HTTP request method value should be "known" to the instrumentation.
/// By default, this convention defines "known" methods as the ones listed
/// in [RFC9110](https://www.rfc-editor.org/rfc/rfc9110.html#name-methods)
/// and the PATCH method defined in
/// [RFC5789](https://www.rfc-editor.org/rfc/rfc5789.html). If the HTTP
/// request method is not known to instrumentation, it must set the
/// attribute to [`http_request_method_values::OTHER`] and, except if
/// reporting a metric, must set the exact method received in the request
/// line as value of the `http.request.method_original` attribute.
///
/// # Examples
///
/// - `"GET"`
/// - `"POST"`
/// - `"HEAD"`
pub const HTTP_REQUEST_METHOD: Key = Key::from_static_str("http.request.method");

/// Builds a [`KeyValue`] for [`HTTP_REQUEST_METHOD`].
pub fn http_request_method(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(HTTP_REQUEST_METHOD, value.into())
}

/// Well-known values for [`HTTP_REQUEST_METHOD`].
pub mod http_request_method_values {
    /// CONNECT method.
    pub const CONNECT: &str = "CONNECT";
    /// DELETE method.
    pub const DELETE: &str = "DELETE";
    /// GET method.
    pub const GET: &str = "GET";
    /// HEAD method.
    pub const HEAD: &str = "HEAD";
    /// OPTIONS method.
    pub const OPTIONS: &str = "OPTIONS";
    /// PATCH method.
    pub const PATCH: &str = "PATCH";
    /// POST method.
    pub const POST: &str = "POST";
    /// PUT method.
    pub const PUT: &str = "PUT";
    /// TRACE method.
    pub const TRACE: &str = "TRACE";
    /// Any HTTP method that the instrumentation has no prior knowledge of.
    pub const OTHER: &str = "_OTHER";
}

/// Original HTTP method sent by the client in the request line.
///
/// # Examples
///
/// - `"GeT"`
/// - `"ACL"`
/// - `"foo"`
pub const HTTP_REQUEST_METHOD_ORIGINAL: Key = Key::from_static_str("http.request.method_original");

/// Builds a [`KeyValue`] for [`HTTP_REQUEST_METHOD_ORIGINAL`].
pub fn http_request_method_original(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(HTTP_REQUEST_METHOD_ORIGINAL, value.into())
}

/// The ordinal number of request resending attempt (for any reason,
/// including redirects).
///
/// The resend count should be updated each time an HTTP request gets
/// resent by the client, regardless of what was the cause of the
/// resending (e.g. redirection, authorization failure, 503 Server
/// Unavailable, network issues, or any other).
///
/// # Examples
///
/// - `3`
pub const HTTP_REQUEST_RESEND_COUNT: Key = Key::from_static_str("http.request.resend_count");

/// Builds a [`KeyValue`] for [`HTTP_REQUEST_RESEND_COUNT`].
pub fn http_request_resend_count(value: i64) -> KeyValue {
    KeyValue::new(HTTP_REQUEST_RESEND_COUNT, value)
}

/// The total size of the request in bytes. This should be the total number
/// of bytes sent over the wire, including the request line (HTTP/1.1),
/// framing (HTTP/2 and HTTP/3), headers, and request body if any.
///
/// # Examples
///
/// - `1437`
#[cfg(feature = "semconv_experimental")]
pub const HTTP_REQUEST_SIZE: Key = Key::from_static_str("http.request.size");

/// Builds a [`KeyValue`] for [`HTTP_REQUEST_SIZE`].
#[cfg(feature = "semconv_experimental")]
pub fn http_request_size(value: i64) -> KeyValue {
    KeyValue::new(HTTP_REQUEST_SIZE, value)
}

/// Deprecated, use `http.request.header.content-length` instead.
///
/// # Examples
///
/// - `3495`
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `http.request.header.content-length`.")]
pub const HTTP_REQUEST_CONTENT_LENGTH: Key = Key::from_static_str("http.request_content_length");

/// Builds a [`KeyValue`] for [`HTTP_REQUEST_CONTENT_LENGTH`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `http.request.header.content-length`.")]
pub fn http_request_content_length(value: i64) -> KeyValue {
    KeyValue::new(HTTP_REQUEST_CONTENT_LENGTH, value)
}

/// Deprecated, use `http.request.body.size` instead.
///
/// # Examples
///
/// - `5493`
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `http.request.body.size`.")]
pub const HTTP_REQUEST_CONTENT_LENGTH_UNCOMPRESSED: Key =
    Key::from_static_str("http.request_content_length_uncompressed");

/// Builds a [`KeyValue`] for [`HTTP_REQUEST_CONTENT_LENGTH_UNCOMPRESSED`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `http.request.body.size`.")]
pub fn http_request_content_length_uncompressed(value: i64) -> KeyValue {
    KeyValue::new(HTTP_REQUEST_CONTENT_LENGTH_UNCOMPRESSED, value)
}

/// The size of the response payload body in bytes.
///
/// This is the number of bytes transferred excluding headers and is often,
/// but not always, present as the [Content-Length](https://www.rfc-editor.org/rfc/rfc9110.html#field.content-length)
/// header. For requests using transport encoding, this should be the
/// compressed size.
///
/// # Examples
///
/// - `3495`
#[cfg(feature = "semconv_experimental")]
pub const HTTP_RESPONSE_BODY_SIZE: Key = Key::from_static_str("http.response.body.size");

/// Builds a [`KeyValue`] for [`HTTP_RESPONSE_BODY_SIZE`].
#[cfg(feature = "semconv_experimental")]
pub fn http_response_body_size(value: i64) -> KeyValue {
    KeyValue::new(HTTP_RESPONSE_BODY_SIZE, value)
}

/// HTTP response headers, `<key>` being the normalized HTTP Header name
/// (lowercase), the value being the header values.
///
/// The full key carries a caller-chosen header-name suffix, so no
/// fixed-key constructor is provided.
///
/// # Examples
///
/// - `http.response.header.content-type=["application/json"]`
/// - `http.response.header.my-custom-header=["abc", "def"]`
pub const HTTP_RESPONSE_HEADER: Key = Key::from_static_str("http.response.header");

/// The total size of the response in bytes. This should be the total
/// number of bytes sent over the wire, including the status line
/// (HTTP/1.1), framing (HTTP/2 and HTTP/3), headers, and response body
/// and trailers if any.
///
/// # Examples
///
/// - `1437`
#[cfg(feature = "semconv_experimental")]
pub const HTTP_RESPONSE_SIZE: Key = Key::from_static_str("http.response.size");

/// Builds a [`KeyValue`] for [`HTTP_RESPONSE_SIZE`].
#[cfg(feature = "semconv_experimental")]
pub fn http_response_size(value: i64) -> KeyValue {
    KeyValue::new(HTTP_RESPONSE_SIZE, value)
}

/// [HTTP response status code](https://tools.ietf.org/html/rfc7231#section-6).
///
/// # Examples
///
/// - `200`
pub const HTTP_RESPONSE_STATUS_CODE: Key = Key::from_static_str("http.response.status_code");

/// Builds a [`KeyValue`] for [`HTTP_RESPONSE_STATUS_CODE`].
pub fn http_response_status_code(value: i64) -> KeyValue {
    KeyValue::new(HTTP_RESPONSE_STATUS_CODE, value)
}

/// Deprecated, use `http.response.header.content-length` instead.
///
/// # Examples
///
/// - `3495`
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `http.response.header.content-length`.")]
pub const HTTP_RESPONSE_CONTENT_LENGTH: Key = Key::from_static_str("http.response_content_length");

/// Builds a [`KeyValue`] for [`HTTP_RESPONSE_CONTENT_LENGTH`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `http.response.header.content-length`.")]
pub fn http_response_content_length(value: i64) -> KeyValue {
    KeyValue::new(HTTP_RESPONSE_CONTENT_LENGTH, value)
}

/// Deprecated, use `http.response.body.size` instead.
///
/// # Examples
///
/// - `5493`
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `http.response.body.size`.")]
pub const HTTP_RESPONSE_CONTENT_LENGTH_UNCOMPRESSED: Key =
    Key::from_static_str("http.response_content_length_uncompressed");

/// Builds a [`KeyValue`] for [`HTTP_RESPONSE_CONTENT_LENGTH_UNCOMPRESSED`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `http.response.body.size`.")]
pub fn http_response_content_length_uncompressed(value: i64) -> KeyValue {
    KeyValue::new(HTTP_RESPONSE_CONTENT_LENGTH_UNCOMPRESSED, value)
}

/// The matched route, that is, the path template in the format used by the
/// respective server framework.
///
/// MUST NOT be populated when this is not supported by the HTTP server
/// framework as the route attribute should have low-cardinality and the
/// URI path can NOT substitute it. SHOULD include the [application
/// root](https://opentelemetry.io/docs/specs/semconv/http/http-spans/#http-server-definitions)
/// if there is one.
///
/// # Examples
///
/// - `"/users/:userID?"`
/// - `"{controller}/{action}/{id?}"`
pub const HTTP_ROUTE: Key = Key::from_static_str("http.route");

/// Builds a [`KeyValue`] for [`HTTP_ROUTE`].
pub fn http_route(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(HTTP_ROUTE, value.into())
}

/// Deprecated, use `url.scheme` instead.
///
/// # Examples
///
/// - `"http"`
/// - `"https"`
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `url.scheme` instead.")]
pub const HTTP_SCHEME: Key = Key::from_static_str("http.scheme");

/// Builds a [`KeyValue`] for [`HTTP_SCHEME`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `url.scheme` instead.")]
pub fn http_scheme(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(HTTP_SCHEME, value.into())
}

/// Deprecated, use `server.address` instead.
///
/// # Examples
///
/// - `"example.com"`
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `server.address`.")]
pub const HTTP_SERVER_NAME: Key = Key::from_static_str("http.server_name");

/// Builds a [`KeyValue`] for [`HTTP_SERVER_NAME`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `server.address`.")]
pub fn http_server_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(HTTP_SERVER_NAME, value.into())
}

/// Deprecated, use `http.response.status_code` instead.
///
/// # Examples
///
/// - `200`
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `http.response.status_code`.")]
pub const HTTP_STATUS_CODE: Key = Key::from_static_str("http.status_code");

/// Builds a [`KeyValue`] for [`HTTP_STATUS_CODE`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `http.response.status_code`.")]
pub fn http_status_code(value: i64) -> KeyValue {
    KeyValue::new(HTTP_STATUS_CODE, value)
}

/// Deprecated, use `url.path` and `url.query` instead.
///
/// # Examples
///
/// - `"/search?q=OpenTelemetry#SemConv"`
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Split to `url.path` and `url.query`.")]
pub const HTTP_TARGET: Key = Key::from_static_str("http.target");

/// Builds a [`KeyValue`] for [`HTTP_TARGET`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Split to `url.path` and `url.query`.")]
pub fn http_target(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(HTTP_TARGET, value.into())
}

/// Deprecated, use `url.full` instead.
///
/// # Examples
///
/// - `"https://www.foo.bar/search?q=OpenTelemetry#SemConv"`
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `url.full`.")]
pub const HTTP_URL: Key = Key::from_static_str("http.url");

/// Builds a [`KeyValue`] for [`HTTP_URL`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `url.full`.")]
pub fn http_url(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(HTTP_URL, value.into())
}

/// Deprecated, use `user_agent.original` instead.
///
/// # Examples
///
/// - `"CERN-LineMode/2.15 libwww/2.17b3"`
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `user_agent.original`.")]
pub const HTTP_USER_AGENT: Key = Key::from_static_str("http.user_agent");

/// Builds a [`KeyValue`] for [`HTTP_USER_AGENT`].
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `user_agent.original`.")]
pub fn http_user_agent(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(HTTP_USER_AGENT, value.into())
}
