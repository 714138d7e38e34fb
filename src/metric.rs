//! # Metric Semantic Conventions
//!
//! The [metric semantic conventions] define a set of standardized metric
//! names to be used with `Meter`s.
//!
//! [metric semantic conventions]: https://opentelemetry.io/docs/specs/semconv/general/metrics/
//!
//! ## Usage
//!
//! ```rust
//! use otel_semconv as semconv;
//!
//! // The constant is the instrument name to register with a meter.
//! assert_eq!(
//!     semconv::metric::HTTP_SERVER_REQUEST_DURATION,
//!     "http.server.request.duration"
//! );
//! ```

/// The number of connections that are currently in state described by the
/// `state` attribute.
///
/// Instrument: `updowncounter`. Unit: `{connection}`.
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_COUNT: &str = "db.client.connection.count";

/// The time it took to create a new connection.
///
/// Instrument: `histogram`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_CREATE_TIME: &str = "db.client.connection.create_time";

/// The maximum number of idle open connections allowed.
///
/// Instrument: `updowncounter`. Unit: `{connection}`.
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_IDLE_MAX: &str = "db.client.connection.idle.max";

/// The minimum number of idle open connections allowed.
///
/// Instrument: `updowncounter`. Unit: `{connection}`.
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_IDLE_MIN: &str = "db.client.connection.idle.min";

/// The maximum number of open connections allowed.
///
/// Instrument: `updowncounter`. Unit: `{connection}`.
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_MAX: &str = "db.client.connection.max";

/// The number of current pending requests for an open connection.
///
/// Instrument: `updowncounter`. Unit: `{request}`.
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_PENDING_REQUESTS: &str = "db.client.connection.pending_requests";

/// The number of connection timeouts that have occurred trying to obtain
/// a connection from the pool.
///
/// Instrument: `counter`. Unit: `{timeout}`.
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_TIMEOUTS: &str = "db.client.connection.timeouts";

/// The time between borrowing a connection and returning it to the pool.
///
/// Instrument: `histogram`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_USE_TIME: &str = "db.client.connection.use_time";

/// The time it took to obtain an open connection from the pool.
///
/// Instrument: `histogram`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_CONNECTION_WAIT_TIME: &str = "db.client.connection.wait_time";

/// Duration of database client operations.
///
/// Batch operations should be recorded as a single operation.
///
/// Instrument: `histogram`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_OPERATION_DURATION: &str = "db.client.operation.duration";

/// The actual number of records returned by the database operation.
///
/// Instrument: `histogram`. Unit: `{row}`.
#[cfg(feature = "semconv_experimental")]
pub const DB_CLIENT_RESPONSE_RETURNED_ROWS: &str = "db.client.response.returned_rows";

/// Number of invocation cold starts.
///
/// Instrument: `counter`. Unit: `{coldstart}`.
#[cfg(feature = "semconv_experimental")]
pub const FAAS_COLDSTARTS: &str = "faas.coldstarts";

/// Distribution of CPU usage per invocation.
///
/// Instrument: `histogram`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const FAAS_CPU_USAGE: &str = "faas.cpu_usage";

/// Number of invocation errors.
///
/// Instrument: `counter`. Unit: `{error}`.
#[cfg(feature = "semconv_experimental")]
pub const FAAS_ERRORS: &str = "faas.errors";

/// Measures the duration of the function's initialization, such as a cold
/// start.
///
/// Instrument: `histogram`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const FAAS_INIT_DURATION: &str = "faas.init_duration";

/// Number of successful invocations.
///
/// Instrument: `counter`. Unit: `{invocation}`.
#[cfg(feature = "semconv_experimental")]
pub const FAAS_INVOCATIONS: &str = "faas.invocations";

/// Measures the duration of the function's logic execution.
///
/// Instrument: `histogram`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const FAAS_INVOKE_DURATION: &str = "faas.invoke_duration";

/// Distribution of max memory usage per invocation.
///
/// Instrument: `histogram`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const FAAS_MEM_USAGE: &str = "faas.mem_usage";

/// Distribution of net I/O usage per invocation.
///
/// Instrument: `histogram`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const FAAS_NET_IO: &str = "faas.net_io";

/// Number of invocation timeouts.
///
/// Instrument: `counter`. Unit: `{timeout}`.
#[cfg(feature = "semconv_experimental")]
pub const FAAS_TIMEOUTS: &str = "faas.timeouts";

/// GenAI operation duration.
///
/// Instrument: `histogram`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_CLIENT_OPERATION_DURATION: &str = "gen_ai.client.operation.duration";

/// Measures number of input and output tokens used.
///
/// Instrument: `histogram`. Unit: `{token}`.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_CLIENT_TOKEN_USAGE: &str = "gen_ai.client.token.usage";

/// Generative AI server request duration such as time-to-last byte or
/// last output token.
///
/// Instrument: `histogram`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_SERVER_REQUEST_DURATION: &str = "gen_ai.server.request.duration";

/// Time per output token generated after the first token for successful
/// responses.
///
/// Instrument: `histogram`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_SERVER_TIME_PER_OUTPUT_TOKEN: &str = "gen_ai.server.time_per_output_token";

/// Time to generate first token for successful responses.
///
/// Instrument: `histogram`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const GEN_AI_SERVER_TIME_TO_FIRST_TOKEN: &str = "gen_ai.server.time_to_first_token";

/// Number of active HTTP requests.
///
/// Instrument: `updowncounter`. Unit: `{request}`.
#[cfg(feature = "semconv_experimental")]
pub const HTTP_CLIENT_ACTIVE_REQUESTS: &str = "http.client.active_requests";

/// The duration of the successfully established outbound HTTP connections.
///
/// Instrument: `histogram`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const HTTP_CLIENT_CONNECTION_DURATION: &str = "http.client.connection.duration";

/// Number of outbound HTTP connections that are currently active or idle
/// on the client.
///
/// Instrument: `updowncounter`. Unit: `{connection}`.
#[cfg(feature = "semconv_experimental")]
pub const HTTP_CLIENT_OPEN_CONNECTIONS: &str = "http.client.open_connections";

/// Size of HTTP client request bodies.
///
/// The size of the request payload body in bytes. This is the number of
/// bytes transferred excluding headers and is often, but not always,
/// present as the Content-Length header.
///
/// Instrument: `histogram`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const HTTP_CLIENT_REQUEST_BODY_SIZE: &str = "http.client.request.body.size";

/// Duration of HTTP client requests.
///
/// Instrument: `histogram`. Unit: `s`. Status: `Stable`.
pub const HTTP_CLIENT_REQUEST_DURATION: &str = "http.client.request.duration";

/// Size of HTTP client response bodies.
///
/// The size of the response payload body in bytes. This is the number of
/// bytes transferred excluding headers and is often, but not always,
/// present as the Content-Length header.
///
/// Instrument: `histogram`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const HTTP_CLIENT_RESPONSE_BODY_SIZE: &str = "http.client.response.body.size";

/// Number of active HTTP server requests.
///
/// Instrument: `updowncounter`. Unit: `{request}`.
#[cfg(feature = "semconv_experimental")]
pub const HTTP_SERVER_ACTIVE_REQUESTS: &str = "http.server.active_requests";

/// Size of HTTP server request bodies.
///
/// Instrument: `histogram`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const HTTP_SERVER_REQUEST_BODY_SIZE: &str = "http.server.request.body.size";

/// Duration of HTTP server requests.
///
/// Instrument: `histogram`. Unit: `s`. Status: `Stable`.
pub const HTTP_SERVER_REQUEST_DURATION: &str = "http.server.request.duration";

/// Size of HTTP server response bodies.
///
/// Instrument: `histogram`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const HTTP_SERVER_RESPONSE_BODY_SIZE: &str = "http.server.response.body.size";

/// Total CPU time consumed.
///
/// Total CPU time consumed by the specific Node on all available CPU
/// cores.
///
/// Instrument: `counter`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_NODE_CPU_TIME: &str = "k8s.node.cpu.time";

/// Node's CPU usage, measured in cpus. Range from 0 to the number of
/// allocatable CPUs.
///
/// Instrument: `gauge`. Unit: `{cpu}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_NODE_CPU_USAGE: &str = "k8s.node.cpu.usage";

/// Memory usage of the Node.
///
/// Instrument: `gauge`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_NODE_MEMORY_USAGE: &str = "k8s.node.memory.usage";

/// Node network errors.
///
/// Instrument: `counter`. Unit: `{error}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_NODE_NETWORK_ERRORS: &str = "k8s.node.network.errors";

/// Network bytes for the Node.
///
/// Instrument: `counter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_NODE_NETWORK_IO: &str = "k8s.node.network.io";

/// The time the Node has been running.
///
/// Instrument: `gauge`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_NODE_UPTIME: &str = "k8s.node.uptime";

/// Total CPU time consumed.
///
/// Total CPU time consumed by the specific Pod on all available CPU
/// cores.
///
/// Instrument: `counter`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_POD_CPU_TIME: &str = "k8s.pod.cpu.time";

/// Pod's CPU usage, measured in cpus. Range from 0 to the number of
/// allocatable CPUs.
///
/// Instrument: `gauge`. Unit: `{cpu}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_POD_CPU_USAGE: &str = "k8s.pod.cpu.usage";

/// Memory usage of the Pod.
///
/// Instrument: `gauge`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_POD_MEMORY_USAGE: &str = "k8s.pod.memory.usage";

/// Pod network errors.
///
/// Instrument: `counter`. Unit: `{error}`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_POD_NETWORK_ERRORS: &str = "k8s.pod.network.errors";

/// Network bytes for the Pod.
///
/// Instrument: `counter`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_POD_NETWORK_IO: &str = "k8s.pod.network.io";

/// The time the Pod has been running.
///
/// Instrument: `gauge`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const K8S_POD_UPTIME: &str = "k8s.pod.uptime";

/// Number of messages that were delivered to the application.
///
/// Records the number of messages pulled from the broker or number of
/// messages dispatched to the application in push-based scenarios. The
/// metric should be reported once per message delivery.
///
/// Instrument: `counter`. Unit: `{message}`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_CLIENT_CONSUMED_MESSAGES: &str = "messaging.client.consumed.messages";

/// Duration of messaging operation initiated by a producer or consumer
/// client.
///
/// Instrument: `histogram`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_CLIENT_OPERATION_DURATION: &str = "messaging.client.operation.duration";

/// Number of messages producer attempted to send to the broker.
///
/// This metric must not count messages that were created but haven't yet
/// been sent.
///
/// Instrument: `counter`. Unit: `{message}`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_CLIENT_SENT_MESSAGES: &str = "messaging.client.sent.messages";

/// Duration of processing operation.
///
/// This metric must be reported for operations with
/// `messaging.operation.type` that matches `process`.
///
/// Instrument: `histogram`. Unit: `s`.
#[cfg(feature = "semconv_experimental")]
pub const MESSAGING_PROCESS_DURATION: &str = "messaging.process.duration";

/// Measures the duration of outbound RPC.
///
/// While streaming RPCs may record this metric as start-of-batch to
/// end-of-batch, it's hard to interpret in practice.
///
/// Instrument: `histogram`. Unit: `ms`.
#[cfg(feature = "semconv_experimental")]
pub const RPC_CLIENT_DURATION: &str = "rpc.client.duration";

/// Measures the size of RPC request messages (uncompressed).
///
/// Instrument: `histogram`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const RPC_CLIENT_REQUEST_SIZE: &str = "rpc.client.request.size";

/// Measures the number of messages received per RPC.
///
/// Should be 1 for all non-streaming RPCs.
///
/// Instrument: `histogram`. Unit: `{count}`.
#[cfg(feature = "semconv_experimental")]
pub const RPC_CLIENT_REQUESTS_PER_RPC: &str = "rpc.client.requests_per_rpc";

/// Measures the size of RPC response messages (uncompressed).
///
/// Instrument: `histogram`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const RPC_CLIENT_RESPONSE_SIZE: &str = "rpc.client.response.size";

/// Measures the number of messages sent per RPC.
///
/// Should be 1 for all non-streaming RPCs.
///
/// Instrument: `histogram`. Unit: `{count}`.
#[cfg(feature = "semconv_experimental")]
pub const RPC_CLIENT_RESPONSES_PER_RPC: &str = "rpc.client.responses_per_rpc";

/// Measures the duration of inbound RPC.
///
/// While streaming RPCs may record this metric as start-of-batch to
/// end-of-batch, it's hard to interpret in practice.
///
/// Instrument: `histogram`. Unit: `ms`.
#[cfg(feature = "semconv_experimental")]
pub const RPC_SERVER_DURATION: &str = "rpc.server.duration";

/// Measures the size of RPC request messages (uncompressed).
///
/// Instrument: `histogram`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const RPC_SERVER_REQUEST_SIZE: &str = "rpc.server.request.size";

/// Measures the number of messages received per RPC.
///
/// Should be 1 for all non-streaming RPCs.
///
/// Instrument: `histogram`. Unit: `{count}`.
#[cfg(feature = "semconv_experimental")]
pub const RPC_SERVER_REQUESTS_PER_RPC: &str = "rpc.server.requests_per_rpc";

/// Measures the size of RPC response messages (uncompressed).
///
/// Instrument: `histogram`. Unit: `By`.
#[cfg(feature = "semconv_experimental")]
pub const RPC_SERVER_RESPONSE_SIZE: &str = "rpc.server.response.size";

/// Measures the number of messages sent per RPC.
///
/// Should be 1 for all non-streaming RPCs.
///
/// Instrument: `histogram`. Unit: `{count}`.
#[cfg(feature = "semconv_experimental")]
pub const RPC_SERVER_RESPONSES_PER_RPC: &str = "rpc.server.responses_per_rpc";
