//! Regression tests pinning the catalog to the registry release it was
//! drawn from: key strings, enum membership, and constructor round-trips.

use opentelemetry::Value;
use otel_semconv::{attribute, metric, resource, trace};

#[test]
fn schema_url_pins_registry_release() {
    assert_eq!(
        otel_semconv::SCHEMA_URL,
        "https://opentelemetry.io/schemas/1.30.0"
    );
}

#[test]
fn stable_key_strings_match_registry() {
    assert_eq!(attribute::CLIENT_ADDRESS.as_str(), "client.address");
    assert_eq!(attribute::CLIENT_PORT.as_str(), "client.port");
    assert_eq!(attribute::ERROR_TYPE.as_str(), "error.type");
    assert_eq!(attribute::EXCEPTION_MESSAGE.as_str(), "exception.message");
    assert_eq!(
        attribute::EXCEPTION_STACKTRACE.as_str(),
        "exception.stacktrace"
    );
    assert_eq!(attribute::EXCEPTION_TYPE.as_str(), "exception.type");
    assert_eq!(
        attribute::HTTP_REQUEST_METHOD.as_str(),
        "http.request.method"
    );
    assert_eq!(
        attribute::HTTP_REQUEST_METHOD_ORIGINAL.as_str(),
        "http.request.method_original"
    );
    assert_eq!(
        attribute::HTTP_REQUEST_HEADER.as_str(),
        "http.request.header"
    );
    assert_eq!(
        attribute::HTTP_REQUEST_RESEND_COUNT.as_str(),
        "http.request.resend_count"
    );
    assert_eq!(
        attribute::HTTP_RESPONSE_HEADER.as_str(),
        "http.response.header"
    );
    assert_eq!(
        attribute::HTTP_RESPONSE_STATUS_CODE.as_str(),
        "http.response.status_code"
    );
    assert_eq!(attribute::HTTP_ROUTE.as_str(), "http.route");
    assert_eq!(
        attribute::NETWORK_LOCAL_ADDRESS.as_str(),
        "network.local.address"
    );
    assert_eq!(attribute::NETWORK_LOCAL_PORT.as_str(), "network.local.port");
    assert_eq!(
        attribute::NETWORK_PEER_ADDRESS.as_str(),
        "network.peer.address"
    );
    assert_eq!(attribute::NETWORK_PEER_PORT.as_str(), "network.peer.port");
    assert_eq!(
        attribute::NETWORK_PROTOCOL_NAME.as_str(),
        "network.protocol.name"
    );
    assert_eq!(
        attribute::NETWORK_PROTOCOL_VERSION.as_str(),
        "network.protocol.version"
    );
    assert_eq!(attribute::NETWORK_TRANSPORT.as_str(), "network.transport");
    assert_eq!(attribute::NETWORK_TYPE.as_str(), "network.type");
    assert_eq!(attribute::OTEL_SCOPE_NAME.as_str(), "otel.scope.name");
    assert_eq!(attribute::OTEL_SCOPE_VERSION.as_str(), "otel.scope.version");
    assert_eq!(attribute::OTEL_STATUS_CODE.as_str(), "otel.status_code");
    assert_eq!(
        attribute::OTEL_STATUS_DESCRIPTION.as_str(),
        "otel.status_description"
    );
    assert_eq!(attribute::SERVER_ADDRESS.as_str(), "server.address");
    assert_eq!(attribute::SERVER_PORT.as_str(), "server.port");
    assert_eq!(attribute::SERVICE_NAME.as_str(), "service.name");
    assert_eq!(attribute::SERVICE_VERSION.as_str(), "service.version");
    assert_eq!(
        attribute::TELEMETRY_SDK_LANGUAGE.as_str(),
        "telemetry.sdk.language"
    );
    assert_eq!(attribute::TELEMETRY_SDK_NAME.as_str(), "telemetry.sdk.name");
    assert_eq!(
        attribute::TELEMETRY_SDK_VERSION.as_str(),
        "telemetry.sdk.version"
    );
    assert_eq!(attribute::URL_FRAGMENT.as_str(), "url.fragment");
    assert_eq!(attribute::URL_FULL.as_str(), "url.full");
    assert_eq!(attribute::URL_PATH.as_str(), "url.path");
    assert_eq!(attribute::URL_QUERY.as_str(), "url.query");
    assert_eq!(attribute::URL_SCHEME.as_str(), "url.scheme");
    assert_eq!(
        attribute::USER_AGENT_ORIGINAL.as_str(),
        "user_agent.original"
    );
}

#[test]
fn trace_view_reexports_registry_keys() {
    assert_eq!(trace::HTTP_REQUEST_METHOD, attribute::HTTP_REQUEST_METHOD);
    assert_eq!(trace::SERVER_ADDRESS, attribute::SERVER_ADDRESS);
    assert_eq!(trace::URL_FULL, attribute::URL_FULL);
    assert_eq!(trace::OTEL_STATUS_CODE, attribute::OTEL_STATUS_CODE);
}

#[test]
fn resource_view_reexports_registry_keys() {
    assert_eq!(resource::SERVICE_NAME, attribute::SERVICE_NAME);
    assert_eq!(resource::SERVICE_VERSION, attribute::SERVICE_VERSION);
    assert_eq!(
        resource::TELEMETRY_SDK_LANGUAGE,
        attribute::TELEMETRY_SDK_LANGUAGE
    );
}

#[test]
fn string_constructor_round_trips() {
    let kv = attribute::http_request_method(attribute::http_request_method_values::GET);
    assert_eq!(kv.key, attribute::HTTP_REQUEST_METHOD);
    assert_eq!(kv.value.as_str(), "GET");

    let owned = attribute::server_address(String::from("example.com"));
    assert_eq!(owned.key.as_str(), "server.address");
    assert_eq!(owned.value.as_str(), "example.com");
}

#[test]
fn int_constructor_round_trips() {
    let kv = attribute::http_response_status_code(200);
    assert_eq!(kv.key, attribute::HTTP_RESPONSE_STATUS_CODE);
    assert_eq!(kv.value, Value::I64(200));

    let port = attribute::network_peer_port(65123);
    assert_eq!(port.key.as_str(), "network.peer.port");
    assert_eq!(port.value, Value::I64(65123));
}

#[test]
fn http_request_method_values_match_rfc9110_set() {
    use attribute::http_request_method_values as values;
    assert_eq!(values::CONNECT, "CONNECT");
    assert_eq!(values::DELETE, "DELETE");
    assert_eq!(values::GET, "GET");
    assert_eq!(values::HEAD, "HEAD");
    assert_eq!(values::OPTIONS, "OPTIONS");
    assert_eq!(values::PATCH, "PATCH");
    assert_eq!(values::POST, "POST");
    assert_eq!(values::PUT, "PUT");
    assert_eq!(values::TRACE, "TRACE");
    assert_eq!(values::OTHER, "_OTHER");
}

#[test]
fn error_type_fallback_value() {
    assert_eq!(attribute::error_type_values::OTHER, "_OTHER");
}

#[test]
fn network_enum_values_match_registry() {
    use attribute::{network_transport_values, network_type_values};
    assert_eq!(network_transport_values::TCP, "tcp");
    assert_eq!(network_transport_values::UDP, "udp");
    assert_eq!(network_transport_values::PIPE, "pipe");
    assert_eq!(network_transport_values::UNIX, "unix");
    assert_eq!(network_transport_values::QUIC, "quic");
    assert_eq!(network_type_values::IPV4, "ipv4");
    assert_eq!(network_type_values::IPV6, "ipv6");
}

#[test]
fn telemetry_sdk_language_includes_rust() {
    use attribute::telemetry_sdk_language_values as values;
    assert_eq!(values::RUST, "rust");
    assert_eq!(values::CPP, "cpp");
    assert_eq!(values::DOTNET, "dotnet");
    assert_eq!(values::ERLANG, "erlang");
    assert_eq!(values::GO, "go");
    assert_eq!(values::JAVA, "java");
    assert_eq!(values::NODEJS, "nodejs");
    assert_eq!(values::PHP, "php");
    assert_eq!(values::PYTHON, "python");
    assert_eq!(values::RUBY, "ruby");
    assert_eq!(values::SWIFT, "swift");
    assert_eq!(values::WEBJS, "webjs");
}

#[test]
fn otel_status_code_values() {
    assert_eq!(attribute::otel_status_code_values::OK, "OK");
    assert_eq!(attribute::otel_status_code_values::ERROR, "ERROR");
}

#[test]
fn stable_metric_names_match_registry() {
    assert_eq!(
        metric::HTTP_SERVER_REQUEST_DURATION,
        "http.server.request.duration"
    );
    assert_eq!(
        metric::HTTP_CLIENT_REQUEST_DURATION,
        "http.client.request.duration"
    );
}

#[cfg(feature = "semconv_experimental")]
mod experimental {
    use opentelemetry::{Array, StringValue, Value};
    use otel_semconv::{attribute, metric};

    #[test]
    fn experimental_key_strings_match_registry() {
        assert_eq!(attribute::DB_SYSTEM_NAME.as_str(), "db.system.name");
        assert_eq!(attribute::DB_OPERATION_NAME.as_str(), "db.operation.name");
        assert_eq!(attribute::DB_COLLECTION_NAME.as_str(), "db.collection.name");
        assert_eq!(attribute::DB_NAMESPACE.as_str(), "db.namespace");
        assert_eq!(attribute::DB_QUERY_TEXT.as_str(), "db.query.text");
        assert_eq!(attribute::MESSAGING_SYSTEM.as_str(), "messaging.system");
        assert_eq!(
            attribute::MESSAGING_OPERATION_TYPE.as_str(),
            "messaging.operation.type"
        );
        assert_eq!(attribute::RPC_SYSTEM.as_str(), "rpc.system");
        assert_eq!(
            attribute::RPC_GRPC_STATUS_CODE.as_str(),
            "rpc.grpc.status_code"
        );
        assert_eq!(attribute::FAAS_TRIGGER.as_str(), "faas.trigger");
        assert_eq!(attribute::CLOUD_PROVIDER.as_str(), "cloud.provider");
        assert_eq!(attribute::K8S_POD_NAME.as_str(), "k8s.pod.name");
        assert_eq!(attribute::K8S_CLUSTER_NAME.as_str(), "k8s.cluster.name");
        assert_eq!(attribute::AWS_REQUEST_ID.as_str(), "aws.request_id");
        assert_eq!(
            attribute::AWS_DYNAMODB_TABLE_NAMES.as_str(),
            "aws.dynamodb.table_names"
        );
        assert_eq!(attribute::AWS_S3_BUCKET.as_str(), "aws.s3.bucket");
        assert_eq!(attribute::GEN_AI_SYSTEM.as_str(), "gen_ai.system");
        assert_eq!(attribute::HOST_ARCH.as_str(), "host.arch");
        assert_eq!(attribute::OS_TYPE.as_str(), "os.type");
        assert_eq!(attribute::PROCESS_PID.as_str(), "process.pid");
        assert_eq!(
            attribute::CODE_FUNCTION_NAME.as_str(),
            "code.function.name"
        );
        assert_eq!(attribute::CONTAINER_ID.as_str(), "container.id");
    }

    #[test]
    fn deprecated_keys_keep_their_strings() {
        #[allow(deprecated)]
        {
            assert_eq!(attribute::DB_SYSTEM.as_str(), "db.system");
            assert_eq!(attribute::DB_STATEMENT.as_str(), "db.statement");
            assert_eq!(attribute::HTTP_METHOD.as_str(), "http.method");
            assert_eq!(attribute::HTTP_STATUS_CODE.as_str(), "http.status_code");
            assert_eq!(attribute::HTTP_URL.as_str(), "http.url");
            assert_eq!(
                attribute::MESSAGING_OPERATION.as_str(),
                "messaging.operation"
            );
            assert_eq!(attribute::OTEL_LIBRARY_NAME.as_str(), "otel.library.name");
        }
    }

    #[test]
    fn db_system_name_values_match_registry() {
        use attribute::db_system_name_values as values;
        assert_eq!(values::OTHER_SQL, "other_sql");
        assert_eq!(values::POSTGRESQL, "postgresql");
        assert_eq!(values::MYSQL, "mysql");
        assert_eq!(values::MARIADB, "mariadb");
        assert_eq!(values::MICROSOFT_SQL_SERVER, "microsoft.sql_server");
        assert_eq!(values::ORACLE_DB, "oracle.db");
        assert_eq!(values::IBM_DB2, "ibm.db2");
        assert_eq!(values::AWS_DYNAMODB, "aws.dynamodb");
        assert_eq!(values::AZURE_COSMOSDB, "azure.cosmosdb");
        assert_eq!(values::GCP_SPANNER, "gcp.spanner");
        assert_eq!(values::MONGODB, "mongodb");
        assert_eq!(values::REDIS, "redis");
        assert_eq!(values::CASSANDRA, "cassandra");
        assert_eq!(values::ELASTICSEARCH, "elasticsearch");
        assert_eq!(values::SQLITE, "sqlite");
        assert_eq!(values::CLICKHOUSE, "clickhouse");
        assert_eq!(values::COCKROACHDB, "cockroachdb");
        assert_eq!(values::SAP_HANA, "sap.hana");
        assert_eq!(values::TRINO, "trino");
    }

    #[test]
    fn grpc_status_codes_match_grpc_numbering() {
        use attribute::rpc_grpc_status_code_values as codes;
        assert_eq!(codes::OK, 0);
        assert_eq!(codes::CANCELLED, 1);
        assert_eq!(codes::UNKNOWN, 2);
        assert_eq!(codes::INVALID_ARGUMENT, 3);
        assert_eq!(codes::DEADLINE_EXCEEDED, 4);
        assert_eq!(codes::NOT_FOUND, 5);
        assert_eq!(codes::ALREADY_EXISTS, 6);
        assert_eq!(codes::PERMISSION_DENIED, 7);
        assert_eq!(codes::RESOURCE_EXHAUSTED, 8);
        assert_eq!(codes::FAILED_PRECONDITION, 9);
        assert_eq!(codes::ABORTED, 10);
        assert_eq!(codes::OUT_OF_RANGE, 11);
        assert_eq!(codes::UNIMPLEMENTED, 12);
        assert_eq!(codes::INTERNAL, 13);
        assert_eq!(codes::UNAVAILABLE, 14);
        assert_eq!(codes::DATA_LOSS, 15);
        assert_eq!(codes::UNAUTHENTICATED, 16);
    }

    #[test]
    fn messaging_enum_values_match_registry() {
        use attribute::{messaging_operation_type_values, messaging_system_values};
        assert_eq!(messaging_operation_type_values::CREATE, "create");
        assert_eq!(messaging_operation_type_values::SEND, "send");
        assert_eq!(messaging_operation_type_values::RECEIVE, "receive");
        assert_eq!(messaging_operation_type_values::PROCESS, "process");
        assert_eq!(messaging_operation_type_values::SETTLE, "settle");
        assert_eq!(messaging_system_values::KAFKA, "kafka");
        assert_eq!(messaging_system_values::RABBITMQ, "rabbitmq");
        assert_eq!(messaging_system_values::AWS_SQS, "aws_sqs");
        assert_eq!(messaging_system_values::GCP_PUBSUB, "gcp_pubsub");
        assert_eq!(messaging_system_values::PULSAR, "pulsar");
    }

    #[test]
    fn double_constructor_round_trips() {
        let kv = attribute::gen_ai_request_temperature(0.7);
        assert_eq!(kv.key, attribute::GEN_AI_REQUEST_TEMPERATURE);
        assert_eq!(kv.value, Value::F64(0.7));
    }

    #[test]
    fn bool_constructor_round_trips() {
        let kv = attribute::faas_coldstart(true);
        assert_eq!(kv.key, attribute::FAAS_COLDSTART);
        assert_eq!(kv.value, Value::Bool(true));
    }

    #[test]
    fn string_array_constructor_round_trips() {
        let names = vec![StringValue::from("Users"), StringValue::from("Cats")];
        let kv = attribute::aws_dynamodb_table_names(names.clone());
        assert_eq!(kv.key, attribute::AWS_DYNAMODB_TABLE_NAMES);
        assert_eq!(kv.value, Value::Array(Array::String(names)));
    }

    #[test]
    fn experimental_metric_names_match_registry() {
        assert_eq!(
            metric::DB_CLIENT_OPERATION_DURATION,
            "db.client.operation.duration"
        );
        assert_eq!(
            metric::MESSAGING_CLIENT_OPERATION_DURATION,
            "messaging.client.operation.duration"
        );
        assert_eq!(metric::FAAS_INVOKE_DURATION, "faas.invoke_duration");
        assert_eq!(metric::K8S_POD_CPU_TIME, "k8s.pod.cpu.time");
        assert_eq!(
            metric::GEN_AI_CLIENT_TOKEN_USAGE,
            "gen_ai.client.token.usage"
        );
        assert_eq!(metric::RPC_SERVER_DURATION, "rpc.server.duration");
    }
}
