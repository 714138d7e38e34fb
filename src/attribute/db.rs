//! `db.*` attributes: database client calls.

use opentelemetry::{Key, KeyValue, StringValue};

/// The name of the connection pool; unique within the instrumented
/// application.
///
/// In case the connection pool implementation doesn't provide a name,
/// instrumentation should use a combination of parameters that would make
/// the name unique, for example, combining attributes `server.address`,
/// `server.port`, and `db.namespace`, formatted as
/// `server.address:server.port/db.namespace`.
///
/// # Examples
///
/// - `"myDataSource"`
pub const DB_CLIENT_CONNECTION_POOL_NAME: Key =
    Key::from_static_str("db.client.connection.pool.name");

/// Builds a [`KeyValue`] for [`DB_CLIENT_CONNECTION_POOL_NAME`].
pub fn db_client_connection_pool_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(DB_CLIENT_CONNECTION_POOL_NAME, value.into())
}

/// The state of a connection in the pool.
///
/// # Examples
///
/// - `"idle"`
pub const DB_CLIENT_CONNECTION_STATE: Key = Key::from_static_str("db.client.connection.state");

/// Builds a [`KeyValue`] for [`DB_CLIENT_CONNECTION_STATE`].
pub fn db_client_connection_state(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(DB_CLIENT_CONNECTION_STATE, value.into())
}

/// Well-known values for [`DB_CLIENT_CONNECTION_STATE`].
pub mod db_client_connection_state_values {
    /// idle
    pub const IDLE: &str = "idle";
    /// used
    pub const USED: &str = "used";
}

/// Deprecated, use `db.client.connection.pool.name` instead.
///
/// # Examples
///
/// - `"myDataSource"`
#[deprecated(note = "Replaced by `db.client.connection.pool.name`.")]
pub const DB_CLIENT_CONNECTIONS_POOL_NAME: Key =
    Key::from_static_str("db.client.connections.pool.name");

/// Builds a [`KeyValue`] for [`DB_CLIENT_CONNECTIONS_POOL_NAME`].
#[deprecated(note = "Replaced by `db.client.connection.pool.name`.")]
pub fn db_client_connections_pool_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(DB_CLIENT_CONNECTIONS_POOL_NAME, value.into())
}

/// Deprecated, use `db.client.connection.state` instead.
///
/// # Examples
///
/// - `"idle"`
#[deprecated(note = "Replaced by `db.client.connection.state`.")]
pub const DB_CLIENT_CONNECTIONS_STATE: Key = Key::from_static_str("db.client.connections.state");

/// Builds a [`KeyValue`] for [`DB_CLIENT_CONNECTIONS_STATE`].
#[deprecated(note = "Replaced by `db.client.connection.state`.")]
pub fn db_client_connections_state(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(DB_CLIENT_CONNECTIONS_STATE, value.into())
}

/// The name of a collection (table, container) within the database.
///
/// It is recommended to capture the value as provided by the application
/// without attempting to do any case normalization.
///
/// The collection name should only be captured when it is obtained
/// deterministically and without performance overhead, e.g. when it is
/// provided by the application as an API parameter, or parsed from a
/// single-collection query text.
///
/// # Examples
///
/// - `"public.users"`
/// - `"customers"`
pub const DB_COLLECTION_NAME: Key = Key::from_static_str("db.collection.name");

/// Builds a [`KeyValue`] for [`DB_COLLECTION_NAME`].
pub fn db_collection_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(DB_COLLECTION_NAME, value.into())
}

/// Deprecated, use `server.address`, `server.port` attributes instead.
///
/// # Examples
///
/// - `"Server=(localdb)\\v11.0;Integrated Security=true;"`
#[deprecated(note = "Replaced by `server.address` and `server.port`.")]
pub const DB_CONNECTION_STRING: Key = Key::from_static_str("db.connection_string");

/// Builds a [`KeyValue`] for [`DB_CONNECTION_STRING`].
#[deprecated(note = "Replaced by `server.address` and `server.port`.")]
pub fn db_connection_string(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(DB_CONNECTION_STRING, value.into())
}

/// Deprecated, no general replacement at this time. For Elasticsearch,
/// use `db.elasticsearch.node.name` instead.
///
/// # Examples
///
/// - `"mysql-e26b99z.example.com"`
#[deprecated(
    note = "Deprecated, no general replacement at this time. For Elasticsearch, use `db.elasticsearch.node.name` instead."
)]
pub const DB_INSTANCE_ID: Key = Key::from_static_str("db.instance.id");

/// Builds a [`KeyValue`] for [`DB_INSTANCE_ID`].
#[deprecated(
    note = "Deprecated, no general replacement at this time. For Elasticsearch, use `db.elasticsearch.node.name` instead."
)]
pub fn db_instance_id(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(DB_INSTANCE_ID, value.into())
}

/// Removed, no replacement at this time.
///
/// # Examples
///
/// - `"org.postgresql.Driver"`
/// - `"com.microsoft.sqlserver.jdbc.SQLServerDriver"`
#[deprecated(note = "Removed, no replacement at this time.")]
pub const DB_JDBC_DRIVER_CLASSNAME: Key = Key::from_static_str("db.jdbc.driver_classname");

/// Builds a [`KeyValue`] for [`DB_JDBC_DRIVER_CLASSNAME`].
#[deprecated(note = "Removed, no replacement at this time.")]
pub fn db_jdbc_driver_classname(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(DB_JDBC_DRIVER_CLASSNAME, value.into())
}

/// Deprecated, use `db.collection.name` instead.
///
/// # Examples
///
/// - `"mytable"`
#[deprecated(note = "Replaced by `db.collection.name`.")]
pub const DB_MONGODB_COLLECTION: Key = Key::from_static_str("db.mongodb.collection");

/// Builds a [`KeyValue`] for [`DB_MONGODB_COLLECTION`].
#[deprecated(note = "Replaced by `db.collection.name`.")]
pub fn db_mongodb_collection(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(DB_MONGODB_COLLECTION, value.into())
}

/// Deprecated, use `db.namespace` instead.
///
/// # Examples
///
/// - `"customers"`
/// - `"main"`
#[deprecated(note = "Replaced by `db.namespace`.")]
pub const DB_NAME: Key = Key::from_static_str("db.name");

/// Builds a [`KeyValue`] for [`DB_NAME`].
#[deprecated(note = "Replaced by `db.namespace`.")]
pub fn db_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(DB_NAME, value.into())
}

/// The name of the database, fully qualified within the server address and
/// port.
///
/// If a database system has multiple namespace components, they should be
/// concatenated (potentially using database system specific conventions)
/// from most general to most specific namespace component, and more
/// specific namespaces should not be captured without the more general
/// namespaces, to ensure that "startswith" queries for the more general
/// namespaces will be valid. Semantic conventions for individual database
/// systems should document what `db.namespace` means in the context of
/// that system.
///
/// # Examples
///
/// - `"customers"`
/// - `"test.users"`
pub const DB_NAMESPACE: Key = Key::from_static_str("db.namespace");

/// Builds a [`KeyValue`] for [`DB_NAMESPACE`].
pub fn db_namespace(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(DB_NAMESPACE, value.into())
}

/// Deprecated, use `db.operation.name` instead.
///
/// # Examples
///
/// - `"findAndModify"`
/// - `"HMSET"`
/// - `"SELECT"`
#[deprecated(note = "Replaced by `db.operation.name`.")]
pub const DB_OPERATION: Key = Key::from_static_str("db.operation");

/// Builds a [`KeyValue`] for [`DB_OPERATION`].
#[deprecated(note = "Replaced by `db.operation.name`.")]
pub fn db_operation(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(DB_OPERATION, value.into())
}

/// The number of queries included in a batch operation.
///
/// Operations are only considered batches when they contain two or more
/// operations, and so `db.operation.batch.size` should never be `1`.
///
/// # Examples
///
/// - `2`
/// - `3`
/// - `4`
pub const DB_OPERATION_BATCH_SIZE: Key = Key::from_static_str("db.operation.batch.size");

/// Builds a [`KeyValue`] for [`DB_OPERATION_BATCH_SIZE`].
pub fn db_operation_batch_size(value: i64) -> KeyValue {
    KeyValue::new(DB_OPERATION_BATCH_SIZE, value)
}

/// The name of the operation or command being executed.
///
/// It is recommended to capture the value as provided by the application
/// without attempting to do any case normalization.
///
/// The operation name should only be captured when it is obtained
/// deterministically and without performance overhead, e.g. when it is
/// provided by the application as an API parameter, or parsed from a
/// single-operation query text.
///
/// # Examples
///
/// - `"findAndModify"`
/// - `"HMSET"`
/// - `"SELECT"`
pub const DB_OPERATION_NAME: Key = Key::from_static_str("db.operation.name");

/// Builds a [`KeyValue`] for [`DB_OPERATION_NAME`].
pub fn db_operation_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(DB_OPERATION_NAME, value.into())
}

/// A database operation parameter, with `<key>` being the parameter name,
/// and the attribute value being a string representation of the parameter
/// value.
///
/// The full key carries a caller-chosen parameter-name suffix, so no
/// fixed-key constructor is provided.
///
/// # Examples
///
/// - `db.operation.parameter.0="someval"`
/// - `db.operation.parameter.order_id="55"`
pub const DB_OPERATION_PARAMETER: Key = Key::from_static_str("db.operation.parameter");

/// Deprecated, use `db.operation.parameter` instead.
///
/// The full key carries a caller-chosen parameter-name suffix, so no
/// fixed-key constructor is provided.
///
/// # Examples
///
/// - `db.query.parameter.0="someval"`
/// - `db.query.parameter.order_id="55"`
#[deprecated(note = "Replaced by `db.operation.parameter`.")]
pub const DB_QUERY_PARAMETER: Key = Key::from_static_str("db.query.parameter");

/// Low cardinality representation of a database query text.
///
/// `db.query.summary` provides static summary of the query text. It
/// describes a class of database queries and is useful as a grouping key,
/// especially when analyzing telemetry for database calls involving
/// complex queries.
///
/// # Examples
///
/// - `"SELECT wuser_table"`
/// - `"INSERT shipping_details SELECT orders"`
/// - `"get user by id"`
pub const DB_QUERY_SUMMARY: Key = Key::from_static_str("db.query.summary");

/// Builds a [`KeyValue`] for [`DB_QUERY_SUMMARY`].
pub fn db_query_summary(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(DB_QUERY_SUMMARY, value.into())
}

/// The database query being executed.
///
/// For sanitization see [Sanitization of `db.query.text`](https://opentelemetry.io/docs/specs/semconv/database/database-spans/#sanitization-of-dbquerytext).
/// For batch operations, if the individual operations are known to have
/// the same query text then that query text should be used, otherwise all
/// of the individual query texts should be concatenated with separator
/// `; ` or some other database system specific separator if more
/// applicable.
///
/// # Examples
///
/// - `"SELECT * FROM wuser_table where username = ?"`
/// - `"SET mykey ?"`
pub const DB_QUERY_TEXT: Key = Key::from_static_str("db.query.text");

/// Builds a [`KeyValue`] for [`DB_QUERY_TEXT`].
pub fn db_query_text(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(DB_QUERY_TEXT, value.into())
}

/// Deprecated, use `db.namespace` instead.
///
/// # Examples
///
/// - `0`
/// - `1`
/// - `15`
#[deprecated(note = "Replaced by `db.namespace`.")]
pub const DB_REDIS_DATABASE_INDEX: Key = Key::from_static_str("db.redis.database_index");

/// Builds a [`KeyValue`] for [`DB_REDIS_DATABASE_INDEX`].
#[deprecated(note = "Replaced by `db.namespace`.")]
pub fn db_redis_database_index(value: i64) -> KeyValue {
    KeyValue::new(DB_REDIS_DATABASE_INDEX, value)
}

/// Number of rows returned by the operation.
///
/// # Examples
///
/// - `10`
/// - `30`
/// - `1000`
pub const DB_RESPONSE_RETURNED_ROWS: Key = Key::from_static_str("db.response.returned_rows");

/// Builds a [`KeyValue`] for [`DB_RESPONSE_RETURNED_ROWS`].
pub fn db_response_returned_rows(value: i64) -> KeyValue {
    KeyValue::new(DB_RESPONSE_RETURNED_ROWS, value)
}

/// Database response status code.
///
/// The status code returned by the database. Usually it represents an
/// error code, but may also represent partial success, warning, or
/// differentiate between various types of successful outcomes. Semantic
/// conventions for individual database systems should document what
/// `db.response.status_code` means in the context of that system.
///
/// # Examples
///
/// - `"102"`
/// - `"ORA-17002"`
/// - `"08P01"`
/// - `"404"`
pub const DB_RESPONSE_STATUS_CODE: Key = Key::from_static_str("db.response.status_code");

/// Builds a [`KeyValue`] for [`DB_RESPONSE_STATUS_CODE`].
pub fn db_response_status_code(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(DB_RESPONSE_STATUS_CODE, value.into())
}

/// Deprecated, use `db.collection.name` instead.
///
/// # Examples
///
/// - `"mytable"`
#[deprecated(note = "Replaced by `db.collection.name`.")]
pub const DB_SQL_TABLE: Key = Key::from_static_str("db.sql.table");

/// Builds a [`KeyValue`] for [`DB_SQL_TABLE`].
#[deprecated(note = "Replaced by `db.collection.name`.")]
pub fn db_sql_table(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(DB_SQL_TABLE, value.into())
}

/// The database statement being executed.
///
/// # Examples
///
/// - `"SELECT * FROM wuser_table"`
/// - `"SET mykey \"WuValue\""`
#[deprecated(note = "Replaced by `db.query.text`.")]
pub const DB_STATEMENT: Key = Key::from_static_str("db.statement");

/// Builds a [`KeyValue`] for [`DB_STATEMENT`].
#[deprecated(note = "Replaced by `db.query.text`.")]
pub fn db_statement(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(DB_STATEMENT, value.into())
}

/// Deprecated, use `db.system.name` instead.
#[deprecated(note = "Replaced by `db.system.name`.")]
pub const DB_SYSTEM: Key = Key::from_static_str("db.system");

/// Builds a [`KeyValue`] for [`DB_SYSTEM`].
#[deprecated(note = "Replaced by `db.system.name`.")]
pub fn db_system(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(DB_SYSTEM, value.into())
}

/// The database management system (DBMS) product as identified by the
/// client instrumentation.
///
/// The actual DBMS may differ from the one identified by the client. For
/// example, when using PostgreSQL client libraries to connect to a
/// CockroachDB, the `db.system.name` is set to `postgresql` based on the
/// instrumentation's best knowledge.
///
/// # Examples
///
/// - `"postgresql"`
/// - `"microsoft.sql_server"`
/// - `"mysql"`
pub const DB_SYSTEM_NAME: Key = Key::from_static_str("db.system.name");

/// Builds a [`KeyValue`] for [`DB_SYSTEM_NAME`].
pub fn db_system_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(DB_SYSTEM_NAME, value.into())
}

/// Well-known values for [`DB_SYSTEM_NAME`].
pub mod db_system_name_values {
    /// Some other SQL database. Fallback only.
    pub const OTHER_SQL: &str = "other_sql";
    /// [Adabas (Adaptable Database System)](https://documentation.softwareag.com/?pf=adabas).
    pub const SOFTWAREAG_ADABAS: &str = "softwareag.adabas";
    /// [Actian Ingres](https://www.actian.com/databases/ingres/).
    pub const ACTIAN_INGRES: &str = "actian.ingres";
    /// [Amazon DynamoDB](https://aws.amazon.com/pm/dynamodb/).
    pub const AWS_DYNAMODB: &str = "aws.dynamodb";
    /// [Amazon Redshift](https://aws.amazon.com/redshift/).
    pub const AWS_REDSHIFT: &str = "aws.redshift";
    /// [Azure Cosmos DB](https://learn.microsoft.com/azure/cosmos-db).
    pub const AZURE_COSMOSDB: &str = "azure.cosmosdb";
    /// [InterSystems Caché](https://www.intersystems.com/products/cache/).
    pub const INTERSYSTEMS_CACHE: &str = "intersystems.cache";
    /// [Apache Cassandra](https://cassandra.apache.org/).
    pub const CASSANDRA: &str = "cassandra";
    /// [ClickHouse](https://clickhouse.com/).
    pub const CLICKHOUSE: &str = "clickhouse";
    /// [CockroachDB](https://www.cockroachlabs.com/).
    pub const COCKROACHDB: &str = "cockroachdb";
    /// [Couchbase](https://www.couchbase.com/).
    pub const COUCHBASE: &str = "couchbase";
    /// [Apache CouchDB](https://couchdb.apache.org/).
    pub const COUCHDB: &str = "couchdb";
    /// [Apache Derby](https://db.apache.org/derby/).
    pub const DERBY: &str = "derby";
    /// [Elasticsearch](https://www.elastic.co/elasticsearch).
    pub const ELASTICSEARCH: &str = "elasticsearch";
    /// [Firebird](https://www.firebirdsql.org/).
    pub const FIREBIRDSQL: &str = "firebirdsql";
    /// [Google Cloud Spanner](https://cloud.google.com/spanner).
    pub const GCP_SPANNER: &str = "gcp.spanner";
    /// [Apache Geode](https://geode.apache.org/).
    pub const GEODE: &str = "geode";
    /// [H2 Database](https://h2database.com/).
    pub const H2DATABASE: &str = "h2database";
    /// [Apache HBase](https://hbase.apache.org/).
    pub const HBASE: &str = "hbase";
    /// [Apache Hive](https://hive.apache.org/).
    pub const HIVE: &str = "hive";
    /// [HyperSQL Database](https://hsqldb.org/).
    pub const HSQLDB: &str = "hsqldb";
    /// [IBM Db2](https://www.ibm.com/db2).
    pub const IBM_DB2: &str = "ibm.db2";
    /// [IBM Informix](https://www.ibm.com/products/informix).
    pub const IBM_INFORMIX: &str = "ibm.informix";
    /// [IBM Netezza](https://www.ibm.com/products/netezza).
    pub const IBM_NETEZZA: &str = "ibm.netezza";
    /// [InfluxDB](https://www.influxdata.com/).
    pub const INFLUXDB: &str = "influxdb";
    /// [Instant](https://www.instantdb.com/).
    pub const INSTANTDB: &str = "instantdb";
    /// [MariaDB](https://mariadb.org/).
    pub const MARIADB: &str = "mariadb";
    /// [Memcached](https://memcached.org/).
    pub const MEMCACHED: &str = "memcached";
    /// [MongoDB](https://www.mongodb.com/).
    pub const MONGODB: &str = "mongodb";
    /// [Microsoft SQL Server](https://www.microsoft.com/sql-server).
    pub const MICROSOFT_SQL_SERVER: &str = "microsoft.sql_server";
    /// [MySQL](https://www.mysql.com/).
    pub const MYSQL: &str = "mysql";
    /// [Neo4j](https://neo4j.com/).
    pub const NEO4J: &str = "neo4j";
    /// [OpenSearch](https://opensearch.org/).
    pub const OPENSEARCH: &str = "opensearch";
    /// [Oracle Database](https://www.oracle.com/database/).
    pub const ORACLE_DB: &str = "oracle.db";
    /// [PostgreSQL](https://www.postgresql.org/).
    pub const POSTGRESQL: &str = "postgresql";
    /// [Redis](https://redis.io/).
    pub const REDIS: &str = "redis";
    /// [SAP HANA](https://www.sap.com/products/technology-platform/hana/what-is-sap-hana.html).
    pub const SAP_HANA: &str = "sap.hana";
    /// [SAP MaxDB](https://maxdb.sap.com/).
    pub const SAP_MAXDB: &str = "sap.maxdb";
    /// [SQLite](https://www.sqlite.org/).
    pub const SQLITE: &str = "sqlite";
    /// [Teradata](https://www.teradata.com/).
    pub const TERADATA: &str = "teradata";
    /// [Trino](https://trino.io/).
    pub const TRINO: &str = "trino";
}

/// Deprecated, no replacement at this time.
///
/// # Examples
///
/// - `"readonly_user"`
/// - `"reporting_user"`
#[deprecated(note = "Deprecated, no replacement at this time.")]
pub const DB_USER: Key = Key::from_static_str("db.user");

/// Builds a [`KeyValue`] for [`DB_USER`].
#[deprecated(note = "Deprecated, no replacement at this time.")]
pub fn db_user(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(DB_USER, value.into())
}
