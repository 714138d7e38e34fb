//! `faas.*` attributes: function-as-a-service executions.

use opentelemetry::{Key, KeyValue, StringValue};

/// A boolean that is true if the serverless function is executed for the
/// first time (aka cold-start).
pub const FAAS_COLDSTART: Key = Key::from_static_str("faas.coldstart");

/// Builds a [`KeyValue`] for [`FAAS_COLDSTART`].
pub fn faas_coldstart(value: bool) -> KeyValue {
    KeyValue::new(FAAS_COLDSTART, value)
}

/// A string containing the schedule period as [Cron
/// Expression](https://docs.oracle.com/cd/E12058_01/doc/doc.1014/e12030/cron_expressions.htm).
///
/// # Examples
///
/// - `"0/5 * * * ? *"`
pub const FAAS_CRON: Key = Key::from_static_str("faas.cron");

/// Builds a [`KeyValue`] for [`FAAS_CRON`].
pub fn faas_cron(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(FAAS_CRON, value.into())
}

/// The name of the source on which the triggering operation was performed.
/// For example, in Cloud Storage or S3 corresponds to the bucket name,
/// and in Cosmos DB to the database name.
///
/// # Examples
///
/// - `"myBucketName"`
/// - `"myDbName"`
pub const FAAS_DOCUMENT_COLLECTION: Key = Key::from_static_str("faas.document.collection");

/// Builds a [`KeyValue`] for [`FAAS_DOCUMENT_COLLECTION`].
pub fn faas_document_collection(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(FAAS_DOCUMENT_COLLECTION, value.into())
}

/// The document name/table subjected to the operation. For example, in
/// Cloud Storage or S3 is the name of the file, and in Cosmos DB the
/// table name.
///
/// # Examples
///
/// - `"myFile.txt"`
/// - `"myTableName"`
pub const FAAS_DOCUMENT_NAME: Key = Key::from_static_str("faas.document.name");

/// Builds a [`KeyValue`] for [`FAAS_DOCUMENT_NAME`].
pub fn faas_document_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(FAAS_DOCUMENT_NAME, value.into())
}

/// Describes the type of the operation that was performed on the data.
pub const FAAS_DOCUMENT_OPERATION: Key = Key::from_static_str("faas.document.operation");

/// Builds a [`KeyValue`] for [`FAAS_DOCUMENT_OPERATION`].
pub fn faas_document_operation(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(FAAS_DOCUMENT_OPERATION, value.into())
}

/// Well-known values for [`FAAS_DOCUMENT_OPERATION`].
pub mod faas_document_operation_values {
    /// When a new object is created.
    pub const INSERT: &str = "insert";
    /// When an object is modified.
    pub const EDIT: &str = "edit";
    /// When an object is deleted.
    pub const DELETE: &str = "delete";
}

/// A string containing the time when the data was accessed in the [ISO
/// 8601](https://www.iso.org/iso-8601-date-and-time-format.html) format
/// expressed in [UTC](https://www.w3.org/TR/NOTE-datetime).
///
/// # Examples
///
/// - `"2020-01-23T13:47:06Z"`
pub const FAAS_DOCUMENT_TIME: Key = Key::from_static_str("faas.document.time");

/// Builds a [`KeyValue`] for [`FAAS_DOCUMENT_TIME`].
pub fn faas_document_time(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(FAAS_DOCUMENT_TIME, value.into())
}

/// The execution environment ID as a string, that will be potentially
/// reused for other invocations to the same function/function version.
///
/// AWS Lambda: Use the (full) log stream name.
///
/// # Examples
///
/// - `"2021/06/28/[$LATEST]2f399eb14537447da05ab2a2e39309de"`
pub const FAAS_INSTANCE: Key = Key::from_static_str("faas.instance");

/// Builds a [`KeyValue`] for [`FAAS_INSTANCE`].
pub fn faas_instance(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(FAAS_INSTANCE, value.into())
}

/// The invocation ID of the current function invocation.
///
/// # Examples
///
/// - `"af9d5aa4-a685-4c5f-a22b-444f80b3cc28"`
pub const FAAS_INVOCATION_ID: Key = Key::from_static_str("faas.invocation_id");

/// Builds a [`KeyValue`] for [`FAAS_INVOCATION_ID`].
pub fn faas_invocation_id(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(FAAS_INVOCATION_ID, value.into())
}

/// The name of the invoked function.
///
/// SHOULD be equal to the `faas.name` resource attribute of the invoked
/// function.
///
/// # Examples
///
/// - `"my-function"`
pub const FAAS_INVOKED_NAME: Key = Key::from_static_str("faas.invoked_name");

/// Builds a [`KeyValue`] for [`FAAS_INVOKED_NAME`].
pub fn faas_invoked_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(FAAS_INVOKED_NAME, value.into())
}

/// The cloud provider of the invoked function.
///
/// SHOULD be equal to the `cloud.provider` resource attribute of the
/// invoked function.
pub const FAAS_INVOKED_PROVIDER: Key = Key::from_static_str("faas.invoked_provider");

/// Builds a [`KeyValue`] for [`FAAS_INVOKED_PROVIDER`].
pub fn faas_invoked_provider(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(FAAS_INVOKED_PROVIDER, value.into())
}

/// Well-known values for [`FAAS_INVOKED_PROVIDER`].
pub mod faas_invoked_provider_values {
    /// Alibaba Cloud.
    pub const ALIBABA_CLOUD: &str = "alibaba_cloud";
    /// Amazon Web Services.
    pub const AWS: &str = "aws";
    /// Microsoft Azure.
    pub const AZURE: &str = "azure";
    /// Google Cloud Platform.
    pub const GCP: &str = "gcp";
    /// Tencent Cloud.
    pub const TENCENT_CLOUD: &str = "tencent_cloud";
}

/// The cloud region of the invoked function.
///
/// SHOULD be equal to the `cloud.region` resource attribute of the
/// invoked function.
///
/// # Examples
///
/// - `"eu-central-1"`
pub const FAAS_INVOKED_REGION: Key = Key::from_static_str("faas.invoked_region");

/// Builds a [`KeyValue`] for [`FAAS_INVOKED_REGION`].
pub fn faas_invoked_region(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(FAAS_INVOKED_REGION, value.into())
}

/// The amount of memory available to the serverless function converted to
/// Bytes.
///
/// It's recommended to set this attribute since e.g. too little memory
/// can easily stop a Java AWS Lambda function from working correctly. On
/// AWS Lambda, the environment variable `AWS_LAMBDA_FUNCTION_MEMORY_SIZE`
/// provides this information (which must be multiplied by 1,048,576).
///
/// # Examples
///
/// - `134217728`
pub const FAAS_MAX_MEMORY: Key = Key::from_static_str("faas.max_memory");

/// Builds a [`KeyValue`] for [`FAAS_MAX_MEMORY`].
pub fn faas_max_memory(value: i64) -> KeyValue {
    KeyValue::new(FAAS_MAX_MEMORY, value)
}

/// The name of the single function that this runtime instance executes.
///
/// This is the name of the function as configured/deployed on the FaaS
/// platform and is usually different from the name of the callback
/// function (which may be stored in the `code.namespace`/`code.function.name`
/// span attributes).
///
/// # Examples
///
/// - `"my-function"`
/// - `"myazurefunctionapp/some-function-name"`
pub const FAAS_NAME: Key = Key::from_static_str("faas.name");

/// Builds a [`KeyValue`] for [`FAAS_NAME`].
pub fn faas_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(FAAS_NAME, value.into())
}

/// A string containing the function invocation time in the [ISO
/// 8601](https://www.iso.org/iso-8601-date-and-time-format.html) format
/// expressed in [UTC](https://www.w3.org/TR/NOTE-datetime).
///
/// # Examples
///
/// - `"2020-01-23T13:47:06Z"`
pub const FAAS_TIME: Key = Key::from_static_str("faas.time");

/// Builds a [`KeyValue`] for [`FAAS_TIME`].
pub fn faas_time(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(FAAS_TIME, value.into())
}

/// Type of the trigger which caused this function invocation.
pub const FAAS_TRIGGER: Key = Key::from_static_str("faas.trigger");

/// Builds a [`KeyValue`] for [`FAAS_TRIGGER`].
pub fn faas_trigger(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(FAAS_TRIGGER, value.into())
}

/// Well-known values for [`FAAS_TRIGGER`].
pub mod faas_trigger_values {
    /// A response to some data source operation such as a database or
    /// filesystem read/write.
    pub const DATASOURCE: &str = "datasource";
    /// To provide an answer to an inbound HTTP request.
    pub const HTTP: &str = "http";
    /// A function is set to be executed when messages are sent to a
    /// messaging system.
    pub const PUBSUB: &str = "pubsub";
    /// A function is scheduled to be executed regularly.
    pub const TIMER: &str = "timer";
    /// If none of the others apply.
    pub const OTHER: &str = "other";
}

/// The immutable version of the function being executed.
///
/// Depending on the cloud provider and platform, use:
///
/// - **AWS Lambda:** The [function version](https://docs.aws.amazon.com/lambda/latest/dg/configuration-versions.html)
///   (an integer represented as a decimal string).
/// - **Google Cloud Run (Services):** The [revision](https://cloud.google.com/run/docs/managing/revisions)
///   (i.e., the function name plus the revision suffix).
/// - **Google Cloud Functions:** The value of the
///   [`K_REVISION` environment variable](https://cloud.google.com/functions/docs/env-var#runtime_environment_variables_set_automatically).
/// - **Azure Functions:** Not applicable. Do not set this attribute.
///
/// # Examples
///
/// - `"26"`
/// - `"pinkfroid-00002"`
pub const FAAS_VERSION: Key = Key::from_static_str("faas.version");

/// Builds a [`KeyValue`] for [`FAAS_VERSION`].
pub fn faas_version(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(FAAS_VERSION, value.into())
}
