//! `messaging.*` attributes: messaging producer and consumer spans.

use opentelemetry::{Key, KeyValue, StringValue};

/// The number of messages sent, received, or processed in the scope of the
/// batching operation.
///
/// Instrumentations should not set `messaging.batch.message_count` on
/// spans that operate with a single message. When a messaging client
/// library supports both batch and single-message API for the same
/// operation, instrumentations should use `messaging.batch.message_count`
/// for batching APIs and should not use it for single-message APIs.
///
/// # Examples
///
/// - `0`
/// - `1`
/// - `2`
pub const MESSAGING_BATCH_MESSAGE_COUNT: Key =
    Key::from_static_str("messaging.batch.message_count");

/// Builds a [`KeyValue`] for [`MESSAGING_BATCH_MESSAGE_COUNT`].
pub fn messaging_batch_message_count(value: i64) -> KeyValue {
    KeyValue::new(MESSAGING_BATCH_MESSAGE_COUNT, value)
}

/// A unique identifier for the client that consumes or produces a message.
///
/// # Examples
///
/// - `"client-5"`
/// - `"myhost@8742@s8083jm"`
pub const MESSAGING_CLIENT_ID: Key = Key::from_static_str("messaging.client.id");

/// Builds a [`KeyValue`] for [`MESSAGING_CLIENT_ID`].
pub fn messaging_client_id(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(MESSAGING_CLIENT_ID, value.into())
}

/// The name of the consumer group with which a consumer is associated.
///
/// Semantic conventions for individual messaging systems should document
/// whether `messaging.consumer.group.name` is applicable and what it
/// means in the context of that system.
///
/// # Examples
///
/// - `"my-group"`
/// - `"indexer"`
pub const MESSAGING_CONSUMER_GROUP_NAME: Key =
    Key::from_static_str("messaging.consumer.group.name");

/// Builds a [`KeyValue`] for [`MESSAGING_CONSUMER_GROUP_NAME`].
pub fn messaging_consumer_group_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(MESSAGING_CONSUMER_GROUP_NAME, value.into())
}

/// A boolean that is true if the message destination is anonymous (could
/// be unnamed or have auto-generated name).
pub const MESSAGING_DESTINATION_ANONYMOUS: Key =
    Key::from_static_str("messaging.destination.anonymous");

/// Builds a [`KeyValue`] for [`MESSAGING_DESTINATION_ANONYMOUS`].
pub fn messaging_destination_anonymous(value: bool) -> KeyValue {
    KeyValue::new(MESSAGING_DESTINATION_ANONYMOUS, value)
}

/// The message destination name.
///
/// Destination name should only be used to create the full name if the
/// feature is supported by the messaging system; otherwise, the broker
/// identity should be used.
///
/// # Examples
///
/// - `"MyQueue"`
/// - `"MyTopic"`
pub const MESSAGING_DESTINATION_NAME: Key = Key::from_static_str("messaging.destination.name");

/// Builds a [`KeyValue`] for [`MESSAGING_DESTINATION_NAME`].
pub fn messaging_destination_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(MESSAGING_DESTINATION_NAME, value.into())
}

/// The identifier of the partition messages are sent to or received from,
/// unique within the `messaging.destination.name`.
///
/// # Examples
///
/// - `"1"`
pub const MESSAGING_DESTINATION_PARTITION_ID: Key =
    Key::from_static_str("messaging.destination.partition.id");

/// Builds a [`KeyValue`] for [`MESSAGING_DESTINATION_PARTITION_ID`].
pub fn messaging_destination_partition_id(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(MESSAGING_DESTINATION_PARTITION_ID, value.into())
}

/// The name of the destination subscription from which a message is
/// consumed.
///
/// Semantic conventions for individual messaging systems should document
/// whether `messaging.destination.subscription.name` is applicable and
/// what it means in the context of that system.
///
/// # Examples
///
/// - `"subscription-a"`
pub const MESSAGING_DESTINATION_SUBSCRIPTION_NAME: Key =
    Key::from_static_str("messaging.destination.subscription.name");

/// Builds a [`KeyValue`] for [`MESSAGING_DESTINATION_SUBSCRIPTION_NAME`].
pub fn messaging_destination_subscription_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(MESSAGING_DESTINATION_SUBSCRIPTION_NAME, value.into())
}

/// Low cardinality representation of the messaging destination name.
///
/// Destination names could be constructed from templates. An example
/// would be a destination name involving a user name or product id.
/// Although the destination name in this case is of high cardinality, the
/// underlying template is of low cardinality and can be effectively used
/// for grouping and aggregation.
///
/// # Examples
///
/// - `"/customers/{customerId}"`
pub const MESSAGING_DESTINATION_TEMPLATE: Key =
    Key::from_static_str("messaging.destination.template");

/// Builds a [`KeyValue`] for [`MESSAGING_DESTINATION_TEMPLATE`].
pub fn messaging_destination_template(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(MESSAGING_DESTINATION_TEMPLATE, value.into())
}

/// A boolean that is true if the message destination is temporary and
/// might not exist anymore after messages are processed.
pub const MESSAGING_DESTINATION_TEMPORARY: Key =
    Key::from_static_str("messaging.destination.temporary");

/// Builds a [`KeyValue`] for [`MESSAGING_DESTINATION_TEMPORARY`].
pub fn messaging_destination_temporary(value: bool) -> KeyValue {
    KeyValue::new(MESSAGING_DESTINATION_TEMPORARY, value)
}

/// Deprecated, no replacement at this time.
#[deprecated(note = "No replacement at this time.")]
pub const MESSAGING_DESTINATION_PUBLISH_ANONYMOUS: Key =
    Key::from_static_str("messaging.destination_publish.anonymous");

/// Builds a [`KeyValue`] for [`MESSAGING_DESTINATION_PUBLISH_ANONYMOUS`].
#[deprecated(note = "No replacement at this time.")]
pub fn messaging_destination_publish_anonymous(value: bool) -> KeyValue {
    KeyValue::new(MESSAGING_DESTINATION_PUBLISH_ANONYMOUS, value)
}

/// Deprecated, no replacement at this time.
///
/// # Examples
///
/// - `"MyQueue"`
/// - `"MyTopic"`
#[deprecated(note = "No replacement at this time.")]
pub const MESSAGING_DESTINATION_PUBLISH_NAME: Key =
    Key::from_static_str("messaging.destination_publish.name");

/// Builds a [`KeyValue`] for [`MESSAGING_DESTINATION_PUBLISH_NAME`].
#[deprecated(note = "No replacement at this time.")]
pub fn messaging_destination_publish_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(MESSAGING_DESTINATION_PUBLISH_NAME, value.into())
}

/// Deprecated, use `messaging.consumer.group.name` instead.
///
/// # Examples
///
/// - `"my-group"`
#[deprecated(note = "Replaced by `messaging.consumer.group.name`.")]
pub const MESSAGING_KAFKA_CONSUMER_GROUP: Key =
    Key::from_static_str("messaging.kafka.consumer.group");

/// Builds a [`KeyValue`] for [`MESSAGING_KAFKA_CONSUMER_GROUP`].
#[deprecated(note = "Replaced by `messaging.consumer.group.name`.")]
pub fn messaging_kafka_consumer_group(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(MESSAGING_KAFKA_CONSUMER_GROUP, value.into())
}

/// Deprecated, use `messaging.destination.partition.id` instead.
///
/// # Examples
///
/// - `2`
#[deprecated(note = "Replaced by `messaging.destination.partition.id`.")]
pub const MESSAGING_KAFKA_DESTINATION_PARTITION: Key =
    Key::from_static_str("messaging.kafka.destination.partition");

/// Builds a [`KeyValue`] for [`MESSAGING_KAFKA_DESTINATION_PARTITION`].
#[deprecated(note = "Replaced by `messaging.destination.partition.id`.")]
pub fn messaging_kafka_destination_partition(value: i64) -> KeyValue {
    KeyValue::new(MESSAGING_KAFKA_DESTINATION_PARTITION, value)
}

/// Message keys in Kafka are used for grouping alike messages to ensure
/// they're processed on the same partition. They differ from
/// `messaging.message.id` in that they're not unique.
///
/// If the key type is not string, it's string representation has to be
/// supplied for the attribute. If the key has no unambiguous, canonical
/// string form, don't include its value.
///
/// # Examples
///
/// - `"myKey"`
pub const MESSAGING_KAFKA_MESSAGE_KEY: Key = Key::from_static_str("messaging.kafka.message.key");

/// Builds a [`KeyValue`] for [`MESSAGING_KAFKA_MESSAGE_KEY`].
pub fn messaging_kafka_message_key(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(MESSAGING_KAFKA_MESSAGE_KEY, value.into())
}

/// Deprecated, use `messaging.kafka.offset` instead.
///
/// # Examples
///
/// - `42`
#[deprecated(note = "Replaced by `messaging.kafka.offset`.")]
pub const MESSAGING_KAFKA_MESSAGE_OFFSET: Key =
    Key::from_static_str("messaging.kafka.message.offset");

/// Builds a [`KeyValue`] for [`MESSAGING_KAFKA_MESSAGE_OFFSET`].
#[deprecated(note = "Replaced by `messaging.kafka.offset`.")]
pub fn messaging_kafka_message_offset(value: i64) -> KeyValue {
    KeyValue::new(MESSAGING_KAFKA_MESSAGE_OFFSET, value)
}

/// A boolean that is true if the message is a tombstone.
pub const MESSAGING_KAFKA_MESSAGE_TOMBSTONE: Key =
    Key::from_static_str("messaging.kafka.message.tombstone");

/// Builds a [`KeyValue`] for [`MESSAGING_KAFKA_MESSAGE_TOMBSTONE`].
pub fn messaging_kafka_message_tombstone(value: bool) -> KeyValue {
    KeyValue::new(MESSAGING_KAFKA_MESSAGE_TOMBSTONE, value)
}

/// The offset of a record in the corresponding Kafka partition.
///
/// # Examples
///
/// - `42`
pub const MESSAGING_KAFKA_OFFSET: Key = Key::from_static_str("messaging.kafka.offset");

/// Builds a [`KeyValue`] for [`MESSAGING_KAFKA_OFFSET`].
pub fn messaging_kafka_offset(value: i64) -> KeyValue {
    KeyValue::new(MESSAGING_KAFKA_OFFSET, value)
}

/// The size of the message body in bytes.
///
/// This can refer to both the compressed or uncompressed body size. If
/// both sizes are known, the uncompressed body size should be used.
///
/// # Examples
///
/// - `1439`
pub const MESSAGING_MESSAGE_BODY_SIZE: Key = Key::from_static_str("messaging.message.body.size");

/// Builds a [`KeyValue`] for [`MESSAGING_MESSAGE_BODY_SIZE`].
pub fn messaging_message_body_size(value: i64) -> KeyValue {
    KeyValue::new(MESSAGING_MESSAGE_BODY_SIZE, value)
}

/// The conversation ID identifying the conversation to which the message
/// belongs, represented as a string. Sometimes called "Correlation ID".
///
/// # Examples
///
/// - `"MyConversationId"`
pub const MESSAGING_MESSAGE_CONVERSATION_ID: Key =
    Key::from_static_str("messaging.message.conversation_id");

/// Builds a [`KeyValue`] for [`MESSAGING_MESSAGE_CONVERSATION_ID`].
pub fn messaging_message_conversation_id(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(MESSAGING_MESSAGE_CONVERSATION_ID, value.into())
}

/// The size of the message body and metadata in bytes.
///
/// This can refer to both the compressed or uncompressed size. If both
/// sizes are known, the uncompressed size should be used.
///
/// # Examples
///
/// - `2738`
pub const MESSAGING_MESSAGE_ENVELOPE_SIZE: Key =
    Key::from_static_str("messaging.message.envelope.size");

/// Builds a [`KeyValue`] for [`MESSAGING_MESSAGE_ENVELOPE_SIZE`].
pub fn messaging_message_envelope_size(value: i64) -> KeyValue {
    KeyValue::new(MESSAGING_MESSAGE_ENVELOPE_SIZE, value)
}

/// A value used by the messaging system as an identifier for the message,
/// represented as a string.
///
/// # Examples
///
/// - `"452a7c7c7c7048c2f887f61572b18fc2"`
pub const MESSAGING_MESSAGE_ID: Key = Key::from_static_str("messaging.message.id");

/// Builds a [`KeyValue`] for [`MESSAGING_MESSAGE_ID`].
pub fn messaging_message_id(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(MESSAGING_MESSAGE_ID, value.into())
}

/// Deprecated, use `messaging.operation.type` instead.
///
/// # Examples
///
/// - `"publish"`
/// - `"create"`
/// - `"process"`
#[deprecated(note = "Replaced by `messaging.operation.type`.")]
pub const MESSAGING_OPERATION: Key = Key::from_static_str("messaging.operation");

/// Builds a [`KeyValue`] for [`MESSAGING_OPERATION`].
#[deprecated(note = "Replaced by `messaging.operation.type`.")]
pub fn messaging_operation(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(MESSAGING_OPERATION, value.into())
}

/// The system-specific name of the messaging operation.
///
/// # Examples
///
/// - `"ack"`
/// - `"nack"`
/// - `"send"`
pub const MESSAGING_OPERATION_NAME: Key = Key::from_static_str("messaging.operation.name");

/// Builds a [`KeyValue`] for [`MESSAGING_OPERATION_NAME`].
pub fn messaging_operation_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(MESSAGING_OPERATION_NAME, value.into())
}

/// A string identifying the type of the messaging operation.
///
/// If a custom value is used, it must be of low cardinality.
pub const MESSAGING_OPERATION_TYPE: Key = Key::from_static_str("messaging.operation.type");

/// Builds a [`KeyValue`] for [`MESSAGING_OPERATION_TYPE`].
pub fn messaging_operation_type(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(MESSAGING_OPERATION_TYPE, value.into())
}

/// Well-known values for [`MESSAGING_OPERATION_TYPE`].
pub mod messaging_operation_type_values {
    /// A message is created. "Create" spans always refer to a single
    /// message and are used to provide a unique creation context for
    /// messages in batch sending scenarios.
    pub const CREATE: &str = "create";
    /// One or more messages are provided for sending to an intermediary.
    /// If a single message is sent, the context of the "Send" span can be
    /// used as the creation context and no "Create" span needs to be
    /// created.
    pub const SEND: &str = "send";
    /// One or more messages are requested by a consumer. This operation
    /// refers to pull-based scenarios, where consumers explicitly call
    /// methods of messaging SDKs to receive messages.
    pub const RECEIVE: &str = "receive";
    /// One or more messages are processed by a consumer.
    pub const PROCESS: &str = "process";
    /// One or more messages are settled.
    pub const SETTLE: &str = "settle";
}

/// RabbitMQ message routing key.
///
/// # Examples
///
/// - `"myKey"`
pub const MESSAGING_RABBITMQ_DESTINATION_ROUTING_KEY: Key =
    Key::from_static_str("messaging.rabbitmq.destination.routing_key");

/// Builds a [`KeyValue`] for [`MESSAGING_RABBITMQ_DESTINATION_ROUTING_KEY`].
pub fn messaging_rabbitmq_destination_routing_key(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(MESSAGING_RABBITMQ_DESTINATION_ROUTING_KEY, value.into())
}

/// RabbitMQ message delivery tag.
///
/// # Examples
///
/// - `123`
pub const MESSAGING_RABBITMQ_MESSAGE_DELIVERY_TAG: Key =
    Key::from_static_str("messaging.rabbitmq.message.delivery_tag");

/// Builds a [`KeyValue`] for [`MESSAGING_RABBITMQ_MESSAGE_DELIVERY_TAG`].
pub fn messaging_rabbitmq_message_delivery_tag(value: i64) -> KeyValue {
    KeyValue::new(MESSAGING_RABBITMQ_MESSAGE_DELIVERY_TAG, value)
}

/// The messaging system as identified by the client instrumentation.
///
/// The actual messaging system may differ from the one known by the
/// client. For example, when using Kafka client libraries to communicate
/// with Azure Event Hubs, the `messaging.system` is set to `kafka` based
/// on the instrumentation's best knowledge.
pub const MESSAGING_SYSTEM: Key = Key::from_static_str("messaging.system");

/// Builds a [`KeyValue`] for [`MESSAGING_SYSTEM`].
pub fn messaging_system(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(MESSAGING_SYSTEM, value.into())
}

/// Well-known values for [`MESSAGING_SYSTEM`].
pub mod messaging_system_values {
    /// Apache ActiveMQ.
    pub const ACTIVEMQ: &str = "activemq";
    /// Amazon Simple Queue Service (SQS).
    pub const AWS_SQS: &str = "aws_sqs";
    /// Azure Event Grid.
    pub const EVENTGRID: &str = "eventgrid";
    /// Azure Event Hubs.
    pub const EVENTHUBS: &str = "eventhubs";
    /// Azure Service Bus.
    pub const SERVICEBUS: &str = "servicebus";
    /// Google Cloud Pub/Sub.
    pub const GCP_PUBSUB: &str = "gcp_pubsub";
    /// Java Message Service.
    pub const JMS: &str = "jms";
    /// Apache Kafka.
    pub const KAFKA: &str = "kafka";
    /// RabbitMQ.
    pub const RABBITMQ: &str = "rabbitmq";
    /// Apache RocketMQ.
    pub const ROCKETMQ: &str = "rocketmq";
    /// Apache Pulsar.
    pub const PULSAR: &str = "pulsar";
}
