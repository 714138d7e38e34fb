//! `aws.*` attributes: AWS SDK calls and AWS-managed resources.

use opentelemetry::{Array, Key, KeyValue, StringValue, Value};

/// The JSON-serialized value of each item in the `AttributeDefinitions`
/// request field.
///
/// # Examples
///
/// - `["{ \"AttributeName\": \"string\", \"AttributeType\": \"string\" }"]`
pub const AWS_DYNAMODB_ATTRIBUTE_DEFINITIONS: Key =
    Key::from_static_str("aws.dynamodb.attribute_definitions");

/// Builds a [`KeyValue`] for [`AWS_DYNAMODB_ATTRIBUTE_DEFINITIONS`].
pub fn aws_dynamodb_attribute_definitions(value: Vec<StringValue>) -> KeyValue {
    KeyValue::new(
        AWS_DYNAMODB_ATTRIBUTE_DEFINITIONS,
        Value::Array(Array::String(value)),
    )
}

/// The value of the `AttributesToGet` request parameter.
///
/// # Examples
///
/// - `["lives", "id"]`
pub const AWS_DYNAMODB_ATTRIBUTES_TO_GET: Key =
    Key::from_static_str("aws.dynamodb.attributes_to_get");

/// Builds a [`KeyValue`] for [`AWS_DYNAMODB_ATTRIBUTES_TO_GET`].
pub fn aws_dynamodb_attributes_to_get(value: Vec<StringValue>) -> KeyValue {
    KeyValue::new(
        AWS_DYNAMODB_ATTRIBUTES_TO_GET,
        Value::Array(Array::String(value)),
    )
}

/// The value of the `ConsistentRead` request parameter.
pub const AWS_DYNAMODB_CONSISTENT_READ: Key = Key::from_static_str("aws.dynamodb.consistent_read");

/// Builds a [`KeyValue`] for [`AWS_DYNAMODB_CONSISTENT_READ`].
pub fn aws_dynamodb_consistent_read(value: bool) -> KeyValue {
    KeyValue::new(AWS_DYNAMODB_CONSISTENT_READ, value)
}

/// The JSON-serialized value of each item in the `ConsumedCapacity`
/// response field.
///
/// # Examples
///
/// - `["{ \"CapacityUnits\": number, \"TableName\": \"string\" }"]`
pub const AWS_DYNAMODB_CONSUMED_CAPACITY: Key =
    Key::from_static_str("aws.dynamodb.consumed_capacity");

/// Builds a [`KeyValue`] for [`AWS_DYNAMODB_CONSUMED_CAPACITY`].
pub fn aws_dynamodb_consumed_capacity(value: Vec<StringValue>) -> KeyValue {
    KeyValue::new(
        AWS_DYNAMODB_CONSUMED_CAPACITY,
        Value::Array(Array::String(value)),
    )
}

/// The value of the `Count` response parameter.
///
/// # Examples
///
/// - `10`
pub const AWS_DYNAMODB_COUNT: Key = Key::from_static_str("aws.dynamodb.count");

/// Builds a [`KeyValue`] for [`AWS_DYNAMODB_COUNT`].
pub fn aws_dynamodb_count(value: i64) -> KeyValue {
    KeyValue::new(AWS_DYNAMODB_COUNT, value)
}

/// The value of the `ExclusiveStartTableName` request parameter.
///
/// # Examples
///
/// - `"Users"`
/// - `"CatsTable"`
pub const AWS_DYNAMODB_EXCLUSIVE_START_TABLE: Key =
    Key::from_static_str("aws.dynamodb.exclusive_start_table");

/// Builds a [`KeyValue`] for [`AWS_DYNAMODB_EXCLUSIVE_START_TABLE`].
pub fn aws_dynamodb_exclusive_start_table(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(AWS_DYNAMODB_EXCLUSIVE_START_TABLE, value.into())
}

/// The JSON-serialized value of each item in the
/// `GlobalSecondaryIndexUpdates` request field.
///
/// # Examples
///
/// - `["{ \"Create\": { \"IndexName\": \"string\", \"KeySchema\": [ { \"AttributeName\": \"string\", \"KeyType\": \"string\" } ], \"Projection\": { \"NonKeyAttributes\": [ \"string\" ], \"ProjectionType\": \"string\" }, \"ProvisionedThroughput\": { \"ReadCapacityUnits\": number, \"WriteCapacityUnits\": number } }"]`
pub const AWS_DYNAMODB_GLOBAL_SECONDARY_INDEX_UPDATES: Key =
    Key::from_static_str("aws.dynamodb.global_secondary_index_updates");

/// Builds a [`KeyValue`] for [`AWS_DYNAMODB_GLOBAL_SECONDARY_INDEX_UPDATES`].
pub fn aws_dynamodb_global_secondary_index_updates(value: Vec<StringValue>) -> KeyValue {
    KeyValue::new(
        AWS_DYNAMODB_GLOBAL_SECONDARY_INDEX_UPDATES,
        Value::Array(Array::String(value)),
    )
}

/// The JSON-serialized value of each item of the `GlobalSecondaryIndexes`
/// request field.
///
/// # Examples
///
/// - `["{ \"IndexName\": \"string\", \"KeySchema\": [ { \"AttributeName\": \"string\", \"KeyType\": \"string\" } ], \"Projection\": { \"NonKeyAttributes\": [ \"string\" ], \"ProjectionType\": \"string\" }, \"ProvisionedThroughput\": { \"ReadCapacityUnits\": number, \"WriteCapacityUnits\": number } }"]`
pub const AWS_DYNAMODB_GLOBAL_SECONDARY_INDEXES: Key =
    Key::from_static_str("aws.dynamodb.global_secondary_indexes");

/// Builds a [`KeyValue`] for [`AWS_DYNAMODB_GLOBAL_SECONDARY_INDEXES`].
pub fn aws_dynamodb_global_secondary_indexes(value: Vec<StringValue>) -> KeyValue {
    KeyValue::new(
        AWS_DYNAMODB_GLOBAL_SECONDARY_INDEXES,
        Value::Array(Array::String(value)),
    )
}

/// The value of the `IndexName` request parameter.
///
/// # Examples
///
/// - `"name_to_group"`
pub const AWS_DYNAMODB_INDEX_NAME: Key = Key::from_static_str("aws.dynamodb.index_name");

/// Builds a [`KeyValue`] for [`AWS_DYNAMODB_INDEX_NAME`].
pub fn aws_dynamodb_index_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(AWS_DYNAMODB_INDEX_NAME, value.into())
}

/// The JSON-serialized value of the `ItemCollectionMetrics` response
/// field.
///
/// # Examples
///
/// - `"{ \"string\" : [ { \"ItemCollectionKey\": { \"string\" : { \"B\": blob, \"BOOL\": boolean, \"BS\": [ blob ], \"L\": [ \"AttributeValue\" ], \"M\": { \"string\" : \"AttributeValue\" }, \"N\": \"string\", \"NS\": [ \"string\" ], \"NULL\": boolean, \"S\": \"string\", \"SS\": [ \"string\" ] } }, \"SizeEstimateRangeGB\": [ number ] } ] }"`
pub const AWS_DYNAMODB_ITEM_COLLECTION_METRICS: Key =
    Key::from_static_str("aws.dynamodb.item_collection_metrics");

/// Builds a [`KeyValue`] for [`AWS_DYNAMODB_ITEM_COLLECTION_METRICS`].
pub fn aws_dynamodb_item_collection_metrics(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(AWS_DYNAMODB_ITEM_COLLECTION_METRICS, value.into())
}

/// The value of the `Limit` request parameter.
///
/// # Examples
///
/// - `10`
pub const AWS_DYNAMODB_LIMIT: Key = Key::from_static_str("aws.dynamodb.limit");

/// Builds a [`KeyValue`] for [`AWS_DYNAMODB_LIMIT`].
pub fn aws_dynamodb_limit(value: i64) -> KeyValue {
    KeyValue::new(AWS_DYNAMODB_LIMIT, value)
}

/// The JSON-serialized value of each item of the `LocalSecondaryIndexes`
/// request field.
///
/// # Examples
///
/// - `["{ \"IndexArn\": \"string\", \"IndexName\": \"string\", \"IndexSizeBytes\": number, \"ItemCount\": number, \"KeySchema\": [ { \"AttributeName\": \"string\", \"KeyType\": \"string\" } ], \"Projection\": { \"NonKeyAttributes\": [ \"string\" ], \"ProjectionType\": \"string\" } }"]`
pub const AWS_DYNAMODB_LOCAL_SECONDARY_INDEXES: Key =
    Key::from_static_str("aws.dynamodb.local_secondary_indexes");

/// Builds a [`KeyValue`] for [`AWS_DYNAMODB_LOCAL_SECONDARY_INDEXES`].
pub fn aws_dynamodb_local_secondary_indexes(value: Vec<StringValue>) -> KeyValue {
    KeyValue::new(
        AWS_DYNAMODB_LOCAL_SECONDARY_INDEXES,
        Value::Array(Array::String(value)),
    )
}

/// The value of the `ProjectionExpression` request parameter.
///
/// # Examples
///
/// - `"Title"`
/// - `"Title, Price, Color"`
/// - `"Title, Description, RelatedItems, ProductReviews"`
pub const AWS_DYNAMODB_PROJECTION: Key = Key::from_static_str("aws.dynamodb.projection");

/// Builds a [`KeyValue`] for [`AWS_DYNAMODB_PROJECTION`].
pub fn aws_dynamodb_projection(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(AWS_DYNAMODB_PROJECTION, value.into())
}

/// The value of the `ProvisionedThroughput.ReadCapacityUnits` request
/// parameter.
///
/// # Examples
///
/// - `1.0`
/// - `2.0`
pub const AWS_DYNAMODB_PROVISIONED_READ_CAPACITY: Key =
    Key::from_static_str("aws.dynamodb.provisioned_read_capacity");

/// Builds a [`KeyValue`] for [`AWS_DYNAMODB_PROVISIONED_READ_CAPACITY`].
pub fn aws_dynamodb_provisioned_read_capacity(value: f64) -> KeyValue {
    KeyValue::new(AWS_DYNAMODB_PROVISIONED_READ_CAPACITY, value)
}

/// The value of the `ProvisionedThroughput.WriteCapacityUnits` request
/// parameter.
///
/// # Examples
///
/// - `1.0`
/// - `2.0`
pub const AWS_DYNAMODB_PROVISIONED_WRITE_CAPACITY: Key =
    Key::from_static_str("aws.dynamodb.provisioned_write_capacity");

/// Builds a [`KeyValue`] for [`AWS_DYNAMODB_PROVISIONED_WRITE_CAPACITY`].
pub fn aws_dynamodb_provisioned_write_capacity(value: f64) -> KeyValue {
    KeyValue::new(AWS_DYNAMODB_PROVISIONED_WRITE_CAPACITY, value)
}

/// The value of the `ScanIndexForward` request parameter.
pub const AWS_DYNAMODB_SCAN_FORWARD: Key = Key::from_static_str("aws.dynamodb.scan_forward");

/// Builds a [`KeyValue`] for [`AWS_DYNAMODB_SCAN_FORWARD`].
pub fn aws_dynamodb_scan_forward(value: bool) -> KeyValue {
    KeyValue::new(AWS_DYNAMODB_SCAN_FORWARD, value)
}

/// The value of the `ScannedCount` response parameter.
///
/// # Examples
///
/// - `50`
pub const AWS_DYNAMODB_SCANNED_COUNT: Key = Key::from_static_str("aws.dynamodb.scanned_count");

/// Builds a [`KeyValue`] for [`AWS_DYNAMODB_SCANNED_COUNT`].
pub fn aws_dynamodb_scanned_count(value: i64) -> KeyValue {
    KeyValue::new(AWS_DYNAMODB_SCANNED_COUNT, value)
}

/// The value of the `Segment` request parameter.
///
/// # Examples
///
/// - `10`
pub const AWS_DYNAMODB_SEGMENT: Key = Key::from_static_str("aws.dynamodb.segment");

/// Builds a [`KeyValue`] for [`AWS_DYNAMODB_SEGMENT`].
pub fn aws_dynamodb_segment(value: i64) -> KeyValue {
    KeyValue::new(AWS_DYNAMODB_SEGMENT, value)
}

/// The value of the `Select` request parameter.
///
/// # Examples
///
/// - `"ALL_ATTRIBUTES"`
/// - `"COUNT"`
pub const AWS_DYNAMODB_SELECT: Key = Key::from_static_str("aws.dynamodb.select");

/// Builds a [`KeyValue`] for [`AWS_DYNAMODB_SELECT`].
pub fn aws_dynamodb_select(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(AWS_DYNAMODB_SELECT, value.into())
}

/// The number of items in the `TableNames` response parameter.
///
/// # Examples
///
/// - `20`
pub const AWS_DYNAMODB_TABLE_COUNT: Key = Key::from_static_str("aws.dynamodb.table_count");

/// Builds a [`KeyValue`] for [`AWS_DYNAMODB_TABLE_COUNT`].
pub fn aws_dynamodb_table_count(value: i64) -> KeyValue {
    KeyValue::new(AWS_DYNAMODB_TABLE_COUNT, value)
}

/// The keys in the `RequestItems` object field.
///
/// # Examples
///
/// - `["Users", "Cats"]`
pub const AWS_DYNAMODB_TABLE_NAMES: Key = Key::from_static_str("aws.dynamodb.table_names");

/// Builds a [`KeyValue`] for [`AWS_DYNAMODB_TABLE_NAMES`].
pub fn aws_dynamodb_table_names(value: Vec<StringValue>) -> KeyValue {
    KeyValue::new(AWS_DYNAMODB_TABLE_NAMES, Value::Array(Array::String(value)))
}

/// The value of the `TotalSegments` request parameter.
///
/// # Examples
///
/// - `100`
pub const AWS_DYNAMODB_TOTAL_SEGMENTS: Key = Key::from_static_str("aws.dynamodb.total_segments");

/// Builds a [`KeyValue`] for [`AWS_DYNAMODB_TOTAL_SEGMENTS`].
pub fn aws_dynamodb_total_segments(value: i64) -> KeyValue {
    KeyValue::new(AWS_DYNAMODB_TOTAL_SEGMENTS, value)
}

/// The ARN of an [ECS cluster](https://docs.aws.amazon.com/AmazonECS/latest/developerguide/clusters.html).
///
/// # Examples
///
/// - `"arn:aws:ecs:us-west-2:123456789123:cluster/my-cluster"`
pub const AWS_ECS_CLUSTER_ARN: Key = Key::from_static_str("aws.ecs.cluster.arn");

/// Builds a [`KeyValue`] for [`AWS_ECS_CLUSTER_ARN`].
pub fn aws_ecs_cluster_arn(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(AWS_ECS_CLUSTER_ARN, value.into())
}

/// The Amazon Resource Name (ARN) of an [ECS container instance](https://docs.aws.amazon.com/AmazonECS/latest/developerguide/ECS_instances.html).
///
/// # Examples
///
/// - `"arn:aws:ecs:us-west-1:123456789123:container/32624152-9086-4f0e-acae-1a75b14fe4d9"`
pub const AWS_ECS_CONTAINER_ARN: Key = Key::from_static_str("aws.ecs.container.arn");

/// Builds a [`KeyValue`] for [`AWS_ECS_CONTAINER_ARN`].
pub fn aws_ecs_container_arn(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(AWS_ECS_CONTAINER_ARN, value.into())
}

/// The [launch type](https://docs.aws.amazon.com/AmazonECS/latest/developerguide/launch_types.html)
/// for an ECS task.
pub const AWS_ECS_LAUNCHTYPE: Key = Key::from_static_str("aws.ecs.launchtype");

/// Builds a [`KeyValue`] for [`AWS_ECS_LAUNCHTYPE`].
pub fn aws_ecs_launchtype(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(AWS_ECS_LAUNCHTYPE, value.into())
}

/// Well-known values for [`AWS_ECS_LAUNCHTYPE`].
pub mod aws_ecs_launchtype_values {
    /// ec2
    pub const EC2: &str = "ec2";
    /// fargate
    pub const FARGATE: &str = "fargate";
}

/// The ARN of a running [ECS task](https://docs.aws.amazon.com/AmazonECS/latest/developerguide/task-iam-roles.html).
///
/// # Examples
///
/// - `"arn:aws:ecs:us-west-1:123456789123:task/10838bed-421f-43ef-870a-f43feacbbb5b"`
/// - `"arn:aws:ecs:us-west-1:123456789123:task/my-cluster/task-id/23ebb8ac-c18f-46c6-8bbe-d55d0e37cfbd"`
pub const AWS_ECS_TASK_ARN: Key = Key::from_static_str("aws.ecs.task.arn");

/// Builds a [`KeyValue`] for [`AWS_ECS_TASK_ARN`].
pub fn aws_ecs_task_arn(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(AWS_ECS_TASK_ARN, value.into())
}

/// The family name of the [ECS task definition](https://docs.aws.amazon.com/AmazonECS/latest/developerguide/task_definitions.html)
/// used to create the ECS task.
///
/// # Examples
///
/// - `"opentelemetry-family"`
pub const AWS_ECS_TASK_FAMILY: Key = Key::from_static_str("aws.ecs.task.family");

/// Builds a [`KeyValue`] for [`AWS_ECS_TASK_FAMILY`].
pub fn aws_ecs_task_family(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(AWS_ECS_TASK_FAMILY, value.into())
}

/// The ID of a running ECS task. The ID must be extracted from `task.arn`.
///
/// # Examples
///
/// - `"10838bed-421f-43ef-870a-f43feacbbb5b"`
/// - `"23ebb8ac-c18f-46c6-8bbe-d55d0e37cfbd"`
pub const AWS_ECS_TASK_ID: Key = Key::from_static_str("aws.ecs.task.id");

/// Builds a [`KeyValue`] for [`AWS_ECS_TASK_ID`].
pub fn aws_ecs_task_id(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(AWS_ECS_TASK_ID, value.into())
}

/// The revision for the task definition used to create the ECS task.
///
/// # Examples
///
/// - `"8"`
/// - `"26"`
pub const AWS_ECS_TASK_REVISION: Key = Key::from_static_str("aws.ecs.task.revision");

/// Builds a [`KeyValue`] for [`AWS_ECS_TASK_REVISION`].
pub fn aws_ecs_task_revision(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(AWS_ECS_TASK_REVISION, value.into())
}

/// The ARN of an EKS cluster.
///
/// # Examples
///
/// - `"arn:aws:ecs:us-west-2:123456789123:cluster/my-cluster"`
pub const AWS_EKS_CLUSTER_ARN: Key = Key::from_static_str("aws.eks.cluster.arn");

/// Builds a [`KeyValue`] for [`AWS_EKS_CLUSTER_ARN`].
pub fn aws_eks_cluster_arn(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(AWS_EKS_CLUSTER_ARN, value.into())
}

/// The AWS extended request ID as returned in the response header
/// `x-amz-id-2`.
///
/// # Examples
///
/// - `"wzHcyEWfmOGDIE5QOhTAqFDoDWP3y8IUvpNINCwL9N4TEHbUw0/gZJ+VZTmCNCWR7fezEN3eCiQ="`
pub const AWS_EXTENDED_REQUEST_ID: Key = Key::from_static_str("aws.extended_request_id");

/// Builds a [`KeyValue`] for [`AWS_EXTENDED_REQUEST_ID`].
pub fn aws_extended_request_id(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(AWS_EXTENDED_REQUEST_ID, value.into())
}

/// The full invoked ARN as provided on the `Context` passed to the
/// function (`Lambda-Runtime-Invoked-Function-Arn` header on the
/// `/runtime/invocation/next` applicable).
///
/// This may be different from `cloud.resource_id` if an alias is involved.
///
/// # Examples
///
/// - `"arn:aws:lambda:us-east-1:123456:function:myfunction:myalias"`
pub const AWS_LAMBDA_INVOKED_ARN: Key = Key::from_static_str("aws.lambda.invoked_arn");

/// Builds a [`KeyValue`] for [`AWS_LAMBDA_INVOKED_ARN`].
pub fn aws_lambda_invoked_arn(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(AWS_LAMBDA_INVOKED_ARN, value.into())
}

/// The Amazon Resource Name(s) (ARN) of the AWS log group(s).
///
/// See the [log group ARN format documentation](https://docs.aws.amazon.com/AmazonCloudWatch/latest/logs/iam-access-control-overview-cwl.html#CWL_ARN_Format).
///
/// # Examples
///
/// - `["arn:aws:logs:us-west-1:123456789012:log-group:/aws/my/group:*"]`
pub const AWS_LOG_GROUP_ARNS: Key = Key::from_static_str("aws.log.group.arns");

/// Builds a [`KeyValue`] for [`AWS_LOG_GROUP_ARNS`].
pub fn aws_log_group_arns(value: Vec<StringValue>) -> KeyValue {
    KeyValue::new(AWS_LOG_GROUP_ARNS, Value::Array(Array::String(value)))
}

/// The name(s) of the AWS log group(s) an application is writing to.
///
/// Multiple log groups must be supported for cases like multi-container
/// applications, where a single application has sidecar containers, and
/// each write to their own log group.
///
/// # Examples
///
/// - `["/aws/lambda/my-function", "opentelemetry-service"]`
pub const AWS_LOG_GROUP_NAMES: Key = Key::from_static_str("aws.log.group.names");

/// Builds a [`KeyValue`] for [`AWS_LOG_GROUP_NAMES`].
pub fn aws_log_group_names(value: Vec<StringValue>) -> KeyValue {
    KeyValue::new(AWS_LOG_GROUP_NAMES, Value::Array(Array::String(value)))
}

/// The ARN(s) of the AWS log stream(s).
///
/// See the [log stream ARN format documentation](https://docs.aws.amazon.com/AmazonCloudWatch/latest/logs/iam-access-control-overview-cwl.html#CWL_ARN_Format).
/// One log group can contain several log streams, so these ARNs
/// necessarily identify both a log group and a log stream.
///
/// # Examples
///
/// - `["arn:aws:logs:us-west-1:123456789012:log-group:/aws/my/group:log-stream:logs/main/10838bed-421f-43ef-870a-f43feacbbb5b"]`
pub const AWS_LOG_STREAM_ARNS: Key = Key::from_static_str("aws.log.stream.arns");

/// Builds a [`KeyValue`] for [`AWS_LOG_STREAM_ARNS`].
pub fn aws_log_stream_arns(value: Vec<StringValue>) -> KeyValue {
    KeyValue::new(AWS_LOG_STREAM_ARNS, Value::Array(Array::String(value)))
}

/// The name(s) of the AWS log stream(s) an application is writing to.
///
/// # Examples
///
/// - `["logs/main/10838bed-421f-43ef-870a-f43feacbbb5b"]`
pub const AWS_LOG_STREAM_NAMES: Key = Key::from_static_str("aws.log.stream.names");

/// Builds a [`KeyValue`] for [`AWS_LOG_STREAM_NAMES`].
pub fn aws_log_stream_names(value: Vec<StringValue>) -> KeyValue {
    KeyValue::new(AWS_LOG_STREAM_NAMES, Value::Array(Array::String(value)))
}

/// The AWS request ID as returned in the response headers `x-amzn-requestid`,
/// `x-amzn-request-id` or `x-amz-request-id`.
///
/// # Examples
///
/// - `"79b9da39-b7ae-508a-a6bc-864b2829c622"`
/// - `"C9ER4AJX75574TDJ"`
pub const AWS_REQUEST_ID: Key = Key::from_static_str("aws.request_id");

/// Builds a [`KeyValue`] for [`AWS_REQUEST_ID`].
pub fn aws_request_id(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(AWS_REQUEST_ID, value.into())
}

/// The S3 bucket name the request refers to. Corresponds to the `--bucket`
/// parameter of the [S3 API](https://docs.aws.amazon.com/cli/latest/reference/s3api/index.html)
/// operations.
///
/// The `bucket` attribute is applicable to all S3 operations that
/// reference a bucket, i.e. that require the bucket name as a mandatory
/// parameter.
///
/// # Examples
///
/// - `"some-bucket-name"`
pub const AWS_S3_BUCKET: Key = Key::from_static_str("aws.s3.bucket");

/// Builds a [`KeyValue`] for [`AWS_S3_BUCKET`].
pub fn aws_s3_bucket(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(AWS_S3_BUCKET, value.into())
}

/// The source object (in the form `bucket`/`key`) for the copy operation.
///
/// The `copy_source` attribute applies to S3 copy operations and
/// corresponds to the `--copy-source` parameter of the [copy-object
/// operation within the S3 API](https://docs.aws.amazon.com/cli/latest/reference/s3api/copy-object.html).
///
/// # Examples
///
/// - `"someFile.yml"`
pub const AWS_S3_COPY_SOURCE: Key = Key::from_static_str("aws.s3.copy_source");

/// Builds a [`KeyValue`] for [`AWS_S3_COPY_SOURCE`].
pub fn aws_s3_copy_source(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(AWS_S3_COPY_SOURCE, value.into())
}

/// The delete request container that specifies the objects to be deleted.
///
/// The `delete` attribute is only applicable to the [delete-object
/// operation](https://docs.aws.amazon.com/cli/latest/reference/s3api/delete-object.html).
///
/// # Examples
///
/// - `"Objects=[{Key=string,VersionId=string},{Key=string,VersionId=string}],Quiet=boolean"`
pub const AWS_S3_DELETE: Key = Key::from_static_str("aws.s3.delete");

/// Builds a [`KeyValue`] for [`AWS_S3_DELETE`].
pub fn aws_s3_delete(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(AWS_S3_DELETE, value.into())
}

/// The S3 object key the request refers to. Corresponds to the `--key`
/// parameter of the [S3 API](https://docs.aws.amazon.com/cli/latest/reference/s3api/index.html)
/// operations.
///
/// # Examples
///
/// - `"someFile.yml"`
pub const AWS_S3_KEY: Key = Key::from_static_str("aws.s3.key");

/// Builds a [`KeyValue`] for [`AWS_S3_KEY`].
pub fn aws_s3_key(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(AWS_S3_KEY, value.into())
}

/// The part number of the part being uploaded in a multipart-upload
/// operation. This is a positive integer between 1 and 10,000.
///
/// The `part_number` attribute is only applicable to the
/// [upload-part](https://docs.aws.amazon.com/cli/latest/reference/s3api/upload-part.html)
/// and [upload-part-copy](https://docs.aws.amazon.com/cli/latest/reference/s3api/upload-part-copy.html)
/// operations.
///
/// # Examples
///
/// - `3456`
pub const AWS_S3_PART_NUMBER: Key = Key::from_static_str("aws.s3.part_number");

/// Builds a [`KeyValue`] for [`AWS_S3_PART_NUMBER`].
pub fn aws_s3_part_number(value: i64) -> KeyValue {
    KeyValue::new(AWS_S3_PART_NUMBER, value)
}

/// Upload ID that identifies the multipart upload.
///
/// The `upload_id` attribute applies to S3 multipart-upload operations
/// and corresponds to the `--upload-id` parameter of the [S3
/// API](https://docs.aws.amazon.com/cli/latest/reference/s3api/index.html)
/// multipart operations.
///
/// # Examples
///
/// - `"dfRtDYWFbkRONycy.Yxwh66Yjlx.cph0gtNBtJ"`
pub const AWS_S3_UPLOAD_ID: Key = Key::from_static_str("aws.s3.upload_id");

/// Builds a [`KeyValue`] for [`AWS_S3_UPLOAD_ID`].
pub fn aws_s3_upload_id(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(AWS_S3_UPLOAD_ID, value.into())
}
