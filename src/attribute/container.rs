//! `container.*` attributes: the container a resource runs in.

use opentelemetry::{Array, Key, KeyValue, StringValue, Value};

/// The command used to run the container (i.e. the command name).
///
/// If using embedded credentials or sensitive data, it is recommended to
/// remove them to prevent potential leakage.
///
/// # Examples
///
/// - `"otelcontribcol"`
pub const CONTAINER_COMMAND: Key = Key::from_static_str("container.command");

/// Builds a [`KeyValue`] for [`CONTAINER_COMMAND`].
pub fn container_command(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(CONTAINER_COMMAND, value.into())
}

/// All the command arguments (including the command/executable itself)
/// run by the container.
///
/// # Examples
///
/// - `["otelcontribcol", "--config", "config.yaml"]`
pub const CONTAINER_COMMAND_ARGS: Key = Key::from_static_str("container.command_args");

/// Builds a [`KeyValue`] for [`CONTAINER_COMMAND_ARGS`].
pub fn container_command_args(value: Vec<StringValue>) -> KeyValue {
    KeyValue::new(CONTAINER_COMMAND_ARGS, Value::Array(Array::String(value)))
}

/// The full command run by the container as a single string representing
/// the full command.
///
/// # Examples
///
/// - `"otelcontribcol --config config.yaml"`
pub const CONTAINER_COMMAND_LINE: Key = Key::from_static_str("container.command_line");

/// Builds a [`KeyValue`] for [`CONTAINER_COMMAND_LINE`].
pub fn container_command_line(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(CONTAINER_COMMAND_LINE, value.into())
}

/// Container ID. Usually a UUID, as for example used to [identify Docker
/// containers](https://docs.docker.com/engine/containers/run/#container-identification).
/// The UUID might be abbreviated.
///
/// # Examples
///
/// - `"a3bf90e006b2"`
pub const CONTAINER_ID: Key = Key::from_static_str("container.id");

/// Builds a [`KeyValue`] for [`CONTAINER_ID`].
pub fn container_id(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(CONTAINER_ID, value.into())
}

/// Runtime specific image identifier. Usually a hash algorithm followed
/// by a UUID.
///
/// Docker defines a sha256 of the image id; `container.image.id`
/// corresponds to the `Image` field from the Docker container inspect
/// [API](https://docs.docker.com/engine/api/v1.43/#tag/Container/operation/ContainerInspect)
/// endpoint. K8s defines a link to the container registry repository with
/// digest `"imageID": "registry.azurecr.io/namespace/service/dockerfile@sha256:bdeabd40c3a8a492eaf9e8e44d0ebbb84bac7ee25ac0cf8a7159d25f62555625"`.
/// The ID is assigned by the container runtime and can vary in different
/// environments.
///
/// # Examples
///
/// - `"sha256:19c92d0a00d1b66d897bceaa7319bee0dd38a10a851c60bcec9474aa3f01e50f"`
pub const CONTAINER_IMAGE_ID: Key = Key::from_static_str("container.image.id");

/// Builds a [`KeyValue`] for [`CONTAINER_IMAGE_ID`].
pub fn container_image_id(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(CONTAINER_IMAGE_ID, value.into())
}

/// Name of the image the container was built on.
///
/// # Examples
///
/// - `"gcr.io/opentelemetry/operator"`
pub const CONTAINER_IMAGE_NAME: Key = Key::from_static_str("container.image.name");

/// Builds a [`KeyValue`] for [`CONTAINER_IMAGE_NAME`].
pub fn container_image_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(CONTAINER_IMAGE_NAME, value.into())
}

/// Repo digests of the container image as provided by the container
/// runtime.
///
/// [Docker](https://docs.docker.com/engine/api/v1.43/#tag/Image/operation/ImageInspect)
/// and [CRI](https://github.com/kubernetes/cri-api/blob/c75ef5b473bbe2d0a4fc92f82235efd665ea8e9f/pkg/apis/runtime/v1/api.proto#L1237-L1238)
/// report those under the `RepoDigests` field.
///
/// # Examples
///
/// - `["example@sha256:afcc7f1ac1b49db317a7196c902e61c6c3c4607d63599ee1a82d702d249a0ccb"]`
pub const CONTAINER_IMAGE_REPO_DIGESTS: Key = Key::from_static_str("container.image.repo_digests");

/// Builds a [`KeyValue`] for [`CONTAINER_IMAGE_REPO_DIGESTS`].
pub fn container_image_repo_digests(value: Vec<StringValue>) -> KeyValue {
    KeyValue::new(
        CONTAINER_IMAGE_REPO_DIGESTS,
        Value::Array(Array::String(value)),
    )
}

/// Container image tags. An example can be found in [Docker Image
/// Inspect](https://docs.docker.com/engine/api/v1.43/#tag/Image/operation/ImageInspect).
/// Should be only the `<tag>` section of the full name for example from
/// `registry.example.com/my-org/my-image:<tag>`.
///
/// # Examples
///
/// - `["v1.27.1", "3.5.7-0"]`
pub const CONTAINER_IMAGE_TAGS: Key = Key::from_static_str("container.image.tags");

/// Builds a [`KeyValue`] for [`CONTAINER_IMAGE_TAGS`].
pub fn container_image_tags(value: Vec<StringValue>) -> KeyValue {
    KeyValue::new(CONTAINER_IMAGE_TAGS, Value::Array(Array::String(value)))
}

/// Container labels, `<key>` being the label name, the value being the
/// label value.
///
/// The full key carries a caller-chosen label-name suffix, so no
/// fixed-key constructor is provided.
///
/// # Examples
///
/// - `container.label.app="nginx"`
pub const CONTAINER_LABEL: Key = Key::from_static_str("container.label");

/// Container name used by container runtime.
///
/// # Examples
///
/// - `"opentelemetry-autoconf"`
pub const CONTAINER_NAME: Key = Key::from_static_str("container.name");

/// Builds a [`KeyValue`] for [`CONTAINER_NAME`].
pub fn container_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(CONTAINER_NAME, value.into())
}

/// The container runtime managing this container.
///
/// # Examples
///
/// - `"docker"`
/// - `"containerd"`
/// - `"rkt"`
pub const CONTAINER_RUNTIME: Key = Key::from_static_str("container.runtime");

/// Builds a [`KeyValue`] for [`CONTAINER_RUNTIME`].
pub fn container_runtime(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(CONTAINER_RUNTIME, value.into())
}
