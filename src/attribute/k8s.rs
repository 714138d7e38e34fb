//! `k8s.*` attributes: Kubernetes resources.

use opentelemetry::{Key, KeyValue, StringValue};

/// The name of the cluster.
///
/// # Examples
///
/// - `"opentelemetry-cluster"`
pub const K8S_CLUSTER_NAME: Key = Key::from_static_str("k8s.cluster.name");

/// Builds a [`KeyValue`] for [`K8S_CLUSTER_NAME`].
pub fn k8s_cluster_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(K8S_CLUSTER_NAME, value.into())
}

/// A pseudo-ID for the cluster, set to the UID of the `kube-system`
/// namespace.
///
/// K8s doesn't have support for obtaining a cluster ID. If this is ever
/// added, we will recommend collecting the `k8s.cluster.uid` through the
/// official APIs. In the meantime, we are able to use the `uid` of the
/// `kube-system` namespace as a proxy for cluster ID. Read on for the
/// rationale.
///
/// Every object created in a K8s cluster is assigned a distinct UID. The
/// `kube-system` namespace is used by Kubernetes itself and will exist
/// for the lifetime of the cluster. Using the `uid` of the `kube-system`
/// namespace is a reasonable proxy for the K8s ClusterID as it will only
/// change if the cluster is rebuilt.
///
/// # Examples
///
/// - `"218fc5a9-a5f1-4b54-aa05-46717d0ab26d"`
pub const K8S_CLUSTER_UID: Key = Key::from_static_str("k8s.cluster.uid");

/// Builds a [`KeyValue`] for [`K8S_CLUSTER_UID`].
pub fn k8s_cluster_uid(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(K8S_CLUSTER_UID, value.into())
}

/// The name of the Container from Pod specification, must be unique
/// within a Pod. Container runtime usually uses different globally unique
/// name (`container.name`).
///
/// # Examples
///
/// - `"redis"`
pub const K8S_CONTAINER_NAME: Key = Key::from_static_str("k8s.container.name");

/// Builds a [`KeyValue`] for [`K8S_CONTAINER_NAME`].
pub fn k8s_container_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(K8S_CONTAINER_NAME, value.into())
}

/// Number of times the container was restarted. This attribute can be
/// used to identify a particular container (running or stopped) within a
/// container spec.
pub const K8S_CONTAINER_RESTART_COUNT: Key = Key::from_static_str("k8s.container.restart_count");

/// Builds a [`KeyValue`] for [`K8S_CONTAINER_RESTART_COUNT`].
pub fn k8s_container_restart_count(value: i64) -> KeyValue {
    KeyValue::new(K8S_CONTAINER_RESTART_COUNT, value)
}

/// Last terminated reason of the Container.
///
/// # Examples
///
/// - `"Evicted"`
/// - `"Error"`
pub const K8S_CONTAINER_STATUS_LAST_TERMINATED_REASON: Key =
    Key::from_static_str("k8s.container.status.last_terminated_reason");

/// Builds a [`KeyValue`] for [`K8S_CONTAINER_STATUS_LAST_TERMINATED_REASON`].
pub fn k8s_container_status_last_terminated_reason(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(K8S_CONTAINER_STATUS_LAST_TERMINATED_REASON, value.into())
}

/// The name of the CronJob.
///
/// # Examples
///
/// - `"opentelemetry"`
pub const K8S_CRONJOB_NAME: Key = Key::from_static_str("k8s.cronjob.name");

/// Builds a [`KeyValue`] for [`K8S_CRONJOB_NAME`].
pub fn k8s_cronjob_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(K8S_CRONJOB_NAME, value.into())
}

/// The UID of the CronJob.
///
/// # Examples
///
/// - `"275ecb36-5aa8-4c2a-9c47-d8bb681b9aff"`
pub const K8S_CRONJOB_UID: Key = Key::from_static_str("k8s.cronjob.uid");

/// Builds a [`KeyValue`] for [`K8S_CRONJOB_UID`].
pub fn k8s_cronjob_uid(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(K8S_CRONJOB_UID, value.into())
}

/// The name of the DaemonSet.
///
/// # Examples
///
/// - `"opentelemetry"`
pub const K8S_DAEMONSET_NAME: Key = Key::from_static_str("k8s.daemonset.name");

/// Builds a [`KeyValue`] for [`K8S_DAEMONSET_NAME`].
pub fn k8s_daemonset_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(K8S_DAEMONSET_NAME, value.into())
}

/// The UID of the DaemonSet.
///
/// # Examples
///
/// - `"275ecb36-5aa8-4c2a-9c47-d8bb681b9aff"`
pub const K8S_DAEMONSET_UID: Key = Key::from_static_str("k8s.daemonset.uid");

/// Builds a [`KeyValue`] for [`K8S_DAEMONSET_UID`].
pub fn k8s_daemonset_uid(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(K8S_DAEMONSET_UID, value.into())
}

/// The name of the Deployment.
///
/// # Examples
///
/// - `"opentelemetry"`
pub const K8S_DEPLOYMENT_NAME: Key = Key::from_static_str("k8s.deployment.name");

/// Builds a [`KeyValue`] for [`K8S_DEPLOYMENT_NAME`].
pub fn k8s_deployment_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(K8S_DEPLOYMENT_NAME, value.into())
}

/// The UID of the Deployment.
///
/// # Examples
///
/// - `"275ecb36-5aa8-4c2a-9c47-d8bb681b9aff"`
pub const K8S_DEPLOYMENT_UID: Key = Key::from_static_str("k8s.deployment.uid");

/// Builds a [`KeyValue`] for [`K8S_DEPLOYMENT_UID`].
pub fn k8s_deployment_uid(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(K8S_DEPLOYMENT_UID, value.into())
}

/// The name of the Job.
///
/// # Examples
///
/// - `"opentelemetry"`
pub const K8S_JOB_NAME: Key = Key::from_static_str("k8s.job.name");

/// Builds a [`KeyValue`] for [`K8S_JOB_NAME`].
pub fn k8s_job_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(K8S_JOB_NAME, value.into())
}

/// The UID of the Job.
///
/// # Examples
///
/// - `"275ecb36-5aa8-4c2a-9c47-d8bb681b9aff"`
pub const K8S_JOB_UID: Key = Key::from_static_str("k8s.job.uid");

/// Builds a [`KeyValue`] for [`K8S_JOB_UID`].
pub fn k8s_job_uid(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(K8S_JOB_UID, value.into())
}

/// The name of the namespace that the pod is running in.
///
/// # Examples
///
/// - `"default"`
pub const K8S_NAMESPACE_NAME: Key = Key::from_static_str("k8s.namespace.name");

/// Builds a [`KeyValue`] for [`K8S_NAMESPACE_NAME`].
pub fn k8s_namespace_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(K8S_NAMESPACE_NAME, value.into())
}

/// The phase of the K8s namespace.
///
/// This attribute aligns with the `phase` field of the [K8s
/// NamespaceStatus](https://kubernetes.io/docs/reference/generated/kubernetes-api/v1.30/#namespacestatus-v1-core).
///
/// # Examples
///
/// - `"active"`
/// - `"terminating"`
pub const K8S_NAMESPACE_PHASE: Key = Key::from_static_str("k8s.namespace.phase");

/// Builds a [`KeyValue`] for [`K8S_NAMESPACE_PHASE`].
pub fn k8s_namespace_phase(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(K8S_NAMESPACE_PHASE, value.into())
}

/// Well-known values for [`K8S_NAMESPACE_PHASE`].
pub mod k8s_namespace_phase_values {
    /// Active namespace phase as described by [K8s API](https://pkg.go.dev/k8s.io/api@v0.31.3/core/v1#NamespacePhase).
    pub const ACTIVE: &str = "active";
    /// Terminating namespace phase as described by [K8s API](https://pkg.go.dev/k8s.io/api@v0.31.3/core/v1#NamespacePhase).
    pub const TERMINATING: &str = "terminating";
}

/// The name of the Node.
///
/// # Examples
///
/// - `"node-1"`
pub const K8S_NODE_NAME: Key = Key::from_static_str("k8s.node.name");

/// Builds a [`KeyValue`] for [`K8S_NODE_NAME`].
pub fn k8s_node_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(K8S_NODE_NAME, value.into())
}

/// The UID of the Node.
///
/// # Examples
///
/// - `"1eb3a0c6-0477-4080-a9cb-0cb7db65c6a2"`
pub const K8S_NODE_UID: Key = Key::from_static_str("k8s.node.uid");

/// Builds a [`KeyValue`] for [`K8S_NODE_UID`].
pub fn k8s_node_uid(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(K8S_NODE_UID, value.into())
}

/// The annotation key-value pairs placed on the Pod, the `<key>` being
/// the annotation name, the value being the annotation value.
///
/// The full key carries a caller-chosen annotation-name suffix, so no
/// fixed-key constructor is provided.
///
/// # Examples
///
/// - `k8s.pod.annotation.kubernetes.io/enforce-mountable-secrets="true"`
/// - `k8s.pod.annotation.data=""`
pub const K8S_POD_ANNOTATION: Key = Key::from_static_str("k8s.pod.annotation");

/// The label key-value pairs placed on the Pod, the `<key>` being the
/// label name, the value being the label value.
///
/// The full key carries a caller-chosen label-name suffix, so no
/// fixed-key constructor is provided.
///
/// # Examples
///
/// - `k8s.pod.label.app="my-app"`
/// - `k8s.pod.label.data=""`
pub const K8S_POD_LABEL: Key = Key::from_static_str("k8s.pod.label");

/// The name of the Pod.
///
/// # Examples
///
/// - `"opentelemetry-pod-autoconf"`
pub const K8S_POD_NAME: Key = Key::from_static_str("k8s.pod.name");

/// Builds a [`KeyValue`] for [`K8S_POD_NAME`].
pub fn k8s_pod_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(K8S_POD_NAME, value.into())
}

/// The UID of the Pod.
///
/// # Examples
///
/// - `"275ecb36-5aa8-4c2a-9c47-d8bb681b9aff"`
pub const K8S_POD_UID: Key = Key::from_static_str("k8s.pod.uid");

/// Builds a [`KeyValue`] for [`K8S_POD_UID`].
pub fn k8s_pod_uid(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(K8S_POD_UID, value.into())
}

/// The name of the ReplicaSet.
///
/// # Examples
///
/// - `"opentelemetry"`
pub const K8S_REPLICASET_NAME: Key = Key::from_static_str("k8s.replicaset.name");

/// Builds a [`KeyValue`] for [`K8S_REPLICASET_NAME`].
pub fn k8s_replicaset_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(K8S_REPLICASET_NAME, value.into())
}

/// The UID of the ReplicaSet.
///
/// # Examples
///
/// - `"275ecb36-5aa8-4c2a-9c47-d8bb681b9aff"`
pub const K8S_REPLICASET_UID: Key = Key::from_static_str("k8s.replicaset.uid");

/// Builds a [`KeyValue`] for [`K8S_REPLICASET_UID`].
pub fn k8s_replicaset_uid(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(K8S_REPLICASET_UID, value.into())
}

/// The name of the StatefulSet.
///
/// # Examples
///
/// - `"opentelemetry"`
pub const K8S_STATEFULSET_NAME: Key = Key::from_static_str("k8s.statefulset.name");

/// Builds a [`KeyValue`] for [`K8S_STATEFULSET_NAME`].
pub fn k8s_statefulset_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(K8S_STATEFULSET_NAME, value.into())
}

/// The UID of the StatefulSet.
///
/// # Examples
///
/// - `"275ecb36-5aa8-4c2a-9c47-d8bb681b9aff"`
pub const K8S_STATEFULSET_UID: Key = Key::from_static_str("k8s.statefulset.uid");

/// Builds a [`KeyValue`] for [`K8S_STATEFULSET_UID`].
pub fn k8s_statefulset_uid(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(K8S_STATEFULSET_UID, value.into())
}

/// The name of the K8s volume.
///
/// # Examples
///
/// - `"volume0"`
pub const K8S_VOLUME_NAME: Key = Key::from_static_str("k8s.volume.name");

/// Builds a [`KeyValue`] for [`K8S_VOLUME_NAME`].
pub fn k8s_volume_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(K8S_VOLUME_NAME, value.into())
}

/// The type of the K8s volume.
///
/// # Examples
///
/// - `"emptyDir"`
/// - `"persistentVolumeClaim"`
pub const K8S_VOLUME_TYPE: Key = Key::from_static_str("k8s.volume.type");

/// Builds a [`KeyValue`] for [`K8S_VOLUME_TYPE`].
pub fn k8s_volume_type(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(K8S_VOLUME_TYPE, value.into())
}

/// Well-known values for [`K8S_VOLUME_TYPE`].
pub mod k8s_volume_type_values {
    /// A [persistentVolumeClaim](https://v1-30.docs.kubernetes.io/docs/concepts/storage/volumes/#persistentvolumeclaim) volume.
    pub const PERSISTENT_VOLUME_CLAIM: &str = "persistentVolumeClaim";
    /// A [configMap](https://v1-30.docs.kubernetes.io/docs/concepts/storage/volumes/#configmap) volume.
    pub const CONFIG_MAP: &str = "configMap";
    /// A [downwardAPI](https://v1-30.docs.kubernetes.io/docs/concepts/storage/volumes/#downwardapi) volume.
    pub const DOWNWARD_API: &str = "downwardAPI";
    /// An [emptyDir](https://v1-30.docs.kubernetes.io/docs/concepts/storage/volumes/#emptydir) volume.
    pub const EMPTY_DIR: &str = "emptyDir";
    /// A [secret](https://v1-30.docs.kubernetes.io/docs/concepts/storage/volumes/#secret) volume.
    pub const SECRET: &str = "secret";
    /// A [local](https://v1-30.docs.kubernetes.io/docs/concepts/storage/volumes/#local) volume.
    pub const LOCAL: &str = "local";
}
