//! `cloud.*` attributes: the cloud environment a resource runs in.

use opentelemetry::{Key, KeyValue, StringValue};

/// The cloud account ID the resource is assigned to.
///
/// # Examples
///
/// - `"111111111111"`
/// - `"opentelemetry"`
pub const CLOUD_ACCOUNT_ID: Key = Key::from_static_str("cloud.account.id");

/// Builds a [`KeyValue`] for [`CLOUD_ACCOUNT_ID`].
pub fn cloud_account_id(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(CLOUD_ACCOUNT_ID, value.into())
}

/// Cloud regions often have multiple, isolated locations known as zones
/// to increase availability. Availability zone represents the zone where
/// the resource is running.
///
/// Availability zones are called "zones" on Alibaba Cloud and Google
/// Cloud.
///
/// # Examples
///
/// - `"us-east-1c"`
pub const CLOUD_AVAILABILITY_ZONE: Key = Key::from_static_str("cloud.availability_zone");

/// Builds a [`KeyValue`] for [`CLOUD_AVAILABILITY_ZONE`].
pub fn cloud_availability_zone(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(CLOUD_AVAILABILITY_ZONE, value.into())
}

/// The cloud platform in use.
///
/// The prefix of the service SHOULD match the one specified in
/// `cloud.provider`.
pub const CLOUD_PLATFORM: Key = Key::from_static_str("cloud.platform");

/// Builds a [`KeyValue`] for [`CLOUD_PLATFORM`].
pub fn cloud_platform(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(CLOUD_PLATFORM, value.into())
}

/// Well-known values for [`CLOUD_PLATFORM`].
pub mod cloud_platform_values {
    /// Alibaba Cloud Elastic Compute Service.
    pub const ALIBABA_CLOUD_ECS: &str = "alibaba_cloud_ecs";
    /// Alibaba Cloud Function Compute.
    pub const ALIBABA_CLOUD_FC: &str = "alibaba_cloud_fc";
    /// Red Hat OpenShift on Alibaba Cloud.
    pub const ALIBABA_CLOUD_OPENSHIFT: &str = "alibaba_cloud_openshift";
    /// AWS Elastic Compute Cloud.
    pub const AWS_EC2: &str = "aws_ec2";
    /// AWS Elastic Container Service.
    pub const AWS_ECS: &str = "aws_ecs";
    /// AWS Elastic Kubernetes Service.
    pub const AWS_EKS: &str = "aws_eks";
    /// AWS Lambda.
    pub const AWS_LAMBDA: &str = "aws_lambda";
    /// AWS Elastic Beanstalk.
    pub const AWS_ELASTIC_BEANSTALK: &str = "aws_elastic_beanstalk";
    /// AWS App Runner.
    pub const AWS_APP_RUNNER: &str = "aws_app_runner";
    /// Red Hat OpenShift on AWS (ROSA).
    pub const AWS_OPENSHIFT: &str = "aws_openshift";
    /// Azure Virtual Machines.
    pub const AZURE_VM: &str = "azure_vm";
    /// Azure Container Apps.
    pub const AZURE_CONTAINER_APPS: &str = "azure_container_apps";
    /// Azure Container Instances.
    pub const AZURE_CONTAINER_INSTANCES: &str = "azure_container_instances";
    /// Azure Kubernetes Service.
    pub const AZURE_AKS: &str = "azure_aks";
    /// Azure Functions.
    pub const AZURE_FUNCTIONS: &str = "azure_functions";
    /// Azure App Service.
    pub const AZURE_APP_SERVICE: &str = "azure_app_service";
    /// Azure Red Hat OpenShift.
    pub const AZURE_OPENSHIFT: &str = "azure_openshift";
    /// Google Bare Metal Solution (BMS).
    pub const GCP_BARE_METAL_SOLUTION: &str = "gcp_bare_metal_solution";
    /// Google Cloud Compute Engine (GCE).
    pub const GCP_COMPUTE_ENGINE: &str = "gcp_compute_engine";
    /// Google Cloud Run.
    pub const GCP_CLOUD_RUN: &str = "gcp_cloud_run";
    /// Google Cloud Kubernetes Engine (GKE).
    pub const GCP_KUBERNETES_ENGINE: &str = "gcp_kubernetes_engine";
    /// Google Cloud Functions (GCF).
    pub const GCP_CLOUD_FUNCTIONS: &str = "gcp_cloud_functions";
    /// Google Cloud App Engine (GAE).
    pub const GCP_APP_ENGINE: &str = "gcp_app_engine";
    /// Red Hat OpenShift on Google Cloud.
    pub const GCP_OPENSHIFT: &str = "gcp_openshift";
    /// Red Hat OpenShift on IBM Cloud.
    pub const IBM_CLOUD_OPENSHIFT: &str = "ibm_cloud_openshift";
    /// Compute on Oracle Cloud Infrastructure (OCI).
    pub const ORACLE_CLOUD_COMPUTE: &str = "oracle_cloud_compute";
    /// Kubernetes Engine (OKE) on Oracle Cloud Infrastructure (OCI).
    pub const ORACLE_CLOUD_OKE: &str = "oracle_cloud_oke";
    /// Tencent Cloud Cloud Virtual Machine (CVM).
    pub const TENCENT_CLOUD_CVM: &str = "tencent_cloud_cvm";
    /// Tencent Cloud Elastic Kubernetes Service (EKS).
    pub const TENCENT_CLOUD_EKS: &str = "tencent_cloud_eks";
    /// Tencent Cloud Serverless Cloud Function (SCF).
    pub const TENCENT_CLOUD_SCF: &str = "tencent_cloud_scf";
}

/// Name of the cloud provider.
pub const CLOUD_PROVIDER: Key = Key::from_static_str("cloud.provider");

/// Builds a [`KeyValue`] for [`CLOUD_PROVIDER`].
pub fn cloud_provider(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(CLOUD_PROVIDER, value.into())
}

/// Well-known values for [`CLOUD_PROVIDER`].
pub mod cloud_provider_values {
    /// Alibaba Cloud.
    pub const ALIBABA_CLOUD: &str = "alibaba_cloud";
    /// Amazon Web Services.
    pub const AWS: &str = "aws";
    /// Microsoft Azure.
    pub const AZURE: &str = "azure";
    /// Google Cloud Platform.
    pub const GCP: &str = "gcp";
    /// Heroku Platform as a Service.
    pub const HEROKU: &str = "heroku";
    /// IBM Cloud.
    pub const IBM_CLOUD: &str = "ibm_cloud";
    /// Oracle Cloud Infrastructure (OCI).
    pub const ORACLE_CLOUD: &str = "oracle_cloud";
    /// Tencent Cloud.
    pub const TENCENT_CLOUD: &str = "tencent_cloud";
}

/// The geographical region the resource is running.
///
/// Refer to your provider's docs to see the available regions, for
/// example [Alibaba Cloud regions](https://www.alibabacloud.com/help/doc-detail/40654.htm),
/// [AWS regions](https://aws.amazon.com/about-aws/global-infrastructure/regions_az/),
/// [Azure regions](https://azure.microsoft.com/global-infrastructure/geographies/),
/// [Google Cloud regions](https://cloud.google.com/about/locations), or
/// [Tencent Cloud regions](https://www.tencentcloud.com/document/product/213/6091).
///
/// # Examples
///
/// - `"us-central1"`
/// - `"us-east-1"`
pub const CLOUD_REGION: Key = Key::from_static_str("cloud.region");

/// Builds a [`KeyValue`] for [`CLOUD_REGION`].
pub fn cloud_region(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(CLOUD_REGION, value.into())
}

/// Cloud provider-specific native identifier of the monitored cloud
/// resource (e.g. an [ARN](https://docs.aws.amazon.com/general/latest/gr/aws-arns-and-namespaces.html)
/// on AWS, a [fully qualified resource ID](https://learn.microsoft.com/rest/api/resources/resources/get-by-id)
/// on Azure, a [full resource name](https://cloud.google.com/apis/design/resource_names#full_resource_name)
/// on GCP).
///
/// # Examples
///
/// - `"arn:aws:lambda:REGION:ACCOUNT_ID:function:my-function"`
/// - `"//run.googleapis.com/projects/PROJECT_ID/locations/LOCATION_ID/services/SERVICE_ID"`
/// - `"/subscriptions/<SUBSCRIPTION_GUID>/resourceGroups/<RG>/providers/Microsoft.Web/sites/<FUNCAPP>/functions/<FUNC>"`
pub const CLOUD_RESOURCE_ID: Key = Key::from_static_str("cloud.resource_id");

/// Builds a [`KeyValue`] for [`CLOUD_RESOURCE_ID`].
pub fn cloud_resource_id(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(CLOUD_RESOURCE_ID, value.into())
}
