//! `host.*` attributes: the host a resource runs on.

use opentelemetry::{Array, Key, KeyValue, StringValue, Value};

/// The CPU architecture the host system is running on.
pub const HOST_ARCH: Key = Key::from_static_str("host.arch");

/// Builds a [`KeyValue`] for [`HOST_ARCH`].
pub fn host_arch(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(HOST_ARCH, value.into())
}

/// Well-known values for [`HOST_ARCH`].
pub mod host_arch_values {
    /// AMD64.
    pub const AMD64: &str = "amd64";
    /// ARM32.
    pub const ARM32: &str = "arm32";
    /// ARM64.
    pub const ARM64: &str = "arm64";
    /// Itanium.
    pub const IA64: &str = "ia64";
    /// 32-bit PowerPC.
    pub const PPC32: &str = "ppc32";
    /// 64-bit PowerPC.
    pub const PPC64: &str = "ppc64";
    /// IBM z/Architecture.
    pub const S390X: &str = "s390x";
    /// 32-bit x86.
    pub const X86: &str = "x86";
}

/// The amount of level 2 memory cache available to the processor (in
/// Bytes).
///
/// # Examples
///
/// - `12288000`
pub const HOST_CPU_CACHE_L2_SIZE: Key = Key::from_static_str("host.cpu.cache.l2.size");

/// Builds a [`KeyValue`] for [`HOST_CPU_CACHE_L2_SIZE`].
pub fn host_cpu_cache_l2_size(value: i64) -> KeyValue {
    KeyValue::new(HOST_CPU_CACHE_L2_SIZE, value)
}

/// Family or generation of the CPU.
///
/// # Examples
///
/// - `"6"`
/// - `"PA-RISC 1.1e"`
pub const HOST_CPU_FAMILY: Key = Key::from_static_str("host.cpu.family");

/// Builds a [`KeyValue`] for [`HOST_CPU_FAMILY`].
pub fn host_cpu_family(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(HOST_CPU_FAMILY, value.into())
}

/// Model identifier. It provides more granular information about the CPU,
/// distinguishing it from other CPUs within the same family.
///
/// # Examples
///
/// - `"6"`
/// - `"9000/778/B180L"`
pub const HOST_CPU_MODEL_ID: Key = Key::from_static_str("host.cpu.model.id");

/// Builds a [`KeyValue`] for [`HOST_CPU_MODEL_ID`].
pub fn host_cpu_model_id(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(HOST_CPU_MODEL_ID, value.into())
}

/// Model designation of the processor.
///
/// # Examples
///
/// - `"11th Gen Intel(R) Core(TM) i7-1185G7 @ 3.00GHz"`
pub const HOST_CPU_MODEL_NAME: Key = Key::from_static_str("host.cpu.model.name");

/// Builds a [`KeyValue`] for [`HOST_CPU_MODEL_NAME`].
pub fn host_cpu_model_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(HOST_CPU_MODEL_NAME, value.into())
}

/// Stepping or core revisions.
///
/// # Examples
///
/// - `"1"`
/// - `"r1p1"`
pub const HOST_CPU_STEPPING: Key = Key::from_static_str("host.cpu.stepping");

/// Builds a [`KeyValue`] for [`HOST_CPU_STEPPING`].
pub fn host_cpu_stepping(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(HOST_CPU_STEPPING, value.into())
}

/// Processor manufacturer identifier. A maximum 12-character string.
///
/// [CPUID](https://wiki.osdev.org/CPUID) command returns the vendor ID
/// string in EBX, EDX and ECX registers. Writing these to memory in this
/// order results in a 12-character string.
///
/// # Examples
///
/// - `"GenuineIntel"`
pub const HOST_CPU_VENDOR_ID: Key = Key::from_static_str("host.cpu.vendor.id");

/// Builds a [`KeyValue`] for [`HOST_CPU_VENDOR_ID`].
pub fn host_cpu_vendor_id(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(HOST_CPU_VENDOR_ID, value.into())
}

/// Unique host ID. For Cloud, this must be the instance_id assigned by
/// the cloud provider. For non-containerized systems, this should be the
/// `machine-id`. See the table below for the sources to use to determine
/// the `machine-id` based on operating system.
///
/// # Examples
///
/// - `"fdbf79e8af94cb7f9e8df36789187052"`
pub const HOST_ID: Key = Key::from_static_str("host.id");

/// Builds a [`KeyValue`] for [`HOST_ID`].
pub fn host_id(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(HOST_ID, value.into())
}

/// VM image ID or host OS image ID. For Cloud, this value is from the
/// provider.
///
/// # Examples
///
/// - `"ami-07b06b442921831e5"`
pub const HOST_IMAGE_ID: Key = Key::from_static_str("host.image.id");

/// Builds a [`KeyValue`] for [`HOST_IMAGE_ID`].
pub fn host_image_id(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(HOST_IMAGE_ID, value.into())
}

/// Name of the VM image or OS install the host was instantiated from.
///
/// # Examples
///
/// - `"infra-ami-eks-worker-node-7d4ec78312"`
/// - `"CentOS-8-x86_64-1905"`
pub const HOST_IMAGE_NAME: Key = Key::from_static_str("host.image.name");

/// Builds a [`KeyValue`] for [`HOST_IMAGE_NAME`].
pub fn host_image_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(HOST_IMAGE_NAME, value.into())
}

/// The version string of the VM image or host OS as defined in [Version
/// Attributes](https://opentelemetry.io/docs/specs/semconv/resource/#version-attributes).
///
/// # Examples
///
/// - `"0.1"`
pub const HOST_IMAGE_VERSION: Key = Key::from_static_str("host.image.version");

/// Builds a [`KeyValue`] for [`HOST_IMAGE_VERSION`].
pub fn host_image_version(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(HOST_IMAGE_VERSION, value.into())
}

/// Available IP addresses of the host, excluding loopback interfaces.
///
/// IPv4 Addresses must be specified in dotted-quad notation. IPv6
/// addresses must be specified in the [RFC 5952](https://www.rfc-editor.org/rfc/rfc5952.html)
/// format.
///
/// # Examples
///
/// - `["192.168.1.140", "fe80::abc2:4a28:737a:609e"]`
pub const HOST_IP: Key = Key::from_static_str("host.ip");

/// Builds a [`KeyValue`] for [`HOST_IP`].
pub fn host_ip(value: Vec<StringValue>) -> KeyValue {
    KeyValue::new(HOST_IP, Value::Array(Array::String(value)))
}

/// Available MAC addresses of the host, excluding loopback interfaces.
///
/// MAC Addresses must be represented in [IEEE RA hexadecimal
/// form](https://standards.ieee.org/wp-content/uploads/import/documents/tutorials/eui.pdf):
/// as hyphen-separated octets in uppercase hexadecimal form from most to
/// least significant.
///
/// # Examples
///
/// - `["AC-DE-48-23-45-67", "AC-DE-48-23-45-67-01-9F"]`
pub const HOST_MAC: Key = Key::from_static_str("host.mac");

/// Builds a [`KeyValue`] for [`HOST_MAC`].
pub fn host_mac(value: Vec<StringValue>) -> KeyValue {
    KeyValue::new(HOST_MAC, Value::Array(Array::String(value)))
}

/// Name of the host. On Unix systems, it may contain what the hostname
/// command returns, or the fully qualified hostname, or another name
/// specified by the user.
///
/// # Examples
///
/// - `"opentelemetry-test"`
pub const HOST_NAME: Key = Key::from_static_str("host.name");

/// Builds a [`KeyValue`] for [`HOST_NAME`].
pub fn host_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(HOST_NAME, value.into())
}

/// Type of host. For Cloud, this must be the machine type.
///
/// # Examples
///
/// - `"n1-standard-1"`
pub const HOST_TYPE: Key = Key::from_static_str("host.type");

/// Builds a [`KeyValue`] for [`HOST_TYPE`].
pub fn host_type(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(HOST_TYPE, value.into())
}
