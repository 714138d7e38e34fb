//! `os.*` attributes: the operating system a resource runs on.

use opentelemetry::{Key, KeyValue, StringValue};

/// Unique identifier for a particular build or compilation of the
/// operating system.
///
/// # Examples
///
/// - `"TQ3C.230805.001.B2"`
/// - `"20E247"`
/// - `"22621"`
pub const OS_BUILD_ID: Key = Key::from_static_str("os.build_id");

/// Builds a [`KeyValue`] for [`OS_BUILD_ID`].
pub fn os_build_id(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(OS_BUILD_ID, value.into())
}

/// Human readable (not intended to be parsed) OS version information,
/// like e.g. reported by `ver` or `lsb_release -a` commands.
///
/// # Examples
///
/// - `"Microsoft Windows [Version 10.0.18363.778]"`
/// - `"Ubuntu 18.04.1 LTS"`
pub const OS_DESCRIPTION: Key = Key::from_static_str("os.description");

/// Builds a [`KeyValue`] for [`OS_DESCRIPTION`].
pub fn os_description(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(OS_DESCRIPTION, value.into())
}

/// Human readable operating system name.
///
/// # Examples
///
/// - `"iOS"`
/// - `"Android"`
/// - `"Ubuntu"`
pub const OS_NAME: Key = Key::from_static_str("os.name");

/// Builds a [`KeyValue`] for [`OS_NAME`].
pub fn os_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(OS_NAME, value.into())
}

/// The operating system type.
pub const OS_TYPE: Key = Key::from_static_str("os.type");

/// Builds a [`KeyValue`] for [`OS_TYPE`].
pub fn os_type(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(OS_TYPE, value.into())
}

/// Well-known values for [`OS_TYPE`].
pub mod os_type_values {
    /// Microsoft Windows.
    pub const WINDOWS: &str = "windows";
    /// Linux.
    pub const LINUX: &str = "linux";
    /// Apple Darwin.
    pub const DARWIN: &str = "darwin";
    /// FreeBSD.
    pub const FREEBSD: &str = "freebsd";
    /// NetBSD.
    pub const NETBSD: &str = "netbsd";
    /// OpenBSD.
    pub const OPENBSD: &str = "openbsd";
    /// DragonFly BSD.
    pub const DRAGONFLYBSD: &str = "dragonflybsd";
    /// HP-UX (Hewlett Packard Unix).
    pub const HPUX: &str = "hpux";
    /// AIX (Advanced Interactive eXecutive).
    pub const AIX: &str = "aix";
    /// SunOS, Oracle Solaris.
    pub const SOLARIS: &str = "solaris";
    /// IBM z/OS.
    pub const Z_OS: &str = "z_os";
}

/// The version string of the operating system as defined in [Version
/// Attributes](https://opentelemetry.io/docs/specs/semconv/resource/#version-attributes).
///
/// # Examples
///
/// - `"14.2.1"`
/// - `"18.04.1"`
pub const OS_VERSION: Key = Key::from_static_str("os.version");

/// Builds a [`KeyValue`] for [`OS_VERSION`].
pub fn os_version(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(OS_VERSION, value.into())
}
