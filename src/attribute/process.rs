//! `process.*` attributes: an operating system process.

use opentelemetry::{Array, Key, KeyValue, StringValue, Value};

/// The command used to launch the process (i.e. the command name). On
/// Linux based systems, can be set to the zeroth string in
/// `proc/[pid]/cmdline`. On Windows, can be set to the first parameter
/// extracted from `GetCommandLineW`.
///
/// # Examples
///
/// - `"cmd/otelcol"`
pub const PROCESS_COMMAND: Key = Key::from_static_str("process.command");

/// Builds a [`KeyValue`] for [`PROCESS_COMMAND`].
pub fn process_command(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(PROCESS_COMMAND, value.into())
}

/// All the command arguments (including the command/executable itself) as
/// received by the process. On Linux-based systems (and some other
/// Unixoid systems supporting procfs), can be set according to the list
/// of null-delimited strings extracted from `proc/[pid]/cmdline`. For
/// libc-based executables, this would be the full argv vector passed to
/// `main`.
///
/// # Examples
///
/// - `["cmd/otecol", "--config=config.yaml"]`
pub const PROCESS_COMMAND_ARGS: Key = Key::from_static_str("process.command_args");

/// Builds a [`KeyValue`] for [`PROCESS_COMMAND_ARGS`].
pub fn process_command_args(value: Vec<StringValue>) -> KeyValue {
    KeyValue::new(PROCESS_COMMAND_ARGS, Value::Array(Array::String(value)))
}

/// The full command used to launch the process as a single string
/// representing the full command. On Windows, can be set to the result of
/// `GetCommandLineW`. Do not set this if you have to assemble it just for
/// monitoring; use `process.command_args` instead.
///
/// # Examples
///
/// - `"C:\\cmd\\otecol --config=\"my directory\\config.yaml\""`
pub const PROCESS_COMMAND_LINE: Key = Key::from_static_str("process.command_line");

/// Builds a [`KeyValue`] for [`PROCESS_COMMAND_LINE`].
pub fn process_command_line(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(PROCESS_COMMAND_LINE, value.into())
}

/// The date and time the process was created, in ISO 8601 format.
///
/// # Examples
///
/// - `"2023-11-21T09:25:34.853Z"`
pub const PROCESS_CREATION_TIME: Key = Key::from_static_str("process.creation.time");

/// Builds a [`KeyValue`] for [`PROCESS_CREATION_TIME`].
pub fn process_creation_time(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(PROCESS_CREATION_TIME, value.into())
}

/// The name of the process executable. On Linux based systems, this
/// SHOULD be set to the base name of the target of `/proc/[pid]/exe`. On
/// Windows, this SHOULD be set to the base name of `GetProcessImageFileNameW`.
///
/// # Examples
///
/// - `"otelcol"`
pub const PROCESS_EXECUTABLE_NAME: Key = Key::from_static_str("process.executable.name");

/// Builds a [`KeyValue`] for [`PROCESS_EXECUTABLE_NAME`].
pub fn process_executable_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(PROCESS_EXECUTABLE_NAME, value.into())
}

/// The full path to the process executable. On Linux based systems, can
/// be set to the target of `proc/[pid]/exe`. On Windows, can be set to
/// the result of `GetProcessImageFileNameW`.
///
/// # Examples
///
/// - `"/usr/bin/cmd/otelcol"`
pub const PROCESS_EXECUTABLE_PATH: Key = Key::from_static_str("process.executable.path");

/// Builds a [`KeyValue`] for [`PROCESS_EXECUTABLE_PATH`].
pub fn process_executable_path(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(PROCESS_EXECUTABLE_PATH, value.into())
}

/// The exit code of the process.
///
/// # Examples
///
/// - `127`
pub const PROCESS_EXIT_CODE: Key = Key::from_static_str("process.exit.code");

/// Builds a [`KeyValue`] for [`PROCESS_EXIT_CODE`].
pub fn process_exit_code(value: i64) -> KeyValue {
    KeyValue::new(PROCESS_EXIT_CODE, value)
}

/// The date and time the process exited, in ISO 8601 format.
///
/// # Examples
///
/// - `"2023-11-21T09:26:12.315Z"`
pub const PROCESS_EXIT_TIME: Key = Key::from_static_str("process.exit.time");

/// Builds a [`KeyValue`] for [`PROCESS_EXIT_TIME`].
pub fn process_exit_time(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(PROCESS_EXIT_TIME, value.into())
}

/// The PID of the process's group leader. This is also the process group
/// ID (PGID) of the process.
///
/// # Examples
///
/// - `23`
pub const PROCESS_GROUP_LEADER_PID: Key = Key::from_static_str("process.group_leader.pid");

/// Builds a [`KeyValue`] for [`PROCESS_GROUP_LEADER_PID`].
pub fn process_group_leader_pid(value: i64) -> KeyValue {
    KeyValue::new(PROCESS_GROUP_LEADER_PID, value)
}

/// Whether the process is connected to an interactive shell.
pub const PROCESS_INTERACTIVE: Key = Key::from_static_str("process.interactive");

/// Builds a [`KeyValue`] for [`PROCESS_INTERACTIVE`].
pub fn process_interactive(value: bool) -> KeyValue {
    KeyValue::new(PROCESS_INTERACTIVE, value)
}

/// The username of the user that owns the process.
///
/// # Examples
///
/// - `"root"`
pub const PROCESS_OWNER: Key = Key::from_static_str("process.owner");

/// Builds a [`KeyValue`] for [`PROCESS_OWNER`].
pub fn process_owner(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(PROCESS_OWNER, value.into())
}

/// Parent Process identifier (PPID).
///
/// # Examples
///
/// - `111`
pub const PROCESS_PARENT_PID: Key = Key::from_static_str("process.parent_pid");

/// Builds a [`KeyValue`] for [`PROCESS_PARENT_PID`].
pub fn process_parent_pid(value: i64) -> KeyValue {
    KeyValue::new(PROCESS_PARENT_PID, value)
}

/// Process identifier (PID).
///
/// # Examples
///
/// - `1234`
pub const PROCESS_PID: Key = Key::from_static_str("process.pid");

/// Builds a [`KeyValue`] for [`PROCESS_PID`].
pub fn process_pid(value: i64) -> KeyValue {
    KeyValue::new(PROCESS_PID, value)
}

/// An additional description about the runtime of the process, for
/// example a specific vendor customization of the runtime environment.
///
/// # Examples
///
/// - `"Eclipse OpenJ9 Eclipse OpenJ9 VM openj9-0.21.0"`
pub const PROCESS_RUNTIME_DESCRIPTION: Key = Key::from_static_str("process.runtime.description");

/// Builds a [`KeyValue`] for [`PROCESS_RUNTIME_DESCRIPTION`].
pub fn process_runtime_description(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(PROCESS_RUNTIME_DESCRIPTION, value.into())
}

/// The name of the runtime of this process.
///
/// # Examples
///
/// - `"OpenJDK Runtime Environment"`
pub const PROCESS_RUNTIME_NAME: Key = Key::from_static_str("process.runtime.name");

/// Builds a [`KeyValue`] for [`PROCESS_RUNTIME_NAME`].
pub fn process_runtime_name(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(PROCESS_RUNTIME_NAME, value.into())
}

/// The version of the runtime of this process, as returned by the
/// runtime without modification.
///
/// # Examples
///
/// - `"14.0.2"`
pub const PROCESS_RUNTIME_VERSION: Key = Key::from_static_str("process.runtime.version");

/// Builds a [`KeyValue`] for [`PROCESS_RUNTIME_VERSION`].
pub fn process_runtime_version(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(PROCESS_RUNTIME_VERSION, value.into())
}

/// Process title (proctitle).
///
/// In many Unix-like systems, process title (proctitle), is the string
/// that represents the name or command line of a running process,
/// displayed by system monitoring tools like ps, top, and htop.
///
/// # Examples
///
/// - `"cat /etc/hostname"`
/// - `"xfce4-session"`
/// - `"bash"`
pub const PROCESS_TITLE: Key = Key::from_static_str("process.title");

/// Builds a [`KeyValue`] for [`PROCESS_TITLE`].
pub fn process_title(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(PROCESS_TITLE, value.into())
}

/// The working directory of the process.
///
/// # Examples
///
/// - `"/root"`
pub const PROCESS_WORKING_DIRECTORY: Key = Key::from_static_str("process.working_directory");

/// Builds a [`KeyValue`] for [`PROCESS_WORKING_DIRECTORY`].
pub fn process_working_directory(value: impl Into<StringValue>) -> KeyValue {
    KeyValue::new(PROCESS_WORKING_DIRECTORY, value.into())
}
