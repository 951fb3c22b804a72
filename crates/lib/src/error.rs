//! Error types for argument assembly and the build sequence.

use std::io;

use thiserror::Error;

/// Errors that can occur while assembling GN arguments or driving the build.
#[derive(Debug, Error)]
pub enum BuildError {
  /// The build runner was not found under any accepted name on PATH.
  #[error("ninja not found on PATH (tried `ninja` and `ninja.exe`)")]
  ToolNotFound,

  /// An external tool exited with a non-zero status.
  #[error("{program} failed with exit code {code:?}")]
  CommandFailed { program: String, code: Option<i32> },

  /// The Android target was selected without an NDK location.
  #[error("android builds need an NDK: pass --ndk or set ANDROID_NDK_HOME")]
  MissingNdk,

  /// I/O failure while patching or spawning.
  #[error("io error: {0}")]
  Io(#[from] io::Error),
}
