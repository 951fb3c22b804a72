use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Target platform variants skbuild can configure Skia for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TargetOs {
  Macos,
  Ios,
  IosSim,
  Linux,
  Windows,
  Android,
  Wasm,
}

impl TargetOs {
  /// Default target for the host OS, for desktop builds without `--target`
  pub fn host_default() -> Option<Self> {
    match std::env::consts::OS {
      "linux" => Some(Self::Linux),
      "macos" => Some(Self::Macos),
      "windows" => Some(Self::Windows),
      _ => None,
    }
  }

  /// Returns the identifier used in output directory names
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Macos => "macos",
      Self::Ios => "ios",
      Self::IosSim => "iosSim",
      Self::Linux => "linux",
      Self::Windows => "windows",
      Self::Android => "android",
      Self::Wasm => "wasm",
    }
  }

  /// True for macOS and both iOS variants
  pub fn is_apple(&self) -> bool {
    matches!(self, Self::Macos | Self::Ios | Self::IosSim)
  }
}

impl FromStr for TargetOs {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "macos" => Ok(Self::Macos),
      "ios" => Ok(Self::Ios),
      "ios-sim" | "iossim" => Ok(Self::IosSim),
      "linux" => Ok(Self::Linux),
      "windows" => Ok(Self::Windows),
      "android" => Ok(Self::Android),
      "wasm" => Ok(Self::Wasm),
      _ => Err(format!(
        "unknown target: {s} (expected macos, ios, ios-sim, linux, windows, android or wasm)"
      )),
    }
  }
}

impl fmt::Display for TargetOs {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}
