use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// CPU architecture variants Skia is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
  X64,
  Arm64,
}

impl Arch {
  /// Detect the host CPU architecture at runtime
  pub fn current() -> Option<Self> {
    match std::env::consts::ARCH {
      "x86_64" => Some(Self::X64),
      "aarch64" => Some(Self::Arm64),
      _ => None,
    }
  }

  /// Returns the identifier GN expects in `target_cpu`
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::X64 => "x64",
      Self::Arm64 => "arm64",
    }
  }
}

impl FromStr for Arch {
  type Err = String;

  /// Accepts the aliases CI environments report (`AMD64`, `x86_64`, `aarch64`)
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "x64" | "x86_64" | "amd64" => Ok(Self::X64),
      "arm64" | "aarch64" => Ok(Self::Arm64),
      _ => Err(format!("unknown architecture: {s} (expected x64 or arm64)")),
    }
  }
}

impl fmt::Display for Arch {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}
