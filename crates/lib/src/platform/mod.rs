//! The immutable description of one build.
//!
//! A [`Target`] is constructed once from CLI flags plus host introspection
//! and never mutated afterwards; everything downstream (argument assembly,
//! output directory naming, the invocation plan) is a pure function of it.

pub mod arch;
pub mod os;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;

pub use arch::Arch;
pub use os::TargetOs;

/// Build configuration, selecting between development and official builds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildType {
  Debug,
  Release,
}

impl BuildType {
  /// Returns the capitalized name used in output directory paths
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Debug => "Debug",
      Self::Release => "Release",
    }
  }
}

impl FromStr for BuildType {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "debug" => Ok(Self::Debug),
      "release" => Ok(Self::Release),
      _ => Err(format!("unknown build type: {s} (expected debug or release)")),
    }
  }
}

impl fmt::Display for BuildType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Host toolchain driving the build
///
/// `Mingw` switches Windows builds from MSVC to the GNU toolchain and makes
/// the driver bootstrap its own GN binary first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Toolchain {
  Native,
  Mingw,
}

impl Toolchain {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Native => "native",
      Self::Mingw => "mingw",
    }
  }
}

impl FromStr for Toolchain {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "native" => Ok(Self::Native),
      "mingw" => Ok(Self::Mingw),
      _ => Err(format!("unknown toolchain: {s} (expected native or mingw)")),
    }
  }
}

impl fmt::Display for Toolchain {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Everything one build needs to know about what it is building
#[derive(Debug, Clone, Serialize)]
pub struct Target {
  pub build_type: BuildType,
  pub machine: Arch,
  pub os: TargetOs,
  pub toolchain: Toolchain,
  /// NDK location, required for Android targets only
  #[serde(skip_serializing_if = "Option::is_none")]
  pub ndk: Option<PathBuf>,
  /// Whether the orchestrator itself runs on Windows (selects `gn.exe` over `gn`)
  pub windows_host: bool,
}

impl Target {
  /// Returns the `<BuildType>-<target>-<machine>` triple naming the output directory
  pub fn triple(&self) -> String {
    format!("{}-{}-{}", self.build_type, self.os, self.machine)
  }

  pub fn is_mingw(&self) -> bool {
    self.toolchain == Toolchain::Mingw
  }
}

impl fmt::Display for Target {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.triple())
  }
}

/// Resolve the NDK location from the conventional environment variables
///
/// Checks `ANDROID_NDK_HOME` first, then `ANDROID_NDK`.
pub fn ndk_from_env() -> Option<PathBuf> {
  ["ANDROID_NDK_HOME", "ANDROID_NDK"]
    .iter()
    .find_map(|var| std::env::var_os(var).map(PathBuf::from))
}
