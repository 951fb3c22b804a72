//! Subcommand implementations.

mod args;
mod build;
mod patch;

pub use args::cmd_args;
pub use build::cmd_build;
pub use patch::cmd_patch;

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Args;

use skbuild_lib::platform::{self, Arch, BuildType, Target, TargetOs, Toolchain};

/// Target selection flags shared by `build` and `args`.
#[derive(Args)]
pub struct TargetOpts {
  /// Build configuration
  #[arg(long, default_value = "release")]
  build_type: BuildType,

  /// Target CPU architecture (defaults to the host's)
  #[arg(long)]
  machine: Option<Arch>,

  /// Target platform (defaults to the host OS)
  #[arg(long)]
  target: Option<TargetOs>,

  /// Host toolchain
  #[arg(long, default_value = "native")]
  toolchain: Toolchain,

  /// Android NDK location (defaults to $ANDROID_NDK_HOME, then $ANDROID_NDK)
  #[arg(long)]
  ndk: Option<PathBuf>,

  /// Checkout root containing the skia/ and gn/ trees
  #[arg(long, default_value = ".")]
  pub root: PathBuf,
}

impl TargetOpts {
  /// Resolve the flags plus host introspection into the immutable descriptor.
  pub fn resolve(&self) -> Result<Target> {
    let machine = match self.machine {
      Some(machine) => machine,
      None => Arch::current()
        .ok_or_else(|| anyhow!("unsupported host architecture {}, pass --machine", std::env::consts::ARCH))?,
    };

    let os = match self.target {
      Some(os) => os,
      None => TargetOs::host_default()
        .ok_or_else(|| anyhow!("no default target for host os {}, pass --target", std::env::consts::OS))?,
    };

    let ndk = self.ndk.clone().or_else(platform::ndk_from_env);

    Ok(Target {
      build_type: self.build_type,
      machine,
      os,
      toolchain: self.toolchain,
      ndk,
      windows_host: cfg!(windows),
    })
  }
}
