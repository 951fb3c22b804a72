//! Two-phase external build driver.
//!
//! Phase one only exists for MinGW hosts: GN has no prebuilt binary for that
//! toolchain, so it is bootstrapped from its own source tree first. Phase two
//! runs `gn gen` against the Skia tree and then ninja on the generated build
//! directory.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;
use which::which;

use crate::consts::{BOOTSTRAP_SCRIPT, GN_DIR, NINJA_NAMES, NINJA_TARGETS, PYTHON, SKIA_DIR};
use crate::error::BuildError;
use crate::exec::Invocation;
use crate::gn::GnArgs;
use crate::platform::Target;

/// Drives the build for one target.
///
/// Construction resolves the build runner and snapshots the environment;
/// the invocation sequence itself is computed by [`BuildDriver::plan`] and
/// executed in order by [`BuildDriver::run`].
pub struct BuildDriver {
  root: PathBuf,
  target: Target,
  ninja: PathBuf,
  env: Vec<(OsString, OsString)>,
}

impl BuildDriver {
  /// Locate ninja and capture the environment.
  ///
  /// Runner discovery happens here, before any other side effect, so a
  /// missing toolchain fails the run before any file is touched.
  pub fn new(root: impl Into<PathBuf>, target: Target) -> Result<Self, BuildError> {
    let ninja = locate_ninja()?;
    debug!(ninja = %ninja.display(), "located build runner");

    Ok(Self { root: root.into(), target, ninja, env: env::vars_os().collect() })
  }

  /// The generated build directory, relative to the Skia tree.
  pub fn out_dir(&self) -> PathBuf {
    Path::new("out").join(self.target.triple())
  }

  /// Resolved path of the build runner.
  pub fn ninja(&self) -> &Path {
    &self.ninja
  }

  fn gn_executable(&self) -> &'static str {
    if self.target.windows_host { "gn.exe" } else { "gn" }
  }

  /// Path of the GN binary to generate with.
  ///
  /// MinGW runs use the freshly bootstrapped binary out of the GN tree;
  /// everything else uses the one vendored in the Skia checkout.
  fn gn_path(&self) -> PathBuf {
    if self.target.is_mingw() {
      self
        .root
        .join(GN_DIR)
        .join("out")
        .join(self.target.machine.as_str())
        .join(self.gn_executable())
    } else {
      self.root.join(SKIA_DIR).join("bin").join(self.gn_executable())
    }
  }

  /// Plan every invocation for this build, in execution order.
  ///
  /// Pure with respect to the filesystem: nothing is spawned and nothing is
  /// checked for existence, so plans can be inspected and tested directly.
  pub fn plan(&self, args: &GnArgs) -> Vec<Invocation> {
    let mut steps = Vec::new();
    let gn_src = self.root.join(GN_DIR);
    let skia = self.root.join(SKIA_DIR);

    if self.target.is_mingw() {
      let bootstrap_out = format!("out/{}", self.target.machine.as_str());
      steps.push(
        Invocation::new(PYTHON, &gn_src)
          .arg(BOOTSTRAP_SCRIPT)
          .arg(format!("--out-path={bootstrap_out}"))
          .arg("--platform=mingw"),
      );
      steps.push(Invocation::new(&self.ninja, &gn_src).arg("-C").arg(bootstrap_out));
    }

    let out = self.out_dir();
    steps.push(
      Invocation::new(self.gn_path(), &skia)
        .arg("gen")
        .arg(&out)
        .arg(format!("--args={}", args.to_arg_string())),
    );

    let mut compile = Invocation::new(&self.ninja, &skia).arg("-C").arg(&out);
    for ninja_target in NINJA_TARGETS {
      compile = compile.arg(ninja_target);
    }
    steps.push(compile);

    steps
  }

  /// Execute the plan in order, stopping at the first failure.
  pub fn run(&self, args: &GnArgs) -> Result<(), BuildError> {
    for step in self.plan(args) {
      step.run(&self.env)?;
    }
    Ok(())
  }
}

/// Find the build runner on PATH under its accepted names.
fn locate_ninja() -> Result<PathBuf, BuildError> {
  NINJA_NAMES.iter().find_map(|name| which(name).ok()).ok_or(BuildError::ToolNotFound)
}
