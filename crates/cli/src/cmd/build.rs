//! Implementation of the `skbuild build` command.
//!
//! The full orchestration: assemble GN arguments, locate the build runner,
//! repair the vendored GN header, then generate and compile.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::info;

use skbuild_lib::driver::BuildDriver;
use skbuild_lib::gn;
use skbuild_lib::patch::{self, PatchOutcome};

use super::TargetOpts;
use crate::output;

pub fn cmd_build(opts: &TargetOpts, dry_run: bool) -> Result<()> {
  let target = opts.resolve()?;
  let root = dunce::canonicalize(&opts.root)
    .with_context(|| format!("checkout root not found: {}", opts.root.display()))?;
  info!(target = %target, root = %root.display(), "resolved build target");

  let args = gn::assemble(&target).context("failed to assemble gn arguments")?;

  // Runner discovery comes first: a missing toolchain must fail the run
  // before the patch touches anything.
  let driver = BuildDriver::new(&root, target.clone())?;

  if dry_run {
    for step in driver.plan(&args) {
      println!("{step}");
    }
    return Ok(());
  }

  match patch::ensure_cstdint_include(&root)? {
    PatchOutcome::Patched => output::print_info("patched gn header with <cstdint> include"),
    PatchOutcome::AlreadyPatched => {}
    PatchOutcome::Skipped => output::print_warning("gn header not patched (file or anchor missing)"),
  }

  output::print_info(&format!("building {} into {}", target, driver.out_dir().display()));

  let started = Instant::now();
  driver.run(&args).context("build failed")?;

  let elapsed = Duration::from_secs(started.elapsed().as_secs());
  output::print_success(&format!("build finished in {}", humantime::format_duration(elapsed)));
  Ok(())
}
