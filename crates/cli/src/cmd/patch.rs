//! Implementation of the `skbuild patch` command.
//!
//! Runs the GN header repair on its own, without building anything.

use std::path::Path;

use anyhow::{Context, Result};

use skbuild_lib::patch::{self, PatchOutcome};

use crate::output;

pub fn cmd_patch(root: &Path) -> Result<()> {
  let root =
    dunce::canonicalize(root).with_context(|| format!("checkout root not found: {}", root.display()))?;

  match patch::ensure_cstdint_include(&root)? {
    PatchOutcome::Patched => output::print_success("inserted <cstdint> include into gn header"),
    PatchOutcome::AlreadyPatched => output::print_info("gn header already includes <cstdint>"),
    PatchOutcome::Skipped => output::print_warning("gn header or anchor include not found, nothing patched"),
  }
  Ok(())
}
