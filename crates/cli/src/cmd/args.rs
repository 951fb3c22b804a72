//! Implementation of the `skbuild args` command.
//!
//! Prints the assembled GN argument list without touching the checkout or
//! spawning anything.

use anyhow::{Context, Result};
use serde_json::json;

use skbuild_lib::gn;

use super::TargetOpts;
use crate::output::OutputFormat;

pub fn cmd_args(opts: &TargetOpts, format: OutputFormat) -> Result<()> {
  let target = opts.resolve()?;
  let args = gn::assemble(&target).context("failed to assemble gn arguments")?;

  if format.is_json() {
    let doc = json!({
      "target": target,
      "args": args,
    });
    println!("{}", serde_json::to_string_pretty(&doc).context("failed to serialize arguments")?);
    return Ok(());
  }

  for arg in args.iter() {
    println!("{arg}");
  }
  Ok(())
}
