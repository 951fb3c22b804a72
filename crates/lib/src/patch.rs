//! In-place repair of the vendored GN checkout.
//!
//! Newer libstdc++ releases stopped pulling `<cstdint>` in transitively,
//! which breaks `base/files/file_path.h` in the GN tree Skia vendors.
//! Rather than forking GN, the missing include is inserted on the fly
//! before the build.

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::consts::{CSTDINT_INCLUDE, GN_DIR, PATCH_ANCHOR, PATCH_HEADER};
use crate::error::BuildError;

/// What the patch step did to the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
  /// The include was inserted and the file rewritten.
  Patched,
  /// The file already carries the include; nothing was written.
  AlreadyPatched,
  /// The file or its anchor line was not found; the build continues.
  Skipped,
}

/// Ensure the GN header includes `<cstdint>`.
///
/// Inserts the include directly after the `#include <stddef.h>` line and
/// rewrites the file in place. Idempotent, and writes at most once per
/// invocation. A missing file or anchor is logged and tolerated so
/// checkouts with an already-fixed GN keep building.
pub fn ensure_cstdint_include(root: &Path) -> Result<PatchOutcome, BuildError> {
  let path = root.join(GN_DIR).join(PATCH_HEADER);
  if !path.exists() {
    warn!(path = %path.display(), "gn header not found, skipping patch");
    return Ok(PatchOutcome::Skipped);
  }

  let content = fs::read_to_string(&path)?;
  if content.contains(CSTDINT_INCLUDE) {
    debug!(path = %path.display(), "gn header already includes <cstdint>");
    return Ok(PatchOutcome::AlreadyPatched);
  }

  let Some(anchor_at) = content.find(PATCH_ANCHOR) else {
    warn!(path = %path.display(), "anchor include not found, skipping patch");
    return Ok(PatchOutcome::Skipped);
  };

  // Splice the include in right after the anchor's line ending.
  let line_end = match content[anchor_at..].find('\n') {
    Some(offset) => anchor_at + offset + 1,
    None => content.len(),
  };

  let mut patched = String::with_capacity(content.len() + CSTDINT_INCLUDE.len() + 2);
  patched.push_str(&content[..line_end]);
  if !patched.ends_with('\n') {
    patched.push('\n');
  }
  patched.push_str(CSTDINT_INCLUDE);
  patched.push('\n');
  patched.push_str(&content[line_end..]);

  fs::write(&path, patched)?;
  info!(path = %path.display(), "inserted <cstdint> include into gn header");
  Ok(PatchOutcome::Patched)
}

#[cfg(test)]
mod tests {
  use tempfile::TempDir;

  use super::*;

  const UNPATCHED: &str = "\
// Copyright 2014 The Chromium Authors. All rights reserved.\n\
#include <stddef.h>\n\
#include <string>\n\
#include <vector>\n";

  fn checkout_with_header(content: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    let header = temp.path().join(GN_DIR).join(PATCH_HEADER);
    fs::create_dir_all(header.parent().unwrap()).unwrap();
    fs::write(header, content).unwrap();
    temp
  }

  fn header_content(root: &Path) -> String {
    fs::read_to_string(root.join(GN_DIR).join(PATCH_HEADER)).unwrap()
  }

  #[test]
  fn inserts_include_after_anchor() {
    let temp = checkout_with_header(UNPATCHED);
    let outcome = ensure_cstdint_include(temp.path()).unwrap();
    assert_eq!(outcome, PatchOutcome::Patched);

    let content = header_content(temp.path());
    let stddef_at = content.find("#include <stddef.h>").unwrap();
    let cstdint_at = content.find("#include <cstdint>").unwrap();
    assert!(cstdint_at > stddef_at, "cstdint include must follow the anchor");
    assert!(content.contains("#include <stddef.h>\n#include <cstdint>\n#include <string>"));
  }

  #[test]
  fn patch_is_idempotent() {
    // A second run reports AlreadyPatched and leaves the file byte-identical
    let temp = checkout_with_header(UNPATCHED);
    ensure_cstdint_include(temp.path()).unwrap();
    let after_first = header_content(temp.path());

    let outcome = ensure_cstdint_include(temp.path()).unwrap();
    assert_eq!(outcome, PatchOutcome::AlreadyPatched);
    assert_eq!(header_content(temp.path()), after_first);
  }

  #[test]
  fn never_rewrites_an_already_fixed_header() {
    let fixed = "#include <stddef.h>\n#include <cstdint>\n#include <string>\n";
    let temp = checkout_with_header(fixed);
    let outcome = ensure_cstdint_include(temp.path()).unwrap();
    assert_eq!(outcome, PatchOutcome::AlreadyPatched);
    assert_eq!(header_content(temp.path()), fixed);
  }

  #[test]
  fn missing_header_is_tolerated() {
    let temp = TempDir::new().unwrap();
    let outcome = ensure_cstdint_include(temp.path()).unwrap();
    assert_eq!(outcome, PatchOutcome::Skipped);
  }

  #[test]
  fn missing_anchor_leaves_file_untouched() {
    let odd = "#include <string>\n#include <vector>\n";
    let temp = checkout_with_header(odd);
    let outcome = ensure_cstdint_include(temp.path()).unwrap();
    assert_eq!(outcome, PatchOutcome::Skipped);
    assert_eq!(header_content(temp.path()), odd);
  }

  #[test]
  fn anchor_on_final_unterminated_line_still_patches() {
    let temp = checkout_with_header("#include <stddef.h>");
    let outcome = ensure_cstdint_include(temp.path()).unwrap();
    assert_eq!(outcome, PatchOutcome::Patched);
    assert_eq!(header_content(temp.path()), "#include <stddef.h>\n#include <cstdint>\n");
  }
}
