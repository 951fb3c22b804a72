//! Names and locations fixed by the Skia checkout layout.

/// Directory of the Skia sources, relative to the checkout root.
pub const SKIA_DIR: &str = "skia";

/// Directory of the vendored GN sources, relative to the checkout root.
pub const GN_DIR: &str = "gn";

/// Accepted names for the build runner on PATH.
pub const NINJA_NAMES: [&str; 2] = ["ninja", "ninja.exe"];

/// Ninja targets requested after generation.
pub const NINJA_TARGETS: [&str; 2] = ["skia", "modules"];

/// Interpreter for the GN bootstrap script.
pub const PYTHON: &str = "python";

/// GN's own bootstrap entry point, relative to the GN source directory.
pub const BOOTSTRAP_SCRIPT: &str = "build/gen.py";

/// Header inside the vendored GN tree that misses `<cstdint>` on newer libstdc++.
pub const PATCH_HEADER: &str = "src/base/files/file_path.h";

/// Include line the patch inserts.
pub const CSTDINT_INCLUDE: &str = "#include <cstdint>";

/// Existing include line the inserted one goes after.
pub const PATCH_ANCHOR: &str = "#include <stddef.h>";
