//! GN argument assembly.
//!
//! Builds the ordered `key=value` list handed to `gn gen` via `--args=`.
//! Arguments stay typed records until the invocation boundary, so assembly
//! logic is testable independently of string formatting. The list preserves
//! insertion order and is never deduplicated; GN applies later duplicates
//! over earlier ones.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::error::BuildError;
use crate::platform::{Arch, BuildType, Target, TargetOs, Toolchain};

/// A GN value together with its quoting kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GnValue {
  /// Bare `true`/`false`.
  Bool(bool),
  /// Double-quoted string.
  Str(String),
  /// List of compiler flags, rendered as `["-a", "-b"]`.
  Flags(Vec<String>),
}

impl fmt::Display for GnValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Bool(value) => write!(f, "{value}"),
      Self::Str(value) => write!(f, "\"{value}\""),
      Self::Flags(flags) => {
        write!(f, "[")?;
        for (i, flag) in flags.iter().enumerate() {
          if i > 0 {
            write!(f, ", ")?;
          }
          write!(f, "\"{flag}\"")?;
        }
        write!(f, "]")
      }
    }
  }
}

/// A single `key=value` GN argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GnArg {
  pub key: &'static str,
  pub value: GnValue,
}

impl fmt::Display for GnArg {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}={}", self.key, self.value)
  }
}

/// Ordered GN argument list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GnArgs(Vec<GnArg>);

impl GnArgs {
  fn push_bool(&mut self, key: &'static str, value: bool) {
    self.0.push(GnArg { key, value: GnValue::Bool(value) });
  }

  fn push_str(&mut self, key: &'static str, value: impl Into<String>) {
    self.0.push(GnArg { key, value: GnValue::Str(value.into()) });
  }

  fn push_flags(&mut self, key: &'static str, flags: &[&str]) {
    let flags = flags.iter().map(|flag| (*flag).to_string()).collect();
    self.0.push(GnArg { key, value: GnValue::Flags(flags) });
  }

  pub fn iter(&self) -> impl Iterator<Item = &GnArg> {
    self.0.iter()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn contains_key(&self, key: &str) -> bool {
    self.0.iter().any(|arg| arg.key == key)
  }

  /// Serialize to the flat space-joined string passed via `--args=`.
  pub fn to_arg_string(&self) -> String {
    let rendered: Vec<String> = self.0.iter().map(ToString::to_string).collect();
    rendered.join(" ")
  }
}

/// Assemble the GN argument list for a target.
///
/// Deterministic: the same descriptor always yields the same list in the
/// same order. Exactly one platform group is appended after the base and
/// universal options.
pub fn assemble(target: &Target) -> Result<GnArgs, BuildError> {
  let mut args = GnArgs::default();

  match target.build_type {
    BuildType::Debug => args.push_bool("is_debug", true),
    BuildType::Release => args.push_bool("is_official_build", true),
  }

  args.push_str("target_cpu", target.machine.as_str());

  // Vendored third-party copies instead of whatever the host provides, plus
  // the features every platform gets.
  args.push_bool("skia_use_system_expat", false);
  args.push_bool("skia_use_system_libjpeg_turbo", false);
  args.push_bool("skia_use_system_libpng", false);
  args.push_bool("skia_use_system_libwebp", false);
  args.push_bool("skia_use_system_zlib", false);
  args.push_bool("skia_use_sfntly", false);
  args.push_bool("skia_use_freetype", true);
  args.push_bool("skia_use_system_freetype2", false);
  args.push_bool("skia_use_system_harfbuzz", false);
  args.push_bool("skia_pdf_subset_harfbuzz", true);
  args.push_bool("skia_use_system_icu", false);
  args.push_bool("skia_enable_skottie", true);

  match target.os {
    TargetOs::Macos | TargetOs::Ios | TargetOs::IosSim => apple_args(&mut args, target),
    TargetOs::Linux => linux_args(&mut args, target.machine),
    TargetOs::Windows => windows_args(&mut args, target.toolchain),
    TargetOs::Android => android_args(&mut args, target.ndk.as_deref())?,
    TargetOs::Wasm => wasm_args(&mut args),
  }

  Ok(args)
}

fn apple_args(args: &mut GnArgs, target: &Target) {
  args.push_bool("skia_use_metal", true);
  args.push_flags("extra_cflags_cc", &["-frtti"]);

  match target.os {
    TargetOs::Ios | TargetOs::IosSim => {
      args.push_str("target_os", "ios");
      if target.os == TargetOs::IosSim {
        args.push_bool("ios_use_simulator", true);
      }
    }
    _ => match target.machine {
      Arch::Arm64 => args.push_flags("extra_cflags", &["-stdlib=libc++"]),
      // The x64 baseline keeps the 10.13 deployment floor.
      Arch::X64 => args.push_flags("extra_cflags", &["-stdlib=libc++", "-mmacosx-version-min=10.13"]),
    },
  }
}

fn linux_args(args: &mut GnArgs, machine: Arch) {
  match machine {
    Arch::Arm64 => {
      args.push_str("skia_gl_standard", "gles");
      args.push_flags(
        "extra_cflags_cc",
        &["-fno-exceptions", "-fno-rtti", "-flax-vector-conversions=all", "-D_GLIBCXX_USE_CXX11_ABI=0"],
      );
      args.push_str("cc", "clang");
      args.push_str("cxx", "clang++");
    }
    Arch::X64 => {
      args.push_flags("extra_cflags_cc", &["-fno-exceptions", "-fno-rtti", "-D_GLIBCXX_USE_CXX11_ABI=0"]);
      args.push_str("cc", "gcc-9");
      args.push_str("cxx", "g++-9");
    }
  }
}

fn windows_args(args: &mut GnArgs, toolchain: Toolchain) {
  match toolchain {
    Toolchain::Mingw => {
      args.push_flags(
        "extra_cflags_cc",
        &["-fno-exceptions", "-fno-rtti", "-D_GLIBCXX_USE_CXX11_ABI=0", "-fpermissive"],
      );
      args.push_str("cc", "gcc");
      args.push_str("cxx", "g++");
    }
    Toolchain::Native => {
      args.push_bool("skia_use_direct3d", true);
      args.push_flags("extra_cflags", &["-DSK_FONT_HOST_USE_SYSTEM_SETTINGS"]);
    }
  }
}

fn android_args(args: &mut GnArgs, ndk: Option<&Path>) -> Result<(), BuildError> {
  let ndk = ndk.ok_or(BuildError::MissingNdk)?;
  args.push_str("ndk", ndk.display().to_string());
  Ok(())
}

fn wasm_args(args: &mut GnArgs) {
  args.push_bool("skia_use_dng_sdk", false);
  args.push_bool("skia_use_libjpeg_turbo_decode", true);
  args.push_bool("skia_use_libjpeg_turbo_encode", true);
  args.push_bool("skia_use_libpng_decode", true);
  args.push_bool("skia_use_libpng_encode", true);
  args.push_bool("skia_use_libwebp_decode", true);
  args.push_bool("skia_use_libwebp_encode", true);
  args.push_bool("skia_use_wuffs", true);
  args.push_bool("skia_use_lua", false);
  args.push_bool("skia_use_webgl", true);
  args.push_bool("skia_use_piex", false);
  args.push_bool("skia_use_system_libpng", false);
  args.push_bool("skia_use_system_freetype2", false);
  args.push_bool("skia_use_system_libjpeg_turbo", false);
  args.push_bool("skia_use_system_libwebp", false);
  args.push_bool("skia_enable_tools", false);
  args.push_bool("skia_enable_fontmgr_custom_directory", false);
  args.push_bool("skia_enable_fontmgr_custom_embedded", true);
  args.push_bool("skia_enable_fontmgr_custom_empty", false);
  args.push_str("skia_gl_standard", "webgl");
  args.push_bool("skia_use_gl", true);
  args.push_bool("skia_enable_gpu", true);
  args.push_bool("skia_enable_svg", true);
  args.push_bool("skia_use_expat", true);
  args.push_flags("extra_cflags", &["-DSK_SUPPORT_GPU=1", "-DSK_GL", "-DSK_DISABLE_LEGACY_SHADERCONTEXT"]);
}
