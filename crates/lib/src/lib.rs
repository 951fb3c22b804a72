//! skbuild-lib: configuration and drive logic for building Skia with GN and Ninja
//!
//! This crate carries everything behind the `skbuild` binary:
//! - `platform`: the immutable target descriptor (build type, architecture, OS, toolchain)
//! - `gn`: typed GN argument assembly per target
//! - `patch`: in-place repair of a header in the vendored GN checkout
//! - `exec`: planned external process invocations with explicit working directories
//! - `driver`: the two-phase build sequence (optional GN bootstrap, then generate and compile)

pub mod consts;
pub mod driver;
pub mod error;
pub mod exec;
pub mod gn;
pub mod patch;
pub mod platform;
