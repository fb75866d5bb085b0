//! fermenter-lib: descriptors and the build-script interpreter for fermenter.
//!
//! A package is described by a barrel file: `key=value` metadata plus
//! `build()`, `install()` and `test()` script bodies. This crate provides:
//! - `descriptor`: locating and parsing barrels into a `PackageDescriptor`
//! - `environment`: the variable bindings a script sees
//! - `execute`: launching external programs behind the `Executor` trait
//! - `script`: compiling and interpreting script bodies
//! - `runner`: running one action of a package in its working directory
//! - `deps`: checking declared dependencies against `PATH`

pub mod consts;
pub mod deps;
pub mod descriptor;
pub mod environment;
pub mod execute;
pub mod platform;
pub mod runner;
pub mod script;
pub mod util;
