//! Host detection and filesystem locations.

pub mod arch;
pub mod paths;

pub use arch::Arch;

/// Returns the architecture tag of the running host, if it has one.
pub fn host_arch() -> Option<Arch> {
  Arch::current()
}
