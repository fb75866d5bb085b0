//! Package descriptors ("barrels").
//!
//! A barrel is a declarative text file describing one package: metadata as
//! `key=value` lines and the `build`, `install` and `test` script bodies as
//! function blocks.
//!
//! ```
//! use fermenter_lib::descriptor::{Action, parse};
//!
//! let desc = parse(
//!   "pkgname=hello\nversion=1.0\ndesc=Greeter\narch=amd64\nsource=https://example.com/hello.tar.gz\n\
//!    build() { make }\ninstall() { make install }\ntest() { hello }\n",
//! )
//! .unwrap();
//! assert_eq!(desc.script(Action::Build), "make");
//! ```

mod load;
mod parse;
mod types;

pub use load::{LoadError, barrel_path, load, locate, readable_name};
pub use parse::{DescriptorError, parse};
pub use types::{Action, PackageDescriptor, UnknownAction};
