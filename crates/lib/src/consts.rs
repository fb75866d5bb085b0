//! Names and defaults shared across the crate.

/// Default install root when neither `--root` nor `FERMENTER_ROOT` is given.
pub const DEFAULT_INSTALL_ROOT: &str = "/usr/local/ferment";

/// Directory under the install root that holds one working directory per package.
pub const INSTALLED_DIR: &str = "Installed";

/// Default name of the barrel directory next to the executable.
pub const BARRELS_DIR: &str = "Barrels";

/// File extension of package descriptors inside the barrel directory.
pub const BARREL_EXTENSION: &str = "barrel";

pub const ROOT_ENV: &str = "FERMENTER_ROOT";
pub const BARRELS_ENV: &str = "FERMENTER_BARRELS";
