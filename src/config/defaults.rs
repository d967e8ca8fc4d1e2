//! Default configuration values

/// Menu file name
pub const MENU_FILE_NAME: &str = "keynav.toml";

/// Per-user configuration directory name (under the platform config dir)
pub const CONFIG_DIR_NAME: &str = "keynav";

/// Default title shown in the navigator header
pub const DEFAULT_TITLE: &str = "KeyNav";

/// Default editor command for `open_editor` actions
pub const DEFAULT_EDITOR: &str = "code";

/// Separator between breadcrumb segments
pub const BREADCRUMB_SEPARATOR: &str = " > ";

/// Minimum proptest iterations
pub const MIN_PROPTEST_ITERATIONS: u32 = 100;
