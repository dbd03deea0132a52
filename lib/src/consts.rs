/// Brightness file watched when none is configured.
pub const DEFAULT_BRIGHTNESS_FILE: &str = "/sys/class/backlight/acpi_video0/brightness";

/// Display control tool invoked when none is configured.
pub const DEFAULT_TOOL: &str = "xrandr";

/// Output name handed to the display control tool when none is configured.
pub const DEFAULT_OUTPUT: &str = "eDP";

/// Largest value the brightness file is expected to hold.
pub const MAX_BRIGHTNESS: f64 = 99.0;

/// Offset added to the rescaled value before it is handed to the display tool.
pub const BRIGHTNESS_OFFSET: f64 = 0.15;

/// Directory under the user's config dir that holds our config file.
pub const CONFIG_DIR_NAME: &str = "brightsync";
