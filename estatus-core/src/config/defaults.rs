// Single source of truth for all default values.

// --- Backend ---
/// Events requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 200;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "error";
pub const DEFAULT_DEBUG: bool = false;
pub const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];
