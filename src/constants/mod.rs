//! Application constant strings.

// Storage errors
pub const ERR_STORE_POISONED: &str = "Storage lock poisoned";

// Legacy check endpoint payload
pub const CHECK_STATUS: &str = "Success";
