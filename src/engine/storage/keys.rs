/// Permanent opt-out of endpoint validation.
pub const FALLBACK_STATE: &str = "fallback-state";
/// Remote content was shown at least once.
pub const SECONDARY_SHOWN: &str = "secondary-shown";
/// The one-time review prompt already fired.
pub const RATING_PROMPTED: &str = "rating-prompted";
/// Last validated address, base64-encoded.
pub const CACHED_RESOURCE_PATH: &str = "cached-resource-path";
/// Serialized cookie snapshot of the rendering surface.
pub const SAVED_COOKIE_JAR: &str = "saved-cookie-jar";
