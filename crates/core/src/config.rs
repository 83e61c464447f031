//! Configuration constants for the displayer.

/// Key of the durable slot holding the saved presets.
pub const PRESET_SLOT_KEY: &str = "globalStylePresets";

/// Directory name under the platform config dir used for durable slots.
pub const APP_DIR_NAME: &str = "vf-displayer";

/// Font loaded when nothing else is requested.
pub const DEFAULT_FONT_URL: &str =
    "https://freight.cargo.site/m/P2070178689860556056872869598546/SenteiaVF.woff2";

/// Sample text shown before any style is applied.
pub const DEFAULT_TEXT: &str = "The quick brown fox jumps over the lazy dog";

/// Initial font size in pixels.
pub const DEFAULT_FONT_SIZE: u32 = 48;

/// Bounds of the font size slider, in pixels.
pub const FONT_SIZE_MIN: u32 = 12;
pub const FONT_SIZE_MAX: u32 = 72;

/// Prefix of the generated container element id.
pub const CONTAINER_ID_PREFIX: &str = "vf-displayer-";

/// Font name used when the URL has no usable path segment.
pub const FALLBACK_FONT_NAME: &str = "customFont";
