//! Well-known layer option keys.
//!
//! The options map is open-ended (the rendering widget defines the full
//! vocabulary); these constants name the keys the resolver itself reads or
//! writes, plus the common zoom-bound keys used throughout the bundled
//! table.

/// Attribution HTML shown alongside the layer.
pub const ATTRIBUTION: &str = "attribution";

/// Caller flag requesting automatic high-density display detection.
pub const DETECT_RETINA: &str = "detectRetina";

/// File extension substituted into `{ext}` URL placeholders.
pub const EXT: &str = "ext";

/// Maximum zoom level the provider serves.
pub const MAX_ZOOM: &str = "maxZoom";

/// Minimum zoom level the provider serves.
pub const MIN_ZOOM: &str = "minZoom";

/// Marker that the provider serves high-density tile variants.
pub const RETINA: &str = "retina";

/// Subdomain letters substituted into `{s}` URL placeholders.
pub const SUBDOMAINS: &str = "subdomains";

/// Variant path segment substituted into `{variant}` URL placeholders.
pub const VARIANT: &str = "variant";
