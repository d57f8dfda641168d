//! TileSource - map tile provider registry and layer configuration resolver
//!
//! This library provides a static registry of map-tile provider definitions
//! (URL templates, attribution HTML, zoom bounds, variant overrides) and a
//! resolution routine that turns a dotted `"Provider.Variant"` identifier
//! plus caller overrides into a finished tile-layer configuration. It does
//! no networking, rendering, or caching itself; the output is a plain
//! configuration value for whatever tile-rendering widget the host uses.
//!
//! # High-Level API
//!
//! ```
//! use tilesource::provider::{DisplayEnvironment, LayerOptions, Resolver};
//!
//! let resolver = Resolver::bundled();
//! let mut overrides = LayerOptions::new();
//! let config = resolver
//!     .resolve("OpenStreetMap.France", &mut overrides, &DisplayEnvironment::default())
//!     .expect("bundled provider");
//!
//! assert!(config.url.contains("{z}"));
//! assert!(!config.options.get_str("attribution").unwrap().contains("{attribution."));
//! ```

pub mod provider;

/// Version of the TileSource library.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
