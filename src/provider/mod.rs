//! Tile provider registry and resolution.
//!
//! This module holds the provider data model (URL templates, options,
//! variants), the registry value, and the resolver that assembles finished
//! layer configurations.
//!
//! # Resolution
//!
//! A [`Resolver`] wraps an immutable [`ProviderTable`] and resolves dotted
//! identifiers:
//!
//! ```
//! use tilesource::provider::{DisplayEnvironment, LayerOptions, OptionValue, Resolver};
//!
//! let resolver = Resolver::bundled();
//! let mut overrides = LayerOptions::new().with("maxZoom", 15);
//! let config = resolver
//!     .resolve("Stamen.Watercolor", &mut overrides, &DisplayEnvironment::default())
//!     .expect("bundled provider");
//!
//! assert_eq!(config.options.get_str("variant"), Some("watercolor"));
//! assert_eq!(config.options.get("maxZoom"), Some(&OptionValue::Int(15)));
//! ```

mod attribution;
mod defaults;
mod error;
pub mod keys;
mod resolver;
mod table;
mod types;

pub use error::ResolveError;
pub use resolver::{DisplayEnvironment, Resolver};
pub use table::ProviderTable;
pub use types::{LayerOptions, OptionValue, Provider, TileLayerConfig, Variant};
