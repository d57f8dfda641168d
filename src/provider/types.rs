//! Core data types for providers, variants and resolved layer configurations.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::keys;

/// A single layer option value.
///
/// Mirrors the loosely typed option values of web mapping widgets: strings,
/// numbers and booleans. Serializes untagged, so a JSON table reads the way
/// it is written (`19` stays a number, `"abcd"` stays a string).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Boolean flag (e.g. `retina`, `detectRetina`).
    Bool(bool),
    /// Integer value (e.g. zoom bounds).
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// String value (e.g. attribution HTML, subdomain letters).
    Str(String),
}

impl OptionValue {
    /// Truthiness in the sense of the option vocabulary this crate merges:
    /// `false`, `0`, `0.0` and the empty string are falsy, everything else
    /// is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            OptionValue::Bool(b) => *b,
            OptionValue::Int(i) => *i != 0,
            OptionValue::Float(f) => *f != 0.0,
            OptionValue::Str(s) => !s.is_empty(),
        }
    }

    /// Returns the string content if this value is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer content if this value is an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            OptionValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the boolean content if this value is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(b) => write!(f, "{}", b),
            OptionValue::Int(i) => write!(f, "{}", i),
            OptionValue::Float(v) => write!(f, "{}", v),
            OptionValue::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Int(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::Int(value as i64)
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        OptionValue::Int(value as i64)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Float(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Str(value.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Str(value)
    }
}

/// An ordered mapping from option name to value.
///
/// Backed by a `BTreeMap` so iteration, serialization and merges are
/// deterministic. Merges are shallow: the right-hand side wins on key
/// collision, all other keys persist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerOptions(BTreeMap<String, OptionValue>);

impl LayerOptions {
    /// Creates an empty option mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of options.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no options are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Looks up an option by key.
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.0.get(key)
    }

    /// Looks up a string option by key.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(OptionValue::as_str)
    }

    /// Returns `true` if the option is set to a truthy value.
    ///
    /// Missing options are falsy.
    pub fn is_truthy(&self, key: &str) -> bool {
        self.0.get(key).is_some_and(OptionValue::is_truthy)
    }

    /// Returns `true` if the option is set (truthy or not).
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Inserts or replaces an option.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Removes an option, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<OptionValue> {
        self.0.remove(key)
    }

    /// Builder-style insertion.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Shallow merge: every option in `other` is copied over this mapping,
    /// `other` winning on key collision.
    pub fn merge(&mut self, other: &LayerOptions) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Iterates over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates over option keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<OptionValue>> FromIterator<(K, V)> for LayerOptions {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A named override profile nested under a provider.
///
/// Either a plain value, merged into the options under the conventional
/// `variant` key, or a structured record replacing the URL and/or
/// overriding individual options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Variant {
    /// Plain value, merged as `{ variant: <value> }`.
    Value(String),
    /// Structured overrides.
    Overrides {
        /// Replacement URL template. Fully replaces the provider's URL.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
        /// Option overrides, shallow-merged over the provider's options.
        #[serde(default, skip_serializing_if = "LayerOptions::is_empty")]
        options: LayerOptions,
    },
}

impl Variant {
    /// Creates a structured variant with option overrides only.
    pub fn with_options(options: LayerOptions) -> Self {
        Variant::Overrides { url: None, options }
    }

    /// Creates a structured variant with a replacement URL and option
    /// overrides.
    pub fn with_url(url: impl Into<String>, options: LayerOptions) -> Self {
        Variant::Overrides {
            url: Some(url.into()),
            options,
        }
    }
}

impl From<&str> for Variant {
    fn from(value: &str) -> Self {
        Variant::Value(value.to_owned())
    }
}

impl From<String> for Variant {
    fn from(value: String) -> Self {
        Variant::Value(value)
    }
}

/// A named tile source definition: base URL template plus default options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    /// URL template with `{s}`, `{z}`, `{x}`, `{y}` and provider-specific
    /// placeholders such as `{variant}` or `{ext}`.
    pub url: String,
    /// Default layer options (zoom bounds, attribution, subdomains, ...).
    #[serde(default, skip_serializing_if = "LayerOptions::is_empty")]
    pub options: LayerOptions,
    /// Named override profiles.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub variants: BTreeMap<String, Variant>,
}

impl Provider {
    /// Creates a provider with the given URL template and no options.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            options: LayerOptions::new(),
            variants: BTreeMap::new(),
        }
    }

    /// Builder-style option insertion.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.options.insert(key, value);
        self
    }

    /// Builder-style replacement of the full option mapping.
    pub fn with_options(mut self, options: LayerOptions) -> Self {
        self.options = options;
        self
    }

    /// Builder-style variant registration.
    pub fn with_variant(mut self, name: impl Into<String>, variant: impl Into<Variant>) -> Self {
        self.variants.insert(name.into(), variant.into());
        self
    }
}

/// A fully resolved layer configuration.
///
/// The output of [`Resolver::resolve`](super::Resolver::resolve): a URL
/// template plus the merged option mapping, owned by the caller. The URL
/// still carries its placeholders; substituting them is the rendering
/// widget's job, though [`tile_url`](Self::tile_url) is available when the
/// host wants a concrete tile address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileLayerConfig {
    /// URL template for tile requests.
    pub url: String,
    /// Final merged options.
    pub options: LayerOptions,
}

impl TileLayerConfig {
    /// Expands the URL template for a concrete tile.
    ///
    /// Substitutes `{x}`, `{y}`, `{z}`, `{s}`, `{variant}`, `{ext}` and
    /// `{r}` from the tile coordinates and the resolved options:
    ///
    /// - `{s}` rotates through the `subdomains` letters by `(x + y) % n`,
    ///   defaulting to `"abc"`;
    /// - `{r}` becomes the `retina` option's string value when truthy,
    ///   otherwise the empty string;
    /// - `{variant}` and `{ext}` come from the options of the same name.
    pub fn tile_url(&self, x: u32, y: u32, zoom: u8) -> String {
        let subdomains = self.options.get_str(keys::SUBDOMAINS).unwrap_or("abc");
        let subdomain = pick_subdomain(subdomains, x, y);

        let retina = match self.options.get(keys::RETINA) {
            Some(value) if value.is_truthy() => value.as_str().unwrap_or(""),
            _ => "",
        };

        self.url
            .replace("{s}", subdomain)
            .replace("{z}", &zoom.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
            .replace("{r}", retina)
            .replace("{variant}", self.options.get_str(keys::VARIANT).unwrap_or(""))
            .replace("{ext}", self.options.get_str(keys::EXT).unwrap_or(""))
    }
}

/// Picks a subdomain letter by tile position, rotating through the
/// configured letters so requests spread across mirror hosts.
fn pick_subdomain(subdomains: &str, x: u32, y: u32) -> &str {
    let count = subdomains.chars().count();
    if count == 0 {
        return "";
    }
    let index = (x as usize + y as usize) % count;
    // Slice out the single character at `index`; subdomain letters are
    // ASCII in practice but char boundaries are respected regardless.
    let start = subdomains
        .char_indices()
        .nth(index)
        .map(|(i, _)| i)
        .unwrap_or(0);
    let end = subdomains[start..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| start + i)
        .unwrap_or(subdomains.len());
    &subdomains[start..end]
}
