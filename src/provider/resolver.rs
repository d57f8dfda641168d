//! Provider identifier resolution.
//!
//! Implements the pipeline that turns a dotted `"Provider.Variant"`
//! identifier plus caller overrides into a finished [`TileLayerConfig`]:
//! provider lookup, variant override merge, retina adjustment, attribution
//! placeholder expansion, and the final merge with the caller's options.

use super::attribution;
use super::error::ResolveError;
use super::keys;
use super::table::ProviderTable;
use super::types::{LayerOptions, TileLayerConfig, Variant};

/// Ambient display capability supplied by the host.
///
/// The host widget decides whether the display is high-density and passes
/// the answer in; the resolver never probes the environment itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayEnvironment {
    /// Whether the display is high-density ("retina").
    pub retina: bool,
}

impl DisplayEnvironment {
    /// Creates an environment with the given high-density capability.
    pub fn new(retina: bool) -> Self {
        Self { retina }
    }
}

/// Resolves provider identifiers against an immutable provider table.
///
/// The table is injected at construction and never mutated; a resolver is
/// safe to share across any number of concurrent readers.
#[derive(Debug, Clone)]
pub struct Resolver {
    table: ProviderTable,
}

impl Resolver {
    /// Creates a resolver over a caller-supplied table.
    pub fn new(table: ProviderTable) -> Self {
        Self { table }
    }

    /// Creates a resolver over the bundled provider set.
    pub fn bundled() -> Self {
        Self::new(ProviderTable::bundled())
    }

    /// Returns the table this resolver reads from.
    pub fn table(&self) -> &ProviderTable {
        &self.table
    }

    /// Resolves an identifier of the form `"Provider"` or
    /// `"Provider.Variant"` into a layer configuration.
    ///
    /// `overrides` are the caller's options, applied last and winning on
    /// any key collision. They are taken mutably because of one documented
    /// side effect: when the provider serves its own high-density tiles
    /// (`retina` truthy), the caller requested automatic detection
    /// (`detectRetina` truthy) and `env` reports a high-density display,
    /// `detectRetina` is switched off in `overrides` so the generic
    /// detection does not double-apply. In every other case the provider's
    /// `retina` option is cleared instead and `overrides` is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// [`ResolveError::UnknownProvider`] if the provider segment (or a
    /// provider referenced from an attribution placeholder) is not in the
    /// table; [`ResolveError::UnknownVariant`] if the variant segment
    /// names no variant of the provider; [`ResolveError::CyclicAttribution`]
    /// if attribution references form a cycle.
    pub fn resolve(
        &self,
        identifier: &str,
        overrides: &mut LayerOptions,
        env: &DisplayEnvironment,
    ) -> Result<TileLayerConfig, ResolveError> {
        // Split on the first '.'; an empty variant segment ("Provider.")
        // behaves as if no variant was named.
        let (provider_name, variant_name) = match identifier.split_once('.') {
            Some((name, variant)) if !variant.is_empty() => (name, Some(variant)),
            Some((name, _)) => (name, None),
            None => (identifier, None),
        };

        let provider = self
            .table
            .get(provider_name)
            .ok_or_else(|| ResolveError::UnknownProvider(provider_name.to_owned()))?;

        let mut url = provider.url.clone();
        let mut options = provider.options.clone();

        if let Some(variant_name) = variant_name {
            let variant = provider.variants.get(variant_name).ok_or_else(|| {
                ResolveError::UnknownVariant {
                    provider: provider_name.to_owned(),
                    variant: variant_name.to_owned(),
                }
            })?;
            match variant {
                Variant::Value(value) => {
                    options.insert(keys::VARIANT, value.as_str());
                }
                Variant::Overrides {
                    url: variant_url,
                    options: variant_options,
                } => {
                    options.merge(variant_options);
                    if let Some(variant_url) = variant_url {
                        url = variant_url.clone();
                    }
                }
            }
        }

        // Asymmetric: auto-detection is switched off in the caller's
        // overrides when the provider already serves high-density tiles on
        // a high-density display; otherwise the provider's own flag is
        // cleared and the overrides stay untouched.
        if options.is_truthy(keys::RETINA) {
            if overrides.is_truthy(keys::DETECT_RETINA) && env.retina {
                overrides.insert(keys::DETECT_RETINA, false);
            } else {
                options.insert(keys::RETINA, "");
            }
        }

        let expanded = match options.get_str(keys::ATTRIBUTION) {
            Some(attr) => Some(attribution::expand(&self.table, attr)?),
            None => None,
        };
        if let Some(expanded) = expanded {
            options.insert(keys::ATTRIBUTION, expanded);
        }

        options.merge(overrides);

        tracing::debug!(
            provider = %provider_name,
            variant = ?variant_name,
            url = %url,
            "Resolved tile provider"
        );

        Ok(TileLayerConfig { url, options })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::types::{OptionValue, Provider};

    fn test_table() -> ProviderTable {
        ProviderTable::new()
            .with(
                "Plain",
                Provider::new("https://{s}.plain.example/{z}/{x}/{y}.png")
                    .with_option(keys::MAX_ZOOM, 19)
                    .with_option(keys::ATTRIBUTION, "© Plain"),
            )
            .with(
                "Styled",
                Provider::new("https://styled.example/{variant}/{z}/{x}/{y}.{ext}")
                    .with_option(keys::MAX_ZOOM, 18)
                    .with_option(keys::VARIANT, "default")
                    .with_option(keys::EXT, "png")
                    .with_option(keys::ATTRIBUTION, "{attribution.Plain}, styled")
                    .with_variant("Night", "night")
                    .with_variant(
                        "Print",
                        Variant::with_options(
                            LayerOptions::new()
                                .with(keys::VARIANT, "print")
                                .with(keys::MAX_ZOOM, 12),
                        ),
                    )
                    .with_variant(
                        "Mirror",
                        Variant::with_url(
                            "https://mirror.example/{variant}/{z}/{x}/{y}.{ext}",
                            LayerOptions::new().with(keys::VARIANT, "mirror"),
                        ),
                    ),
            )
            .with(
                "Dense",
                Provider::new("https://dense.example/{z}/{x}/{y}{r}.png")
                    .with_option(keys::RETINA, "@2x")
                    .with_option(keys::ATTRIBUTION, "© Dense"),
            )
    }

    fn resolve(identifier: &str) -> Result<TileLayerConfig, ResolveError> {
        Resolver::new(test_table()).resolve(
            identifier,
            &mut LayerOptions::new(),
            &DisplayEnvironment::default(),
        )
    }

    #[test]
    fn test_bare_provider_keeps_base_url_and_options() {
        let config = resolve("Plain").unwrap();

        assert_eq!(config.url, "https://{s}.plain.example/{z}/{x}/{y}.png");
        assert_eq!(config.options.get("maxZoom"), Some(&OptionValue::Int(19)));
        assert_eq!(config.options.get_str("attribution"), Some("© Plain"));
    }

    #[test]
    fn test_unknown_provider_fails() {
        let err = resolve("NoSuchProvider").unwrap_err();
        assert_eq!(err, ResolveError::UnknownProvider("NoSuchProvider".to_owned()));
    }

    #[test]
    fn test_unknown_variant_fails() {
        let err = resolve("Styled.NoSuchVariant").unwrap_err();
        assert_eq!(
            err,
            ResolveError::UnknownVariant {
                provider: "Styled".to_owned(),
                variant: "NoSuchVariant".to_owned(),
            }
        );
    }

    #[test]
    fn test_variant_on_provider_without_variants_fails() {
        let err = resolve("Plain.Anything").unwrap_err();
        assert!(matches!(err, ResolveError::UnknownVariant { .. }));
    }

    #[test]
    fn test_plain_string_variant_merges_under_variant_key() {
        let config = resolve("Styled.Night").unwrap();

        assert_eq!(config.options.get_str("variant"), Some("night"));
        // Base options persist.
        assert_eq!(config.options.get("maxZoom"), Some(&OptionValue::Int(18)));
        assert_eq!(config.options.get_str("ext"), Some("png"));
    }

    #[test]
    fn test_structured_variant_options_win_on_collision() {
        let config = resolve("Styled.Print").unwrap();

        assert_eq!(config.options.get_str("variant"), Some("print"));
        assert_eq!(config.options.get("maxZoom"), Some(&OptionValue::Int(12)));
        // Untouched base option persists.
        assert_eq!(config.options.get_str("ext"), Some("png"));
    }

    #[test]
    fn test_variant_url_fully_replaces_base_url() {
        let config = resolve("Styled.Mirror").unwrap();
        assert_eq!(config.url, "https://mirror.example/{variant}/{z}/{x}/{y}.{ext}");
    }

    #[test]
    fn test_trailing_dot_behaves_as_no_variant() {
        let config = resolve("Styled.").unwrap();
        assert_eq!(config.options.get_str("variant"), Some("default"));
    }

    #[test]
    fn test_attribution_tokens_are_expanded() {
        let config = resolve("Styled").unwrap();
        assert_eq!(config.options.get_str("attribution"), Some("© Plain, styled"));
    }

    #[test]
    fn test_overrides_win_over_everything() {
        let mut overrides = LayerOptions::new()
            .with(keys::MAX_ZOOM, 5)
            .with(keys::ATTRIBUTION, "mine");
        let config = Resolver::new(test_table())
            .resolve("Plain", &mut overrides, &DisplayEnvironment::default())
            .unwrap();

        assert_eq!(config.options.get("maxZoom"), Some(&OptionValue::Int(5)));
        assert_eq!(config.options.get_str("attribution"), Some("mine"));
    }

    #[test]
    fn test_overrides_do_not_alter_url() {
        let mut overrides = LayerOptions::new().with("url", "https://elsewhere.example/{z}");
        let config = Resolver::new(test_table())
            .resolve("Plain", &mut overrides, &DisplayEnvironment::default())
            .unwrap();

        assert_eq!(config.url, "https://{s}.plain.example/{z}/{x}/{y}.png");
    }

    #[test]
    fn test_retina_on_dense_display_disables_auto_detection() {
        let mut overrides = LayerOptions::new().with(keys::DETECT_RETINA, true);
        let config = Resolver::new(test_table())
            .resolve("Dense", &mut overrides, &DisplayEnvironment::new(true))
            .unwrap();

        // The caller-visible flag is switched off...
        assert_eq!(overrides.get("detectRetina"), Some(&OptionValue::Bool(false)));
        assert_eq!(
            config.options.get("detectRetina"),
            Some(&OptionValue::Bool(false))
        );
        // ...and the provider's own retina option is preserved.
        assert_eq!(config.options.get_str("retina"), Some("@2x"));
    }

    #[test]
    fn test_retina_on_standard_display_clears_provider_flag() {
        let mut overrides = LayerOptions::new().with(keys::DETECT_RETINA, true);
        let config = Resolver::new(test_table())
            .resolve("Dense", &mut overrides, &DisplayEnvironment::new(false))
            .unwrap();

        // Overrides stay untouched; the provider flag is cleared to falsy.
        assert_eq!(overrides.get("detectRetina"), Some(&OptionValue::Bool(true)));
        assert_eq!(config.options.get_str("retina"), Some(""));
    }

    #[test]
    fn test_retina_without_detection_request_clears_provider_flag() {
        let mut overrides = LayerOptions::new();
        let config = Resolver::new(test_table())
            .resolve("Dense", &mut overrides, &DisplayEnvironment::new(true))
            .unwrap();

        assert!(overrides.is_empty());
        assert_eq!(config.options.get_str("retina"), Some(""));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let resolver = Resolver::new(test_table());
        let env = DisplayEnvironment::new(true);

        let mut first_overrides = LayerOptions::new().with(keys::MAX_ZOOM, 7);
        let first = resolver.resolve("Styled.Print", &mut first_overrides, &env).unwrap();

        let mut second_overrides = LayerOptions::new().with(keys::MAX_ZOOM, 7);
        let second = resolver
            .resolve("Styled.Print", &mut second_overrides, &env)
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(first_overrides, second_overrides);
    }
}
