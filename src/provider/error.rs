//! Error types for provider resolution.

use thiserror::Error;

/// Errors that can occur while resolving a provider identifier.
///
/// All of these are immediately fatal to the resolution call; no partial
/// configuration is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The identifier's provider segment, or a provider referenced from an
    /// attribution placeholder, is not in the table.
    #[error("No such provider ({0})")]
    UnknownProvider(String),

    /// The identifier names a variant the provider does not define.
    #[error("No such variant of {provider} ({variant})")]
    UnknownVariant {
        /// The provider the variant was looked up under.
        provider: String,
        /// The missing variant name.
        variant: String,
    },

    /// Attribution placeholder expansion exceeded its recursion bound,
    /// indicating a reference cycle in the provider table.
    #[error("Attribution references form a cycle involving '{0}'")]
    CyclicAttribution(String),
}
