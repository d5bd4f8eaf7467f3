//! Configuration for the resource filesystem.
//!
//! # Examples
//!
//! ```
//! use bundle_fs::{CollisionPolicy, FsConfig};
//!
//! // Use default configuration
//! let config = FsConfig::default();
//! assert_eq!(config.collision, CollisionPolicy::PreferDirectory);
//! assert!(!config.strip_leading_slash);
//!
//! // Load from TOML
//! let config = FsConfig::from_toml_str(
//!     r#"
//!     collision = "reject"
//!     strip_leading_slash = true
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(config.collision, CollisionPolicy::Reject);
//! ```

use crate::error::{FsError, Result};
use serde::{Deserialize, Serialize};

/// What to do with a path that is both a resource and a directory prefix,
/// such as `x` in a namespace holding `x` and `x/y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Treat the path as a directory. Reading it fails with
    /// [`FsError::NotAFile`] even though a resource of that name exists.
    #[default]
    PreferDirectory,

    /// Reject the namespace: construction of a strict filesystem fails, and
    /// opening an overlapping path fails with
    /// [`FsError::OverlappingNamespace`].
    Reject,
}

/// Runtime configuration of a [`ResourceFs`](crate::ResourceFs).
///
/// # Examples
///
/// ```
/// use bundle_fs::{CollisionPolicy, FsConfig};
///
/// let config = FsConfig::builder()
///     .collision(CollisionPolicy::Reject)
///     .strip_leading_slash(true)
///     .build();
///
/// assert_eq!(config.collision, CollisionPolicy::Reject);
/// assert_eq!(config.resolve_path("/index.html"), "index.html");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FsConfig {
    /// Handling of leaf/directory collisions.
    ///
    /// Default: [`CollisionPolicy::PreferDirectory`]
    pub collision: CollisionPolicy,

    /// Trim one leading `/` from requested paths before resolution.
    ///
    /// HTTP static-file servers request `/index.html` while bundles usually
    /// register `index.html`. No other normalization is applied.
    /// Default: false
    pub strip_leading_slash: bool,
}

impl FsConfig {
    /// Creates a new configuration builder.
    #[must_use]
    pub fn builder() -> FsConfigBuilder {
        FsConfigBuilder::new()
    }

    /// Parses a configuration from TOML.
    ///
    /// Missing keys take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::Config`] if the TOML is malformed or contains
    /// unknown keys.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| FsError::Config {
            message: e.to_string(),
        })
    }

    /// Serializes the configuration to TOML.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::Config`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| FsError::Config {
            message: e.to_string(),
        })
    }

    /// Applies the configured request-path adjustments.
    #[must_use]
    pub fn resolve_path<'a>(&self, path: &'a str) -> &'a str {
        if self.strip_leading_slash {
            path.strip_prefix('/').unwrap_or(path)
        } else {
            path
        }
    }
}

/// Builder for [`FsConfig`].
#[derive(Debug, Clone, Default)]
pub struct FsConfigBuilder {
    config: FsConfig,
}

impl FsConfigBuilder {
    /// Creates a builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the collision policy.
    #[must_use]
    pub const fn collision(mut self, policy: CollisionPolicy) -> Self {
        self.config.collision = policy;
        self
    }

    /// Sets whether a leading `/` is trimmed from requested paths.
    #[must_use]
    pub const fn strip_leading_slash(mut self, strip: bool) -> Self {
        self.config.strip_leading_slash = strip;
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub const fn build(self) -> FsConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FsConfig::default();
        assert_eq!(config.collision, CollisionPolicy::PreferDirectory);
        assert!(!config.strip_leading_slash);
    }

    #[test]
    fn test_builder() {
        let config = FsConfig::builder()
            .collision(CollisionPolicy::Reject)
            .strip_leading_slash(true)
            .build();

        assert_eq!(config.collision, CollisionPolicy::Reject);
        assert!(config.strip_leading_slash);
    }

    #[test]
    fn test_resolve_path() {
        let plain = FsConfig::default();
        assert_eq!(plain.resolve_path("/a/b"), "/a/b");

        let stripping = FsConfig::builder().strip_leading_slash(true).build();
        assert_eq!(stripping.resolve_path("/a/b"), "a/b");
        assert_eq!(stripping.resolve_path("a/b"), "a/b");
        // Only one slash is trimmed.
        assert_eq!(stripping.resolve_path("//a"), "/a");
    }

    #[test]
    fn test_from_toml_empty_uses_defaults() {
        let config = FsConfig::from_toml_str("").unwrap();
        assert_eq!(config, FsConfig::default());
    }

    #[test]
    fn test_from_toml() {
        let config = FsConfig::from_toml_str(
            r#"
            collision = "prefer_directory"
            strip_leading_slash = true
            "#,
        )
        .unwrap();

        assert_eq!(config.collision, CollisionPolicy::PreferDirectory);
        assert!(config.strip_leading_slash);
    }

    #[test]
    fn test_from_toml_unknown_policy() {
        let err = FsConfig::from_toml_str(r#"collision = "merge""#).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_from_toml_unknown_key() {
        let err = FsConfig::from_toml_str("case_insensitive = true").unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = FsConfig::builder()
            .collision(CollisionPolicy::Reject)
            .build();

        let toml_str = config.to_toml_string().unwrap();
        assert!(toml_str.contains(r#"collision = "reject""#));
        assert_eq!(FsConfig::from_toml_str(&toml_str).unwrap(), config);
    }
}
