//! Runtime configuration for diagnostics and object semantics.
//!
//! Two toggles control how vectors and matrices present themselves:
//!
//! - **debug-to-string**: `Display` renders components instead of an opaque
//!   `Name@address` label.
//! - **object-equals**: config-aware `equals`/`hash_code` compare components
//!   instead of identity.
//!
//! Both are plain values in a [`VecmathConfig`], so tests build the config
//! they need instead of mutating shared process state. The process-wide
//! instance returned by [`VecmathConfig::global`] is read once from the
//! environment and never changes afterwards.
//!
//! # Environment
//!
//! | Variable | Values | Default |
//! |----------|--------|---------|
//! | `VECMATH_ENVIRONMENT` | `production`, `development` | `production` |
//! | `VECMATH_DEBUG_TO_STRING` | `true`, `false`, `1`, `0` | `false` in production, else `true` |
//! | `VECMATH_OBJECT_EQUALS` | `true`, `false`, `1`, `0` | `false` |
//!
//! # Example
//!
//! ```rust
//! use vecmath_core::{Environment, VecmathConfig};
//!
//! let mut config = VecmathConfig::development();
//! assert!(config.is_debug_to_string_enabled());
//!
//! config.set_object_equals(true).unwrap();
//! assert!(config.is_object_equals_enabled());
//!
//! let mut prod = VecmathConfig::production();
//! assert!(prod.set_debug_to_string(true).is_err());
//! assert_eq!(prod.environment(), Environment::Production);
//! ```

use std::env;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable selecting production or development behavior.
pub const ENV_ENVIRONMENT: &str = "VECMATH_ENVIRONMENT";
/// Environment variable toggling component rendering in `Display`.
pub const ENV_DEBUG_TO_STRING: &str = "VECMATH_DEBUG_TO_STRING";
/// Environment variable toggling structural `equals`/`hash_code`.
pub const ENV_OBJECT_EQUALS: &str = "VECMATH_OBJECT_EQUALS";

/// Deployment environment.
///
/// Production configs are frozen: the test-only setters refuse to touch them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Shipping build; diagnostics off by default.
    #[default]
    Production,
    /// Local development and tests; diagnostics on by default.
    Development,
}

impl Environment {
    /// Parses `production` / `development` (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("production") {
            Some(Self::Production)
        } else if value.eq_ignore_ascii_case("development") {
            Some(Self::Development)
        } else {
            None
        }
    }

    /// Returns `true` for [`Environment::Production`].
    #[inline]
    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

/// Settings consulted by `Display`, `equals` and `hash_code`.
///
/// Deserialized fields that are missing resolve the same way as unset
/// environment variables: debug-to-string follows the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawConfig")]
pub struct VecmathConfig {
    environment: Environment,
    debug_to_string: bool,
    object_equals: bool,
}

/// Serialized form with every field optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    environment: Environment,
    debug_to_string: Option<bool>,
    object_equals: Option<bool>,
}

impl From<RawConfig> for VecmathConfig {
    fn from(raw: RawConfig) -> Self {
        Self {
            environment: raw.environment,
            debug_to_string: raw
                .debug_to_string
                .unwrap_or(!raw.environment.is_production()),
            object_equals: raw.object_equals.unwrap_or(false),
        }
    }
}

impl Default for VecmathConfig {
    fn default() -> Self {
        Self::production()
    }
}

impl VecmathConfig {
    /// Production defaults: opaque rendering, identity equality.
    pub const fn production() -> Self {
        Self {
            environment: Environment::Production,
            debug_to_string: false,
            object_equals: false,
        }
    }

    /// Development defaults: component rendering, identity equality.
    pub const fn development() -> Self {
        Self {
            environment: Environment::Development,
            debug_to_string: true,
            object_equals: false,
        }
    }

    /// Loads settings from the process environment.
    ///
    /// Unset variables fall back to the defaults of the selected
    /// environment. Malformed values are reported, not ignored.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Loads settings through an arbitrary variable lookup.
    ///
    /// [`VecmathConfig::from_env`] delegates here; tests pass a closure over
    /// a map instead of touching the real environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup(ENV_ENVIRONMENT) {
            Some(raw) => Environment::parse(raw.trim())
                .ok_or_else(|| Error::invalid_setting(ENV_ENVIRONMENT, raw.clone()))?,
            None => Environment::default(),
        };

        let debug_to_string = match lookup(ENV_DEBUG_TO_STRING) {
            Some(raw) => parse_flag(ENV_DEBUG_TO_STRING, &raw)?,
            None => !environment.is_production(),
        };

        let object_equals = match lookup(ENV_OBJECT_EQUALS) {
            Some(raw) => parse_flag(ENV_OBJECT_EQUALS, &raw)?,
            None => false,
        };

        let config = Self {
            environment,
            debug_to_string,
            object_equals,
        };
        tracing::debug!(
            environment = ?config.environment,
            debug_to_string = config.debug_to_string,
            object_equals = config.object_equals,
            "resolved vecmath config"
        );
        Ok(config)
    }

    /// Process-wide config, read from the environment on first access.
    ///
    /// A malformed environment is logged and replaced by production
    /// defaults so rendering never fails.
    pub fn global() -> &'static VecmathConfig {
        static GLOBAL: OnceLock<VecmathConfig> = OnceLock::new();
        GLOBAL.get_or_init(|| {
            Self::from_env().unwrap_or_else(|e| {
                tracing::warn!("ignoring vecmath environment settings: {}", e);
                Self::production()
            })
        })
    }

    /// Deployment environment of this config.
    #[inline]
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Returns `true` if this is a production config.
    #[inline]
    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }

    /// Returns `true` if `Display` should render components.
    #[inline]
    pub fn is_debug_to_string_enabled(&self) -> bool {
        self.debug_to_string
    }

    /// Returns `true` if `equals`/`hash_code` compare components.
    #[inline]
    pub fn is_object_equals_enabled(&self) -> bool {
        self.object_equals
    }

    /// Test-only override for debug-to-string.
    pub fn set_debug_to_string(&mut self, enabled: bool) -> Result<&mut Self> {
        self.ensure_mutable("debug_to_string")?;
        self.debug_to_string = enabled;
        Ok(self)
    }

    /// Test-only override for object-equals.
    pub fn set_object_equals(&mut self, enabled: bool) -> Result<&mut Self> {
        self.ensure_mutable("object_equals")?;
        self.object_equals = enabled;
        Ok(self)
    }

    /// Restores the baseline test state.
    ///
    /// `production_mode` selects opaque rendering; object-equals is always
    /// switched off.
    pub fn reset_for_tests(&mut self, production_mode: bool) -> Result<&mut Self> {
        self.ensure_mutable("config")?;
        self.debug_to_string = !production_mode;
        self.object_equals = false;
        Ok(self)
    }

    fn ensure_mutable(&self, setting: &'static str) -> Result<()> {
        if self.is_production() {
            return Err(Error::production_locked(setting));
        }
        Ok(())
    }
}

fn parse_flag(name: &str, raw: &str) -> Result<bool> {
    match raw.trim() {
        v if v == "1" || v.eq_ignore_ascii_case("true") => Ok(true),
        v if v == "0" || v.eq_ignore_ascii_case("false") => Ok(false),
        _ => Err(Error::invalid_setting(name, raw)),
    }
}
