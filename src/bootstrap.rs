// src/bootstrap.rs

use std::env;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global tracing subscriber. Call once from the composition
/// root, before handling requests.
pub fn setup_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,account_api=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Persistence-side capabilities, decided once at startup and handed to the
/// collaborators that implement them. Nothing is switched on implicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub caching: bool,
    pub persistence_auditing: bool,
}

impl Capabilities {
    pub fn enabled() -> Self {
        Self {
            caching: true,
            persistence_auditing: true,
        }
    }

    pub fn disabled() -> Self {
        Self {
            caching: false,
            persistence_auditing: false,
        }
    }

    /// Loads capability flags from the environment.
    ///
    /// `CACHING_ENABLED` and `PERSISTENCE_AUDITING_ENABLED` accept the usual
    /// boolean spellings and default to enabled when unset; an unreadable
    /// value is a startup error, not a silent fallback.
    pub fn from_env() -> Result<Self> {
        let caching = Self::flag("CACHING_ENABLED", true)?;
        let persistence_auditing = Self::flag("PERSISTENCE_AUDITING_ENABLED", true)?;

        let capabilities = Self {
            caching,
            persistence_auditing,
        };
        tracing::info!(caching, persistence_auditing, "✅ Capabilities loaded");
        Ok(capabilities)
    }

    fn flag(name: &str, default: bool) -> Result<bool> {
        match env::var(name) {
            Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => anyhow::bail!("{name} must be a boolean, got {raw:?}"),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::enabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_both_flags() {
        assert_eq!(
            Capabilities::enabled(),
            Capabilities {
                caching: true,
                persistence_auditing: true
            }
        );
        assert_eq!(
            Capabilities::disabled(),
            Capabilities {
                caching: false,
                persistence_auditing: false
            }
        );
    }

    #[test]
    fn default_enables_everything() {
        assert_eq!(Capabilities::default(), Capabilities::enabled());
    }

    #[test]
    fn flag_falls_back_to_default_when_unset() {
        unsafe {
            env::remove_var("FLAG_UNSET_FOR_TEST");
        }
        assert!(Capabilities::flag("FLAG_UNSET_FOR_TEST", true).unwrap());
        assert!(!Capabilities::flag("FLAG_UNSET_FOR_TEST", false).unwrap());
    }

    #[test]
    fn flag_accepts_common_boolean_spellings() {
        unsafe {
            env::set_var("FLAG_SPELLINGS_FOR_TEST", "Off");
        }
        assert!(!Capabilities::flag("FLAG_SPELLINGS_FOR_TEST", true).unwrap());

        unsafe {
            env::set_var("FLAG_SPELLINGS_FOR_TEST", "1");
        }
        assert!(Capabilities::flag("FLAG_SPELLINGS_FOR_TEST", false).unwrap());

        unsafe {
            env::remove_var("FLAG_SPELLINGS_FOR_TEST");
        }
    }

    #[test]
    fn flag_rejects_unreadable_values() {
        unsafe {
            env::set_var("FLAG_GARBAGE_FOR_TEST", "maybe");
        }
        assert!(Capabilities::flag("FLAG_GARBAGE_FOR_TEST", true).is_err());
        unsafe {
            env::remove_var("FLAG_GARBAGE_FOR_TEST");
        }
    }
}
