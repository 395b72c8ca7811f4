//! Asset load tracking
//!
//! Loading itself is the platform's job. This module only records how each
//! key settled and answers "is everything the next screen needs resolved?".
//! A failed load counts as resolved: the slot simply stays empty.

use std::collections::HashMap;
use std::fmt;

/// Errors reported by asset loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// The host failed to fetch or decode the asset
    LoadFailed { key: String, reason: String },
    /// A result arrived for a key nobody asked for
    Unknown { key: String },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoadFailed { key, reason } => write!(f, "failed to load asset {key}: {reason}"),
            Self::Unknown { key } => write!(f, "unknown asset key: {key}"),
        }
    }
}

impl std::error::Error for AssetError {}

/// Read access to loaded assets
pub trait AssetSource {
    type Handle;

    /// True once the key has settled (loaded or failed)
    fn is_ready(&self, key: &str) -> bool;

    /// The loaded handle, or `None` if pending, failed, or unknown
    fn get(&self, key: &str) -> Option<&Self::Handle>;
}

/// Load state of one key
#[derive(Debug, Clone, PartialEq)]
pub enum AssetStatus<H> {
    Pending,
    Loaded(H),
    Failed(AssetError),
}

impl<H> AssetStatus<H> {
    pub fn is_settled(&self) -> bool {
        !matches!(self, AssetStatus::Pending)
    }
}

/// Key → status table
#[derive(Debug, Clone)]
pub struct AssetRegistry<H> {
    entries: HashMap<String, AssetStatus<H>>,
}

impl<H> Default for AssetRegistry<H> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<H> AssetRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register keys as pending (already-known keys keep their status)
    pub fn request<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for key in keys {
            self.entries.entry(key.into()).or_insert(AssetStatus::Pending);
        }
    }

    /// Record the outcome of a load
    pub fn settle(&mut self, key: &str, result: Result<H, AssetError>) -> Result<(), AssetError> {
        let Some(slot) = self.entries.get_mut(key) else {
            return Err(AssetError::Unknown {
                key: key.to_string(),
            });
        };

        *slot = match result {
            Ok(handle) => {
                log::debug!("Asset loaded: {}", key);
                AssetStatus::Loaded(handle)
            }
            Err(err) => {
                log::warn!("{}", err);
                AssetStatus::Failed(err)
            }
        };
        Ok(())
    }

    /// True when every listed key has settled. Unknown keys never settle.
    pub fn all_settled<S: AsRef<str>>(&self, keys: &[S]) -> bool {
        keys.iter().all(|k| self.is_ready(k.as_ref()))
    }

    /// (settled, total) over every registered key
    pub fn progress(&self) -> (usize, usize) {
        let settled = self.entries.values().filter(|s| s.is_settled()).count();
        (settled, self.entries.len())
    }

    /// Number of keys that failed to load
    pub fn failed_count(&self) -> usize {
        self.entries
            .values()
            .filter(|s| matches!(s, AssetStatus::Failed(_)))
            .count()
    }
}

impl<H> AssetSource for AssetRegistry<H> {
    type Handle = H;

    fn is_ready(&self, key: &str) -> bool {
        self.entries.get(key).is_some_and(AssetStatus::is_settled)
    }

    fn get(&self, key: &str) -> Option<&H> {
        match self.entries.get(key) {
            Some(AssetStatus::Loaded(handle)) => Some(handle),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(key: &str) -> AssetError {
        AssetError::LoadFailed {
            key: key.to_string(),
            reason: "404".to_string(),
        }
    }

    #[test]
    fn test_pending_until_settled() {
        let mut registry: AssetRegistry<u32> = AssetRegistry::new();
        registry.request(["a.png", "b.png"]);

        assert!(!registry.is_ready("a.png"));
        assert!(!registry.all_settled(&["a.png", "b.png"]));
        assert_eq!(registry.progress(), (0, 2));

        registry.settle("a.png", Ok(1)).unwrap();
        assert!(registry.is_ready("a.png"));
        assert_eq!(registry.get("a.png"), Some(&1));
        assert!(!registry.all_settled(&["a.png", "b.png"]));
    }

    #[test]
    fn test_failure_still_opens_gate() {
        let mut registry: AssetRegistry<u32> = AssetRegistry::new();
        registry.request(["a.png", "b.png"]);
        registry.settle("a.png", Ok(7)).unwrap();
        registry.settle("b.png", Err(failed("b.png"))).unwrap();

        assert!(registry.all_settled(&["a.png", "b.png"]));
        assert!(registry.is_ready("b.png"));
        assert_eq!(registry.get("b.png"), None);
        assert_eq!(registry.failed_count(), 1);
        assert_eq!(registry.progress(), (2, 2));
    }

    #[test]
    fn test_unknown_keys() {
        let mut registry: AssetRegistry<u32> = AssetRegistry::new();
        let err = registry.settle("ghost.png", Ok(1)).unwrap_err();
        assert_eq!(
            err,
            AssetError::Unknown {
                key: "ghost.png".to_string()
            }
        );
        assert!(!registry.is_ready("ghost.png"));
        assert!(!registry.all_settled(&["ghost.png"]));
        assert_eq!(registry.get("ghost.png"), None);
    }

    #[test]
    fn test_request_keeps_existing_status() {
        let mut registry: AssetRegistry<u32> = AssetRegistry::new();
        registry.request(["a.png"]);
        registry.settle("a.png", Ok(3)).unwrap();
        registry.request(["a.png"]);
        assert_eq!(registry.get("a.png"), Some(&3));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            failed("x.png").to_string(),
            "failed to load asset x.png: 404"
        );
    }
}
