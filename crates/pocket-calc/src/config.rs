//! Engine configuration

use serde::{Deserialize, Serialize};

/// Calculator engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Emit `tracing` events for every transition
    pub trace_transitions: bool,
    /// Maximum number of characters digit entry may grow the display to.
    /// `None` leaves entry unbounded.
    pub max_display_len: Option<usize>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            trace_transitions: true,
            max_display_len: None,
        }
    }
}

impl CalculatorConfig {
    /// Create new config with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable transition tracing
    #[must_use]
    pub const fn with_tracing(mut self, enabled: bool) -> Self {
        self.trace_transitions = enabled;
        self
    }

    /// Cap the display length during digit entry
    #[must_use]
    pub const fn with_max_display_len(mut self, len: usize) -> Self {
        self.max_display_len = Some(len);
        self
    }

    /// Returns true if appending to a display of `len` characters is allowed
    #[must_use]
    pub fn allows_append(&self, len: usize) -> bool {
        self.max_display_len.map_or(true, |max| len < max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = CalculatorConfig::new();
        assert!(config.trace_transitions);
        assert_eq!(config.max_display_len, None);
    }

    #[test]
    fn test_config_with_tracing() {
        let config = CalculatorConfig::new().with_tracing(false);
        assert!(!config.trace_transitions);
    }

    #[test]
    fn test_config_max_display_len() {
        let config = CalculatorConfig::new().with_max_display_len(3);
        assert!(config.allows_append(2));
        assert!(!config.allows_append(3));
    }

    #[test]
    fn test_config_unbounded_allows_anything() {
        assert!(CalculatorConfig::default().allows_append(usize::MAX - 1));
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config: CalculatorConfig = serde_json::from_str(r#"{"max_display_len":9}"#).unwrap();
        assert!(config.trace_transitions);
        assert_eq!(config.max_display_len, Some(9));
    }
}
