use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Section ids in page order. The first one is active before any scroll event.
pub const SECTIONS: [&str; 7] = [
    "hero",
    "about",
    "experience",
    "projects",
    "blog",
    "skills",
    "contact",
];

pub const OWNER: &str = "Aarav Patel";

pub const HERO_PHRASES: [&str; 4] = [
    "AWS Certified",
    "Kubernetes Enthusiast",
    "Automation Advocate",
    "Cloud Architect",
];

/// Tunables shared by the scroll, reveal and typewriter trackers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Added to the scroll offset to account for the sticky header.
    pub header_offset: f64,
    /// Offset past which the header switches to its scrolled style.
    pub scrolled_threshold: f64,
    /// Fraction of an item that must be visible before it is revealed.
    pub reveal_threshold: f64,
    pub reveal_stagger_ms: u64,
    pub type_delay_ms: u64,
    pub hold_delay_ms: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            header_offset: 100.0,
            scrolled_threshold: 50.0,
            reveal_threshold: 0.1,
            reveal_stagger_ms: 100,
            type_delay_ms: 100,
            hold_delay_ms: 2000,
        }
    }
}

impl TrackerConfig {
    pub fn reveal_stagger(&self) -> Duration {
        Duration::from_millis(self.reveal_stagger_ms)
    }

    pub fn type_delay(&self) -> Duration {
        Duration::from_millis(self.type_delay_ms)
    }

    pub fn hold_delay(&self) -> Duration {
        Duration::from_millis(self.hold_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: TrackerConfig =
            serde_json::from_str(r#"{ "header_offset": 64.0 }"#).expect("config should parse");
        assert_eq!(config.header_offset, 64.0);
        assert_eq!(config.scrolled_threshold, 50.0);
        assert_eq!(config.hold_delay(), Duration::from_secs(2));
    }
}
