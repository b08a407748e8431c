use crate::error::{GradzError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// The nine classification thresholds, stored in config.json.
///
/// Ease bounds are whole percentages as the user sees them; the classifier
/// scales them by 10 before comparing against a card's stored factor.
/// Missing keys fall back to their defaults individually, and keys unknown to
/// gradz survive a save (merge-write, not replace-write).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub very_hard_lapses_min: u32,
    pub very_hard_ease_max_pct: u32,

    pub hard_lapses_min: u32,
    pub hard_ease_max_pct: u32,

    pub easy_lapses_max: u32,
    pub easy_ivl_min: u32,
    pub easy_ease_min_pct: u32,

    pub very_easy_ivl_min: u32,
    pub very_easy_ease_min_pct: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            very_hard_lapses_min: 5,
            very_hard_ease_max_pct: 200,
            hard_lapses_min: 3,
            hard_ease_max_pct: 230,
            easy_lapses_max: 0,
            easy_ivl_min: 21,
            easy_ease_min_pct: 250,
            very_easy_ivl_min: 90,
            very_easy_ease_min_pct: 280,
        }
    }
}

/// Threshold keys in display order, grouped VeryHard, Hard, Easy, VeryEasy.
pub const KEYS: [&str; 9] = [
    "very_hard_lapses_min",
    "very_hard_ease_max_pct",
    "hard_lapses_min",
    "hard_ease_max_pct",
    "easy_lapses_max",
    "easy_ivl_min",
    "easy_ease_min_pct",
    "very_easy_ivl_min",
    "very_easy_ease_min_pct",
];

impl Thresholds {
    /// Load thresholds from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(GradzError::Io)?;
        let thresholds: Thresholds =
            serde_json::from_str(&content).map_err(GradzError::Serialization)?;
        Ok(thresholds)
    }

    /// Save thresholds to the given directory.
    ///
    /// Merge-write: the nine known keys are overwritten in the existing file,
    /// anything else in it is preserved. Never surfaces an error — an atomic
    /// temp-and-rename is tried first, then a plain write, then the save is
    /// skipped. Settings are recoverable by running the config command again.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) {
        let config_dir = config_dir.as_ref();
        if fs::create_dir_all(config_dir).is_err() {
            return;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        // Start from the existing file so unknown keys survive
        let mut base = fs::read_to_string(&config_path)
            .ok()
            .and_then(|s| serde_json::from_str::<Value>(&s).ok())
            .filter(Value::is_object)
            .unwrap_or_else(|| Value::Object(serde_json::Map::new()));

        if let (Value::Object(map), Ok(Value::Object(ours))) =
            (&mut base, serde_json::to_value(self))
        {
            for (key, value) in ours {
                map.insert(key, value);
            }
        }

        let content = match serde_json::to_string_pretty(&base) {
            Ok(content) => content,
            Err(_) => return,
        };

        let tmp_path = config_dir.join(format!("{}.tmp", CONFIG_FILENAME));
        let atomic = fs::write(&tmp_path, &content).and_then(|_| fs::rename(&tmp_path, &config_path));
        if atomic.is_err() {
            let _ = fs::write(&config_path, &content);
        }
    }

    /// Get a threshold by key name
    pub fn get(&self, key: &str) -> Option<u32> {
        match key {
            "very_hard_lapses_min" => Some(self.very_hard_lapses_min),
            "very_hard_ease_max_pct" => Some(self.very_hard_ease_max_pct),
            "hard_lapses_min" => Some(self.hard_lapses_min),
            "hard_ease_max_pct" => Some(self.hard_ease_max_pct),
            "easy_lapses_max" => Some(self.easy_lapses_max),
            "easy_ivl_min" => Some(self.easy_ivl_min),
            "easy_ease_min_pct" => Some(self.easy_ease_min_pct),
            "very_easy_ivl_min" => Some(self.very_easy_ivl_min),
            "very_easy_ease_min_pct" => Some(self.very_easy_ease_min_pct),
            _ => None,
        }
    }

    /// Set a threshold by key name
    pub fn set(&mut self, key: &str, value: u32) -> std::result::Result<(), String> {
        match key {
            "very_hard_lapses_min" => self.very_hard_lapses_min = value,
            "very_hard_ease_max_pct" => self.very_hard_ease_max_pct = value,
            "hard_lapses_min" => self.hard_lapses_min = value,
            "hard_ease_max_pct" => self.hard_ease_max_pct = value,
            "easy_lapses_max" => self.easy_lapses_max = value,
            "easy_ivl_min" => self.easy_ivl_min = value,
            "easy_ease_min_pct" => self.easy_ease_min_pct = value,
            "very_easy_ivl_min" => self.very_easy_ivl_min = value,
            "very_easy_ease_min_pct" => self.very_easy_ease_min_pct = value,
            other => return Err(format!("Unknown config key: {}", other)),
        }
        Ok(())
    }
}
