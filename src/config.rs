//! Crate-wide tunables loaded from `config/mascot.toml`.
use std::{fs, path::Path, time::Duration};

use bevy::prelude::*;
use serde::Deserialize;

const CONFIG_PATH: &str = "config/mascot.toml";

#[derive(Debug, Clone, Deserialize, Default)]
struct RawMascotConfig {
    #[serde(default)]
    mood: RawMood,
    #[serde(default)]
    mood_thresholds: RawMoodThresholds,
    #[serde(default)]
    timers: RawTimers,
    #[serde(default)]
    interaction: RawInteraction,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawMood {
    start: i32,
    decay_amount: i32,
}

impl Default for RawMood {
    fn default() -> Self {
        Self {
            start: 50,
            decay_amount: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawMoodThresholds {
    love: i32,
    happy: i32,
    sad: i32,
    angry: i32,
}

impl Default for RawMoodThresholds {
    fn default() -> Self {
        Self {
            love: 90,
            happy: 70,
            sad: 30,
            angry: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawTimers {
    auto_hide_secs: f32,
    idle_min_secs: f32,
    idle_max_secs: f32,
    monologue_min_secs: f32,
    monologue_max_secs: f32,
    mood_decay_secs: f32,
    petting_hold_secs: f32,
    monologue_hold_min_secs: f32,
    monologue_hold_max_secs: f32,
}

impl Default for RawTimers {
    fn default() -> Self {
        Self {
            auto_hide_secs: 10.0,
            idle_min_secs: 10.0,
            idle_max_secs: 20.0,
            monologue_min_secs: 20.0,
            monologue_max_secs: 60.0,
            mood_decay_secs: 30.0,
            petting_hold_secs: 2.0,
            monologue_hold_min_secs: 3.0,
            monologue_hold_max_secs: 6.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawInteraction {
    click_mood_gain: i32,
    petting_mood_gain: i32,
    petting_threshold: f32,
}

impl Default for RawInteraction {
    fn default() -> Self {
        Self {
            click_mood_gain: 10,
            petting_mood_gain: 20,
            petting_threshold: 10.0,
        }
    }
}

/// Runtime configuration derived from `config/mascot.toml`.
#[derive(Resource, Debug, Clone)]
pub struct MascotConfig {
    pub mood: MoodSettings,
    pub thresholds: MoodThresholds,
    pub timers: TimerSettings,
    pub interaction: InteractionSettings,
}

#[derive(Debug, Clone)]
pub struct MoodSettings {
    pub start: i32,
    pub decay_amount: i32,
}

/// Band boundaries mapping the mood value to a display state.
#[derive(Debug, Clone)]
pub struct MoodThresholds {
    pub love: i32,
    pub happy: i32,
    pub sad: i32,
    pub angry: i32,
}

#[derive(Debug, Clone)]
pub struct TimerSettings {
    pub auto_hide: Duration,
    pub idle_min_secs: f32,
    pub idle_max_secs: f32,
    pub monologue_min_secs: f32,
    pub monologue_max_secs: f32,
    pub mood_decay: Duration,
    pub petting_hold: Duration,
    pub monologue_hold_min_secs: f32,
    pub monologue_hold_max_secs: f32,
}

impl Default for TimerSettings {
    fn default() -> Self {
        RawTimers::default().into()
    }
}

#[derive(Debug, Clone)]
pub struct InteractionSettings {
    pub click_mood_gain: i32,
    pub petting_mood_gain: i32,
    pub petting_threshold: f32,
}

impl MascotConfig {
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_PATH);
        match fs::read_to_string(path) {
            Ok(raw) => match toml::from_str::<RawMascotConfig>(&raw) {
                Ok(parsed) => parsed.into(),
                Err(err) => {
                    warn!(
                        "Failed to parse {} ({}). Falling back to defaults.",
                        CONFIG_PATH, err
                    );
                    RawMascotConfig::default().into()
                }
            },
            Err(err) => {
                warn!(
                    "Failed to read {} ({}). Falling back to defaults.",
                    CONFIG_PATH, err
                );
                RawMascotConfig::default().into()
            }
        }
    }
}

impl Default for MascotConfig {
    fn default() -> Self {
        RawMascotConfig::default().into()
    }
}

impl From<RawMascotConfig> for MascotConfig {
    fn from(value: RawMascotConfig) -> Self {
        let mood = MoodSettings {
            start: value.mood.start.clamp(0, 100),
            decay_amount: value.mood.decay_amount.max(0),
        };

        let mut thresholds = MoodThresholds {
            love: value.mood_thresholds.love,
            happy: value.mood_thresholds.happy,
            sad: value.mood_thresholds.sad,
            angry: value.mood_thresholds.angry,
        };
        if thresholds.love < thresholds.happy {
            thresholds.love = thresholds.happy;
        }
        if thresholds.sad < thresholds.angry {
            thresholds.sad = thresholds.angry;
        }

        let timers = value.timers.into();

        let interaction = InteractionSettings {
            click_mood_gain: value.interaction.click_mood_gain.max(0),
            petting_mood_gain: value.interaction.petting_mood_gain.max(0),
            petting_threshold: value.interaction.petting_threshold.max(0.0),
        };

        Self {
            mood,
            thresholds,
            timers,
            interaction,
        }
    }
}

impl From<RawTimers> for TimerSettings {
    fn from(value: RawTimers) -> Self {
        let idle_min = value.idle_min_secs.max(0.1);
        let monologue_min = value.monologue_min_secs.max(0.1);
        let hold_min = value.monologue_hold_min_secs.max(0.1);
        Self {
            auto_hide: Duration::from_secs_f32(value.auto_hide_secs.max(0.1)),
            idle_min_secs: idle_min,
            idle_max_secs: value.idle_max_secs.max(idle_min),
            monologue_min_secs: monologue_min,
            monologue_max_secs: value.monologue_max_secs.max(monologue_min),
            mood_decay: Duration::from_secs_f32(value.mood_decay_secs.max(0.1)),
            petting_hold: Duration::from_secs_f32(value.petting_hold_secs.max(0.1)),
            monologue_hold_min_secs: hold_min,
            monologue_hold_max_secs: value.monologue_hold_max_secs.max(hold_min),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = MascotConfig::default();
        assert_eq!(config.mood.start, 50);
        assert_eq!(config.mood.decay_amount, 5);
        assert_eq!(config.thresholds.love, 90);
        assert_eq!(config.thresholds.angry, 10);
        assert_eq!(config.timers.auto_hide, Duration::from_secs(10));
        assert_eq!(config.timers.mood_decay, Duration::from_secs(30));
        assert_eq!(config.interaction.petting_threshold, 10.0);
    }

    #[test]
    fn conversion_normalises_degenerate_values() {
        let raw = RawMascotConfig {
            mood: RawMood {
                start: 250,
                decay_amount: -5,
            },
            mood_thresholds: RawMoodThresholds {
                love: 40,
                happy: 70,
                sad: 5,
                angry: 10,
            },
            timers: RawTimers {
                idle_min_secs: 20.0,
                idle_max_secs: 10.0,
                ..RawTimers::default()
            },
            interaction: RawInteraction {
                click_mood_gain: -3,
                ..RawInteraction::default()
            },
        };
        let config = MascotConfig::from(raw);
        assert_eq!(config.mood.start, 100);
        assert_eq!(config.mood.decay_amount, 0);
        assert!(config.thresholds.love >= config.thresholds.happy);
        assert!(config.thresholds.sad >= config.thresholds.angry);
        assert!(config.timers.idle_max_secs >= config.timers.idle_min_secs);
        assert_eq!(config.interaction.click_mood_gain, 0);
    }

    #[test]
    fn partial_toml_fills_missing_sections() {
        let raw: RawMascotConfig = toml::from_str("[mood]\nstart = 20\n").expect("valid toml");
        let config = MascotConfig::from(raw);
        assert_eq!(config.mood.start, 20);
        assert_eq!(config.thresholds.happy, 70);
        assert_eq!(config.timers.idle_max_secs, 20.0);
    }
}
