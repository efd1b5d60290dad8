//! Session settings: which character the widget embodies.
use std::{fs, path::Path};

use bevy::prelude::*;
use serde::Deserialize;

const SETTINGS_PATH: &str = "config/settings.toml";

/// The characters the widget can embody. Resolved once at startup and
/// immutable for the rest of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterIdentity {
    Mascot,
    Lumina,
    Planet,
}

impl CharacterIdentity {
    pub const DEFAULT: Self = Self::Mascot;

    /// Display name, also the key under which content is stored.
    pub fn label(self) -> &'static str {
        match self {
            Self::Mascot => "Mascot",
            Self::Lumina => "Lumina",
            Self::Planet => "Planet",
        }
    }

    /// Per-character asset directory under the asset root.
    pub fn asset_dir(self) -> &'static str {
        self.label()
    }

    /// Filename prefix for this character's images.
    pub fn asset_prefix(self) -> &'static str {
        match self {
            Self::Mascot => "mascot",
            Self::Lumina => "Lumina",
            Self::Planet => "planet",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "mascot" => Some(Self::Mascot),
            "lumina" => Some(Self::Lumina),
            "planet" => Some(Self::Planet),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
struct RawSettings {
    #[serde(default)]
    character: Option<String>,
}

/// Settings resolved for this session.
#[derive(Debug, Clone)]
pub struct MascotSettings {
    pub character: CharacterIdentity,
}

impl MascotSettings {
    pub fn load_or_default() -> Self {
        let path = Path::new(SETTINGS_PATH);
        match fs::read_to_string(path) {
            Ok(raw) => match toml::from_str::<RawSettings>(&raw) {
                Ok(parsed) => parsed.into(),
                Err(err) => {
                    warn!(
                        "Failed to parse {} ({}). Falling back to the default character.",
                        SETTINGS_PATH, err
                    );
                    RawSettings::default().into()
                }
            },
            Err(err) => {
                warn!(
                    "Failed to read {} ({}). Falling back to the default character.",
                    SETTINGS_PATH, err
                );
                RawSettings::default().into()
            }
        }
    }
}

impl From<RawSettings> for MascotSettings {
    fn from(value: RawSettings) -> Self {
        let character = match value.character.as_deref() {
            Some(name) => match CharacterIdentity::from_name(name) {
                Some(identity) => identity,
                None => {
                    warn!(
                        "Unknown character \"{}\" in {}. Using {}.",
                        name,
                        SETTINGS_PATH,
                        CharacterIdentity::DEFAULT.label()
                    );
                    CharacterIdentity::DEFAULT
                }
            },
            None => CharacterIdentity::DEFAULT,
        };
        Self { character }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_character_names() {
        assert_eq!(
            CharacterIdentity::from_name("lumina"),
            Some(CharacterIdentity::Lumina)
        );
        assert_eq!(
            CharacterIdentity::from_name(" Planet "),
            Some(CharacterIdentity::Planet)
        );
        assert_eq!(CharacterIdentity::from_name("nobody"), None);
    }

    #[test]
    fn parsed_settings_pick_the_named_character() {
        let raw: RawSettings = toml::from_str("character = \"planet\"").expect("valid toml");
        let settings = MascotSettings::from(raw);
        assert_eq!(settings.character, CharacterIdentity::Planet);
    }

    #[test]
    fn missing_or_unknown_character_falls_back_to_default() {
        let empty = MascotSettings::from(RawSettings { character: None });
        assert_eq!(empty.character, CharacterIdentity::Mascot);

        let unknown = MascotSettings::from(RawSettings {
            character: Some("dragon".into()),
        });
        assert_eq!(unknown.character, CharacterIdentity::Mascot);
    }

    #[test]
    fn prefixes_follow_the_asset_naming_scheme() {
        assert_eq!(CharacterIdentity::Mascot.asset_prefix(), "mascot");
        assert_eq!(CharacterIdentity::Lumina.asset_prefix(), "Lumina");
        assert_eq!(CharacterIdentity::Planet.asset_prefix(), "planet");
    }
}
