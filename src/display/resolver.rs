//! Maps (character, display state) to an image path, with a single fallback.
use std::path::{Path, PathBuf};

use bevy::prelude::*;

use crate::settings::CharacterIdentity;

const ASSET_ROOT: &str = "assets/mascots";

#[derive(Resource, Debug, Clone)]
pub struct ImageResolver {
    identity: CharacterIdentity,
}

impl ImageResolver {
    pub fn new(identity: CharacterIdentity) -> Self {
        Self { identity }
    }

    pub fn identity(&self) -> CharacterIdentity {
        self.identity
    }

    /// Deterministic path for a logical display state. State names are an
    /// open set; unknown names simply resolve to a path that may fail to
    /// load, which the fallback then covers.
    pub fn resolve(&self, state: &str) -> PathBuf {
        let prefix = self.identity.asset_prefix();
        let file = if state == "default" {
            format!("{prefix}.png")
        } else {
            format!("{prefix}_{state}.png")
        };
        Path::new(ASSET_ROOT)
            .join(self.identity.asset_dir())
            .join(file)
    }

    pub fn default_path(&self) -> PathBuf {
        self.resolve("default")
    }

    /// Substitute path for a failed load. Returns `None` when the failed
    /// path already is the character's default, so a broken default asset
    /// cannot trigger a fallback loop.
    pub fn fallback_for(&self, failed: &Path) -> Option<PathBuf> {
        let default = self.default_path();
        if failed == default {
            None
        } else {
            Some(default)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_omits_the_state_suffix() {
        let resolver = ImageResolver::new(CharacterIdentity::Mascot);
        assert_eq!(
            resolver.resolve("default"),
            Path::new("assets/mascots/Mascot/mascot.png")
        );
        assert_eq!(
            resolver.resolve("happy"),
            Path::new("assets/mascots/Mascot/mascot_happy.png")
        );
    }

    #[test]
    fn prefix_casing_follows_the_character() {
        let lumina = ImageResolver::new(CharacterIdentity::Lumina);
        assert_eq!(
            lumina.resolve("sleepy"),
            Path::new("assets/mascots/Lumina/Lumina_sleepy.png")
        );

        let planet = ImageResolver::new(CharacterIdentity::Planet);
        assert_eq!(
            planet.resolve("default"),
            Path::new("assets/mascots/Planet/planet.png")
        );
    }

    #[test]
    fn fallback_fires_at_most_once() {
        let resolver = ImageResolver::new(CharacterIdentity::Planet);
        let missing = resolver.resolve("tickle");

        let fallback = resolver.fallback_for(&missing).expect("fallback expected");
        assert_eq!(fallback, resolver.default_path());

        // A failing default must not produce another substitution.
        assert!(resolver.fallback_for(&fallback).is_none());
    }
}
