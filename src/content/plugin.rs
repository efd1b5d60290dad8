//! ContentPlugin loads the active character's content at startup.
use bevy::prelude::*;

use crate::settings::CharacterIdentity;

use super::loader::load_or_builtin;

pub struct ContentPlugin {
    identity: CharacterIdentity,
}

impl ContentPlugin {
    pub fn new(identity: CharacterIdentity) -> Self {
        Self { identity }
    }
}

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let bundle = load_or_builtin(self.identity);
        info!(
            "Content loaded for {}: {} monologues, {} response pools",
            self.identity.label(),
            bundle.monologue_count(),
            bundle.pool_count()
        );
        app.insert_resource(bundle);
    }
}
