//! Loads `messages.json` and selects the active character's bundle.
use std::{collections::HashMap, fs, path::Path};

use bevy::prelude::*;
use serde::Deserialize;

use crate::settings::CharacterIdentity;

use super::bundle::{ContentBundle, MonologueEntry};

const CONTENT_PATH: &str = "messages.json";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawMonologue {
    text: String,
    image: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct RawCharacterContent {
    #[serde(default, rename = "Prompts")]
    prompts: HashMap<String, String>,
    #[serde(default, rename = "Monologues")]
    monologues: Vec<RawMonologue>,
    #[serde(default, rename = "Time")]
    time: Vec<String>,
    // Every remaining top-level key is a response pool.
    #[serde(default, flatten)]
    pools: HashMap<String, Vec<String>>,
}

impl From<RawCharacterContent> for ContentBundle {
    fn from(value: RawCharacterContent) -> Self {
        let monologues = value
            .monologues
            .into_iter()
            .map(|entry| MonologueEntry {
                text: entry.text,
                image_state: entry.image,
            })
            .collect();
        ContentBundle::new(value.prompts, monologues, value.pools, value.time)
    }
}

fn bundle_from_json(
    data: &str,
    identity: CharacterIdentity,
) -> Result<Option<ContentBundle>, serde_json::Error> {
    let mut characters: HashMap<String, RawCharacterContent> = serde_json::from_str(data)?;
    Ok(characters.remove(identity.label()).map(ContentBundle::from))
}

/// Reads the content file once at startup. Any failure (missing file,
/// malformed JSON, unknown character) resolves to the built-in bundle.
pub fn load_or_builtin(identity: CharacterIdentity) -> ContentBundle {
    let path = Path::new(CONTENT_PATH);
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) => {
            warn!(
                "Failed to read {} ({}). Falling back to built-in content.",
                CONTENT_PATH, err
            );
            return ContentBundle::builtin();
        }
    };

    match bundle_from_json(&data, identity) {
        Ok(Some(bundle)) => bundle,
        Ok(None) => {
            warn!(
                "{} has no entry for character \"{}\". Falling back to built-in content.",
                CONTENT_PATH,
                identity.label()
            );
            ContentBundle::builtin()
        }
        Err(err) => {
            warn!(
                "Failed to parse {} ({}). Falling back to built-in content.",
                CONTENT_PATH, err
            );
            ContentBundle::builtin()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::bundle::Category;

    const SAMPLE: &str = r#"{
        "Mascot": {
            "Prompts": { "Greeting": "Say hello", "Time": "What time is it?" },
            "Monologues": [
                { "Text": "What a quiet afternoon.", "Image": "sleepy" }
            ],
            "Time": ["The clock says {time}."],
            "Greetings": ["Hi!", "Hello!"],
            "Jokes": ["Why did the cursor cross the screen?"]
        },
        "Lumina": {
            "Greetings": ["Greetings, traveller."]
        }
    }"#;

    #[test]
    fn parses_the_active_character_only() {
        let bundle = bundle_from_json(SAMPLE, CharacterIdentity::Mascot)
            .expect("valid json")
            .expect("Mascot entry present");
        assert_eq!(bundle.prompt(Category::Greeting), "Say hello");
        assert_eq!(bundle.monologue_count(), 1);
        assert_eq!(bundle.pool_count(), 2);

        let mut rng = rand::rng();
        let joke = bundle.pick_response(Category::Joke, &mut rng);
        assert!(joke.contains("cursor"));
    }

    #[test]
    fn unknown_character_yields_none() {
        let bundle = bundle_from_json(SAMPLE, CharacterIdentity::Planet).expect("valid json");
        assert!(bundle.is_none());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(bundle_from_json("{ not json", CharacterIdentity::Mascot).is_err());
    }

    #[test]
    fn sparse_character_entries_are_normalised() {
        let bundle = bundle_from_json(SAMPLE, CharacterIdentity::Lumina)
            .expect("valid json")
            .expect("Lumina entry present");
        // No monologues or time templates in the file; the built-in
        // minimums must have been substituted.
        assert_eq!(bundle.monologue_count(), 1);
        let mut rng = rand::rng();
        assert!(!bundle.pick_time_template(&mut rng).is_empty());
    }
}
