//! Per-character content: prompts, response pools, monologues, time templates.
use std::collections::HashMap;

use bevy::prelude::*;
use rand::Rng;

/// Placeholder substituted with the formatted wall-clock time.
pub const TIME_PLACEHOLDER: &str = "{time}";

/// Reply used when a response pool is missing or empty.
pub const FALLBACK_RESPONSE: &str = "Sorry, I don't quite understand.";

const BUILTIN_GREETING: &str = "Hello there!";
const BUILTIN_MONOLOGUE: &str = "I could not find my storybook today...";
const BUILTIN_TIME_TEMPLATE: &str = "It is {time} right now.";

/// Conversation categories offered by the presentation layer's buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Greeting,
    Weather,
    Time,
    Joke,
    Goodbye,
    HowAreYou,
    Compliment,
    Motivation,
    Advice,
    Story,
    Food,
    Music,
    Study,
    Sleep,
    Thanks,
}

impl Category {
    pub const ALL: [Category; 15] = [
        Self::Greeting,
        Self::Weather,
        Self::Time,
        Self::Joke,
        Self::Goodbye,
        Self::HowAreYou,
        Self::Compliment,
        Self::Motivation,
        Self::Advice,
        Self::Story,
        Self::Food,
        Self::Music,
        Self::Study,
        Self::Sleep,
        Self::Thanks,
    ];

    /// Key of the button prompt in the content bundle.
    pub fn prompt_key(self) -> &'static str {
        match self {
            Self::Greeting => "Greeting",
            Self::Weather => "Weather",
            Self::Time => "Time",
            Self::Joke => "Joke",
            Self::Goodbye => "Goodbye",
            Self::HowAreYou => "HowAreYou",
            Self::Compliment => "Compliment",
            Self::Motivation => "Motivation",
            Self::Advice => "Advice",
            Self::Story => "Story",
            Self::Food => "Food",
            Self::Music => "Music",
            Self::Study => "Study",
            Self::Sleep => "Sleep",
            Self::Thanks => "Thanks",
        }
    }

    /// Key of the response pool this category draws from.
    pub fn pool_key(self) -> &'static str {
        match self {
            Self::Greeting => "Greetings",
            Self::Weather => "Weather",
            Self::Time => "Time",
            Self::Joke => "Jokes",
            Self::Goodbye => "Goodbyes",
            Self::HowAreYou => "HowAreYou",
            Self::Compliment => "Compliments",
            Self::Motivation => "Motivation",
            Self::Advice => "Advice",
            Self::Story => "Stories",
            Self::Food => "Food",
            Self::Music => "Music",
            Self::Study => "Study",
            Self::Sleep => "Sleep",
            Self::Thanks => "Thanks",
        }
    }

    /// Display state shown while the category's reply is on screen.
    pub fn display_state(self) -> &'static str {
        match self {
            Self::Greeting => "happy",
            Self::Weather => "thoughtful",
            Self::Time => "look_up",
            Self::Joke => "happy",
            Self::Goodbye => "sad",
            Self::HowAreYou => "happy",
            Self::Compliment => "love",
            Self::Motivation => "happy",
            Self::Advice => "thoughtful",
            Self::Story => "happy",
            Self::Food => "hungry",
            Self::Music => "happy",
            Self::Study => "thoughtful",
            Self::Sleep => "sleepy",
            Self::Thanks => "love",
        }
    }
}

/// One spontaneous line with the display state shown alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonologueEntry {
    pub text: String,
    pub image_state: String,
}

/// Immutable per-session content for the active character.
#[derive(Resource, Debug, Clone)]
pub struct ContentBundle {
    prompts: HashMap<String, String>,
    monologues: Vec<MonologueEntry>,
    pools: HashMap<String, Vec<String>>,
    time_templates: Vec<String>,
}

impl ContentBundle {
    pub fn new(
        prompts: HashMap<String, String>,
        monologues: Vec<MonologueEntry>,
        pools: HashMap<String, Vec<String>>,
        time_templates: Vec<String>,
    ) -> Self {
        let mut bundle = Self {
            prompts,
            monologues,
            pools,
            time_templates,
        };
        bundle.ensure_minimums();
        bundle
    }

    /// Minimal built-in content used whenever loading fails.
    pub fn builtin() -> Self {
        let mut pools = HashMap::new();
        pools.insert(
            Category::Greeting.pool_key().to_string(),
            vec![BUILTIN_GREETING.to_string()],
        );
        Self::new(HashMap::new(), Vec::new(), pools, Vec::new())
    }

    /// The bundle can be loaded from arbitrary data; guarantee the pieces
    /// the autonomous behavior relies on are never empty.
    fn ensure_minimums(&mut self) {
        if self.monologues.is_empty() {
            self.monologues.push(MonologueEntry {
                text: BUILTIN_MONOLOGUE.to_string(),
                image_state: "sad".to_string(),
            });
        }
        if self.time_templates.is_empty() {
            self.time_templates.push(BUILTIN_TIME_TEMPLATE.to_string());
        }
    }

    /// Localized button prompt, falling back to the raw prompt key.
    pub fn prompt(&self, category: Category) -> &str {
        self.prompts
            .get(category.prompt_key())
            .map(String::as_str)
            .unwrap_or_else(|| category.prompt_key())
    }

    /// Uniform random pick from the category's pool, or the apology line.
    pub fn pick_response(&self, category: Category, rng: &mut impl Rng) -> String {
        match self.pools.get(category.pool_key()) {
            Some(pool) if !pool.is_empty() => pool[rng.random_range(0..pool.len())].clone(),
            _ => FALLBACK_RESPONSE.to_string(),
        }
    }

    pub fn pick_monologue(&self, rng: &mut impl Rng) -> &MonologueEntry {
        &self.monologues[rng.random_range(0..self.monologues.len())]
    }

    pub fn pick_time_template(&self, rng: &mut impl Rng) -> &str {
        &self.time_templates[rng.random_range(0..self.time_templates.len())]
    }

    pub fn monologue_count(&self) -> usize {
        self.monologues.len()
    }

    pub fn pool_count(&self) -> usize {
        self.pools.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_bundle_is_never_empty() {
        let bundle = ContentBundle::builtin();
        let mut rng = rand::rng();
        assert_eq!(
            bundle.pick_response(Category::Greeting, &mut rng),
            BUILTIN_GREETING
        );
        let monologue = bundle.pick_monologue(&mut rng);
        assert_eq!(monologue.image_state, "sad");
        assert!(bundle.pick_time_template(&mut rng).contains(TIME_PLACEHOLDER));
    }

    #[test]
    fn prompt_falls_back_to_the_raw_key() {
        let bundle = ContentBundle::builtin();
        assert_eq!(bundle.prompt(Category::HowAreYou), "HowAreYou");

        let mut prompts = HashMap::new();
        prompts.insert("Greeting".to_string(), "Say hi".to_string());
        let bundle = ContentBundle::new(prompts, Vec::new(), HashMap::new(), Vec::new());
        assert_eq!(bundle.prompt(Category::Greeting), "Say hi");
    }

    #[test]
    fn missing_or_empty_pool_yields_the_apology() {
        let mut pools = HashMap::new();
        pools.insert(Category::Joke.pool_key().to_string(), Vec::new());
        let bundle = ContentBundle::new(HashMap::new(), Vec::new(), pools, Vec::new());
        let mut rng = rand::rng();
        assert_eq!(bundle.pick_response(Category::Joke, &mut rng), FALLBACK_RESPONSE);
        assert_eq!(bundle.pick_response(Category::Story, &mut rng), FALLBACK_RESPONSE);
    }

    #[test]
    fn every_category_has_distinct_keys_and_a_display_state() {
        for category in Category::ALL {
            assert!(!category.prompt_key().is_empty());
            assert!(!category.pool_key().is_empty());
            assert!(!category.display_state().is_empty());
        }
        assert_eq!(Category::Greeting.pool_key(), "Greetings");
        assert_eq!(Category::Sleep.display_state(), "sleepy");
        assert_eq!(Category::Thanks.display_state(), "love");
    }
}
