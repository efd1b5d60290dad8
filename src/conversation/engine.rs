//! Selection logic for prompts, responses, and the time message.
use chrono::NaiveTime;
use rand::Rng;

use crate::content::{bundle::TIME_PLACEHOLDER, Category, ContentBundle};

pub fn prompt_line(bundle: &ContentBundle, category: Category) -> String {
    bundle.prompt(category).to_string()
}

pub fn response_line(bundle: &ContentBundle, category: Category, rng: &mut impl Rng) -> String {
    bundle.pick_response(category, rng)
}

/// Formats the wall-clock time as zero-padded HH:MM and substitutes it into
/// a random time template. Independent of the response-pool path.
pub fn time_line(bundle: &ContentBundle, time: NaiveTime, rng: &mut impl Rng) -> String {
    let stamp = time.format("%H:%M").to_string();
    bundle
        .pick_time_template(rng)
        .replace(TIME_PLACEHOLDER, &stamp)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::content::bundle::FALLBACK_RESPONSE;

    fn bundle_with_pool(key: &str, lines: &[&str]) -> ContentBundle {
        let mut pools = HashMap::new();
        pools.insert(
            key.to_string(),
            lines.iter().map(|line| line.to_string()).collect(),
        );
        ContentBundle::new(HashMap::new(), Vec::new(), pools, Vec::new())
    }

    #[test]
    fn single_entry_pool_is_deterministic() {
        let bundle = bundle_with_pool("Goodbyes", &["See you soon."]);
        let mut rng = rand::rng();
        for _ in 0..10 {
            assert_eq!(
                response_line(&bundle, Category::Goodbye, &mut rng),
                "See you soon."
            );
        }
    }

    #[test]
    fn missing_pool_apologises() {
        let bundle = bundle_with_pool("Goodbyes", &["See you soon."]);
        let mut rng = rand::rng();
        assert_eq!(
            response_line(&bundle, Category::Music, &mut rng),
            FALLBACK_RESPONSE
        );
    }

    #[test]
    fn time_is_zero_padded_into_the_template() {
        let bundle = ContentBundle::new(
            HashMap::new(),
            Vec::new(),
            HashMap::new(),
            vec!["Right now it is {time}.".to_string()],
        );
        let mut rng = rand::rng();
        let morning = NaiveTime::from_hms_opt(9, 5, 0).expect("valid time");
        assert_eq!(
            time_line(&bundle, morning, &mut rng),
            "Right now it is 09:05."
        );

        let midnight = NaiveTime::from_hms_opt(0, 0, 59).expect("valid time");
        assert_eq!(
            time_line(&bundle, midnight, &mut rng),
            "Right now it is 00:00."
        );
    }
}
