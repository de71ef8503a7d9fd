use crate::models::Insight;
use rand::Rng;
use thiserror::Error;

pub const HEADLINE_TEMPLATES: [&str; 10] = [
    "Why {name} is {location}'s Hidden Gem in 2025",
    "{name} - {location}'s Top-Rated Business You Can't Miss",
    "Discover Why {name} is Taking {location} by Storm",
    "{name}: The Ultimate {location} Experience Awaits",
    "Local Favorite: {name} Dominates {location}'s Market",
    "{name} - Where {location} Meets Excellence",
    "Breaking: {name} Becomes {location}'s Must-Visit Destination",
    "{name} Sets New Standards in {location}",
    "Why Everyone in {location} is Talking About {name}",
    "{name} - {location}'s Best Kept Secret Revealed",
];

const NAME_TOKEN: &str = "{name}";
const LOCATION_TOKEN: &str = "{location}";

pub const RATING_MIN: f64 = 3.5;
pub const RATING_MAX: f64 = 5.0;
pub const REVIEWS_MIN: u32 = 50;
// floor(r * 500) + 50, so the upper bound is 549 inclusive.
pub const REVIEWS_MAX: u32 = 549;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsightError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
}

/// Samples a fresh rating, review count and headline for a business.
///
/// Nothing is drawn from `rng` unless both fields are present and non-empty.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    name: Option<&str>,
    location: Option<&str>,
) -> Result<Insight, InsightError> {
    let (name, location) = require_fields(name, location)?;

    let rating = sample_rating(rng);
    let reviews = sample_reviews(rng);
    let headline = sample_headline(rng, name, location);

    Ok(Insight {
        name: name.to_owned(),
        location: location.to_owned(),
        rating,
        reviews,
        headline,
    })
}

/// Draws a new headline only; rating and review count are left to the caller.
pub fn regenerate_headline<R: Rng + ?Sized>(
    rng: &mut R,
    name: Option<&str>,
    location: Option<&str>,
) -> Result<String, InsightError> {
    let (name, location) = require_fields(name, location)?;
    Ok(sample_headline(rng, name, location))
}

pub fn sample_rating<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let raw = RATING_MIN + rng.r#gen::<f64>() * (RATING_MAX - RATING_MIN);
    (raw * 10.0).round() / 10.0
}

pub fn sample_reviews<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    REVIEWS_MIN + rng.gen_range(0..=REVIEWS_MAX - REVIEWS_MIN)
}

pub fn sample_headline<R: Rng + ?Sized>(rng: &mut R, name: &str, location: &str) -> String {
    let index = rng.gen_range(0..HEADLINE_TEMPLATES.len());
    fill_template(HEADLINE_TEMPLATES[index], name, location)
}

/// Replaces the first `{name}` and then the first `{location}` token verbatim.
pub fn fill_template(template: &str, name: &str, location: &str) -> String {
    template
        .replacen(NAME_TOKEN, name, 1)
        .replacen(LOCATION_TOKEN, location, 1)
}

fn require_fields<'a>(
    name: Option<&'a str>,
    location: Option<&'a str>,
) -> Result<(&'a str, &'a str), InsightError> {
    let name = name
        .filter(|value| !value.is_empty())
        .ok_or(InsightError::MissingField("name"))?;
    let location = location
        .filter(|value| !value.is_empty())
        .ok_or(InsightError::MissingField("location"))?;
    Ok((name, location))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn rating_stays_in_range_with_one_decimal() {
        let mut rng = seeded(7);
        for _ in 0..5_000 {
            let rating = sample_rating(&mut rng);
            assert!((RATING_MIN..=RATING_MAX).contains(&rating), "rating {rating}");
            let tenths = rating * 10.0;
            assert!((tenths - tenths.round()).abs() < 1e-9, "rating {rating}");

            let rendered = serde_json::to_string(&rating).unwrap();
            let (_, decimals) = rendered.split_once('.').unwrap();
            assert_eq!(decimals.len(), 1, "rendered {rendered}");
        }
    }

    #[test]
    fn reviews_cover_full_literal_range() {
        let mut rng = seeded(11);
        let mut seen_low = false;
        let mut seen_high = false;
        for _ in 0..50_000 {
            let reviews = sample_reviews(&mut rng);
            assert!((REVIEWS_MIN..=REVIEWS_MAX).contains(&reviews));
            seen_low |= reviews < 60;
            seen_high |= reviews > 540;
        }
        assert!(seen_low && seen_high);
    }

    #[test]
    fn every_template_has_each_token_once() {
        for template in HEADLINE_TEMPLATES {
            assert_eq!(template.matches(NAME_TOKEN).count(), 1, "{template}");
            assert_eq!(template.matches(LOCATION_TOKEN).count(), 1, "{template}");
        }
    }

    #[test]
    fn fill_template_inserts_values_verbatim() {
        let headline = fill_template(HEADLINE_TEMPLATES[8], "<b>Joe's</b>", "New York");
        assert_eq!(headline, "Why Everyone in New York is Talking About <b>Joe's</b>");
    }

    #[test]
    fn fill_template_only_replaces_first_occurrence() {
        let headline = fill_template("{name} {name} {location} {location}", "A", "B");
        assert_eq!(headline, "A {name} B {location}");
    }

    #[test]
    fn value_that_looks_like_a_token_is_not_expanded_twice() {
        let headline = fill_template("{name} in {location}", "{location}", "Pune");
        assert_eq!(headline, "Pune in {location}");
    }

    #[test]
    fn generate_substitutes_name_and_location() {
        let mut rng = seeded(1);
        for _ in 0..200 {
            let insight = generate(&mut rng, Some("Café Delight"), Some("Mumbai")).unwrap();
            assert_eq!(insight.name, "Café Delight");
            assert_eq!(insight.location, "Mumbai");
            assert!(insight.headline.contains("Café Delight"));
            assert!(insight.headline.contains("Mumbai"));
            assert!(!insight.headline.contains(NAME_TOKEN));
            assert!(!insight.headline.contains(LOCATION_TOKEN));
        }
    }

    #[test]
    fn same_seed_reproduces_the_same_insight() {
        let first = generate(&mut seeded(42), Some("Joe"), Some("NY")).unwrap();
        let second = generate(&mut seeded(42), Some("Joe"), Some("NY")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_fields_are_reported_in_order() {
        let mut rng = seeded(3);
        assert_eq!(
            generate(&mut rng, None, Some("NY")),
            Err(InsightError::MissingField("name"))
        );
        assert_eq!(
            generate(&mut rng, Some(""), None),
            Err(InsightError::MissingField("name"))
        );
        assert_eq!(
            generate(&mut rng, Some("Joe"), Some("")),
            Err(InsightError::MissingField("location"))
        );
        assert_eq!(
            regenerate_headline(&mut rng, Some("Joe"), None),
            Err(InsightError::MissingField("location"))
        );
    }

    #[test]
    fn rejected_request_draws_nothing() {
        let mut used = seeded(5);
        let _ = generate(&mut used, Some(""), Some("NY"));
        let _ = regenerate_headline(&mut used, Some("Joe"), None);
        let mut fresh = seeded(5);
        assert_eq!(used.r#gen::<u64>(), fresh.r#gen::<u64>());
    }

    #[test]
    fn whitespace_values_are_kept_as_is() {
        let headline = regenerate_headline(&mut seeded(9), Some(" "), Some("NY")).unwrap();
        assert!(headline.contains("NY"));
    }

    #[test]
    fn regenerate_headline_varies_across_calls() {
        let mut rng = seeded(2024);
        let headlines: HashSet<String> = (0..100)
            .map(|_| regenerate_headline(&mut rng, Some("Joe"), Some("NY")).unwrap())
            .collect();
        assert!(headlines.len() > 1);
        assert!(headlines.len() <= HEADLINE_TEMPLATES.len());
    }
}
