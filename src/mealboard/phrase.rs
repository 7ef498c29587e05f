//! Parser for spoken meal commands.
//!
//! A voice client hands over the transcript; this module turns the one phrase
//! shape mealboard understands into a [`MealDraft`]:
//!
//! ```text
//! add <name> [with <n> calories] for <meal type> on <weekday> [with <n> calories]
//! ```
//!
//! Keywords are case-insensitive, the name keeps its casing, and trailing
//! punctuation is ignored. Without a calorie count the draft carries `0`.

use crate::draft::MealDraft;
use crate::error::{MealError, Result};
use crate::model::{MealType, Weekday};

const CALORIE_WORDS: [&str; 4] = ["calories", "calorie", "kcal", "cal"];

pub fn parse_phrase(phrase: &str) -> Result<MealDraft> {
    let cleaned = phrase.trim().trim_end_matches(['.', '!', '?']);
    let mut words: Vec<&str> = cleaned.split_whitespace().collect();

    if !words.first().is_some_and(|w| w.eq_ignore_ascii_case("add")) {
        return Err(unrecognized(phrase));
    }
    words.remove(0);

    let mut calories = take_calorie_tail(&mut words);

    let n = words.len();
    if n < 5 {
        return Err(unrecognized(phrase));
    }
    let (head, tail) = words.split_at(n - 4);
    if !tail[0].eq_ignore_ascii_case("for") || !tail[2].eq_ignore_ascii_case("on") {
        return Err(unrecognized(phrase));
    }
    let meal_type: MealType = tail[1]
        .parse()
        .map_err(|e| MealError::validation("phrase", e))?;
    let day: Weekday = tail[3]
        .parse()
        .map_err(|e| MealError::validation("phrase", e))?;

    let mut name_words = head.to_vec();
    if calories.is_none() {
        calories = take_calorie_tail(&mut name_words);
    }
    if name_words.is_empty() {
        return Err(MealError::validation("phrase", "no meal name given"));
    }

    Ok(MealDraft::new(
        name_words.join(" "),
        calories.unwrap_or_else(|| "0".to_string()),
        day.as_str(),
        meal_type.as_str(),
    ))
}

/// Pops a trailing `with <n> calories` off `words`, returning the count.
fn take_calorie_tail(words: &mut Vec<&str>) -> Option<String> {
    let n = words.len();
    if n < 3 {
        return None;
    }
    let tail = &words[n - 3..];
    let is_tail = tail[0].eq_ignore_ascii_case("with")
        && CALORIE_WORDS
            .iter()
            .any(|w| tail[2].eq_ignore_ascii_case(w));
    if !is_tail {
        return None;
    }
    let count = tail[1].to_string();
    words.truncate(n - 3);
    Some(count)
}

fn unrecognized(phrase: &str) -> MealError {
    MealError::validation(
        "phrase",
        format!(
            "'{}' does not match \"add <name> for <meal type> on <weekday>\"",
            phrase.trim()
        ),
    )
}
