//! # Rendering Module
//!
//! Turns command results into styled terminal text.
//!
//! Layout (truncation, padding, column alignment) is computed here with
//! `unicode-width` so that meal names with wide characters line up. Colors come
//! from [`BOARD_THEME`] and follow terminal detection, except in tests where
//! the `*_internal` variants force them off.

use super::styles::BOARD_THEME;
use console::Style;
use mealboard::api::{CmdMessage, DayView, MessageLevel, WeekStats};
use mealboard::config::{MealboardConfig, CONFIG_KEYS};
use mealboard::model::{Meal, Nutrition, Weekday};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width of the meal name column.
pub const NAME_WIDTH: usize = 30;
pub const TYPE_WIDTH: usize = 9;
/// Width of a day header, calories right-aligned at its end.
pub const HEADER_WIDTH: usize = 58;

fn paint(style: &Style, text: &str, use_color: Option<bool>) -> String {
    match use_color {
        Some(c) => style.clone().force_styling(c).apply_to(text).to_string(),
        None => style.apply_to(text).to_string(),
    }
}

/// Renders day columns, one block per day, plus the week total when given.
pub fn render_board(days: &[DayView], week_totals: Option<Nutrition>, show_macros: bool) -> String {
    render_board_internal(days, week_totals, show_macros, None)
}

fn render_board_internal(
    days: &[DayView],
    week_totals: Option<Nutrition>,
    show_macros: bool,
    use_color: Option<bool>,
) -> String {
    let theme = &*BOARD_THEME;
    let mut out = String::new();

    for (i, view) in days.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&render_day_header(view, show_macros, use_color));
        out.push('\n');

        if view.meals.is_empty() {
            out.push_str(&format!("  {}\n", paint(&theme.empty, "no meals", use_color)));
            continue;
        }
        for (position, meal) in view.meals.iter().enumerate() {
            out.push_str(&render_meal_line(view.day, position, meal, show_macros, use_color));
            out.push('\n');
        }
    }

    if let Some(totals) = week_totals {
        let mut line = format!("Week total: {} cal", totals.calories);
        if show_macros {
            line.push_str(&format!("  {}", fmt_total_macros(&totals)));
        }
        out.push('\n');
        out.push_str(&paint(&theme.total, &line, use_color));
        out.push('\n');
    }

    out
}

fn render_day_header(view: &DayView, show_macros: bool, use_color: Option<bool>) -> String {
    let theme = &*BOARD_THEME;
    let title = title_case(view.day.as_str());
    let calories = format!("{} cal", view.totals.calories);
    let padding = HEADER_WIDTH.saturating_sub(title.width() + calories.width());

    let mut line = format!(
        "{}{}{}",
        paint(&theme.day_header, &title, use_color),
        " ".repeat(padding),
        paint(&theme.calories, &calories, use_color)
    );
    if show_macros && !view.meals.is_empty() {
        line.push_str(&format!(
            "  {}",
            paint(&theme.macros, &fmt_total_macros(&view.totals), use_color)
        ));
    }
    if view.over_target {
        line.push_str(&format!("  {}", paint(&theme.over_target, "over target", use_color)));
    }
    line
}

fn render_meal_line(
    day: Weekday,
    position: usize,
    meal: &Meal,
    show_macros: bool,
    use_color: Option<bool>,
) -> String {
    let theme = &*BOARD_THEME;
    let slot = format!("{}.{}", day.short(), position + 1);

    let label = match &meal.category {
        Some(category) => format!("{} [{}]", meal.name, category),
        None => meal.name.clone(),
    };
    let name = truncate_to_width(&label, NAME_WIDTH);
    let name_padding = NAME_WIDTH.saturating_sub(name.width());

    let mut line = format!(
        "  {} {}{} {} {:>6} cal",
        paint(&theme.slot, &format!("{:<6}", slot), use_color),
        name,
        " ".repeat(name_padding),
        paint(
            &theme.meal_type,
            &format!("{:<width$}", meal.meal_type.as_str(), width = TYPE_WIDTH),
            use_color
        ),
        meal.calories
    );

    if show_macros {
        let macros = fmt_meal_macros(meal);
        if !macros.is_empty() {
            line.push_str(&format!("  {}", paint(&theme.macros, &macros, use_color)));
        }
    }
    line
}

fn fmt_meal_macros(meal: &Meal) -> String {
    [("P", meal.protein), ("C", meal.carbs), ("F", meal.fat)]
        .into_iter()
        .filter_map(|(label, grams)| grams.map(|g| format!("{} {}g", label, g)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn fmt_total_macros(totals: &Nutrition) -> String {
    format!(
        "P {}g C {}g F {}g",
        totals.protein, totals.carbs, totals.fat
    )
}

/// Renders the weekly statistics block.
pub fn render_stats(stats: &WeekStats) -> String {
    render_stats_internal(stats, None)
}

fn render_stats_internal(stats: &WeekStats, use_color: Option<bool>) -> String {
    let theme = &*BOARD_THEME;
    let mut out = String::new();

    let headline = format!(
        "Week total: {} cal  {}",
        stats.totals.calories,
        fmt_total_macros(&stats.totals)
    );
    out.push_str(&paint(&theme.total, &headline, use_color));
    out.push('\n');
    out.push_str(&format!(
        "Meals: {} across {} of 7 days\n",
        stats.meal_count, stats.planned_days
    ));
    out.push_str(&format!(
        "Average: {} cal per planned day\n",
        stats.average_calories
    ));
    if let Some(day) = stats.busiest_day {
        out.push_str(&format!("Busiest day: {}\n", day));
    }

    let by_type = stats
        .by_type
        .iter()
        .map(|(meal_type, count)| format!("{} {}", meal_type, count))
        .collect::<Vec<_>>()
        .join(", ");
    out.push_str(&format!("By type: {}\n", by_type));

    match stats.calorie_target {
        Some(target) if stats.over_target.is_empty() => {
            out.push_str(&format!("Target: {} cal/day\n", target));
        }
        Some(target) => {
            let days = stats
                .over_target
                .iter()
                .map(|d| d.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            out.push_str(&format!(
                "Target: {} cal/day, {}\n",
                target,
                paint(&theme.over_target, &format!("over on {}", days), use_color)
            ));
        }
        None => out.push_str("Target: off\n"),
    }

    out.push('\n');
    for (day, totals) in &stats.daily {
        let marker = if stats.over_target.contains(day) {
            format!("  {}", paint(&theme.over_target, "over", use_color))
        } else {
            String::new()
        };
        out.push_str(&format!(
            "  {}  {:>6} cal{}\n",
            paint(&theme.slot, day.short(), use_color),
            totals.calories,
            marker
        ));
    }

    out
}

/// Renders `key = value` lines for every configuration key.
pub fn render_config(config: &MealboardConfig) -> String {
    CONFIG_KEYS
        .iter()
        .filter_map(|key| config.get(key).ok().map(|value| format!("{} = {}\n", key, value)))
        .collect()
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_internal(messages, None)
}

fn render_messages_internal(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    let theme = &*BOARD_THEME;
    messages
        .iter()
        .map(|message| {
            let style = match message.level {
                MessageLevel::Info => &theme.info,
                MessageLevel::Success => &theme.success,
                MessageLevel::Warning => &theme.warning,
            };
            format!("{}\n", paint(style, &message.content, use_color))
        })
        .collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
