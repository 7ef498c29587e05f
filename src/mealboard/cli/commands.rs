//! # CLI Layer
//!
//! This module is **one possible UI client** for mealboard. It is not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs the tracing subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Resolves the data directory and opens the store
//! - `handle_*()`: Per-command handlers that call the API and print results
//!
//! Selectors (`tue.2`, or a meal id) are passed through untouched; the API
//! layer resolves them. Positions typed by the user are 1-based.

use super::render::{print_messages, render_board, render_config, render_stats};
use super::setup::{Cli, Commands, MealFieldArgs};
use clap::Parser;
use directories::ProjectDirs;
use mealboard::api::{ConfigAction, MealPatch, MealboardApi};
use mealboard::draft::MealDraft;
use mealboard::error::{MealError, Result};
use mealboard::model::{MealType, Weekday};
use mealboard::store::fs::FileStorage;
use mealboard::store::meal_store::MealStore;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Overrides the data directory (board and config).
const HOME_ENV: &str = "MEALBOARD_HOME";

struct AppContext {
    api: MealboardApi<FileStorage>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add { name, fields }) => handle_add(&mut ctx, name.join(" "), fields),
        Some(Commands::Edit {
            selector,
            name,
            fields,
        }) => handle_edit(&mut ctx, &selector, name, fields),
        Some(Commands::Delete { selectors }) => handle_delete(&mut ctx, &selectors),
        Some(Commands::Move {
            selector,
            day,
            position,
        }) => handle_move(&mut ctx, &selector, day, position),
        Some(Commands::List { day }) => handle_list(&ctx, day),
        Some(Commands::Stats) => handle_stats(&ctx),
        Some(Commands::Suggest { meal_type, add }) => handle_suggest(&mut ctx, meal_type, add),
        Some(Commands::Say { phrase }) => handle_say(&mut ctx, &phrase.join(" ")),
        Some(Commands::Export) => handle_export(&ctx),
        Some(Commands::Import { file }) => handle_import(&mut ctx, &file),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, None),
    }
}

/// `RUST_LOG` wins when set; otherwise warnings only, or debug for our own
/// crate with `--verbose`. Logs go to stderr so stdout stays pipeable.
fn init_logging(verbose: bool) {
    let fallback = if verbose { "mealboard=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "mealboard", "mealboard")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| MealError::Store("Could not determine data directory".into()))
}

fn init_context() -> Result<AppContext> {
    let dir = data_dir()?;
    tracing::debug!(dir = %dir.display(), "opening board");

    let store = MealStore::open(FileStorage::new(dir.clone()))?;
    let api = MealboardApi::new(store, dir);
    Ok(AppContext { api })
}

fn handle_add(ctx: &mut AppContext, name: String, fields: MealFieldArgs) -> Result<()> {
    let day = fields
        .day
        .unwrap_or_else(|| Weekday::today().to_string());
    let mut draft = MealDraft::new(
        name,
        fields.calories.unwrap_or_default(),
        day,
        fields.meal_type.unwrap_or_default(),
    );
    draft.protein = fields.protein;
    draft.carbs = fields.carbs;
    draft.fat = fields.fat;
    draft.category = fields.category;
    draft.notes = fields.notes;

    let result = ctx.api.create_meal(&draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    selector: &str,
    name: Option<String>,
    fields: MealFieldArgs,
) -> Result<()> {
    let patch = MealPatch {
        name,
        calories: fields.calories,
        protein: fields.protein,
        carbs: fields.carbs,
        fat: fields.fat,
        day: fields.day,
        meal_type: fields.meal_type,
        category: fields.category,
        notes: fields.notes,
    };
    if patch.is_empty() {
        return Err(MealError::Api(
            "Nothing to change; pass at least one field, e.g. --calories 400".into(),
        ));
    }

    let result = ctx.api.update_meal(selector, &patch)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, selectors: &[String]) -> Result<()> {
    let result = ctx.api.delete_meals(selectors)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_move(
    ctx: &mut AppContext,
    selector: &str,
    day: Weekday,
    position: Option<usize>,
) -> Result<()> {
    let index = position.map(|p| p.saturating_sub(1));
    let result = ctx.api.move_meal(selector, day, index)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, day: Option<Weekday>) -> Result<()> {
    let config = ctx.api.load_config()?;
    let result = ctx.api.list_days(day)?;
    let week_totals = if day.is_none() {
        result.week_totals
    } else {
        None
    };
    print!(
        "{}",
        render_board(&result.listed_days, week_totals, config.show_macros)
    );
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.stats()?;
    if let Some(stats) = &result.stats {
        print!("{}", render_stats(stats));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_suggest(
    ctx: &mut AppContext,
    meal_type: Option<MealType>,
    add_to: Option<Weekday>,
) -> Result<()> {
    let mut rng = rand::thread_rng();
    let result = ctx.api.suggest(&mut rng, meal_type, add_to)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_say(ctx: &mut AppContext, phrase: &str) -> Result<()> {
    let result = ctx.api.say(phrase)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.export()?;
    if let Some(json) = &result.exported {
        println!("{}", json);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, file: &Path) -> Result<()> {
    let bytes = std::fs::read(file)?;
    let result = ctx.api.import(&bytes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        print!("{}", render_config(config));
    }
    print_messages(&result.messages);
    Ok(())
}
