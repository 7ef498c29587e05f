use clap::{Parser, Subcommand};
use mealboard::model::{MealType, Weekday};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "mealboard", bin_name = "mealboard", version = get_version())]
#[command(about = "Plan the week's meals from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Field flags shared by `add` and `edit`.
#[derive(clap::Args, Debug, Default)]
pub struct MealFieldArgs {
    /// Calories (whole number; decimals are truncated)
    #[arg(short, long)]
    pub calories: Option<String>,

    /// Day of the week, e.g. `monday` or `mon`
    #[arg(short, long)]
    pub day: Option<String>,

    /// Meal type: breakfast, lunch, dinner or snack
    #[arg(short = 't', long = "type")]
    pub meal_type: Option<String>,

    /// Protein in grams (empty clears it on edit)
    #[arg(long)]
    pub protein: Option<String>,

    /// Carbohydrates in grams (empty clears it on edit)
    #[arg(long)]
    pub carbs: Option<String>,

    /// Fat in grams (empty clears it on edit)
    #[arg(long)]
    pub fat: Option<String>,

    /// Free-form category, e.g. `high protein`
    #[arg(long)]
    pub category: Option<String>,

    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a meal to a day (defaults to today)
    #[command(alias = "a")]
    Add {
        /// Meal name (multiple words are joined)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        #[command(flatten)]
        fields: MealFieldArgs,
    },

    /// Change fields of a meal, e.g. `mealboard edit tue.2 --calories 450`
    #[command(alias = "e")]
    Edit {
        /// Meal id or `day.position`
        selector: String,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        #[command(flatten)]
        fields: MealFieldArgs,
    },

    /// Remove one or more meals
    #[command(name = "rm", alias = "delete")]
    Delete {
        /// Meal ids or `day.position` selectors
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Move a meal to another day, optionally at a position (1-based)
    #[command(name = "mv", alias = "move")]
    Move {
        /// Meal id or `day.position`
        selector: String,

        /// Target day
        day: Weekday,

        /// Position in the target day (appends when omitted)
        position: Option<usize>,
    },

    /// Show the board, or a single day
    #[command(alias = "ls")]
    List {
        /// Only this day
        day: Option<Weekday>,
    },

    /// Weekly totals and per-day statistics
    Stats,

    /// Suggest a meal, optionally adding it to a day
    Suggest {
        /// Restrict to a meal type
        #[arg(short = 't', long = "type")]
        meal_type: Option<MealType>,

        /// Add the suggestion to this day
        #[arg(long, value_name = "DAY")]
        add: Option<Weekday>,
    },

    /// Add a meal from a phrase: "add oatmeal for breakfast on monday with 300 calories"
    Say {
        #[arg(required = true, num_args = 1..)]
        phrase: Vec<String>,
    },

    /// Print the board as JSON
    Export,

    /// Replace the board with a JSON export
    Import {
        /// File to read
        file: PathBuf,
    },

    /// Get or set configuration values
    Config {
        /// Configuration key (calorie-target, show-macros)
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },
}
