use console::Style;
use once_cell::sync::Lazy;

/// Named styles used by the renderer.
pub struct BoardTheme {
    pub day_header: Style,
    pub slot: Style,
    pub meal_type: Style,
    pub calories: Style,
    pub macros: Style,
    pub empty: Style,
    pub over_target: Style,
    pub total: Style,
    pub info: Style,
    pub success: Style,
    pub warning: Style,
}

pub static BOARD_THEME: Lazy<BoardTheme> = Lazy::new(|| BoardTheme {
    day_header: Style::new().bold(),
    slot: Style::new().yellow(),
    meal_type: Style::new().cyan(),
    calories: Style::new(),
    macros: Style::new().color256(246),
    empty: Style::new().color256(246).italic(),
    over_target: Style::new().red().bold(),
    total: Style::new().bold(),
    info: Style::new().dim(),
    success: Style::new().green(),
    warning: Style::new().yellow(),
});
