mod commands;
mod render;
mod setup;
mod styles;

pub use commands::run;
