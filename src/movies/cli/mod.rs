mod commands;
mod handlers;
mod menu;
mod prompt;
mod render;
mod setup;
mod styles;

pub use commands::run;
