pub mod config;
pub mod effect;
pub mod error;
pub mod food;
pub mod game;
pub mod headless;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod timer;
pub mod ui;
