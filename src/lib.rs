#![allow(clippy::implicit_hasher)]

pub mod api;
pub mod cascade;
pub mod collation;
pub mod components;
pub mod constants;
pub mod directory;
pub mod line_colors;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod render;
pub mod time;

pub use components::app::App;
