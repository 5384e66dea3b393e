#![allow(clippy::needless_pass_by_value)]

pub mod app;
pub mod route_form;
pub mod route_result;
pub mod station_selector;
pub mod time_input;
pub mod toast;
