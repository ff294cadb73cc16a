//! Terminal weather strip: resolve a place, fetch its daily forecast from
//! Open-Meteo and lay it out as fixed-width ASCII columns.

pub mod app;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatters;
pub mod logging;
pub mod models;
pub mod service;
pub mod ui;
