pub mod app;
pub mod browser;
pub mod cards;
pub mod cli;
pub mod models;
pub mod tvmaze;
pub mod widgets;
