pub mod app;
pub mod form;
pub mod generator;
pub mod mvi;
pub mod output;
pub mod render;
