// Data model modules

pub mod config;
pub mod event;
pub mod geometry;
pub mod navigation;
pub mod view_model;
