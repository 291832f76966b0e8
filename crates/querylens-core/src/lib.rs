pub mod api;
pub mod artifact;
pub mod config;
pub mod consts;
pub mod context;
pub mod error;
pub mod geometry;
pub mod notice;
pub mod preview;
pub mod questions;
pub mod result_view;
pub mod settings;
pub mod transform;
pub mod viewport;
