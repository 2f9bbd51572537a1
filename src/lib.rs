//! Client for the Superlive account API.
//!
//! Layers, bottom-up: [`api`] speaks HTTP/JSON, [`repository`] maps each
//! exchange into a [`resource::Resource`], [`usecase`] validates input,
//! and [`ui`] holds reducer-driven screen state. [`app::App`] wires them
//! together from an explicitly constructed client.

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod repository;
pub mod resource;
pub mod ui;
pub mod usecase;
