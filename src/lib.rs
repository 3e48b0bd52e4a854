//! Blog client library.
//!
//! Serves a single page that lists the posts held by a remote blog API and
//! offers a form to publish new ones.

pub mod api;
pub mod components;
pub mod config;
pub mod constants;
pub mod models;
pub mod view;
pub mod web;
