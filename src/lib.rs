//! pixel-demo - ImagickPixel API showcase
//!
//! Core library for the HTTP front end, fault normalization and injector glue.

pub mod config;
pub mod demo;
pub mod fault;
pub mod http;
pub mod inject;
pub mod server;
