pub mod config;
pub mod logging;

pub mod checksum;
pub mod classifier;
pub mod features;
pub mod service;
pub mod url_model;
