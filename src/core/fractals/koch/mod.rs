pub mod algorithm;
pub mod curve_spec;
pub mod errors;
pub mod koch_config;
pub mod measure;
