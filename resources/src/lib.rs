pub mod builder;
pub mod config;
pub mod manifest;
pub mod objects;
