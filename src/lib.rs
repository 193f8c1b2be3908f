pub mod config;
pub mod error;
pub mod event;
pub mod parser;
pub mod pipeline;
pub mod pitch;
pub mod scorer;
pub mod summary;
pub mod table;
pub mod tagger;
pub mod xg;
// cmd and reports belong to the binary crate (main.rs).
