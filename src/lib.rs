// src/lib.rs

pub mod c_api;
pub mod core;
pub mod corpus;
pub mod document;
pub mod error;
pub mod output;
pub mod settings;
pub mod trace_init;

pub use crate::core::engine::LegacyConverter;
pub use crate::core::types::Segment;
pub use crate::settings::Settings;
