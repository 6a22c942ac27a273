// src/core/mod.rs

pub mod canon;
pub mod keys;
pub mod sanitize;
pub mod tokens;

pub use canon::CanonMap;
pub use keys::{effect_id, name_key};
pub use tokens::normalize;
