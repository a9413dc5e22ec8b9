// src/prompt/mod.rs

pub mod builder;

pub use builder::{build_system_prompt, time_of_day};
