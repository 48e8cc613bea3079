//! # Character Module
//!
//! Character creation rules.
//!
//! - Attributes and the per-ancestry point requirements
//! - The ancestry catalog and its Random sentinel
//! - The best-effort attribute randomizer
//! - The character-creation form model that produces a [`crate::Player`]

pub mod ancestry;
pub mod attributes;
pub mod creation;
pub mod randomizer;

pub use ancestry::*;
pub use attributes::*;
pub use creation::*;
pub use randomizer::*;
