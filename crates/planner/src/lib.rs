//! Dinner-party planning on top of an LLM.
//!
//! - [`persona`]: the expert voices each prompt section is written in
//! - [`request`]: the loosely-typed preference payloads clients send
//! - [`prompts`]: turns payloads into natural-language instruction blocks
//! - [`planner`]: sends a prompt upstream and decodes the JSON reply

pub mod persona;
pub mod planner;
pub mod prompts;
pub mod request;

#[cfg(test)]
mod test_helpers;

pub use persona::Persona;
pub use planner::Planner;
pub use request::{CategoryDetails, CookbookRequest, Courses, Dish, MenuPreferences, MenuSelection};
