//! UI utilities for terminal interaction
//!
//! Progress spinners and prompts for arguments left off the command line.

mod prompt;
mod spinner;

pub use prompt::{can_prompt, prompt_name, prompt_resource};
pub use spinner::{create_spinner, finish_spinner};
