//! Quiz Uno bundle rendering.

mod html;
mod script;

pub use html::render;
pub use script::generate_game_script;
