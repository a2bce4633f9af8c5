pub mod prompt;
pub mod render;
pub mod terminal;
