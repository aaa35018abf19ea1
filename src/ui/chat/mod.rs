mod models;
mod state;
mod tasks;
pub use models::{ChatAction, DisplayLine};
#[cfg(test)]
pub use models::Tag;
pub use state::State;
pub use tasks::{complete_message, load_models};
