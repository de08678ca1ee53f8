//! Handler modules for keyboard input, score submission, and history state.

mod history_handler;
mod input_handler;
mod score_handler;

pub use history_handler::HistoryHandler;
pub use input_handler::InputHandler;
pub use score_handler::ScoreHandler;
