//! Campus Buddy core: turns a student's message into a paced reply.
//!
//! ```no_run
//! use campus_buddy_core::{Chatbot, ChatbotConfig};
//!
//! let bot = Chatbot::new(ChatbotConfig::default())?;
//! let payload = bot.generate_response("I'm stressed about my exams");
//! println!("{} ({}s per word)", payload.text, payload.typing_delay);
//! # Ok::<(), campus_buddy_core::AppError>(())
//! ```

pub mod brain;
pub mod config;
pub mod error;

#[cfg(test)]
mod tests;

pub use brain::{ChatTurn, Chatbot, ResponsePayload};
pub use config::ChatbotConfig;
pub use error::AppError;

/// Reply to `text` with the process-wide chatbot, building it from the
/// environment on first use.
pub fn generate_response(text: &str) -> Result<ResponsePayload, AppError> {
    let chatbot = match brain::global() {
        Some(chatbot) => chatbot,
        None => brain::init_global(ChatbotConfig::from_env()?)?,
    };
    Ok(chatbot.generate_response(text))
}
