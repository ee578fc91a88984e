mod progress;
mod service;
mod session;

// Public API of the quiz subsystem.
pub use crate::error::SessionError;
pub use progress::QuizProgress;
pub use service::QuizService;
pub use session::{DrawnWord, QuizPhase, QuizSession};
