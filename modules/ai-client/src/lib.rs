pub mod huggingface;
pub mod openai;
pub mod traits;

pub use huggingface::HuggingFace;
pub use openai::OpenAi;
pub use traits::{GeneratedText, TextGenerator};
