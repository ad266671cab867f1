pub mod local;
pub mod remote;
pub mod traits;
pub mod types;
pub mod validate;
pub mod vocabulary;

pub use local::{extract_locally, LocalInterpreter};
pub use remote::OpenAiInterpreter;
pub use traits::Interpreter;
pub use types::InterpreterConfig;
pub use validate::{validate, validate_result};
