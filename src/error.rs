/// Runtime errors.
///
/// Contains all error types that can be raised while interpreting a token
/// stream against the numeric stack: popping an empty stack, dividing by
/// zero, or dispatching before the stack exists. Lexical problems never
/// appear here; the lexer recovers from them internally.
pub mod runtime_error;

pub use runtime_error::RuntimeError;
