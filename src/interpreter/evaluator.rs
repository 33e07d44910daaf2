use crate::{
    error::RuntimeError,
    interpreter::{
        lexer::token::{Token, TokenKind},
        stack::NumStack,
    },
    util::num::parse_literal,
};

/// Result type used by the interpreter.
///
/// All stack operations return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Executes a token stream against a numeric stack.
///
/// The interpreter has two lifecycle states: freshly constructed it is
/// *uninitialized* (no stack; any dispatch fails), and after
/// [`setup`](Self::setup) it is *ready*. [`teardown`](Self::teardown)
/// reports values left on the stack and returns to the uninitialized
/// state. One interpreter may run any number of token streams against the
/// same live stack; values stay put between runs.
pub struct Interpreter {
    stack: Option<NumStack>,
}

#[allow(clippy::new_without_default)]
impl Interpreter {
    /// Creates an uninitialized interpreter with no stack allocated.
    #[must_use]
    pub const fn new() -> Self {
        Self { stack: None }
    }

    /// Allocates the stack, making the interpreter ready to run.
    pub fn setup(&mut self) {
        self.stack = Some(NumStack::new());
    }

    /// Whether the interpreter currently holds a live stack.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.stack.is_some()
    }

    /// The live stack, if the interpreter is ready.
    #[must_use]
    pub const fn stack(&self) -> Option<&NumStack> {
        self.stack.as_ref()
    }

    /// Executes a single token.
    ///
    /// Number tokens push their parsed value. `+`, `-`, `*` and `/` pop
    /// two operands and push the result; the operand popped second is the
    /// left operand, so `3 4 -` computes `3 - 4`. `=` pops the top value
    /// and prints it on standard output.
    ///
    /// ## Errors
    /// - [`RuntimeError::UninitializedStack`] when called before `setup`.
    /// - [`RuntimeError::StackUnderflow`] when an operand is missing.
    /// - [`RuntimeError::DivideByZero`] when the divisor is exactly zero;
    ///   the check happens after the divisor is popped and before the
    ///   dividend is touched.
    pub fn interpret(&mut self, token: &Token) -> EvalResult<()> {
        let stack = self.stack.as_mut().ok_or(RuntimeError::UninitializedStack)?;

        match token.kind {
            // The lexer never emits Skip tokens.
            TokenKind::Skip => Ok(()),
            TokenKind::Number => {
                stack.push(parse_literal(&token.text));
                Ok(())
            },
            TokenKind::Add => {
                let b = stack.pop()?;
                let a = stack.pop()?;
                stack.push(a + b);
                Ok(())
            },
            TokenKind::Subtract => {
                let b = stack.pop()?;
                let a = stack.pop()?;
                stack.push(a - b);
                Ok(())
            },
            TokenKind::Multiply => {
                let b = stack.pop()?;
                let a = stack.pop()?;
                stack.push(a * b);
                Ok(())
            },
            TokenKind::Divide => {
                let b = stack.pop()?;
                if b == 0.0 {
                    return Err(RuntimeError::DivideByZero);
                }
                let a = stack.pop()?;
                stack.push(a / b);
                Ok(())
            },
            TokenKind::Print => {
                println!("{}", stack.pop()?);
                Ok(())
            },
        }
    }

    /// Executes a whole token stream, stopping at the first failure.
    ///
    /// ## Errors
    /// Propagates the first error raised by [`interpret`](Self::interpret).
    ///
    /// # Example
    /// ```
    /// use rpcalc::interpreter::{evaluator::Interpreter, lexer::core::tokenize};
    ///
    /// let tokens = tokenize("3 4 +".as_bytes()).unwrap();
    ///
    /// let mut interpreter = Interpreter::new();
    /// interpreter.setup();
    /// interpreter.run(&tokens).unwrap();
    ///
    /// assert_eq!(interpreter.stack().unwrap().values(), &[7.0]);
    /// ```
    pub fn run(&mut self, tokens: &[Token]) -> EvalResult<()> {
        for token in tokens {
            self.interpret(token)?;
        }

        Ok(())
    }

    /// Releases the stack, reporting every value still on it.
    ///
    /// Each leftover value produces one diagnostic line on standard error,
    /// most recently pushed first. Afterwards the interpreter is back in
    /// the uninitialized state. Calling `teardown` on an uninitialized
    /// interpreter does nothing.
    pub fn teardown(&mut self) {
        if let Some(mut stack) = self.stack.take() {
            while let Ok(value) = stack.pop() {
                eprintln!("Unused value on stack: {value}");
            }
        }
    }
}
