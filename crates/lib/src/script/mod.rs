//! The script language embedded in `build()`, `install()` and `test()`.
//!
//! A body is compiled into [`Statement`]s and then run by an
//! [`Interpreter`]. Each line is one of:
//!
//! - `$name=value`: bind a string (a lone `$other` value is looked up)
//! - `@name="cmd args"`: bind the trimmed output of a command, or a flag when
//!   the command is `match`
//! - `amd64:` / `arm64:`: run the following double-tab indented lines only on
//!   that architecture
//! - `match <left> <op> <right...>`: final assertion of a test script
//! - `fileMan <write|append> <path> <content...>`: write a file and stop
//! - anything else: an external command
//!
//! Tokens are split on whitespace and a token starting with `$` is replaced
//! by its binding. There is no quoting.

pub mod ast;
pub mod builtins;
pub mod compile;
pub mod error;
pub mod interpreter;

pub use ast::{AssignValue, Builtin, Op, Statement};
pub use compile::compile;
pub use error::ScriptError;
pub use interpreter::{Interpreter, Outcome};
