pub mod checker;
pub mod diagnostics;
pub mod syntax;
