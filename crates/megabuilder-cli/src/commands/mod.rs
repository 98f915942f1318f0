pub mod ast;
pub mod check;
pub mod dump;
pub mod exec;
pub mod grammar_loader;
pub mod trace;
pub mod walk;
