mod cli;
mod parsers;
mod types;

#[cfg(test)]
mod tests;

pub use cli::AttackArgs;
pub use types::{AttackKind, HttpMethod};
