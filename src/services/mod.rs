//! Service implementations backed by remote APIs

pub mod gemini;

#[cfg(test)]
pub mod tests;

pub use gemini::*;
