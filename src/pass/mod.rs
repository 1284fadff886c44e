//! Password generation and output.

pub mod charset;
pub mod clipboard;
mod generate;
pub mod output;
mod policy;

pub use generate::{Password, generate};
pub use policy::Policy;
