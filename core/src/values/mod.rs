//! Runtime values read and written by interpreted instructions.

mod array;
mod value;

pub use array::ArrayValue;
pub use value::Value;

#[cfg(test)]
mod array_test;
