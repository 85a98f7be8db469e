/*! Provides the syntax of first-order terms and formulae with equality, and capture-avoiding
substitution over them. */
pub mod syntax;
#[cfg(test)]
mod test_macros;
pub mod transform;
