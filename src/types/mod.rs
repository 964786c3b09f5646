pub mod diagnostic;
pub mod sarif;
