pub mod fibonacci;
pub mod reverse;
pub mod triangular;
