pub mod artifact;
pub mod check;
pub mod render;
pub mod vars;
