pub mod field;
pub mod particle;
pub mod random;
pub mod vec2;
