pub mod integrator;
pub mod pointer;
pub mod wave;
