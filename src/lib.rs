pub mod application;
pub mod cli;
pub mod domain;
pub mod io;

pub use application::Session;
pub use domain::*;
