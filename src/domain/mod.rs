mod category;
mod expense;
mod money;
mod settlement;

pub use category::*;
pub use expense::*;
pub use money::*;
pub use settlement::*;
