
mod linalg;
mod rands;

pub use linalg::*;
pub use rands::*;
