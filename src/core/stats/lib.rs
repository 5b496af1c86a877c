
mod moments;
mod fit;

pub use moments::*;
pub use fit::*;
