mod block;
mod block_types;
mod children;

pub use block::*;
pub use block_types::*;
pub use children::*;
