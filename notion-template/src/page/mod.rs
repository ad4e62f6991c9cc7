mod entities;
mod launcher;
mod materializer;

pub use entities::*;
pub use launcher::*;
pub use materializer::*;
