mod field_type;
mod property;
mod schema;

pub use field_type::*;
pub use property::*;
pub use schema::*;
