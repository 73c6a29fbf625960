//! Market data aggregate: symbols, time ranges, price series and the
//! repository seam the application layer fetches them through.

pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::*;
pub use repositories::*;
pub use value_objects::*;
