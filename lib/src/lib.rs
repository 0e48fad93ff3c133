mod data;
mod puzzle;
mod restrictions;
mod results;

pub use data::*;
pub use puzzle::*;
pub use restrictions::*;
pub use results::*;
