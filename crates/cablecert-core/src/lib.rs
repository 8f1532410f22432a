pub mod input;
pub mod limits;
pub mod model;
pub mod types;
pub mod validate;

pub use input::*;
pub use limits::*;
pub use model::*;
pub use types::*;
pub use validate::ValidationError;
