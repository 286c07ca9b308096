pub mod id_generator;
pub mod model;
pub mod validate;

pub use id_generator::{get_template_seed, IdGenerator};
pub use model::*;
pub use validate::{validate_template, ValidationError};
