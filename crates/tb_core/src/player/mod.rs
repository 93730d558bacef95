//! Player input checks
//!
//! Name, id, rating and position rules shared by `Player` construction,
//! roster assembly and the JSON API.

pub mod validation;

pub use validation::{PlayerValidator, ValidationError, MAX_NAME_LEN};
