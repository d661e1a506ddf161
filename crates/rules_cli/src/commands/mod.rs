pub mod assertions;
pub mod check;
pub mod validate;
