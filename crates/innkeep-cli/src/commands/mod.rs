pub mod quote;
pub mod validate;
