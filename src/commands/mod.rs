pub mod find;
pub mod validate;
