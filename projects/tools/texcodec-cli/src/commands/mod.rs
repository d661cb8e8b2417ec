pub mod bjson;
pub mod inspect;
