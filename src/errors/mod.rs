pub mod inchi_error;

pub use inchi_error::InchiError;
