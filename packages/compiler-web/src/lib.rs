pub mod compiler;
pub mod element_types;
pub mod wrapper;

#[cfg(test)]
mod tests;

pub use compiler::{compile_document, CompileOptions};
pub use element_types::ElementTypes;
pub use wrapper::generate_wrapper;
