pub mod descriptor;
pub mod error;
pub mod extractor;


pub use descriptor::{combine, Action, Binding, LayoutDescriptor, SubLayout};
pub use error::{DescriptorError, DescriptorResult};
pub use extractor::extract;
