pub mod dest;
pub mod error;
pub mod gravity;
pub mod translator;


pub use dest::DestNode;
pub use error::{TranslateError, TranslateResult};
pub use gravity::{Align, Gravity};
pub use translator::{LayoutStrategy, Translator, WebStrategy};
