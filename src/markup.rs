mod element;
pub use element::Element;

mod build;
pub use build::{BuildError, Builder};
