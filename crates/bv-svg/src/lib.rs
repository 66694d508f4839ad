/// SVG serialization for braillevec geometry.

pub mod document;

pub use document::svg_document;
