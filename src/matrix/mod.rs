//! Matrix module: the dense matrix type, its rendering and structure flags.

pub mod dense;
pub use dense::Matrix;
pub mod display;
pub mod properties;
pub use properties::MatProperties;
