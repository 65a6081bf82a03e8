//! Parameter structs and closed-form descriptors for the six equation kinds.

pub mod cubic;
pub mod ellipse;
pub mod linear;
pub mod polynomial;
pub mod quadratic;
pub mod trigonometric;

pub use cubic::CubicParams;
pub use ellipse::EllipseParams;
pub use linear::LinearParams;
pub use quadratic::QuadraticParams;
pub use trigonometric::{TrigFunction, TrigParams};
