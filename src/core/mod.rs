//! Analysis core: coefficient model, derivative engine, root classifier,
//! equation descriptors, and the facade that ties them together.

pub mod analysis;
pub mod diagnostics;
pub mod equations;
pub mod error;
pub mod polynomial;
pub mod roots;
pub mod sampling;

pub use analysis::{analyze, Analyzer, CriticalPoint, Equation, InflectionPoint, Report};
pub use error::{AnalysisError, Result};
pub use polynomial::Polynomial;
pub use roots::{Root, RootKind};
