//! Scale engines and tick policies.

pub mod continuous;
pub mod custom;
pub mod linear;
pub mod logit;
pub(crate) mod util;

pub use continuous::Continuous;
pub use custom::{Custom, TickPolicy};
pub use linear::LinearTicks;
pub use logit::{Logit, LogitScale, LogitTicks, logit};
