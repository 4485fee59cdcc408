//! Built-in catalog of Halide-backed operators.

pub mod bnorm;
pub mod lnorm;
pub mod periodic_shuffle;
pub mod zero;

pub use bnorm::Bnorm;
pub use lnorm::Lnorm;
pub use periodic_shuffle::PeriodicShuffle;
pub use zero::Zero;
