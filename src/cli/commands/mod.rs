//! Command implementations

mod config_cmd;
mod input;
mod normalize;
mod organize;
mod reconcile;
mod sample;

pub use config_cmd::config;
pub use normalize::normalize;
pub use organize::organize;
pub use reconcile::reconcile;
pub use sample::sample;
