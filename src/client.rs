//! Maximo client: the request dispatcher and its convenience wrappers.
//!
//! Implementation details are split into submodules under `src/client/`.

pub mod builder;
pub mod core;
mod dispatch;
mod operations;

pub use builder::MaximoClientBuilder;
pub use self::core::MaximoClient;
