//! Core uDMA driver: channel registry, transfer admission and the
//! completion dispatcher.

pub mod config;
pub mod error;
pub mod event;
pub mod udma;

pub use config::{ChannelConfig, CompletionHandler};
pub use error::{Error, Result};
pub use event::{Direction, Event};
pub use udma::{Completion, Gap8Udma, Udma};
