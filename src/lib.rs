#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod activity;
mod board;
mod cell;
mod common;
mod config;
mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
mod order;
mod player;
pub mod prelude;
mod roster;
mod vessel;

pub use activity::*;
pub use board::*;
pub use cell::*;
pub use common::*;
pub use config::*;
pub use fleet::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use order::*;
pub use player::*;
pub use roster::*;
pub use vessel::*;
