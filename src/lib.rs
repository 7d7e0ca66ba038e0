#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`EventState`**: All scalars shared between the interrupt handlers
//! - **`CoreConfig`**: Tick period, priorities, toggle and debounce thresholds
//! - **`EventCore`**: Owns the state and collaborators; one method per interrupt
//! - **`SwitchBank` / `ButtonBank`**: Edge sources that clear, read, decode and dispatch
//! - **`SwitchHandler` / `ButtonHandler`**: Callbacks registered once with an edge source
//! - **`OutputLines`**, **`CounterDisplay`**, **`EdgePort`**, **`TickTimer`**: Traits to implement for your board
//! - **`Reporter`**: Sink for the textual switch and button reports
//!
//! Every handler is total: there is no error path once the configuration has
//! been validated.

#[macro_use]
mod fmt;

pub mod buttons;
pub mod config;
pub mod events;
pub mod handler;
pub mod io;
pub mod report;
pub mod state;
pub mod switches;
pub mod tick;

pub use buttons::{ButtonBank, ButtonCode, apply_button};
pub use config::{ConfigError, CoreConfig, CoreConfigBuilder, SENTINEL_CODE};
pub use events::EventCore;
pub use handler::{ButtonHandler, SwitchHandler};
pub use io::{CounterDisplay, EdgePort, OutputBits, OutputLine, OutputLines, TickTimer};
pub use report::{FmtReporter, Report, ReportQueue, Reporter};
pub use state::EventState;
pub use switches::{SwitchBank, SwitchState, accept_switches};
pub use tick::{init_tick, service_tick};
