//! Component lifecycle logging
//!
//! A `Logger` owns the instance `Registry`, resolves a trace path through a
//! `CallerResolver` and prints every message through a `Sink`.

mod caller;
mod logger;
mod registry;

pub use caller::{CallerResolver, Frame, NearestNonHook, NoTrace};
pub use logger::Logger;
pub use registry::{Mark, Registry};
