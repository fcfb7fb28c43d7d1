pub mod engine;
pub mod paytable;
pub mod rng;
pub mod symbols;

pub use crate::engine::{draw_line, spin_once, EngineParams, SpinOutcome};
pub use crate::paytable::{Paytable, PaytableEntry};
pub use crate::rng::SpinRng;
pub use crate::symbols::{MachineConfig, Symbol};
