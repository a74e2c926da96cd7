//! Model file generation

mod emitter;
mod naming;
mod renderer;
mod template;

pub use emitter::{EmitReport, Emitter, TableOutcome};
pub use naming::*;
pub use renderer::Renderer;
pub use template::{Slot, SlotValues, Template, DEFAULT_TEMPLATE};
