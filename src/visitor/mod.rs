//! Visitors — double-dispatch traversal over operation trees.
//!
//! Each node's `accept` calls back the visitor method for its own concrete
//! kind, so traversals never switch on a kind code themselves.

pub mod evaluator;
pub mod printer;

pub use evaluator::Evaluator;
pub use printer::Printer;

use crate::operation::{AmplitudeModulator, Inverter, Mixer, SoundInput, TriggerInput};

/// One method per concrete node kind.
///
/// Adding a node kind adds a method here, so every visitor has to handle it
/// before the crate compiles again.
pub trait OpVisitor {
    type Output;

    fn visit_sound(&mut self, op: &SoundInput) -> Self::Output;

    fn visit_trigger(&mut self, op: &TriggerInput) -> Self::Output;

    fn visit_inverter(&mut self, op: &Inverter) -> Self::Output;

    fn visit_amplitude_modulator(&mut self, op: &AmplitudeModulator) -> Self::Output;

    fn visit_mixer(&mut self, op: &Mixer) -> Self::Output;
}
