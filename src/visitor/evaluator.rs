//! Numeric evaluator — folds a tree bottom-up into one level.
//!
//! The value is the parameter the external audio engine scales a voice by
//! when the instrument's trigger fires; no samples are synthesized here.

use std::collections::HashMap;

use crate::operation::{AmplitudeModulator, Inverter, Mixer, Operation, SoundInput, TriggerInput};

use super::OpVisitor;

/// Evaluates trees against a trigger velocity and per-sound-type gains.
#[derive(Debug, Clone)]
pub struct Evaluator {
    trigger_velocity: f64,
    sound_gains: HashMap<String, f64>,
    default_gain: f64,
}

impl Evaluator {
    /// Unity velocity, unity gain for every sound type.
    pub fn new() -> Self {
        Self {
            trigger_velocity: 1.0,
            sound_gains: HashMap::new(),
            default_gain: 1.0,
        }
    }

    /// Level produced by every trigger input.
    pub fn with_trigger_velocity(mut self, velocity: f64) -> Self {
        self.trigger_velocity = velocity;
        self
    }

    /// Gain for sound inputs of the given type.
    pub fn with_gain(mut self, sound_type: impl Into<String>, gain: f64) -> Self {
        self.sound_gains.insert(sound_type.into(), gain);
        self
    }

    /// Gain for sound types without an explicit entry.
    pub fn with_default_gain(mut self, gain: f64) -> Self {
        self.default_gain = gain;
        self
    }

    pub fn evaluate(&mut self, op: &Operation) -> f64 {
        op.accept(self)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl OpVisitor for Evaluator {
    type Output = f64;

    fn visit_sound(&mut self, op: &SoundInput) -> f64 {
        self.sound_gains
            .get(op.sound_type())
            .copied()
            .unwrap_or(self.default_gain)
    }

    fn visit_trigger(&mut self, _op: &TriggerInput) -> f64 {
        self.trigger_velocity
    }

    fn visit_inverter(&mut self, op: &Inverter) -> f64 {
        -op.child().accept(self)
    }

    fn visit_amplitude_modulator(&mut self, op: &AmplitudeModulator) -> f64 {
        let carrier = op.op1().accept(self);
        let modulator = op.op2().accept(self);
        carrier * modulator
    }

    fn visit_mixer(&mut self, op: &Mixer) -> f64 {
        op.op1().accept(self) + op.op2().accept(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn sound(sound_type: &str) -> Operation {
        SoundInput::new("s", "s.wav", sound_type).unwrap().into()
    }

    fn trigger() -> Operation {
        TriggerInput::new("pad").into()
    }

    #[test]
    fn leaves_use_context() {
        let mut eval = Evaluator::new()
            .with_trigger_velocity(0.5)
            .with_gain("wav", 0.8);
        assert_approx_eq!(eval.evaluate(&trigger()), 0.5);
        assert_approx_eq!(eval.evaluate(&sound("wav")), 0.8);
        assert_approx_eq!(eval.evaluate(&sound("flac")), 1.0);
    }

    #[test]
    fn default_gain_applies_to_unlisted_types() {
        let mut eval = Evaluator::new().with_default_gain(0.25);
        assert_approx_eq!(eval.evaluate(&sound("ogg")), 0.25);
    }

    #[test]
    fn amplitude_modulator_multiplies() {
        let am: Operation = AmplitudeModulator::new("am", sound("wav"), trigger()).into();
        let mut eval = Evaluator::new()
            .with_trigger_velocity(0.6)
            .with_gain("wav", 0.5);
        assert_approx_eq!(eval.evaluate(&am), 0.3);
    }

    #[test]
    fn nested_composites() {
        let mix: Operation = Mixer::new("mix", sound("wav"), trigger()).into();
        let inv: Operation = Inverter::new("inv", trigger()).into();
        let root: Operation = AmplitudeModulator::new("root", mix, inv).into();
        let mut eval = Evaluator::new()
            .with_trigger_velocity(0.5)
            .with_gain("wav", 1.5);
        // (1.5 + 0.5) * -0.5
        assert_approx_eq!(eval.evaluate(&root), -1.0);
    }
}
