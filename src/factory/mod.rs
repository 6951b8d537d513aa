//! Operation factory — maps document tags to node constructors.
//!
//! A [`Registry`] is built once, explicitly, and lent to every interpreter
//! that needs it. Nothing here is global.

pub mod stack;

pub use stack::{Frame, OperandOrder, OperandStack};

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, warn};

use crate::interpreter::{Element, InterpretError};
use crate::operation::{
    AmplitudeModulator, Inverter, Mixer, Operation, OperationKind, SoundInput, TriggerInput,
};

/// Builds one node from its element, popping exactly the registered arity.
pub type Constructor = fn(&Element, &mut OperandStack) -> Result<Operation, InterpretError>;

/// A registered tag: how many operands it claims and how to build it.
#[derive(Clone, Copy)]
pub struct Registration {
    pub arity: usize,
    pub construct: Constructor,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Mapping from operation tag to constructor.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: HashMap<String, Registration>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Registry holding every built-in operation kind.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for kind in OperationKind::ALL {
            let construct: Constructor = match kind {
                OperationKind::SoundInput => build_sound,
                OperationKind::TriggerInput => build_trigger,
                OperationKind::Inverter => build_inverter,
                OperationKind::AmplitudeModulator => build_amplitude_modulator,
                OperationKind::Mixer => build_mixer,
            };
            registry.register(kind.tag(), kind.arity(), construct);
        }
        registry
    }

    /// Add a tag, replacing any previous registration.
    pub fn register(&mut self, tag: impl Into<String>, arity: usize, construct: Constructor) {
        let tag = tag.into();
        let registration = Registration { arity, construct };
        if self.entries.insert(tag.clone(), registration).is_some() {
            warn!(%tag, "operation re-registered");
        }
    }

    pub fn get(&self, tag: &str) -> Option<&Registration> {
        self.entries.get(tag)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    /// Registered tags, sorted.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build the node for `element` from the operands in the current frame.
    ///
    /// The frame must hold exactly the tag's arity, and the constructor must
    /// consume all of it. Any other count is a `StackUnderflow`; operands a
    /// constructor leaves behind are dropped rather than handed to the parent.
    pub fn make_operation(
        &self,
        element: &Element,
        stack: &mut OperandStack,
    ) -> Result<Operation, InterpretError> {
        let tag = element.class.as_str();
        let registration = self
            .get(tag)
            .ok_or_else(|| InterpretError::unknown(tag))?;

        let available = stack.available();
        if available != registration.arity {
            return Err(InterpretError::underflow(tag, registration.arity, available));
        }

        let op = (registration.construct)(element, stack)?;
        let leftover = stack.discard_frame();
        if leftover > 0 {
            warn!(%tag, leftover, "constructor left operands on the stack");
            return Err(InterpretError::underflow(
                tag,
                registration.arity,
                available - leftover,
            ));
        }
        debug!(%tag, name = op.name(), arity = registration.arity, "built operation");
        Ok(op)
    }
}

fn build_sound(element: &Element, _stack: &mut OperandStack) -> Result<Operation, InterpretError> {
    let tag = OperationKind::SoundInput.tag();
    let location = element
        .location
        .as_deref()
        .ok_or_else(|| InterpretError::invalid_leaf(tag, "file location"))?;
    let sound_type = element
        .sound_type
        .as_deref()
        .ok_or_else(|| InterpretError::invalid_leaf(tag, "sound type"))?;
    Ok(SoundInput::new(element.display_name(), location, sound_type)?.into())
}

fn build_trigger(element: &Element, _stack: &mut OperandStack) -> Result<Operation, InterpretError> {
    Ok(TriggerInput::new(element.display_name()).into())
}

fn build_inverter(element: &Element, stack: &mut OperandStack) -> Result<Operation, InterpretError> {
    let child = stack.pop(&element.class)?;
    Ok(Inverter::new(element.display_name(), child).into())
}

fn build_amplitude_modulator(
    element: &Element,
    stack: &mut OperandStack,
) -> Result<Operation, InterpretError> {
    let (op1, op2) = stack.pop_pair(&element.class)?;
    Ok(AmplitudeModulator::new(element.display_name(), op1, op2).into())
}

fn build_mixer(element: &Element, stack: &mut OperandStack) -> Result<Operation, InterpretError> {
    let (op1, op2) = stack.pop_pair(&element.class)?;
    Ok(Mixer::new(element.display_name(), op1, op2).into())
}
