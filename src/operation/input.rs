//! Leaf inputs — sound-file references and trigger signals.

use crate::interpreter::InterpretError;
use crate::visitor::OpVisitor;

use super::OperationKind;

/// A reference to a sound file played by the instrument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundInput {
    name: String,
    file_location: String,
    sound_type: String,
}

impl SoundInput {
    /// Create a sound input. Location and type must both be non-blank.
    pub fn new(
        name: impl Into<String>,
        file_location: impl Into<String>,
        sound_type: impl Into<String>,
    ) -> Result<Self, InterpretError> {
        let file_location = file_location.into();
        let sound_type = sound_type.into();
        let tag = OperationKind::SoundInput.tag();

        if file_location.trim().is_empty() {
            return Err(InterpretError::invalid_leaf(tag, "file location"));
        }
        if sound_type.trim().is_empty() {
            return Err(InterpretError::invalid_leaf(tag, "sound type"));
        }

        Ok(Self {
            name: name.into(),
            file_location,
            sound_type,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn file_location(&self) -> &str {
        &self.file_location
    }

    pub fn sound_type(&self) -> &str {
        &self.sound_type
    }

    pub fn accept<V: OpVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_sound(self)
    }
}

/// The trigger signal from a pad or sensor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerInput {
    name: String,
}

impl TriggerInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn accept<V: OpVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_trigger(self)
    }
}
