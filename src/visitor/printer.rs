//! Structural printer — indented one-line-per-node dump of a tree.

use std::mem;

use crate::operation::{AmplitudeModulator, Inverter, Mixer, Operation, SoundInput, TriggerInput};

use super::OpVisitor;

pub const DEFAULT_INDENT_WIDTH: usize = 2;

/// Renders a tree as indented text, children in stored order.
#[derive(Debug, Clone)]
pub struct Printer {
    indent_width: usize,
    depth: usize,
    output: String,
}

impl Printer {
    pub fn new() -> Self {
        Self::with_indent(DEFAULT_INDENT_WIDTH)
    }

    /// Printer indenting each level by `indent_width` spaces.
    pub fn with_indent(indent_width: usize) -> Self {
        Self {
            indent_width,
            depth: 0,
            output: String::new(),
        }
    }

    /// Render `op` and everything under it.
    pub fn print(&mut self, op: &Operation) -> String {
        self.depth = 0;
        self.output.clear();
        op.accept(self);
        mem::take(&mut self.output)
    }

    fn line(&mut self, label: &str, name: &str) {
        let indent = self.depth * self.indent_width;
        self.output.push_str(&format!("{:indent$}{label}: {name}\n", ""));
    }

    fn descend(&mut self, children: &[&Operation]) {
        self.depth += 1;
        for child in children {
            child.accept(self);
        }
        self.depth -= 1;
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl OpVisitor for Printer {
    type Output = ();

    fn visit_sound(&mut self, op: &SoundInput) {
        let detail = format!("{} [{}] {}", op.name(), op.sound_type(), op.file_location());
        self.line("SoundInput", &detail);
    }

    fn visit_trigger(&mut self, op: &TriggerInput) {
        self.line("TriggerInput", op.name());
    }

    fn visit_inverter(&mut self, op: &Inverter) {
        self.line("Inverter", op.name());
        self.descend(&[op.child()]);
    }

    fn visit_amplitude_modulator(&mut self, op: &AmplitudeModulator) {
        self.line("AmplitudeModulator", op.name());
        self.descend(&[op.op1(), op.op2()]);
    }

    fn visit_mixer(&mut self, op: &Mixer) {
        self.line("Mixer", op.name());
        self.descend(&[op.op1(), op.op2()]);
    }
}
