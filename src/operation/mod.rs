//! Operation tree — leaf inputs and fixed-arity combiners for one instrument.
//!
//! Every node is exclusively owned by its parent through a `Box`, so dropping
//! the root releases the whole tree exactly once.

pub mod composite;
pub mod input;

pub use composite::{AmplitudeModulator, BinaryOp, Inverter, Mixer, UnaryOp};
pub use input::{SoundInput, TriggerInput};

use std::fmt;

use crate::visitor::{Evaluator, OpVisitor, Printer};

/// Discriminant for the closed set of node kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    SoundInput,
    TriggerInput,
    Inverter,
    AmplitudeModulator,
    Mixer,
}

impl OperationKind {
    /// All built-in kinds, leaves first.
    pub const ALL: [OperationKind; 5] = [
        OperationKind::SoundInput,
        OperationKind::TriggerInput,
        OperationKind::Inverter,
        OperationKind::AmplitudeModulator,
        OperationKind::Mixer,
    ];

    /// The document tag that builds this kind.
    pub fn tag(self) -> &'static str {
        match self {
            OperationKind::SoundInput => "Sound",
            OperationKind::TriggerInput => "Trigger",
            OperationKind::Inverter => "Inverter",
            OperationKind::AmplitudeModulator => "AmplitudeModulator",
            OperationKind::Mixer => "Mixer",
        }
    }

    /// Number of child operands this kind owns.
    pub fn arity(self) -> usize {
        match self {
            OperationKind::SoundInput | OperationKind::TriggerInput => 0,
            OperationKind::Inverter => 1,
            OperationKind::AmplitudeModulator | OperationKind::Mixer => 2,
        }
    }

    /// True for leaf kinds.
    pub fn is_input(self) -> bool {
        self.arity() == 0
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OperationKind::SoundInput => "SoundInput",
            OperationKind::TriggerInput => "TriggerInput",
            OperationKind::Inverter => "Inverter",
            OperationKind::AmplitudeModulator => "AmplitudeModulator",
            OperationKind::Mixer => "Mixer",
        };
        f.write_str(label)
    }
}

/// A node in an instrument's signal-flow tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Sound(SoundInput),
    Trigger(TriggerInput),
    Inverter(Inverter),
    AmplitudeModulator(AmplitudeModulator),
    Mixer(Mixer),
}

impl Operation {
    /// Display label of this node.
    pub fn name(&self) -> &str {
        match self {
            Operation::Sound(op) => op.name(),
            Operation::Trigger(op) => op.name(),
            Operation::Inverter(op) => op.name(),
            Operation::AmplitudeModulator(op) => op.name(),
            Operation::Mixer(op) => op.name(),
        }
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::Sound(_) => OperationKind::SoundInput,
            Operation::Trigger(_) => OperationKind::TriggerInput,
            Operation::Inverter(_) => OperationKind::Inverter,
            Operation::AmplitudeModulator(_) => OperationKind::AmplitudeModulator,
            Operation::Mixer(_) => OperationKind::Mixer,
        }
    }

    /// True for leaf inputs. Fixed by kind.
    pub fn is_input(&self) -> bool {
        self.kind().is_input()
    }

    /// Owned children in stored order (`op1` before `op2`).
    pub fn children(&self) -> Vec<&Operation> {
        match self {
            Operation::Sound(_) | Operation::Trigger(_) => Vec::new(),
            Operation::Inverter(op) => vec![op.child()],
            Operation::AmplitudeModulator(op) => vec![op.op1(), op.op2()],
            Operation::Mixer(op) => vec![op.op1(), op.op2()],
        }
    }

    /// Double dispatch into the visitor method for this node's concrete kind.
    pub fn accept<V: OpVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Operation::Sound(op) => op.accept(visitor),
            Operation::Trigger(op) => op.accept(visitor),
            Operation::Inverter(op) => op.accept(visitor),
            Operation::AmplitudeModulator(op) => op.accept(visitor),
            Operation::Mixer(op) => op.accept(visitor),
        }
    }

    /// This node's contribution with every input at unity level.
    pub fn compute(&self) -> f64 {
        self.accept(&mut Evaluator::default())
    }

    /// Longest path from this node down to a leaf, in edges.
    pub fn depth(&self) -> usize {
        self.children()
            .into_iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Total nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .into_iter()
            .map(Operation::node_count)
            .sum::<usize>()
    }

    /// Input nodes in this subtree.
    pub fn leaf_count(&self) -> usize {
        if self.is_input() {
            return 1;
        }
        self.children().into_iter().map(Operation::leaf_count).sum()
    }

    /// Combiner nodes in this subtree.
    pub fn composite_count(&self) -> usize {
        self.node_count() - self.leaf_count()
    }
}

impl From<SoundInput> for Operation {
    fn from(op: SoundInput) -> Self {
        Operation::Sound(op)
    }
}

impl From<TriggerInput> for Operation {
    fn from(op: TriggerInput) -> Self {
        Operation::Trigger(op)
    }
}

impl From<Inverter> for Operation {
    fn from(op: Inverter) -> Self {
        Operation::Inverter(op)
    }
}

impl From<AmplitudeModulator> for Operation {
    fn from(op: AmplitudeModulator) -> Self {
        Operation::AmplitudeModulator(op)
    }
}

impl From<Mixer> for Operation {
    fn from(op: Mixer) -> Self {
        Operation::Mixer(op)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Printer::new().print(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kick() -> Operation {
        SoundInput::new("kick", "kit/kick.wav", "wav").unwrap().into()
    }

    fn trigger() -> Operation {
        TriggerInput::new("pad").into()
    }

    #[test]
    fn kind_arity_and_tags() {
        assert_eq!(OperationKind::SoundInput.arity(), 0);
        assert_eq!(OperationKind::TriggerInput.arity(), 0);
        assert_eq!(OperationKind::Inverter.arity(), 1);
        assert_eq!(OperationKind::AmplitudeModulator.arity(), 2);
        assert_eq!(OperationKind::Mixer.arity(), 2);
        assert_eq!(OperationKind::AmplitudeModulator.tag(), "AmplitudeModulator");
        assert_eq!(OperationKind::SoundInput.tag(), "Sound");
    }

    #[test]
    fn is_input_follows_kind() {
        for kind in OperationKind::ALL {
            assert_eq!(kind.is_input(), kind.arity() == 0, "{kind}");
        }
        assert!(kick().is_input());
        let am: Operation = AmplitudeModulator::new("am", kick(), trigger()).into();
        assert!(!am.is_input());
    }

    #[test]
    fn children_in_stored_order() {
        let am: Operation = AmplitudeModulator::new("am", trigger(), kick()).into();
        let children = am.children();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].kind(), OperationKind::TriggerInput);
        assert_eq!(children[1].kind(), OperationKind::SoundInput);
    }

    #[test]
    fn tree_statistics() {
        let left: Operation = AmplitudeModulator::new("l", kick(), trigger()).into();
        let right: Operation = Mixer::new("r", trigger(), kick()).into();
        let root: Operation = AmplitudeModulator::new("root", left, right).into();

        assert_eq!(root.depth(), 2);
        assert_eq!(root.node_count(), 7);
        assert_eq!(root.leaf_count(), 4);
        assert_eq!(root.composite_count(), 3);
    }

    #[test]
    fn unary_statistics() {
        let inv: Operation = Inverter::new("inv", kick()).into();
        assert_eq!(inv.depth(), 1);
        assert_eq!(inv.node_count(), 2);
        assert_eq!(inv.children().len(), 1);
    }

    #[test]
    fn compute_combines_children() {
        assert!((kick().compute() - 1.0).abs() < f64::EPSILON);
        let mixed: Operation = Mixer::new("mix", kick(), trigger()).into();
        assert!((mixed.compute() - 2.0).abs() < f64::EPSILON);
        let inverted: Operation = Inverter::new("inv", mixed).into();
        assert!((inverted.compute() + 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn display_uses_printer() {
        let am: Operation = AmplitudeModulator::new("am", trigger(), kick()).into();
        let text = am.to_string();
        assert!(text.starts_with("AmplitudeModulator: am\n"));
        assert!(text.contains("  TriggerInput: pad\n"));
    }
}
