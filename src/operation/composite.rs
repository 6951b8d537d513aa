//! Composite operations — fixed-arity combiners owning their operands.

use std::mem;

use crate::visitor::OpVisitor;

use super::Operation;

/// Shape shared by every single-operand combiner.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOp {
    name: String,
    child: Box<Operation>,
}

impl UnaryOp {
    pub fn new(name: impl Into<String>, child: Operation) -> Self {
        Self {
            name: name.into(),
            child: Box::new(child),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn child(&self) -> &Operation {
        &self.child
    }

    /// Replace the operand, handing the displaced one back to the caller.
    pub fn set_child(&mut self, child: Operation) -> Operation {
        mem::replace(&mut *self.child, child)
    }
}

/// Shape shared by every two-operand combiner.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    name: String,
    op1: Box<Operation>,
    op2: Box<Operation>,
}

impl BinaryOp {
    pub fn new(name: impl Into<String>, op1: Operation, op2: Operation) -> Self {
        Self {
            name: name.into(),
            op1: Box::new(op1),
            op2: Box::new(op2),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn op1(&self) -> &Operation {
        &self.op1
    }

    pub fn op2(&self) -> &Operation {
        &self.op2
    }

    /// Replace the first operand, returning the old one.
    pub fn set_op1(&mut self, op: Operation) -> Operation {
        mem::replace(&mut *self.op1, op)
    }

    /// Replace the second operand, returning the old one.
    pub fn set_op2(&mut self, op: Operation) -> Operation {
        mem::replace(&mut *self.op2, op)
    }
}

/// Phase inversion of a single signal.
#[derive(Debug, Clone, PartialEq)]
pub struct Inverter {
    inner: UnaryOp,
}

impl Inverter {
    pub fn new(name: impl Into<String>, child: Operation) -> Self {
        Self {
            inner: UnaryOp::new(name, child),
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub fn child(&self) -> &Operation {
        self.inner.child()
    }

    pub fn unary(&self) -> &UnaryOp {
        &self.inner
    }

    pub fn unary_mut(&mut self) -> &mut UnaryOp {
        &mut self.inner
    }

    pub fn accept<V: OpVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_inverter(self)
    }
}

/// Scales the amplitude of one signal by another.
#[derive(Debug, Clone, PartialEq)]
pub struct AmplitudeModulator {
    inner: BinaryOp,
}

impl AmplitudeModulator {
    pub fn new(name: impl Into<String>, op1: Operation, op2: Operation) -> Self {
        Self {
            inner: BinaryOp::new(name, op1, op2),
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub fn op1(&self) -> &Operation {
        self.inner.op1()
    }

    pub fn op2(&self) -> &Operation {
        self.inner.op2()
    }

    pub fn binary(&self) -> &BinaryOp {
        &self.inner
    }

    pub fn binary_mut(&mut self) -> &mut BinaryOp {
        &mut self.inner
    }

    pub fn accept<V: OpVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_amplitude_modulator(self)
    }
}

/// Sums two signals.
#[derive(Debug, Clone, PartialEq)]
pub struct Mixer {
    inner: BinaryOp,
}

impl Mixer {
    pub fn new(name: impl Into<String>, op1: Operation, op2: Operation) -> Self {
        Self {
            inner: BinaryOp::new(name, op1, op2),
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub fn op1(&self) -> &Operation {
        self.inner.op1()
    }

    pub fn op2(&self) -> &Operation {
        self.inner.op2()
    }

    pub fn binary(&self) -> &BinaryOp {
        &self.inner
    }

    pub fn binary_mut(&mut self) -> &mut BinaryOp {
        &mut self.inner
    }

    pub fn accept<V: OpVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_mixer(self)
    }
}
