//! Operand stack — owned operations waiting to be claimed by a parent.

use serde::{Deserialize, Serialize};

use crate::interpreter::InterpretError;
use crate::operation::Operation;

/// How the two most recent operands map onto a binary node's slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperandOrder {
    /// First pop becomes `op1`: the last child in the document is operand 1.
    #[default]
    Reversed,
    /// First pop becomes `op2`: operands follow document order.
    DocumentOrder,
}

/// Stack height at which an element's frame begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame(usize);

/// LIFO of owned operations, partitioned into per-element frames.
///
/// An element only sees operands pushed since its frame began, so a parent can
/// never claim a node built by one of its siblings.
#[derive(Debug)]
pub struct OperandStack {
    items: Vec<Operation>,
    floor: usize,
    order: OperandOrder,
}

impl OperandStack {
    pub fn new(order: OperandOrder) -> Self {
        Self {
            items: Vec::new(),
            floor: 0,
            order,
        }
    }

    pub fn order(&self) -> OperandOrder {
        self.order
    }

    pub fn push(&mut self, op: Operation) {
        self.items.push(op);
    }

    /// Pop the most recent operand in the current frame.
    pub fn pop(&mut self, tag: &str) -> Result<Operation, InterpretError> {
        if self.items.len() <= self.floor {
            return Err(InterpretError::underflow(tag, 1, 0));
        }
        self.items
            .pop()
            .ok_or_else(|| InterpretError::underflow(tag, 1, 0))
    }

    /// Pop two operands and return them as `(op1, op2)`.
    pub fn pop_pair(&mut self, tag: &str) -> Result<(Operation, Operation), InterpretError> {
        let available = self.available();
        if available < 2 {
            return Err(InterpretError::underflow(tag, 2, available));
        }
        let first = self.pop(tag)?;
        let second = self.pop(tag)?;
        Ok(match self.order {
            OperandOrder::Reversed => (first, second),
            OperandOrder::DocumentOrder => (second, first),
        })
    }

    /// Operands in the current frame.
    pub fn available(&self) -> usize {
        self.items.len().saturating_sub(self.floor)
    }

    /// Operands across all frames.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Start a frame at the current height; returns the frame to restore.
    pub fn enter_frame(&mut self) -> Frame {
        let outer = Frame(self.floor);
        self.floor = self.items.len();
        outer
    }

    /// Drop whatever remains in the current frame, returning how many.
    pub fn discard_frame(&mut self) -> usize {
        let discarded = self.available();
        self.items.truncate(self.floor);
        discarded
    }

    pub fn leave_frame(&mut self, outer: Frame) {
        self.floor = outer.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::TriggerInput;

    fn op(name: &str) -> Operation {
        TriggerInput::new(name).into()
    }

    #[test]
    fn reversed_pair_puts_latest_first() {
        let mut stack = OperandStack::new(OperandOrder::Reversed);
        stack.push(op("first"));
        stack.push(op("second"));
        let (op1, op2) = stack.pop_pair("Mixer").unwrap();
        assert_eq!(op1.name(), "second");
        assert_eq!(op2.name(), "first");
        assert!(stack.is_empty());
    }

    #[test]
    fn document_order_pair() {
        let mut stack = OperandStack::new(OperandOrder::DocumentOrder);
        stack.push(op("first"));
        stack.push(op("second"));
        let (op1, op2) = stack.pop_pair("Mixer").unwrap();
        assert_eq!(op1.name(), "first");
        assert_eq!(op2.name(), "second");
    }

    #[test]
    fn pop_empty_is_underflow() {
        let mut stack = OperandStack::new(OperandOrder::Reversed);
        assert_eq!(
            stack.pop("Inverter").unwrap_err(),
            InterpretError::underflow("Inverter", 1, 0)
        );
    }

    #[test]
    fn pair_underflow_leaves_stack_intact() {
        let mut stack = OperandStack::new(OperandOrder::Reversed);
        stack.push(op("only"));
        assert_eq!(
            stack.pop_pair("AmplitudeModulator").unwrap_err(),
            InterpretError::underflow("AmplitudeModulator", 2, 1)
        );
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn frame_hides_outer_operands() {
        let mut stack = OperandStack::new(OperandOrder::Reversed);
        stack.push(op("sibling"));
        let outer = stack.enter_frame();
        assert_eq!(stack.available(), 0);
        assert!(stack.pop("Inverter").is_err());

        stack.push(op("child"));
        assert_eq!(stack.available(), 1);
        assert_eq!(stack.pop("Inverter").unwrap().name(), "child");

        stack.leave_frame(outer);
        assert_eq!(stack.available(), 1);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn discard_frame_keeps_outer_operands() {
        let mut stack = OperandStack::new(OperandOrder::Reversed);
        stack.push(op("sibling"));
        let outer = stack.enter_frame();
        stack.push(op("x"));
        stack.push(op("y"));
        assert_eq!(stack.discard_frame(), 2);
        assert_eq!(stack.available(), 0);
        stack.leave_frame(outer);
        assert_eq!(stack.len(), 1);
    }
}
