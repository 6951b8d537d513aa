//! kitgraph — per-instrument signal-flow trees for a drum kit.
//!
//! An instrument document is reduced by the [`Interpreter`] into one owned
//! [`Operation`] tree, built through an explicit [`Registry`] of node
//! constructors. Trees are traversed with [`OpVisitor`] implementations such
//! as the [`Printer`] and the [`Evaluator`], or handed to the audio engine.

pub mod factory;
pub mod interpreter;
pub mod operation;
pub mod visitor;

pub use factory::{OperandOrder, Registry};
pub use interpreter::{
    Document, Element, InstrumentTree, InterpretError, Interpreter, InterpreterConfig,
};
pub use operation::{Operation, OperationKind};
pub use visitor::{Evaluator, OpVisitor, Printer};
