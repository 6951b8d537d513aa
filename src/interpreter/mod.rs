//! Interpreter — reduces an instrument document to one operation tree.
//!
//! Elements are walked post-order. Every finished element is built through
//! the [`Registry`] from the operands its children left on a shared
//! [`OperandStack`], and the result is pushed for its parent to claim.

pub mod config;
pub mod document;
pub mod error;

pub use config::InterpreterConfig;
pub use document::{Document, Element};
pub use error::{ConfigError, DocumentError, InterpretError};

use tracing::{debug, info};

use crate::factory::{OperandStack, Registry};
use crate::operation::Operation;
use crate::visitor::Printer;

/// Tag reported when a document's top level does not reduce to one root.
pub const ROOT_TAG: &str = "Instrument";

/// Builds operation trees from documents using a borrowed registry.
#[derive(Debug, Clone)]
pub struct Interpreter<'r> {
    registry: &'r Registry,
    config: InterpreterConfig,
}

impl<'r> Interpreter<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self::with_config(registry, InterpreterConfig::default())
    }

    pub fn with_config(registry: &'r Registry, config: InterpreterConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Reduce `document` to its root operation.
    ///
    /// On error the operand stack is dropped, releasing every node built so
    /// far; nothing partial is returned.
    pub fn interpret(&self, document: &Document) -> Result<Operation, InterpretError> {
        if document.is_empty() {
            return Err(InterpretError::EmptyDocument);
        }

        let mut stack = OperandStack::new(self.config.operand_order);
        for element in &document.operations {
            self.reduce(element, &mut stack, 1)?;
        }

        if stack.len() != 1 {
            return Err(InterpretError::underflow(ROOT_TAG, 1, stack.len()));
        }
        stack.pop(ROOT_TAG)
    }

    /// Interpret and publish the tree under the document's instrument name.
    pub fn load_instrument(&self, document: &Document) -> Result<InstrumentTree, InterpretError> {
        let root = self.interpret(document)?;
        info!(
            instrument = %document.instrument,
            nodes = root.node_count(),
            depth = root.depth(),
            "instrument tree built"
        );
        Ok(InstrumentTree {
            name: document.instrument.clone(),
            root,
            indent_width: self.config.indent_width,
        })
    }

    fn reduce(
        &self,
        element: &Element,
        stack: &mut OperandStack,
        depth: usize,
    ) -> Result<(), InterpretError> {
        if depth > self.config.max_depth {
            return Err(InterpretError::DepthLimitExceeded {
                max_depth: self.config.max_depth,
            });
        }

        let outer = stack.enter_frame();
        for child in &element.children {
            self.reduce(child, stack, depth + 1)?;
        }
        let op = self.registry.make_operation(element, stack)?;
        stack.leave_frame(outer);

        debug!(tag = %element.class, depth, stacked = stack.len() + 1, "pushing operand");
        stack.push(op);
        Ok(())
    }
}

/// A finished tree, published read-only to its consumer.
#[derive(Debug, Clone, PartialEq)]
pub struct InstrumentTree {
    name: String,
    root: Operation,
    indent_width: usize,
}

impl InstrumentTree {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Operation {
        &self.root
    }

    /// Printed form of the tree, using the interpreter's indent width.
    pub fn print(&self) -> String {
        Printer::with_indent(self.indent_width).print(&self.root)
    }

    /// Give up the published view and take ownership of the root.
    pub fn into_root(self) -> Operation {
        self.root
    }
}
