//! Machine construction and per-execution state: operand stack, call frames.

use arborate_common::{FunctionDefinition, VmError, VmType, VmValue};
use arborate_validator::CheckedFunction;

use crate::config::ExecutionLimits;

/// One live function invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallFrame {
    /// Index of the function being executed.
    pub function: usize,
    /// Index of the next instruction to execute.
    pub ip: usize,
    /// Local variable slots, unset until first stored.
    pub slots: Vec<Option<VmValue>>,
    /// Stack length below which this invocation may not pop. Its inputs
    /// start here.
    pub base: usize,
}

impl CallFrame {
    pub fn new(function: usize, base: usize, var_count: usize) -> Self {
        Self {
            function,
            ip: 0,
            slots: vec![None; var_count],
            base,
        }
    }
}

/// A validated program, ready to execute.
///
/// Construction validates every function; a `Machine` that exists has
/// passed validation. Executions share nothing: each gets a fresh stack.
#[derive(Debug, Clone)]
pub struct Machine {
    definitions: Vec<FunctionDefinition>,
    functions: Vec<CheckedFunction>,
    limits: ExecutionLimits,
}

impl Machine {
    /// Validate `definitions` and build a machine over them.
    ///
    /// # Errors
    ///
    /// Returns the first validation-phase [`VmError`].
    pub fn new(definitions: Vec<FunctionDefinition>) -> Result<Self, VmError> {
        let functions = arborate_validator::validate(&definitions)?;
        Ok(Self {
            definitions,
            functions,
            limits: ExecutionLimits::default(),
        })
    }

    /// Replace the execution limits.
    pub fn with_limits(mut self, limits: ExecutionLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn limits(&self) -> ExecutionLimits {
        self.limits
    }

    /// The definitions this machine was built from.
    pub fn definitions(&self) -> &[FunctionDefinition] {
        &self.definitions
    }

    /// The decoded functions, in definition order.
    pub fn functions(&self) -> &[CheckedFunction] {
        &self.functions
    }

    /// Execute function 0 with no arguments.
    ///
    /// # Errors
    ///
    /// Returns an execution-phase [`VmError`].
    pub fn execute(&self) -> Result<Vec<VmValue>, VmError> {
        self.execute_function(0, Vec::new())
    }

    /// Execute `entry` with `args` pushed in order onto a fresh stack.
    ///
    /// Returns the entry function's outputs in declared order.
    ///
    /// # Errors
    ///
    /// Returns an execution-phase [`VmError`]; `InvalidEntryFunction` if
    /// `entry` names no function.
    pub fn execute_function(&self, entry: usize, args: Vec<VmValue>) -> Result<Vec<VmValue>, VmError> {
        Execution::new(&self.functions, self.limits).run(entry, args)
    }
}

/// State of one execution: the shared operand stack and the frame stack.
pub(crate) struct Execution<'a> {
    pub(crate) functions: &'a [CheckedFunction],
    pub(crate) limits: ExecutionLimits,
    pub(crate) stack: Vec<VmValue>,
    /// Caller frames. The running frame is held by the dispatch loop.
    pub(crate) frames: Vec<CallFrame>,
}

impl<'a> Execution<'a> {
    pub(crate) fn new(functions: &'a [CheckedFunction], limits: ExecutionLimits) -> Self {
        Self {
            functions,
            limits,
            stack: Vec::new(),
            frames: Vec::new(),
        }
    }

    /// Push a value, checking the stack limit.
    pub(crate) fn push(&mut self, frame: &CallFrame, at: usize, value: VmValue) -> Result<(), VmError> {
        if self.stack.len() >= self.limits.max_stack_depth {
            return Err(VmError::StackOverflow {
                function: frame.function,
                at,
                limit: self.limits.max_stack_depth,
            });
        }
        self.stack.push(value);
        Ok(())
    }

    /// Pop a value of any type from the frame's own region.
    pub(crate) fn pop(&mut self, frame: &CallFrame, at: usize) -> Result<VmValue, VmError> {
        let value = if self.stack.len() > frame.base {
            self.stack.pop()
        } else {
            None
        };
        value.ok_or(VmError::TooFewElementsOnStack {
            function: frame.function,
            at,
            required: 1,
            available: 0,
        })
    }

    pub(crate) fn pop_boolean(&mut self, frame: &CallFrame, at: usize) -> Result<bool, VmError> {
        match self.pop(frame, at)? {
            VmValue::Boolean(b) => Ok(b),
            other => Err(mismatch(frame, at, VmType::Boolean, other)),
        }
    }

    pub(crate) fn pop_integer(&mut self, frame: &CallFrame, at: usize) -> Result<i64, VmError> {
        match self.pop(frame, at)? {
            VmValue::Integer(i) => Ok(i),
            other => Err(mismatch(frame, at, VmType::Integer, other)),
        }
    }
}

fn mismatch(frame: &CallFrame, at: usize, expected: VmType, found: VmValue) -> VmError {
    VmError::IncorrectElementTypeOnStack {
        function: frame.function,
        at,
        expected,
        found: found.vm_type(),
    }
}
