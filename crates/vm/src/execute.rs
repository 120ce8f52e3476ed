//! Main execution loop and op dispatch.
//!
//! Nested calls run on an explicit frame stack inside one loop. The running
//! frame is taken off the stack while it executes; a call puts it back
//! underneath the callee's new frame.

use arborate_common::{VmError, VmValue};
use arborate_validator::Op;

use crate::arith;
use crate::machine::{CallFrame, Execution};

/// What the loop does after an op.
enum Flow {
    /// Keep running the current frame.
    Continue,
    /// Suspend the current frame and enter a callee.
    Call(usize),
    /// Finish the current frame.
    Exit,
}

impl Execution<'_> {
    /// Run `entry` to completion and return its outputs.
    pub(crate) fn run(mut self, entry: usize, args: Vec<VmValue>) -> Result<Vec<VmValue>, VmError> {
        if entry >= self.functions.len() {
            return Err(VmError::InvalidEntryFunction {
                index: entry,
                function_count: self.functions.len(),
            });
        }
        if args.len() > self.limits.max_stack_depth {
            return Err(VmError::StackOverflow {
                function: entry,
                at: 0,
                limit: self.limits.max_stack_depth,
            });
        }
        if self.limits.max_call_depth == 0 {
            return Err(VmError::CallDepthExceeded {
                function: entry,
                at: 0,
                limit: 0,
            });
        }

        self.stack = args;
        let mut entry_frame = self.enter(entry, 0)?;
        // The fresh stack belongs to the entry invocation; surplus arguments
        // count against its outputs.
        entry_frame.base = 0;
        let mut current = Some(entry_frame);
        let functions = self.functions;

        while let Some(mut frame) = current.take() {
            let at = frame.ip;
            let Some(&op) = functions[frame.function].ops().get(at) else {
                self.leave(&frame)?;
                current = self.frames.pop();
                continue;
            };
            frame.ip += 1;
            log::trace!("function {} at {at}: {op:?}", frame.function);

            match self.step(&mut frame, at, op)? {
                Flow::Continue => current = Some(frame),
                Flow::Call(callee) => {
                    // Frames held by the stack plus the caller plus the callee.
                    if self.frames.len() + 2 > self.limits.max_call_depth {
                        return Err(VmError::CallDepthExceeded {
                            function: frame.function,
                            at,
                            limit: self.limits.max_call_depth,
                        });
                    }
                    let floor = frame.base;
                    self.frames.push(frame);
                    current = Some(self.enter(callee, floor)?);
                }
                Flow::Exit => {
                    self.leave(&frame)?;
                    current = self.frames.pop();
                }
            }
        }

        Ok(self.stack)
    }

    /// Check the entry contract of `function` and build its frame.
    ///
    /// Only values at or above `floor` (the caller's base) count as
    /// available inputs.
    fn enter(&mut self, function: usize, floor: usize) -> Result<CallFrame, VmError> {
        let def = &self.functions[function];
        let required = def.in_params().len();
        let available = self.stack.len() - floor;
        if available < required {
            return Err(VmError::TooFewElementsOnStack {
                function,
                at: 0,
                required,
                available,
            });
        }

        let base = self.stack.len() - required;
        for (param, (value, &expected)) in self.stack[base..].iter().zip(def.in_params()).enumerate() {
            if value.vm_type() != expected {
                return Err(VmError::IncorrectCallArgumentType {
                    function,
                    param,
                    expected,
                    found: value.vm_type(),
                });
            }
        }

        log::debug!(
            "enter function {function} (depth {}, base {base})",
            self.frames.len() + 1
        );
        Ok(CallFrame::new(function, base, def.var_count()))
    }

    /// Check the exit contract of a finished frame. Its outputs stay on the
    /// stack for the caller.
    fn leave(&self, frame: &CallFrame) -> Result<(), VmError> {
        let expected = self.functions[frame.function].out_params();
        let outputs = &self.stack[frame.base..];
        if outputs.len() != expected.len() {
            return Err(VmError::IncorrectReturnArgumentCount {
                function: frame.function,
                expected: expected.len(),
                found: outputs.len(),
            });
        }

        for (position, (value, &ty)) in outputs.iter().zip(expected).enumerate() {
            if value.vm_type() != ty {
                return Err(VmError::IncorrectReturnArgumentType {
                    function: frame.function,
                    position,
                    expected: ty,
                    found: value.vm_type(),
                });
            }
        }

        log::debug!(
            "leave function {} with {} value(s)",
            frame.function,
            outputs.len()
        );
        Ok(())
    }

    fn step(&mut self, frame: &mut CallFrame, at: usize, op: Op) -> Result<Flow, VmError> {
        match op {
            Op::LoadVariable(slot) => {
                let value = frame.slots[slot].ok_or(VmError::UninitializedVariableRead {
                    function: frame.function,
                    at,
                    slot,
                })?;
                self.push(frame, at, value)?;
            }
            Op::StoreVariable(slot) => {
                let value = self.pop(frame, at)?;
                frame.slots[slot] = Some(value);
            }

            Op::Call(callee) => return Ok(Flow::Call(callee)),
            Op::Exit => return Ok(Flow::Exit),

            Op::Branch(target) => frame.ip = target,
            Op::BranchTrue(target) => {
                if self.pop_boolean(frame, at)? {
                    frame.ip = target;
                }
            }
            Op::BranchFalse(target) => {
                if !self.pop_boolean(frame, at)? {
                    frame.ip = target;
                }
            }

            Op::PushBoolean(b) => self.push(frame, at, VmValue::Boolean(b))?,
            Op::PushInteger(i) => self.push(frame, at, VmValue::Integer(i))?,

            Op::Boolean(bin) => {
                let b = self.pop_boolean(frame, at)?;
                let a = self.pop_boolean(frame, at)?;
                self.push(frame, at, VmValue::Boolean(arith::boolean(bin, a, b)))?;
            }
            Op::BooleanNot => {
                let a = self.pop_boolean(frame, at)?;
                self.push(frame, at, VmValue::Boolean(!a))?;
            }

            Op::Integer(bin) => {
                let b = self.pop_integer(frame, at)?;
                let a = self.pop_integer(frame, at)?;
                self.push(frame, at, VmValue::Integer(arith::integer(bin, a, b)))?;
            }
            Op::Compare(cmp) => {
                let b = self.pop_integer(frame, at)?;
                let a = self.pop_integer(frame, at)?;
                self.push(frame, at, VmValue::Boolean(arith::compare(cmp, a, b)))?;
            }
            Op::IntegerBitwiseNot => {
                let a = self.pop_integer(frame, at)?;
                self.push(frame, at, VmValue::Integer(!a))?;
            }
        }

        Ok(Flow::Continue)
    }
}
