//! Execution limits.

/// Default number of live call frames, the entry frame included.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1024;

/// Default operand stack capacity.
pub const DEFAULT_MAX_STACK_DEPTH: usize = 4096;

/// Resource bounds applied to every execution of a [`Machine`](crate::Machine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionLimits {
    /// Live frames allowed at once. Exceeding it fails with `CallDepthExceeded`.
    pub max_call_depth: usize,
    /// Values the operand stack may hold. Exceeding it fails with `StackOverflow`.
    pub max_stack_depth: usize,
}

impl Default for ExecutionLimits {
    fn default() -> Self {
        Self {
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            max_stack_depth: DEFAULT_MAX_STACK_DEPTH,
        }
    }
}

impl ExecutionLimits {
    pub fn with_max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    pub fn with_max_stack_depth(mut self, depth: usize) -> Self {
        self.max_stack_depth = depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let limits = ExecutionLimits::default();
        assert_eq!(limits.max_call_depth, 1024);
        assert_eq!(limits.max_stack_depth, 4096);
    }

    #[test]
    fn builders_override_one_field() {
        let limits = ExecutionLimits::default().with_max_call_depth(8);
        assert_eq!(limits.max_call_depth, 8);
        assert_eq!(limits.max_stack_depth, DEFAULT_MAX_STACK_DEPTH);

        let limits = limits.with_max_stack_depth(16);
        assert_eq!(limits.max_call_depth, 8);
        assert_eq!(limits.max_stack_depth, 16);
    }
}
