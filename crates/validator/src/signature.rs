//! Function signature checks.

use arborate_common::{FunctionDefinition, VmError};

/// Every function must declare at least one output parameter.
pub fn check_signature(function: usize, def: &FunctionDefinition) -> Result<(), VmError> {
    if def.out_params().is_empty() {
        return Err(VmError::FunctionDefinitionMissingReturnValue { function });
    }
    Ok(())
}
