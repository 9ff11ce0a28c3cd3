//! Exit code mapping.
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Success |
//! | 1 | Error: bad input, unknown noun, I/O, parse or config failure |
//! | 2 | Structural: the hypernym graph is not a rooted DAG |

use tracing::error;
use wordnet_graph::GraphError;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum CliExitCode {
    Success = 0,
    Error = 1,
    Structural = 2,
}

impl From<CliExitCode> for i32 {
    fn from(code: CliExitCode) -> Self {
        code as i32
    }
}

/// Whether any error in the chain reports a graph that is not a rooted DAG.
pub fn is_structural_failure(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<GraphError>())
        .any(GraphError::is_structural)
}

pub fn exit_code_for_error(err: &anyhow::Error) -> CliExitCode {
    if is_structural_failure(err) {
        CliExitCode::Structural
    } else {
        CliExitCode::Error
    }
}

/// Log a failed command and turn its result into an exit code.
pub fn report(result: anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => CliExitCode::Success.into(),
        Err(err) => {
            let code = exit_code_for_error(&err);
            error!("{:#}", err);
            code.into()
        }
    }
}
