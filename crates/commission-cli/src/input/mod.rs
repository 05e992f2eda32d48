pub mod file;
pub mod stdin;

use commission_core::commission::CommissionInput;

use crate::state;

/// Resolve calculation input: `--input` file, then piped stdin, then the
/// saved state file.
pub fn resolve_commission_input(
    path: Option<&str>,
    state_path: &str,
) -> Result<CommissionInput, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        return file::read_structured(path);
    }
    if let Some(piped) = stdin::read_piped()? {
        return Ok(piped);
    }
    state::load(state_path)?.ok_or_else(|| {
        format!(
            "No saved state at '{}'; run `commissions import`, pass --input <file>, or pipe JSON on stdin",
            state_path
        )
        .into()
    })
}
