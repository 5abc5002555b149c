//! Line-oriented host double standing in for the embedding interpreter.
//!
//! Grammar per line: blank, `# comment`, `name = "literal"`, or
//! `name = other_name` (copies an existing binding; referencing an unbound
//! name is a runtime error). Anything else is a syntax error, including
//! indented statements.

use modfetch::error::EvalError;
use modfetch::module::{ModuleHost, ModuleShell};

pub struct MiniHost;

impl ModuleHost for MiniHost {
    fn evaluate(&self, source: &str, module: &mut ModuleShell) -> Result<(), EvalError> {
        for (idx, line) in source.lines().enumerate() {
            let line_no = idx + 1;
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }
            if line.starts_with(char::is_whitespace) {
                return Err(EvalError::Syntax(format!(
                    "line {}: unexpected indentation",
                    line_no
                )));
            }
            let Some((lhs, rhs)) = line.split_once('=') else {
                return Err(EvalError::Syntax(format!(
                    "line {}: expected assignment, got {:?}",
                    line_no, line
                )));
            };
            let target = lhs.trim();
            let value = rhs.trim();
            if target.is_empty() || !is_identifier(target) {
                return Err(EvalError::Syntax(format!(
                    "line {}: bad assignment target {:?}",
                    line_no, target
                )));
            }
            if let Some(literal) = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
            {
                module.bind(target, literal);
            } else if is_identifier(value) {
                let resolved = module
                    .get(value)
                    .ok_or_else(|| {
                        EvalError::Runtime(format!(
                            "line {}: name {:?} is not defined",
                            line_no, value
                        ))
                    })?
                    .to_string();
                module.bind(target, resolved);
            } else {
                return Err(EvalError::Syntax(format!(
                    "line {}: bad value {:?}",
                    line_no, value
                )));
            }
        }
        Ok(())
    }
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
