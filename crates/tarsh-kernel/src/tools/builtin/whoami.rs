//! whoami — Print the invoking user's name.

use crate::action_log::ActionRecord;
use crate::result::ExecResult;
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Whoami tool: print the user name from the identity provider.
pub struct Whoami;

impl Tool for Whoami {
    fn name(&self) -> &str {
        "whoami"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("whoami", "Print the current user name")
    }

    fn execute(&self, _args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        match ctx.identity.user_name() {
            Ok(name) => {
                ctx.record(ActionRecord::Whoami {
                    output: name.clone(),
                });
                ExecResult::success(name)
            }
            Err(e) => ExecResult::failure(1, format!("whoami: {e}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{IdentityError, IdentityProvider};
    use crate::tools::builtin::testing::make_ctx;
    use std::sync::Arc;

    #[derive(Debug)]
    struct Nobody;

    impl IdentityProvider for Nobody {
        fn user_name(&self) -> Result<String, IdentityError> {
            Err(IdentityError::Unknown)
        }
    }

    #[test]
    fn test_whoami() {
        let mut ctx = make_ctx();
        let result = Whoami.execute(ToolArgs::new(), &mut ctx);
        assert!(result.ok());
        assert_eq!(result.out, "testuser");
        assert_eq!(
            ctx.log.records(),
            [ActionRecord::Whoami {
                output: "testuser".into()
            }]
        );
    }

    #[test]
    fn test_whoami_unknown_user() {
        let mut ctx = make_ctx();
        ctx.identity = Arc::new(Nobody);
        let result = Whoami.execute(ToolArgs::new(), &mut ctx);
        assert!(!result.ok());
        assert_eq!(result.err, "whoami: cannot determine user name");
        assert!(ctx.log.is_empty());
    }
}
