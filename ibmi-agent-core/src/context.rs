/// Read-only view of the invoking agent's identity.
///
/// Toolsets receive this during tool discovery so they can scope or log
/// what they expose without being able to mutate any agent state.
pub trait ReadonlyContext: Send + Sync {
    fn invocation_id(&self) -> &str;
    fn agent_name(&self) -> &str;
    fn user_id(&self) -> &str;
    fn app_name(&self) -> &str;
    fn session_id(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestContext;

    impl ReadonlyContext for TestContext {
        fn invocation_id(&self) -> &str {
            "inv-1"
        }
        fn agent_name(&self) -> &str {
            "test-agent"
        }
        fn user_id(&self) -> &str {
            "user-1"
        }
        fn app_name(&self) -> &str {
            "test-app"
        }
        fn session_id(&self) -> &str {
            "session-1"
        }
    }

    #[test]
    fn test_readonly_context() {
        let ctx = TestContext;
        assert_eq!(ctx.agent_name(), "test-agent");
        assert_eq!(ctx.session_id(), "session-1");
    }
}
