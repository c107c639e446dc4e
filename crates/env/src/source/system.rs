use std::env;

use super::ReadEnv;

/// Zero-sized type that delegates to `std::env`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    #[inline]
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        env::var(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_env_delegation() {
        let std_result = std::env::var("PATH");
        let provider_result = SystemEnv.var("PATH");
        assert_eq!(std_result, provider_result);
    }

    #[test]
    fn test_system_env_missing() {
        let key = format!("ENVY_MISSING_{}", uuid::Uuid::new_v4().simple());
        assert_eq!(SystemEnv.var(&key), Err(env::VarError::NotPresent));
    }
}
