//! Role-derived UI gating.
//!
//! Visibility only: whether admin screens and edit/delete controls are
//! offered at all. The backend still enforces authorization on every
//! request.

/// Session role loaded from config
#[derive(Debug, Clone)]
pub struct AuthContext {
    role: String,
}

impl AuthContext {
    pub fn new(role: impl Into<String>) -> Self {
        Self { role: role.into() }
    }

    pub fn is_admin(&self) -> bool {
        self.role.eq_ignore_ascii_case("admin")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_role_case_insensitive() {
        assert!(AuthContext::new("admin").is_admin());
        assert!(AuthContext::new("Admin").is_admin());
        assert!(!AuthContext::new("viewer").is_admin());
        assert!(!AuthContext::new("").is_admin());
    }
}
