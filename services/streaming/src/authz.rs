//! Role-based access policy for catalog operations

use crate::{error::ServiceError, middleware::AuthUser};

/// Operations exposed by the streaming service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListCatalog,
    GetRecord,
    GetSourceLink,
}

/// Whether a role may invoke an operation.
///
/// All catalog operations are reads; consumers and admins get all of them.
/// Unrecognized roles get nothing.
pub fn can_access(role: &str, operation: Operation) -> bool {
    match role {
        "consumer" | "admin" => matches!(
            operation,
            Operation::ListCatalog | Operation::GetRecord | Operation::GetSourceLink
        ),
        _ => false,
    }
}

/// Gate an authenticated user against the policy before dispatch.
pub fn authorize(user: &AuthUser, operation: Operation) -> Result<(), ServiceError> {
    if user.roles.iter().any(|role| can_access(role, operation)) {
        Ok(())
    } else {
        Err(ServiceError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn consumer_can_invoke_every_catalog_operation() {
        for op in [
            Operation::ListCatalog,
            Operation::GetRecord,
            Operation::GetSourceLink,
        ] {
            assert!(can_access("consumer", op));
            assert!(can_access("admin", op));
        }
    }

    #[test]
    fn unknown_roles_are_rejected() {
        assert!(!can_access("guest", Operation::ListCatalog));
        assert!(!can_access("", Operation::GetSourceLink));
    }

    #[test]
    fn authorize_accepts_any_recognized_role() {
        let user = AuthUser {
            id: Uuid::new_v4(),
            roles: vec!["billing".to_string(), "consumer".to_string()],
            permissions: vec![],
        };
        assert!(authorize(&user, Operation::GetRecord).is_ok());

        let stranger = AuthUser {
            id: Uuid::new_v4(),
            roles: vec!["billing".to_string()],
            permissions: vec![],
        };
        assert!(matches!(
            authorize(&stranger, Operation::GetRecord),
            Err(ServiceError::Forbidden)
        ));
    }
}
