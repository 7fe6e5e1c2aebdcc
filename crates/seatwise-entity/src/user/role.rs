//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the library.
///
/// Librarians and admins are "staff": they may administer reservations
/// but do not book seats for themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Regular library user; books seats for themselves.
    Student,
    /// Library staff; manages reservations and seats.
    Librarian,
    /// Full system administrator.
    Admin,
}

impl UserRole {
    /// Check if this role is a staff role (librarian or admin).
    pub fn is_staff(&self) -> bool {
        matches!(self, Self::Librarian | Self::Admin)
    }

    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Librarian => "librarian",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = seatwise_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "librarian" => Ok(Self::Librarian),
            "admin" => Ok(Self::Admin),
            _ => Err(seatwise_core::AppError::invalid_input(format!(
                "Invalid user role: '{s}'. Expected one of: student, librarian, admin"
            ))),
        }
    }
}
