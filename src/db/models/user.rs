//! User and session models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::MarketError;

/// Marketplace roles; stored verbatim as `Chef` / `Consumer`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Authors recipes, keeps a portfolio, receives hire requests
    Chef,
    /// Browses recipes and ingredients, hires chefs
    Consumer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Chef => "Chef",
            Role::Consumer => "Consumer",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chef" => Ok(Role::Chef),
            "consumer" => Ok(Role::Consumer),
            _ => Err(MarketError::InvalidRole(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    /// Hex SHA-256 digest
    pub password: String,
    pub role: String,
}

impl User {
    pub fn role_enum(&self) -> Result<Role, MarketError> {
        self.role.parse()
    }
}

/// Identity returned by a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub user_id: i64,
    pub username: String,
    pub role: Role,
}

/// Signup input
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub password: String,
    pub role: Role,
    /// Initial portfolio; only used for chefs
    pub portfolio: Option<String>,
}

impl NewAccount {
    pub fn consumer(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            role: Role::Consumer,
            portfolio: None,
        }
    }

    pub fn chef(username: &str, password: &str, portfolio: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            role: Role::Chef,
            portfolio: Some(portfolio.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!("Chef".parse::<Role>().unwrap(), Role::Chef);
        assert_eq!("consumer".parse::<Role>().unwrap(), Role::Consumer);
        assert!(matches!(
            "Admin".parse::<Role>(),
            Err(MarketError::InvalidRole(_))
        ));
    }

    #[test]
    fn test_role_stored_form() {
        assert_eq!(Role::Chef.to_string(), "Chef");
        assert_eq!(Role::Consumer.as_str(), "Consumer");
    }
}
