//! Known identities and the mock credential scheme.

use mapventures_core::{Identity, Role};

use crate::error::{AuthError, Result};

/// Password shared by every identity in the mock directory.
pub const MOCK_PASSWORD: &str = "123456";

/// The set of identities that may log in.
///
/// Credentials are a single shared secret; there is no per-identity password.
#[derive(Debug, Clone)]
pub struct Directory {
    identities: Vec<Identity>,
    secret: String,
}

impl Directory {
    /// Create a directory over the given identities and shared secret.
    pub fn new(identities: Vec<Identity>, secret: impl Into<String>) -> Self {
        Self {
            identities,
            secret: secret.into(),
        }
    }

    /// The built-in directory: one admin, two company accounts, one organizer.
    pub fn mock() -> Self {
        Self::new(
            vec![
                Identity::new("1", "Admin Geral", "admin@admin.com", Role::Admin),
                Identity::new(
                    "2",
                    "TechJoinville Solutions",
                    "contato@techjoinville.com.br",
                    Role::Company,
                )
                .with_company("1"),
                Identity::new(
                    "3",
                    "Metalúrgica Norte SC",
                    "contato@metalurgicnorte.com.br",
                    Role::Company,
                )
                .with_company("2"),
                Identity::new(
                    "4",
                    "Organizador de Eventos",
                    "organizador@eventos.com",
                    Role::Organizer,
                ),
            ],
            MOCK_PASSWORD,
        )
    }

    /// Look up an identity by exact email match.
    pub fn find_by_email(&self, email: &str) -> Option<&Identity> {
        self.identities.iter().find(|i| i.email == email)
    }

    /// Look up an identity by id.
    pub fn find_by_id(&self, id: &str) -> Option<&Identity> {
        self.identities.iter().find(|i| i.id == id)
    }

    /// Check credentials and return the matching identity.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<Identity> {
        let identity = self
            .find_by_email(email)
            .ok_or_else(|| AuthError::UnknownEmail(email.to_string()))?;
        if password != self.secret {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(identity.clone())
    }

    /// All identities, in registration order.
    pub fn identities(&self) -> &[Identity] {
        &self.identities
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::mock()
    }
}
