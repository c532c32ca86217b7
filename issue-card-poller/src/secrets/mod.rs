//! Secret retrieval.
//!
//! Secrets are files mounted into the function container. The current mount
//! point is tried first; the pre-0.8.2 OpenFaaS location is kept as a fallback.

mod error;

pub use error::SecretError;

use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

/// Name of the GitHub access token secret.
pub const ACCESS_TOKEN_SECRET: &str = "github-accesstoken";

/// Where OpenFaaS mounts secrets.
pub const PRIMARY_SECRETS_DIR: &str = "/var/openfaas/secrets";

/// Where OpenFaaS 0.8.2 and older mounted secrets.
pub const FALLBACK_SECRETS_DIR: &str = "/run/secrets";

/// Something that can hand out secret values by name.
pub trait SecretSource: Send + Sync {
    /// Returns the raw bytes of secret `name`.
    ///
    /// # Errors
    ///
    /// Returns [`SecretError::NotFound`] if no such secret exists, or another
    /// [`SecretError`] if it cannot be read.
    fn get_secret(&self, name: &str) -> Result<Vec<u8>, SecretError>;
}

/// Reads secrets from files named after the secret in a list of directories.
#[derive(Debug, Clone)]
pub struct MountedSecrets {
    dirs: Vec<PathBuf>,
}

impl Default for MountedSecrets {
    fn default() -> Self {
        Self::new(vec![
            PathBuf::from(PRIMARY_SECRETS_DIR),
            PathBuf::from(FALLBACK_SECRETS_DIR),
        ])
    }
}

impl MountedSecrets {
    /// Searches `dirs` in order.
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }

    /// Returns the searched directories.
    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }
}

impl SecretSource for MountedSecrets {
    fn get_secret(&self, name: &str) -> Result<Vec<u8>, SecretError> {
        let mut last_error = None;

        for dir in &self.dirs {
            let path = dir.join(name);
            match std::fs::read(&path) {
                Ok(bytes) => {
                    debug!(path = %path.display(), "Read secret");
                    return Ok(bytes);
                }
                Err(e) => {
                    debug!(path = %path.display(), error = %e, "Secret not readable, trying next location");
                    last_error = Some((path, e));
                }
            }
        }

        match last_error {
            Some((path, e)) if e.kind() != ErrorKind::NotFound => Err(SecretError::IoError {
                path: path.display().to_string(),
                source: e,
            }),
            _ => Err(SecretError::NotFound {
                name: name.to_string(),
                searched: self.dirs.clone(),
            }),
        }
    }
}

/// Reads the GitHub access token, dropping trailing whitespace left by the
/// tooling that created the secret.
///
/// # Errors
///
/// Returns [`SecretError`] if the secret is missing, unreadable or not UTF-8.
pub fn read_access_token(secrets: &dyn SecretSource) -> Result<String, SecretError> {
    let bytes = secrets.get_secret(ACCESS_TOKEN_SECRET)?;
    let token = String::from_utf8(bytes).map_err(|_| SecretError::InvalidUtf8 {
        name: ACCESS_TOKEN_SECRET.to_string(),
    })?;
    Ok(token.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn reads_from_primary_location() {
        let primary = TempDir::new().unwrap();
        let fallback = TempDir::new().unwrap();
        fs::write(primary.path().join("token"), "primary").unwrap();
        fs::write(fallback.path().join("token"), "fallback").unwrap();
        let secrets = MountedSecrets::new(vec![
            primary.path().to_path_buf(),
            fallback.path().to_path_buf(),
        ]);

        assert_eq!(secrets.get_secret("token").unwrap(), b"primary");
    }

    #[test]
    fn falls_back_to_legacy_location() {
        let primary = TempDir::new().unwrap();
        let fallback = TempDir::new().unwrap();
        fs::write(fallback.path().join("token"), "fallback").unwrap();
        let secrets = MountedSecrets::new(vec![
            primary.path().to_path_buf(),
            fallback.path().to_path_buf(),
        ]);

        assert_eq!(secrets.get_secret("token").unwrap(), b"fallback");
    }

    #[test]
    fn missing_everywhere_is_not_found() {
        let primary = TempDir::new().unwrap();
        let secrets = MountedSecrets::new(vec![primary.path().to_path_buf()]);

        let result = secrets.get_secret("token");

        assert!(matches!(result, Err(SecretError::NotFound { ref name, .. }) if name == "token"));
    }

    #[test]
    fn default_searches_openfaas_locations() {
        let secrets = MountedSecrets::default();
        assert_eq!(
            secrets.dirs(),
            &[
                PathBuf::from("/var/openfaas/secrets"),
                PathBuf::from("/run/secrets")
            ]
        );
    }

    #[test]
    fn access_token_is_trimmed() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(ACCESS_TOKEN_SECRET), "ghp_abc123\n").unwrap();
        let secrets = MountedSecrets::new(vec![dir.path().to_path_buf()]);

        assert_eq!(read_access_token(&secrets).unwrap(), "ghp_abc123");
    }

    #[test]
    fn access_token_must_be_utf8() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(ACCESS_TOKEN_SECRET), [0xff_u8, 0xfe]).unwrap();
        let secrets = MountedSecrets::new(vec![dir.path().to_path_buf()]);

        assert!(matches!(
            read_access_token(&secrets),
            Err(SecretError::InvalidUtf8 { .. })
        ));
    }
}
