use searchmind_application::{CredentialStore, CredentialStoreError};
use searchmind_domain::{Credential, ProviderKey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// On-disk layout:
///
/// ```toml
/// [keys]
/// perplexity = "pplx-..."
/// ```
#[derive(Debug, Default, Serialize, Deserialize)]
struct CredentialsFile {
    #[serde(default)]
    keys: BTreeMap<String, String>,
}

/// Credentials persisted as TOML, used by `--remember-key`.
///
/// The file is created with owner-only permissions on Unix.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub const FILE_NAME: &'static str = "credentials.toml";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the given config directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(Self::FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<CredentialsFile, CredentialStoreError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => toml::from_str(&text)
                .map_err(|e| CredentialStoreError::Serialization(e.to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(CredentialsFile::default()),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, file: &CredentialsFile) -> Result<(), CredentialStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = toml::to_string(file)
            .map_err(|e| CredentialStoreError::Serialization(e.to_string()))?;
        // Tighten a file that predates this store before the secret lands in it.
        if self.path.exists() {
            restrict_permissions(&self.path)?;
        }
        let mut out = open_private(&self.path)?;
        out.write_all(text.as_bytes())?;
        out.sync_all()?;
        Ok(())
    }
}

/// Open for writing, creating the file owner-only from the start.
#[cfg(unix)]
fn open_private(path: &Path) -> std::io::Result<fs::File> {
    use std::os::unix::fs::OpenOptionsExt;
    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)
}

#[cfg(not(unix))]
fn open_private(path: &Path) -> std::io::Result<fs::File> {
    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

impl CredentialStore for FileCredentialStore {
    fn get(&self, key: ProviderKey) -> Option<Credential> {
        match self.read() {
            Ok(file) => file
                .keys
                .get(key.as_str())
                .and_then(|v| Credential::new(v.as_str()).ok()),
            Err(e) => {
                warn!("Ignoring unreadable {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn set(&self, key: ProviderKey, credential: Credential) -> Result<(), CredentialStoreError> {
        let mut file = self.read()?;
        file.keys
            .insert(key.as_str().to_string(), credential.expose().to_string());
        self.write(&file)?;
        debug!("Stored {} credential in {}", key, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::in_dir(dir.path());
        assert!(store.get(ProviderKey::Perplexity).is_none());
    }

    #[test]
    fn test_set_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("searchmind");

        FileCredentialStore::in_dir(&nested)
            .set(ProviderKey::Perplexity, Credential::new("pplx-abc").unwrap())
            .unwrap();

        let store = FileCredentialStore::in_dir(&nested);
        assert_eq!(store.get(ProviderKey::Perplexity).unwrap().expose(), "pplx-abc");
        assert!(store.get(ProviderKey::Gemini).is_none());

        let text = fs::read_to_string(store.path()).unwrap();
        assert!(text.contains("[keys]"));
    }

    #[test]
    fn test_set_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::in_dir(dir.path());
        store
            .set(ProviderKey::Gemini, Credential::new("g").unwrap())
            .unwrap();
        store
            .set(ProviderKey::Perplexity, Credential::new("p").unwrap())
            .unwrap();

        assert_eq!(store.get(ProviderKey::Gemini).unwrap().expose(), "g");
        assert_eq!(store.get(ProviderKey::Perplexity).unwrap().expose(), "p");
    }

    #[cfg(unix)]
    #[test]
    fn test_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::in_dir(dir.path());
        store
            .set(ProviderKey::Perplexity, Credential::new("secret").unwrap())
            .unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn test_existing_world_readable_file_is_tightened() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::in_dir(dir.path());
        fs::write(store.path(), "[keys]\ngemini = \"g\"\n").unwrap();
        fs::set_permissions(store.path(), fs::Permissions::from_mode(0o644)).unwrap();

        store
            .set(ProviderKey::Perplexity, Credential::new("secret").unwrap())
            .unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(store.get(ProviderKey::Gemini).unwrap().expose(), "g");
        assert_eq!(store.get(ProviderKey::Perplexity).unwrap().expose(), "secret");
    }

    #[test]
    fn test_corrupt_file_reads_as_empty_but_refuses_write() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::in_dir(dir.path());
        fs::write(store.path(), "not = [valid").unwrap();

        assert!(store.get(ProviderKey::Perplexity).is_none());
        let err = store
            .set(ProviderKey::Perplexity, Credential::new("k").unwrap())
            .unwrap_err();
        assert!(matches!(err, CredentialStoreError::Serialization(_)));
    }
}
