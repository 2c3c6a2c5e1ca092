// src/config/io.rs

use directories_next::ProjectDirs;
use std::fs;
use std::io::{self, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use super::{Cli, ServiceAccountKey};

const QUALIFIER: &str = "com";
const ORGANIZATION: &str = "StaffboardOrg";
const APPLICATION: &str = "Staffboard";
const CREDENTIALS_FILE: &str = "service_account.json";

/// Inline JSON key content (useful for deployments without a filesystem key).
pub const INLINE_KEY_ENV: &str = "GOOGLE_SERVICE_ACCOUNT_JSON";
/// Path to a JSON key file.
pub const KEY_PATH_ENV: &str = "GOOGLE_SERVICE_ACCOUNT_KEY";

/// Default location of the key file in the platform config directory.
pub fn default_credentials_path() -> io::Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION) {
        let config_dir = proj_dirs.config_dir();
        fs::create_dir_all(config_dir)?;
        Ok(config_dir.join(CREDENTIALS_FILE))
    } else {
        Err(io::Error::new(
            ErrorKind::NotFound,
            "Could not determine project directories for the credentials file.",
        ))
    }
}

/// Resolves and loads the service account key. Order: `--credentials` flag,
/// inline JSON env var, key-path env var, then the default config location.
/// The first source that is present must succeed; there is no fallback from
/// a broken key file to the next source.
pub fn load_service_account_key(cli: &Cli) -> io::Result<ServiceAccountKey> {
    if let Some(path) = &cli.credentials {
        return read_key_file(path);
    }
    if let Ok(json) = std::env::var(INLINE_KEY_ENV) {
        if !json.trim().is_empty() {
            return parse_key(&json);
        }
    }
    if let Ok(path) = std::env::var(KEY_PATH_ENV) {
        if !path.trim().is_empty() {
            return read_key_file(Path::new(&path));
        }
    }
    read_key_file(&default_credentials_path()?)
}

fn read_key_file(path: &Path) -> io::Result<ServiceAccountKey> {
    let file = fs::File::open(path)?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| {
        io::Error::new(
            ErrorKind::InvalidData,
            format!("Failed to parse key file {:?}: {}", path, e),
        )
    })
}

fn parse_key(json: &str) -> io::Result<ServiceAccountKey> {
    serde_json::from_str(json).map_err(|e| {
        io::Error::new(
            ErrorKind::InvalidData,
            format!("Failed to parse inline key JSON: {}", e),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn cli_with_credentials(path: PathBuf) -> Cli {
        Cli {
            credentials: Some(path),
            spreadsheet_id: None,
        }
    }

    #[test]
    fn loads_key_from_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::json!({
            "type": "service_account",
            "project_id": "p",
            "private_key_id": "k",
            "private_key": "pem",
            "client_email": "bot@p.iam.gserviceaccount.com",
            "client_id": "1",
            "auth_uri": "https://accounts.google.com/o/oauth2/auth",
            "token_uri": "https://oauth2.googleapis.com/token",
            "auth_provider_x509_cert_url": "https://www.googleapis.com/oauth2/v1/certs",
            "client_x509_cert_url": "https://www.googleapis.com/robot/v1/metadata/x509/bot"
        });
        write!(file, "{}", json).unwrap();

        let key = load_service_account_key(&cli_with_credentials(file.path().to_path_buf())).unwrap();
        assert_eq!(key.client_email, "bot@p.iam.gserviceaccount.com");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result =
            load_service_account_key(&cli_with_credentials(dir.path().join("does_not_exist.json")));
        assert_eq!(result.unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[test]
    fn truncated_key_file_is_invalid_data() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"type\": \"service_account\"}}").unwrap();

        let result = load_service_account_key(&cli_with_credentials(file.path().to_path_buf()));
        assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidData);
    }
}
