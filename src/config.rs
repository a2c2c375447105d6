use crate::contents::{
    request::{
        CommitRequest, CreateFileRequest, DeleteFileRequest, Encoding, Signature,
        UpdateFileRequest,
    },
    route::GITHUB_API_URL,
    ContentChange, ContentsRoute,
};
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

const DEFAULT_CONFIG_FILE_NAME: &str = "contents.yaml";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Deserialize)]
pub struct ContentsConfig {
    pub owner: String,
    pub repo: String,
    pub path: String,
    #[serde(default = "ContentsConfig::default_api_url")]
    pub api_url: String,
    pub message: String,
    pub branch: Option<String>,
    pub committer: Option<Signature>,
    pub author: Option<Signature>,
    #[serde(default = "ContentsConfig::default_log_level")]
    pub log_level: String,
    pub change: ChangeConfig,
    /// Directory of the manifest; relative `content_file` paths start here.
    #[serde(skip)]
    base_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ChangeConfig {
    Create {
        content: Option<String>,
        content_file: Option<PathBuf>,
        #[serde(default)]
        encoding: Encoding,
    },
    Update {
        content: Option<String>,
        content_file: Option<PathBuf>,
        #[serde(default)]
        encoding: Encoding,
        sha: String,
    },
    Delete {
        sha: String,
    },
}

impl ContentsConfig {
    pub fn default_path() -> PathBuf {
        PathBuf::from(DEFAULT_CONFIG_FILE_NAME)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<ContentsConfig> {
        let config_string = fs::read_to_string(path.as_ref())?;

        let mut config = serde_yaml::from_str::<ContentsConfig>(&config_string)?;
        config.base_dir = path
            .as_ref()
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        Ok(config)
    }

    pub fn route(&self) -> Result<ContentsRoute> {
        let route = ContentsRoute::new(&self.owner, &self.repo, &self.path)?
            .with_api_url(&self.api_url);

        Ok(route)
    }

    pub fn into_change(self) -> Result<ContentChange> {
        let commit = self.commit_request()?;

        let change: ContentChange = match self.change {
            ChangeConfig::Create {
                content,
                content_file,
                encoding,
            } => {
                let content = read_content(content, content_file, &self.base_dir)?;
                CreateFileRequest::from_commit(commit, content)
                    .with_encoding(encoding)
                    .into()
            }
            ChangeConfig::Update {
                content,
                content_file,
                encoding,
                sha,
            } => {
                let content = read_content(content, content_file, &self.base_dir)?;
                UpdateFileRequest::from_commit(commit, content, sha)?
                    .with_encoding(encoding)
                    .into()
            }
            ChangeConfig::Delete { sha } => DeleteFileRequest::from_commit(commit, sha)?.into(),
        };

        Ok(change)
    }

    fn commit_request(&self) -> Result<CommitRequest> {
        let mut commit = CommitRequest::new(&self.message)?;

        if let Some(branch) = &self.branch {
            commit = commit.with_branch(branch);
        }
        if let Some(committer) = &self.committer {
            commit = commit.with_committer(committer.to_owned());
        }
        if let Some(author) = &self.author {
            commit = commit.with_author(author.to_owned());
        }

        Ok(commit)
    }

    fn default_api_url() -> String {
        GITHUB_API_URL.to_owned()
    }

    fn default_log_level() -> String {
        DEFAULT_LOG_LEVEL.to_owned()
    }
}

fn read_content(
    content: Option<String>,
    content_file: Option<PathBuf>,
    base_dir: &Path,
) -> Result<String> {
    match (content, content_file) {
        (Some(content), None) => Ok(content),
        (None, Some(file)) => {
            // absolute paths replace base_dir on join
            let file = base_dir.join(file);
            fs::read_to_string(&file)
                .with_context(|| format!("Cannot read content file {}", file.display()))
        }
        (Some(_), Some(_)) => bail!("`content` and `content_file` are mutually exclusive"),
        (None, None) => bail!("one of `content` or `content_file` is required"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contents::Error;
    use std::{fs::File, io::Write};
    use tempdir::TempDir;

    fn load_from(dir: &TempDir, yaml: &str) -> Result<ContentsConfig> {
        let file_path = dir.path().join(DEFAULT_CONFIG_FILE_NAME);
        File::create(&file_path)?.write_all(yaml.as_bytes())?;

        ContentsConfig::load(&file_path)
    }

    #[test]
    fn should_load_a_create_manifest_with_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new("config")?;
        let config = load_from(
            &dir,
            r#"
owner: octo
repo: docs
path: README.md
message: add readme
change:
  kind: create
  content: hello
"#,
        )?;

        assert_eq!(config.api_url, GITHUB_API_URL);
        assert_eq!(config.log_level, "info");
        assert_eq!(
            config.route()?.uri(),
            "https://api.github.com/repos/octo/docs/contents/README.md"
        );

        let change = config.into_change()?;

        assert_eq!(change.commit().message(), "add readme");
        assert_eq!(change.commit().branch(), None);
        assert_eq!(change.content(), Some("hello"));
        assert_eq!(change.sha(), None);

        dir.close()?;
        Ok(())
    }

    #[test]
    fn should_apply_optional_commit_fields() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new("config")?;
        let config = load_from(
            &dir,
            r#"
owner: octo
repo: docs
path: README.md
message: remove readme
branch: cleanup
committer:
  name: Bot
  email: bot@example.com
author:
  name: Jane
  email: jane@example.com
  date: 2024-01-02T03:04:05Z
change:
  kind: delete
  sha: a1b2c3
"#,
        )?;

        let change = config.into_change()?;
        let commit = change.commit();

        assert_eq!(commit.branch(), Some("cleanup"));
        assert_eq!(commit.committer().map(|c| c.name.as_str()), Some("Bot"));
        assert!(commit.author().and_then(|a| a.date).is_some());
        assert_eq!(change.sha(), Some("a1b2c3"));
        assert_eq!(change.to_string(), "SHA: a1b2c3 Message: remove readme");

        dir.close()?;
        Ok(())
    }

    #[test]
    fn should_read_update_content_from_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new("config")?;
        let content_path = dir.path().join("guide.md");
        File::create(&content_path)?.write_all(b"# Guide\n\nUpdated.\n")?;

        let config = load_from(
            &dir,
            &format!(
                r#"
owner: octo
repo: docs
path: guides/guide.md
message: update guide
change:
  kind: update
  content_file: {}
  sha: d4e5f6
"#,
                content_path.display()
            ),
        )?;

        let change = config.into_change()?;

        assert_eq!(change.content(), Some("# Guide\n\nUpdated.\n"));
        assert_eq!(change.sha(), Some("d4e5f6"));

        dir.close()?;
        Ok(())
    }

    #[test]
    fn should_resolve_content_file_next_to_the_manifest() -> Result<(), Box<dyn std::error::Error>>
    {
        let dir = TempDir::new("config")?;
        let manifest_dir = dir.path().join("site");
        fs::create_dir_all(manifest_dir.join("pages"))?;
        File::create(manifest_dir.join("pages").join("index.md"))?.write_all(b"# Index\n")?;

        let manifest_path = manifest_dir.join(DEFAULT_CONFIG_FILE_NAME);
        File::create(&manifest_path)?.write_all(
            br#"
owner: octo
repo: docs
path: pages/index.md
message: add index
change:
  kind: create
  content_file: pages/index.md
"#,
        )?;

        let change = ContentsConfig::load(&manifest_path)?.into_change()?;

        assert_eq!(change.content(), Some("# Index\n"));

        dir.close()?;
        Ok(())
    }

    #[test]
    fn should_fail_on_empty_message() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new("config")?;
        let config = load_from(
            &dir,
            r#"
owner: octo
repo: docs
path: README.md
message: ""
change:
  kind: create
  content: hello
"#,
        )?;

        let error = config.into_change().unwrap_err();

        assert_eq!(
            error.downcast_ref::<Error>(),
            Some(&Error::InvalidArgument { name: "message" })
        );

        dir.close()?;
        Ok(())
    }

    #[test]
    fn should_require_exactly_one_content_source() {
        let base_dir = Path::new(".");

        assert!(read_content(None, None, base_dir).is_err());
        assert!(
            read_content(Some("a".to_string()), Some(PathBuf::from("a")), base_dir).is_err()
        );
        assert_eq!(
            read_content(Some(String::new()), None, base_dir).unwrap_or_default(),
            ""
        );
    }
}
