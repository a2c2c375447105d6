use super::{ensure_not_blank, Error};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Characters that must be escaped inside a single URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Location of a file in a repository's contents API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentsRoute {
    api_url: String,
    owner: String,
    repo: String,
    path: String,
}

impl ContentsRoute {
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        path: impl Into<String>,
    ) -> Result<Self, Error> {
        let owner = ensure_not_blank(owner.into(), "owner")?;
        let repo = ensure_not_blank(repo.into(), "repo")?;
        let path = path.into();
        let path = ensure_not_blank(path.trim_start_matches('/').to_owned(), "path")?;

        Ok(Self {
            api_url: GITHUB_API_URL.to_owned(),
            owner,
            repo,
            path,
        })
    }

    /// Targets another API host, e.g. a GitHub Enterprise server.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_owned();
        self
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn uri(&self) -> String {
        let path = self
            .path
            .split('/')
            .map(encode_segment)
            .collect::<Vec<_>>()
            .join("/");

        format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_url,
            encode_segment(&self.owner),
            encode_segment(&self.repo),
            path
        )
    }
}

fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_the_contents_uri() -> Result<(), Box<dyn std::error::Error>> {
        let route = ContentsRoute::new("octo", "docs", "guides/setup.md")?;

        assert_eq!(
            route.uri(),
            "https://api.github.com/repos/octo/docs/contents/guides/setup.md"
        );

        Ok(())
    }

    #[test]
    fn should_encode_reserved_path_characters() -> Result<(), Box<dyn std::error::Error>> {
        let route = ContentsRoute::new("octo", "docs", "docs/a b#c?.md")?;

        assert_eq!(
            route.uri(),
            "https://api.github.com/repos/octo/docs/contents/docs/a%20b%23c%3F.md"
        );
        assert_eq!(route.path(), "docs/a b#c?.md");

        Ok(())
    }

    #[test]
    fn should_encode_owner_repo_and_non_ascii_segments() -> Result<(), Box<dyn std::error::Error>>
    {
        let route = ContentsRoute::new("oc to", "do%cs", "notes/café.md")?;

        assert_eq!(
            route.uri(),
            "https://api.github.com/repos/oc%20to/do%25cs/contents/notes/caf%C3%A9.md"
        );

        Ok(())
    }

    #[test]
    fn should_strip_leading_slash_from_path() -> Result<(), Box<dyn std::error::Error>> {
        let route = ContentsRoute::new("owner", "repo", "/README.md")?;

        assert_eq!(route.path(), "README.md");

        Ok(())
    }

    #[test]
    fn should_use_custom_api_url() -> Result<(), Box<dyn std::error::Error>> {
        let route = ContentsRoute::new("owner", "repo", "README.md")?
            .with_api_url("https://github.example.com/api/v3/");

        assert_eq!(
            route.uri(),
            "https://github.example.com/api/v3/repos/owner/repo/contents/README.md"
        );

        Ok(())
    }

    #[test]
    fn should_reject_blank_parts() {
        assert_eq!(
            ContentsRoute::new("", "repo", "a"),
            Err(Error::InvalidArgument { name: "owner" })
        );
        assert_eq!(
            ContentsRoute::new("owner", " ", "a"),
            Err(Error::InvalidArgument { name: "repo" })
        );
        assert_eq!(
            ContentsRoute::new("owner", "repo", "/"),
            Err(Error::InvalidArgument { name: "path" })
        );
    }
}
