/*!
 * Repository URL handling
 *
 * A listing made from a checkout is labelled with the repository name
 * instead of the checkout directory name.
 */

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::error::ProjDocError;

static SSH_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^git@([^:/]+):([^/]+)/([^/]+?)(?:\.git)?/?$").expect("SSH URL regex is valid")
});

/// Owner and name of a remote repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoInfo {
    /// Original URL
    pub url: String,
    /// Host name, e.g. `github.com`
    pub host: String,
    /// Repository owner/username
    pub owner: String,
    /// Repository name without `.git`
    pub name: String,
}

impl std::fmt::Display for RepoInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.host, self.owner, self.name)
    }
}

impl FromStr for RepoInfo {
    type Err = ProjDocError;

    fn from_str(url: &str) -> Result<Self, Self::Err> {
        let invalid = || ProjDocError::InvalidUrl(url.to_string());

        if let Some(captures) = SSH_REGEX.captures(url) {
            return Ok(RepoInfo {
                url: url.to_string(),
                host: captures[1].to_string(),
                owner: captures[2].to_string(),
                name: captures[3].to_string(),
            });
        }

        let parsed = Url::parse(url).map_err(|_| invalid())?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid());
        }
        let host = parsed.host_str().ok_or_else(invalid)?.to_string();

        let segments: Vec<&str> = parsed
            .path_segments()
            .map(|s| s.filter(|part| !part.is_empty()).collect())
            .unwrap_or_default();
        if segments.len() < 2 {
            return Err(invalid());
        }

        let owner = segments[0].to_string();
        let last = segments[segments.len() - 1];
        let name = last.strip_suffix(".git").unwrap_or(last).to_string();
        if name.is_empty() {
            return Err(invalid());
        }

        Ok(RepoInfo {
            url: url.to_string(),
            host,
            owner,
            name,
        })
    }
}

/// Parse a repository URL into its components
pub fn parse_repo_url(url: &str) -> Result<RepoInfo, ProjDocError> {
    url.trim().parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_https_url() {
        let repo = parse_repo_url("https://github.com/username/webapp").unwrap();
        assert_eq!(repo.host, "github.com");
        assert_eq!(repo.owner, "username");
        assert_eq!(repo.name, "webapp");
        assert_eq!(repo.to_string(), "github.com/username/webapp");
    }

    #[test]
    fn test_parse_strips_git_suffix() {
        let repo = parse_repo_url("https://gitlab.com/group/sub/tool.git").unwrap();
        assert_eq!(repo.owner, "group");
        assert_eq!(repo.name, "tool");

        let repo = parse_repo_url("https://github.com/username/webapp/").unwrap();
        assert_eq!(repo.name, "webapp");
    }

    #[test]
    fn test_parse_ssh_url() {
        let repo = parse_repo_url("git@github.com:username/webapp.git").unwrap();
        assert_eq!(repo.host, "github.com");
        assert_eq!(repo.owner, "username");
        assert_eq!(repo.name, "webapp");
    }

    #[test]
    fn test_invalid_urls() {
        assert!(parse_repo_url("https://github.com").is_err());
        assert!(parse_repo_url("https://github.com/username").is_err());
        assert!(parse_repo_url("git@github.com").is_err());
        assert!(parse_repo_url("/path/to/local/directory").is_err());
        assert!(parse_repo_url("ftp://example.com/username/repo").is_err());
    }
}
