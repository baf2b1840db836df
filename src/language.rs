/*!
 * Fenced code block language tags
 */

use strum::Display;

/// Language of a file, as used in the opening fence of its section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Language {
    #[strum(serialize = "csharp")]
    CSharp,
    #[strum(serialize = "javascript")]
    JavaScript,
    #[strum(serialize = "json")]
    Json,
    #[strum(serialize = "html")]
    Html,
    #[strum(serialize = "css")]
    Css,
    #[strum(serialize = "markdown")]
    Markdown,
    #[strum(serialize = "xml")]
    Xml,
    #[strum(serialize = "sql")]
    Sql,
    /// Unknown extension; renders as an empty tag
    #[strum(serialize = "")]
    Plain,
}

impl Language {
    /// Map a lowercased extension (with its dot) to a language
    pub fn from_extension(extension: &str) -> Self {
        match extension {
            ".cs" => Self::CSharp,
            ".js" => Self::JavaScript,
            ".json" => Self::Json,
            ".html" => Self::Html,
            ".css" => Self::Css,
            ".md" => Self::Markdown,
            ".xml" => Self::Xml,
            ".sql" => Self::Sql,
            _ => Self::Plain,
        }
    }
}
