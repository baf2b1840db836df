/*!
 * The rendered listing: structure section followed by file sections
 */

use std::fmt;

use crate::language::Language;

/// Banner opening the structure section
pub const STRUCTURE_BANNER: &str = "#====== Project structure: =====";
/// Line closing the structure section
pub const SEPARATOR: &str = "==============================";
/// Heading opening the content section
pub const CONTENTS_HEADING: &str = "# File contents";

const FENCE: &str = "```";

/// Content of a single file, ready to be fenced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSection {
    /// Path relative to the project root, `/` separated
    pub path: String,
    /// Language tag for the opening fence
    pub language: Language,
    /// Full text of the file
    pub content: String,
}

impl fmt::Display for FileSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "## File: {}", self.path)?;
        writeln!(f, "{}{}", FENCE, self.language)?;
        f.write_str(&self.content)?;
        if !self.content.ends_with('\n') {
            writeln!(f)?;
        }
        writeln!(f, "{}", FENCE)
    }
}

/// Complete listing in output order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedDocument {
    /// Lines of the structure section, `[ROOT]` line first
    pub structure: Vec<String>,
    /// One section per included file
    pub files: Vec<FileSection>,
}

impl RenderedDocument {
    /// Assemble a document from its sections
    pub fn new(structure: Vec<String>, files: Vec<FileSection>) -> Self {
        Self { structure, files }
    }

    /// Render the whole document as Markdown
    pub fn to_markdown(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RenderedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", STRUCTURE_BANNER)?;
        writeln!(f)?;
        for line in &self.structure {
            writeln!(f, "{}", line)?;
        }
        writeln!(f, "{}", SEPARATOR)?;
        writeln!(f)?;
        writeln!(f, "{}", CONTENTS_HEADING)?;
        for section in &self.files {
            write!(f, "{}", section)?;
        }
        Ok(())
    }
}
