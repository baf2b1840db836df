/*!
 * ASCII tree rendering of a scanned project
 *
 * Rendering is lazy: [`TreeLines`] yields one line at a time in depth-first
 * pre-order, and keeps the directory/file counters as it goes.
 */

use crate::types::{DirectoryNode, Node};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const INDENT: &str = "        ";
const GUIDE_INDENT: &str = "│        ";

/// Counters gathered while rendering, used for the summary only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Directories visited, root included
    pub directories: usize,
    /// Files listed
    pub files: usize,
}

/// Renders the structure section of a listing
#[derive(Debug, Clone, Default)]
pub struct TreeRenderer {
    root_label: Option<String>,
}

impl TreeRenderer {
    /// Create a renderer using the root directory's own name
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `label` on the `[ROOT]` line instead of the directory name
    pub fn with_root_label(mut self, label: impl Into<String>) -> Self {
        self.root_label = Some(label.into());
        self
    }

    /// Lazily iterate over the rendered lines
    pub fn lines<'a>(&'a self, root: &'a DirectoryNode) -> TreeLines<'a> {
        TreeLines {
            root,
            root_label: self.root_label.as_deref(),
            stack: Vec::new(),
            started: false,
            stats: TreeStats::default(),
        }
    }

    /// Render every line and return them with the final counters
    pub fn render(&self, root: &DirectoryNode) -> (Vec<String>, TreeStats) {
        let mut lines = self.lines(root);
        let rendered: Vec<String> = lines.by_ref().collect();
        (rendered, lines.stats())
    }
}

struct Frame<'a> {
    entries: &'a [Node],
    next: usize,
    indent: String,
}

/// Iterator over the lines of a rendered tree
pub struct TreeLines<'a> {
    root: &'a DirectoryNode,
    root_label: Option<&'a str>,
    stack: Vec<Frame<'a>>,
    started: bool,
    stats: TreeStats,
}

impl TreeLines<'_> {
    /// Counters for the lines yielded so far
    pub fn stats(&self) -> TreeStats {
        self.stats
    }
}

impl Iterator for TreeLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if !self.started {
            self.started = true;
            self.stats.directories += 1;
            let root = self.root;
            self.stack.push(Frame {
                entries: &root.contents,
                next: 0,
                indent: String::new(),
            });
            let name = self.root_label.unwrap_or(&root.name);
            return Some(format!("[ROOT] {}", name));
        }

        loop {
            let frame = self.stack.last_mut()?;
            if frame.next >= frame.entries.len() {
                self.stack.pop();
                continue;
            }

            let entries = frame.entries;
            let index = frame.next;
            frame.next += 1;

            let is_last = index + 1 == entries.len();
            let connector = if is_last { LAST_BRANCH } else { BRANCH };
            let node = &entries[index];
            let line = format!("{}{}{}", frame.indent, connector, node.name());

            match node {
                Node::File(_) => self.stats.files += 1,
                Node::Directory(dir) => {
                    self.stats.directories += 1;
                    let indent = format!(
                        "{}{}",
                        frame.indent,
                        if is_last { INDENT } else { GUIDE_INDENT }
                    );
                    self.stack.push(Frame {
                        entries: &dir.contents,
                        next: 0,
                        indent,
                    });
                }
            }

            return Some(line);
        }
    }
}
