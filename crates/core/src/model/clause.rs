//! Clause nodes and paragraph text reconstruction.

/// A node in the recovered document hierarchy.
///
/// Nodes live in the forest's arena; `children` holds arena indices, so each
/// node is owned by exactly one parent (or by the root list) with no back
/// references. Body lines accumulate during the single build pass; an empty
/// string marks a paragraph break.
#[derive(Debug, Clone, PartialEq)]
pub struct ClauseNode {
    pub identifier: String,
    pub title: String,
    pub body_lines: Vec<String>,
    pub children: Vec<usize>,
}

impl ClauseNode {
    pub fn new(identifier: &str, title: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            title: title.to_string(),
            body_lines: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Reconstructs paragraph text from the accumulated body lines.
    ///
    /// An empty marker line flushes the current paragraph. A line whose first
    /// character is lower-case continues a hyphen-terminated previous line
    /// with the hyphen dropped, rejoining words broken across a wrap. Empty
    /// paragraphs are omitted from the output.
    pub fn text(&self) -> String {
        let mut paragraphs: Vec<String> = Vec::new();
        let mut buffer: Vec<String> = Vec::new();

        for line in &self.body_lines {
            if line.is_empty() {
                flush(&mut paragraphs, &mut buffer);
                continue;
            }
            if let Some(prev) = buffer.last_mut()
                && prev.ends_with('-')
                && line.chars().next().is_some_and(char::is_lowercase)
            {
                prev.pop();
                prev.push_str(line);
                continue;
            }
            buffer.push(line.clone());
        }
        flush(&mut paragraphs, &mut buffer);

        paragraphs.retain(|paragraph| !paragraph.is_empty());
        paragraphs.join("\n\n")
    }
}

fn flush(paragraphs: &mut Vec<String>, buffer: &mut Vec<String>) {
    if buffer.is_empty() {
        return;
    }
    paragraphs.push(buffer.join(" ").trim().to_string());
    buffer.clear();
}
