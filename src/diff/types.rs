/// One file's worth of changes from a unified diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    /// Original ("---") file name, timestamp stripped.
    pub orig_name: String,
    pub hunks: Vec<Hunk>,
}

/// One `@@` block. The body is opaque prefixed text; only the aligner
/// interprets the prefixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    /// The raw `@@ -a,b +c,d @@ ...` header line.
    pub header: String,
    /// Newline-joined prefixed lines, no trailing newline.
    pub body: String,
}
