// src/core/category.rs

/// Looks up the display label for a lowercase extension (leading dot included).
fn display_name(ext: &str) -> Option<&'static str> {
    let label = match ext {
        ".ts" | ".tsx" => "TypeScript",
        ".js" | ".jsx" => "JavaScript",
        ".py" => "Python",
        ".go" => "Go",
        ".java" => "Java",
        ".c" => "C",
        ".cpp" | ".cc" | ".cxx" => "C++",
        ".h" => "C Header",
        ".hpp" => "C++ Header",
        ".cs" => "C#",
        ".php" => "PHP",
        ".rb" => "Ruby",
        ".rs" => "Rust",
        ".kt" => "Kotlin",
        ".swift" => "Swift",
        ".dart" => "Dart",
        ".scala" => "Scala",
        ".r" => "R",
        ".m" => "Objective-C",
        ".mm" => "Objective-C++",
        ".sql" => "SQL",
        ".html" | ".htm" => "HTML",
        ".css" => "CSS",
        ".scss" => "SCSS",
        ".sass" => "Sass",
        ".less" => "Less",
        ".vue" => "Vue",
        ".xml" => "XML",
        ".json" => "JSON",
        ".yaml" | ".yml" => "YAML",
        ".toml" => "TOML",
        ".ini" => "INI",
        ".cfg" | ".conf" => "Config",
        ".md" => "Markdown",
        ".txt" => "Text",
        ".sh" => "Shell",
        ".bash" => "Bash",
        ".zsh" => "Zsh",
        ".fish" => "Fish",
        ".ps1" => "PowerShell",
        ".bat" | ".cmd" => "Batch",
        _ => return None,
    };
    Some(label)
}

/// Resolves an extension such as `.rs` or `.JS` to its display label.
///
/// Lookup is case-insensitive. Extensions without a mapping are returned
/// unchanged, so `.proto` stays `.proto`.
#[inline]
#[must_use]
pub fn resolve_category(ext: &str) -> &str {
    display_name(&ext.to_ascii_lowercase()).unwrap_or(ext)
}

/// Derives the category of a file from its base name.
///
/// The extension runs from the last `.` to the end of the name. A name with
/// no `.` at all (`Dockerfile`, `Makefile`) is its own category and skips the
/// lookup entirely.
#[inline]
#[must_use]
pub fn category_for_file_name(file_name: &str) -> String {
    file_name.rfind('.').map_or_else(
        || file_name.to_owned(),
        |idx| resolve_category(file_name.get(idx..).unwrap_or(file_name)).to_owned(),
    )
}
