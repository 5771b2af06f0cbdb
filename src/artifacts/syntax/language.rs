use std::ffi::OsStr;
use std::path::Path;

pub const PLAIN_TEXT: &str = "plaintext";

const EXTENSIONS: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "lua" => "lua",
    "md" => "markdown",
    "mdx" => "markdown",
    "cs" => "cs",
    "c" => "c",
    "h" => "c",
    "cpp" => "cpp",
    "hpp" => "cpp",
    "cxx" => "cpp",
    "hxx" => "cpp",
    "cc" => "cpp",
    "hh" => "cpp",
    "c++" => "cpp",
    "h++" => "cpp",
    "css" => "css",
    "erb" => "erb",
    "ejs" => "ejs",
    "go" => "go",
    "hs" => "haskell",
    "html" => "html",
    "java" => "java",
    "js" => "javascript",
    "jsx" => "javascript",
    "json" => "json",
    "json5" => "json",
    "jsonc" => "json",
    "ml" => "ocaml",
    "php" => "php",
    "py" => "python",
    "rs" => "rust",
    "rb" => "ruby",
    "ts" => "typescript",
    "tsx" => "typescriptreact",
    "editorconfig" => "editorconfig",
};

/// Language id for a file name, from its extension; `plaintext` when unknown.
///
/// Dotfiles such as `.editorconfig` are looked up by their full name.
pub fn language_id(file_name: &Path) -> &'static str {
    let extension = file_name.extension().or_else(|| {
        file_name
            .file_name()
            .and_then(|name| name.to_str())
            .filter(|name| name.starts_with('.'))
            .map(|name| OsStr::new(name.trim_start_matches('.')))
    });

    extension
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .and_then(|ext| EXTENSIONS.get(ext.as_str()).copied())
        .unwrap_or(PLAIN_TEXT)
}
