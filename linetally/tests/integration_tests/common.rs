// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::Path;
use tempfile::TempDir;

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// A small mixed-language project with a few directories that must be pruned.
pub fn setup_test_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    create_test_file(
        temp_dir.path(),
        "src/app.ts",
        "interface User {\n  id: number;\n}\n\nexport const u: User = { id: 1 };\n",
    )?;
    create_test_file(
        temp_dir.path(),
        "src/components/Button.tsx",
        "export const Button = () => null;\n",
    )?;
    create_test_file(temp_dir.path(), "server.js", "const a = 1;\nconst b = 2;\n")?;
    create_test_file(temp_dir.path(), "README.md", "# Title\n\nSome text.\n")?;
    create_test_file(temp_dir.path(), "Makefile", "all:\n\techo hi\n")?;

    create_test_file(
        temp_dir.path(),
        "node_modules/left-pad/index.js",
        "module.exports = pad;\n",
    )?;
    create_test_file(temp_dir.path(), ".git/config", "[core]\n")?;
    create_test_file(temp_dir.path(), "dist/bundle.js", "a\nb\nc\n")?;
    create_test_file(temp_dir.path(), "__pycache__/mod.cpython-312.pyc", "x\n")?;

    Ok(temp_dir)
}
