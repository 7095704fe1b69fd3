use std::io::Read;
use std::path::Path;

use anyhow::Context;

/// Source text read from a file argument or stdin.
#[derive(Debug)]
pub struct Input {
    pub text: String,
    /// File stem, used as the enclosing type name. `None` for stdin.
    pub stem: Option<String>,
    pub label: String,
}

/// Read `arg` as a file path, or stdin when it is `-`. Invalid UTF-8 is replaced.
pub fn read_input(arg: &str) -> anyhow::Result<Input> {
    if arg == "-" {
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .context("failed to read stdin")?;
        return Ok(Input {
            text: String::from_utf8_lossy(&bytes).into_owned(),
            stem: None,
            label: String::from("<stdin>"),
        });
    }

    let path = Path::new(arg);
    let bytes = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(Input {
        text: String::from_utf8_lossy(&bytes).into_owned(),
        stem: path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(str::to_string),
        label: path.display().to_string(),
    })
}
