use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::Result;
use crate::error::CliError;

/// Expression text from `-q`, a file, or stdin (`-`).
pub fn load_query(query_path: Option<&Path>, query_text: Option<&str>) -> Result<String> {
    let text = match (query_text, query_path) {
        (Some(text), _) => text.to_owned(),
        (None, Some(path)) => read_input(path)?,
        (None, None) => {
            return Err(CliError::Usage(
                "expression is required: use positional argument or -q/--query",
            ));
        }
    };

    if text.trim().is_empty() {
        return Err(CliError::Usage("expression cannot be empty"));
    }
    Ok(text)
}

/// Contents of `path`, or stdin for `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(CliError::Stdin)?;
        return Ok(buf);
    }
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })
}

pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}
