use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Errors from config placeholder expansion
#[derive(Debug, Error)]
pub enum EnvError {
    /// A placeholder names a variable that is unset and has no default
    #[error("environment variable `{0}` is not set")]
    Missing(String),
}

fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // `${VAR}` or `${VAR:-fallback}`; group 1 is the variable name,
    // group 2 the optional fallback
    RE.get_or_init(|| {
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}").expect("must be valid regex")
    })
}

/// Expand `${VAR}` and `${VAR:-fallback}` placeholders in raw TOML text
///
/// Expansion happens before deserialization so config structs stay plain.
/// Comment lines pass through unchanged; an unset variable without a
/// fallback is an error.
pub fn expand_env(input: &str) -> Result<String, EnvError> {
    let mut output = String::with_capacity(input.len());

    for (i, line) in input.lines().enumerate() {
        if i > 0 {
            output.push('\n');
        }

        if line.trim_start().starts_with('#') {
            output.push_str(line);
            continue;
        }

        let mut last_end = 0;
        for captures in placeholder().captures_iter(line) {
            let overall = captures.get(0).expect("group 0 is the whole match");
            let name = captures.get(1).expect("group 1 is required").as_str();

            output.push_str(&line[last_end..overall.start()]);

            match std::env::var(name) {
                Ok(value) => output.push_str(&value),
                Err(_) => match captures.get(2) {
                    Some(fallback) => output.push_str(fallback.as_str()),
                    None => return Err(EnvError::Missing(name.to_owned())),
                },
            }

            last_end = overall.end();
        }
        output.push_str(&line[last_end..]);
    }

    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}
