//! Line-based interactive query loop.

use std::io::{self, BufRead, Write};
use log::debug;

use super::format::Data;
use super::search;

/// Settings for [`run`].
#[derive(Debug, Clone)]
pub struct PromptOptions {
    /// Input line that ends the loop.
    pub quit_word: String,
    /// Text written before each read; empty to disable.
    pub prompt: String,
}

impl PromptOptions {
    pub fn with_quit_word(quit_word: impl Into<String>) -> Self {
        let quit_word = quit_word.into();
        Self {
            prompt: format!("\nEnter administrative name to search (or '{}' to quit): ", quit_word),
            quit_word,
        }
    }
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self::with_quit_word("q")
    }
}

/// Runs the query loop until the quit word or end of input.
///
/// Empty lines are skipped. Returns the number of queries answered.
pub fn run<R: BufRead, W: Write>(
    data: &Data<'_>,
    mut input: R,
    mut output: W,
    options: &PromptOptions,
) -> io::Result<usize> {
    let mut queries = 0;
    let mut line = String::new();

    loop {
        if !options.prompt.is_empty() {
            write!(output, "{}", options.prompt)?;
            output.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("End of input after {} queries", queries);
            break;
        }
        let name = line.trim_end_matches(['\n', '\r']);
        if name == options.quit_word {
            break;
        }
        if name.is_empty() {
            continue;
        }

        answer(data, name, &mut output)?;
        queries += 1;
    }

    Ok(queries)
}

/// Writes every match for `name`, or the not-found line. Returns the match count.
pub fn answer<W: Write>(data: &Data<'_>, name: &str, output: &mut W) -> io::Result<usize> {
    let matches = search::search(data.root(), name);
    debug!("Query {:?}: {} matches", name, matches.len());

    if matches.is_empty() {
        writeln!(output, "No location found with name: {}", name)?;
    }
    for found in &matches {
        writeln!(output, "{}", found)?;
    }
    Ok(matches.len())
}
