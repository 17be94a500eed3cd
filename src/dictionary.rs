//! Dictionary loading, building, and persistence.
//!
//! Dictionary files carry one word per line; blank lines and `#` comments
//! are skipped. A solved trie can be saved as JSON and reloaded later, so
//! an expensive build does not have to be repeated to answer new queries.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter},
    path::Path,
};

use crate::{Error, Result, trie::Trie};

/// Read dictionary words from a buffered reader.
///
/// # Errors
///
/// Returns [`Error::Io`] if a line cannot be read. Words are not validated
/// here; malformed entries surface from [`Trie::add_word`] with their
/// offending character and position.
pub fn load_words<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|source| Error::Io {
            operation: "read dictionary line".to_string(),
            source,
        })?;
        let entry = line.trim();
        if entry.is_empty() || entry.starts_with('#') {
            continue;
        }
        words.push(entry.to_string());
    }
    Ok(words)
}

/// Read dictionary words from a file.
pub fn load_file(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|source| Error::Io {
        operation: format!("open dictionary {}", path.display()),
        source,
    })?;
    load_words(BufReader::new(file))
}

/// Build a solved trie from a word list: insert everything, then propagate.
///
/// # Examples
///
/// ```
/// use ghost::{dictionary, types::Outcome};
///
/// let trie = dictionary::build(["cat", "cats", "dog", "do"]).unwrap();
/// assert_eq!(trie.outcome_of(trie.root()).unwrap(), Outcome::Win);
/// ```
pub fn build<I, S>(words: I) -> Result<Trie>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut trie = Trie::new();
    for word in words {
        trie.add_word(word.as_ref())?;
    }
    trie.propagate()?;
    Ok(trie)
}

/// Build a solved trie straight from a dictionary file.
pub fn build_from_file(path: &Path) -> Result<Trie> {
    build(load_file(path)?)
}

/// Save a trie as JSON.
pub fn save_json(trie: &Trie, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| Error::Io {
        operation: format!("create {}", path.display()),
        source,
    })?;
    serde_json::to_writer(BufWriter::new(file), trie)?;
    Ok(())
}

/// Load a previously saved trie from JSON.
///
/// The propagation phase flag round-trips with the structure, so a solved
/// trie is immediately queryable after loading.
pub fn load_json(path: &Path) -> Result<Trie> {
    let file = File::open(path).map_err(|source| Error::Io {
        operation: format!("open {}", path.display()),
        source,
    })?;
    let trie = serde_json::from_reader(BufReader::new(file))?;
    Ok(trie)
}
