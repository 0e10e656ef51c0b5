//! Names: slash separated paths of folders
//!
//! A name such as `/bali-nebula/types/Number` has at least one folder.
//! Folders are runs of letters, digits and hyphens.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use primer_core::{
    anchored, to_offsets, Accessible, Lexical, Ordered, PrimitiveError, PrimitiveResult,
    Searchable, Sequential, DIGIT, LETTER,
};

static FOLDER: Lazy<String> = Lazy::new(|| format!(r"(?:{LETTER}|{DIGIT}|-)+"));
static FOLDER_ONLY: Lazy<Regex> = Lazy::new(|| anchored(&FOLDER));
static NAME: Lazy<Regex> = Lazy::new(|| anchored(&format!(r"(?:/{})+", *FOLDER)));

/// One segment of a name
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Folder(String);

impl Folder {
    pub fn new(folder: &str) -> PrimitiveResult<Self> {
        if !FOLDER_ONLY.is_match(folder) {
            return Err(PrimitiveError::illegal_value(
                "Folder",
                format!("{folder:?} is not a folder"),
            ));
        }
        Ok(Folder(folder.to_string()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Folder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Folder({})", self.0)
    }
}

impl fmt::Display for Folder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hierarchical name
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(Vec<Folder>);

impl Name {
    pub fn new(folders: Vec<Folder>) -> PrimitiveResult<Self> {
        if folders.is_empty() {
            return Err(PrimitiveError::illegal_value(
                "Name",
                "a name needs at least one folder",
            ));
        }
        Ok(Name(folders))
    }

    pub fn from_source(source: &str) -> PrimitiveResult<Self> {
        if !NAME.is_match(source) {
            return Err(PrimitiveError::illegal_source("Name", source));
        }
        let folders = source
            .split('/')
            .skip(1)
            .map(|folder| Folder(folder.to_string()))
            .collect();
        Ok(Name(folders))
    }

    #[inline]
    pub fn as_intrinsic(&self) -> &[Folder] {
        &self.0
    }

    pub fn concatenate(&self, other: &Name) -> Name {
        Name([self.0.as_slice(), other.0.as_slice()].concat())
    }
}

impl Sequential<Folder> for Name {
    fn as_array(&self) -> Vec<Folder> {
        self.0.clone()
    }

    #[inline]
    fn get_size(&self) -> usize {
        self.0.len()
    }

    fn is_empty(&self) -> bool {
        false
    }
}

impl Accessible<Folder> for Name {
    fn get_values(&self, first: isize, last: isize) -> PrimitiveResult<Self> {
        let range = to_offsets(first, last, self.0.len())?;
        Ok(Name(self.0[range].to_vec()))
    }
}

impl Searchable<Folder> for Name {}

impl Ordered for Name {
    fn is_before(&self, other: &Self) -> bool {
        self < other
    }
}

impl Lexical for Name {
    fn as_source(&self) -> String {
        self.0.iter().map(|folder| format!("/{folder}")).collect()
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.as_source())
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_source())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_source() {
        let source = "/bali-nebula/types/abstractions/5String";
        let name = Name::from_source(source).unwrap();
        assert_eq!(name.get_size(), 4);
        assert_eq!(name.as_source(), source);
        for source in ["", "/", "bali", "/bali/", "//bali", "/bali nebula", "/bali.nebula"] {
            assert!(Name::from_source(source).is_err(), "{source:?}");
        }
    }

    #[test]
    fn test_name_sequence() {
        let name = Name::from_source("/bali-nebula/types/abstractions/5String").unwrap();
        assert_eq!(name.get_value(-1), Ok(Folder::new("5String").unwrap()));
        assert_eq!(
            name.get_values(1, 2),
            Name::from_source("/bali-nebula/types")
        );
        assert_eq!(name.get_index(&Folder::new("types").unwrap()), 2);
        assert_eq!(name.get_index(&Folder::new("missing").unwrap()), 0);
        assert!(name.contains_value(&Folder::new("abstractions").unwrap()));
        let joined = name
            .get_values(1, 1)
            .unwrap()
            .concatenate(&name.get_values(4, 4).unwrap());
        assert_eq!(joined.as_source(), "/bali-nebula/5String");
        assert!(joined.is_before(&name));
        assert!(!name.is_empty());
    }

    #[test]
    fn test_name_construction() {
        let folders = vec![Folder::new("a").unwrap(), Folder::new("b-2").unwrap()];
        assert_eq!(Name::new(folders).unwrap().as_source(), "/a/b-2");
        assert!(Name::new(Vec::new()).is_err());
        assert!(Folder::new("a/b").is_err());
        assert!(Folder::new("").is_err());
    }
}
