//! Tags: random identifiers
//!
//! A tag is at least eight bytes, written as `#` followed by unpadded
//! RFC 4648 base32. Fresh tags draw their bytes from the operating system
//! generator.

use std::fmt;

use base32::Alphabet;
use bytes::Bytes;
use once_cell::sync::Lazy;
use rand::rngs::OsRng;
use rand::RngCore;
use regex::Regex;

use primer_core::{
    anchored, to_offsets, Accessible, Lexical, PrimitiveError, PrimitiveResult, Searchable,
    Sequential, BASE32,
};

/// Fewest bytes a tag may hold.
pub const MINIMUM_TAG_SIZE: usize = 8;
/// Size of a generated tag.
pub const DEFAULT_TAG_SIZE: usize = 20;

const ALPHABET: Alphabet = Alphabet::RFC4648 { padding: false };

static TAG: Lazy<Regex> = Lazy::new(|| anchored(&format!(r"#(?P<encoded>{BASE32}+)")));

/// Opaque identifier bytes
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(Bytes);

impl Tag {
    pub fn new(bytes: impl Into<Bytes>) -> PrimitiveResult<Self> {
        let bytes = bytes.into();
        if bytes.len() < MINIMUM_TAG_SIZE {
            return Err(PrimitiveError::TagTooShort(bytes.len()));
        }
        Ok(Tag(bytes))
    }

    /// Random tag of `size` bytes.
    pub fn with_size(size: usize) -> PrimitiveResult<Self> {
        if size < MINIMUM_TAG_SIZE {
            return Err(PrimitiveError::TagTooShort(size));
        }
        let mut bytes = vec![0u8; size];
        OsRng.fill_bytes(&mut bytes);
        tracing::trace!(size, "random tag");
        Ok(Tag(Bytes::from(bytes)))
    }

    /// Random tag of the default size.
    pub fn generate() -> Self {
        let mut bytes = vec![0u8; DEFAULT_TAG_SIZE];
        OsRng.fill_bytes(&mut bytes);
        tracing::trace!(size = DEFAULT_TAG_SIZE, "random tag");
        Tag(Bytes::from(bytes))
    }

    pub fn from_source(source: &str) -> PrimitiveResult<Self> {
        let illegal = || PrimitiveError::illegal_source("Tag", source);
        let captures = TAG.captures(source).ok_or_else(illegal)?;
        let encoded = &captures["encoded"];
        let bytes = base32::decode(ALPHABET, encoded).ok_or_else(illegal)?;
        // Stray trailing bits decode but do not re-encode to the same text.
        if bytes.len() < MINIMUM_TAG_SIZE || base32::encode(ALPHABET, &bytes) != encoded {
            return Err(illegal());
        }
        Ok(Tag(Bytes::from(bytes)))
    }

    #[inline]
    pub fn as_intrinsic(&self) -> &[u8] {
        &self.0
    }

    /// The first eight bytes read as a big-endian integer.
    pub fn get_hash(&self) -> u64 {
        self.0
            .iter()
            .take(MINIMUM_TAG_SIZE)
            .fold(0u64, |hash, &byte| (hash << 8) | u64::from(byte))
    }

    pub fn concatenate(&self, other: &Tag) -> Tag {
        let mut bytes = Vec::with_capacity(self.0.len() + other.0.len());
        bytes.extend_from_slice(&self.0);
        bytes.extend_from_slice(&other.0);
        Tag(Bytes::from(bytes))
    }
}

impl Sequential<u8> for Tag {
    fn as_array(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    #[inline]
    fn get_size(&self) -> usize {
        self.0.len()
    }

    fn is_empty(&self) -> bool {
        false
    }
}

impl Accessible<u8> for Tag {
    /// Fails when the slice is shorter than a tag may be.
    fn get_values(&self, first: isize, last: isize) -> PrimitiveResult<Self> {
        let range = to_offsets(first, last, self.0.len())?;
        Tag::new(self.0.slice(range))
    }
}

impl Searchable<u8> for Tag {}

impl Lexical for Tag {
    fn as_source(&self) -> String {
        format!("#{}", base32::encode(ALPHABET, &self.0))
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({})", self.as_source())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_source())
    }
}
