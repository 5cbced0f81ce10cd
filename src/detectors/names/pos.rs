//! Part-of-speech heuristics for compound identifiers.
//!
//! A compound identifier reads like a phrase: verbs anchor method names at
//! the head, nouns anchor class and property names at the tail. The verb
//! check consults a closed high-frequency verb set first and only asks the
//! statistical tagger about words outside it. Tagger failures are logged and
//! resolve to `false`; neither check ever returns an error.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;
use tracing::warn;

use crate::core::casing::split_words;
use crate::core::errors::{CodenamerError, Result};

const EMBEDDED_LEXICON: &str = include_str!("data/unigram_lexicon.tsv");

/// High-frequency verbs accepted without consulting the tagger.
static COMMON_VERBS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // basic
        "get", "set", "is", "has", "can", "should", "will", "would", "could",
        "add", "remove", "delete", "create", "update", "save", "load", "insert",
        "find", "search", "filter", "sort", "validate", "check", "verify",
        "calculate", "compute", "process", "handle", "execute", "run", "perform",
        "start", "stop", "pause", "resume", "reset", "clear", "clean", "flush",
        "build", "make", "construct", "destroy", "dispose", "release",
        "batch", "parse", "format", "convert", "transform", "map", "reduce", "merge",
        // common programming verbs
        "generate", "render", "display", "show", "hide", "toggle", "switch",
        "send", "receive", "transmit", "broadcast", "publish", "subscribe",
        "connect", "disconnect", "bind", "unbind", "attach", "detach",
        "open", "close", "read", "write", "copy", "move", "rename", "backup",
        "import", "export", "sync", "upload", "download", "fetch", "push", "pull",
        "enable", "disable", "activate", "deactivate", "initialize", "finalize",
        "begin", "end", "complete", "finish", "cancel", "abort", "retry",
        "lock", "unlock", "encrypt", "decrypt", "compress", "decompress",
        "serialize", "deserialize", "encode", "decode", "hash", "sign",
        // UI
        "click", "select", "choose", "pick", "drag", "drop", "scroll", "zoom",
        "navigate", "redirect", "refresh", "reload", "submit", "apply", "confirm",
        // data manipulation
        "query", "count", "sum", "average", "group", "join", "split", "slice",
        "append", "prepend", "replace", "substitute", "trim", "pad", "fill",
        // state management
        "track", "monitor", "observe", "watch", "listen", "notify", "alert",
        "log", "record", "store", "cache", "buffer", "queue", "schedule",
    ]
    .into_iter()
    .collect()
});

/// Process-wide tagger built from the embedded lexicon on first use.
static SHARED_TAGGER: Lazy<std::result::Result<UnigramTagger, String>> =
    Lazy::new(|| UnigramTagger::from_lexicon(EMBEDDED_LEXICON).map_err(|e| e.to_string()));

/// A Penn-Treebank style part-of-speech tag (`NN`, `NNS`, `VB`, `VBG`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PosTag(String);

impl PosTag {
    /// Wrap a raw tag string
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Raw tag string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Any verb form (`VB*`)
    pub fn is_verb(&self) -> bool {
        self.0.starts_with("VB")
    }

    /// Any noun form (`NN*`)
    pub fn is_noun(&self) -> bool {
        self.0.starts_with("NN")
    }
}

/// Tags a single, already tokenized, lowercase word.
pub trait PosTagger: Send + Sync {
    /// Return the most likely tag for `word`.
    fn tag(&self, word: &str) -> Result<PosTag>;
}

/// Unigram tagger: most frequent tag per known word, suffix rules otherwise.
#[derive(Debug, Clone, Default)]
pub struct UnigramTagger {
    lexicon: HashMap<String, PosTag>,
}

impl UnigramTagger {
    /// Build a tagger from lexicon text (`word<TAB>TAG:count ...` per line,
    /// `#` comments and blank lines ignored).
    pub fn from_lexicon(text: &str) -> Result<Self> {
        let mut lexicon = HashMap::new();

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (word, counts) = line.split_once('\t').ok_or_else(|| {
                lexicon_error(idx + 1, format!("expected `word<TAB>TAG:count`, got `{line}`"))
            })?;

            let mut best: Option<(&str, u64)> = None;
            for entry in counts.split_whitespace() {
                let (tag, count) = entry
                    .split_once(':')
                    .ok_or_else(|| lexicon_error(idx + 1, format!("malformed entry `{entry}`")))?;
                let count: u64 = count
                    .parse()
                    .map_err(|_| lexicon_error(idx + 1, format!("invalid count in `{entry}`")))?;
                if best.map_or(true, |(_, c)| count > c) {
                    best = Some((tag, count));
                }
            }

            let (tag, _) =
                best.ok_or_else(|| lexicon_error(idx + 1, format!("no tags for `{word}`")))?;
            lexicon.insert(word.trim().to_lowercase(), PosTag::new(tag));
        }

        Ok(Self { lexicon })
    }

    /// Build a tagger from a lexicon file on disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            CodenamerError::io(format!("Failed to read POS lexicon: {}", path.display()), e)
        })?;
        Self::from_lexicon(&text)
    }

    /// Number of words with a known tag
    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    /// Whether the lexicon is empty
    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }

    fn tag_by_suffix(word: &str) -> &'static str {
        let len = word.len();
        let ends_with_any = |suffixes: &[&str]| suffixes.iter().any(|s| word.ends_with(*s));

        if word.chars().all(|c| c.is_ascii_digit()) {
            return "CD";
        }
        if len <= 2 {
            return "NN";
        }
        if len > 4 && word.ends_with("ing") {
            return "VBG";
        }
        if len > 3 && word.ends_with("ed") {
            return "VBD";
        }
        if len > 3 && word.ends_with("ly") {
            return "RB";
        }
        if ends_with_any(&["ize", "ise", "ify"]) {
            return "VB";
        }
        if ends_with_any(&[
            "tion", "sion", "ment", "ness", "ity", "ance", "ence", "ship", "hood", "ism", "ist",
            "er", "or", "age", "ure",
        ]) {
            return "NN";
        }
        if ends_with_any(&["able", "ible", "ful", "ous", "ive", "less", "ic", "al", "ish"]) {
            return "JJ";
        }
        if ends_with_any(&["ss", "us", "is"]) {
            return "NN";
        }
        if word.ends_with('s') {
            return "NNS";
        }
        "NN"
    }
}

impl PosTagger for UnigramTagger {
    fn tag(&self, word: &str) -> Result<PosTag> {
        if word.is_empty() {
            return Err(CodenamerError::validation("cannot tag an empty token"));
        }
        let word = word.to_lowercase();
        Ok(self
            .lexicon
            .get(&word)
            .cloned()
            .unwrap_or_else(|| PosTag::new(Self::tag_by_suffix(&word))))
    }
}

/// Delegates to the process-wide tagger built from the embedded lexicon.
#[derive(Debug, Clone, Copy, Default)]
pub struct SharedTagger;

impl PosTagger for SharedTagger {
    fn tag(&self, word: &str) -> Result<PosTag> {
        match &*SHARED_TAGGER {
            Ok(tagger) => tagger.tag(word),
            Err(reason) => Err(CodenamerError::internal(format!(
                "embedded POS lexicon unavailable: {reason}"
            ))),
        }
    }
}

/// Stand-in used when a configured lexicon could not be loaded.
#[derive(Debug, Clone)]
pub struct UnavailableTagger {
    reason: String,
}

impl UnavailableTagger {
    /// Record why the real tagger is missing
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl PosTagger for UnavailableTagger {
    fn tag(&self, _word: &str) -> Result<PosTag> {
        Err(CodenamerError::internal(format!(
            "POS tagger unavailable: {}",
            self.reason
        )))
    }
}

/// Load the configured lexicon, or the shared embedded one when none is set.
///
/// A lexicon that fails to load yields an [`UnavailableTagger`] so that every
/// semantic check degrades to `false` instead of aborting analysis.
pub fn load_tagger(lexicon_path: Option<&Path>) -> Arc<dyn PosTagger> {
    match lexicon_path {
        None => Arc::new(SharedTagger),
        Some(path) => match UnigramTagger::from_file(path) {
            Ok(tagger) => Arc::new(tagger),
            Err(e) => {
                warn!("POS lexicon {} could not be loaded: {e}", path.display());
                Arc::new(UnavailableTagger::new(e.to_string()))
            }
        },
    }
}

/// `true` if the first word of `name` is a verb.
pub fn starts_with_verb(name: &str) -> bool {
    starts_with_verb_with(name, &SharedTagger)
}

/// [`starts_with_verb`] with an explicit tagger.
pub fn starts_with_verb_with(name: &str, tagger: &dyn PosTagger) -> bool {
    let words = split_words(name);
    let Some(first) = words.first() else {
        return false;
    };

    let first = first.to_lowercase();
    if COMMON_VERBS.contains(first.as_str()) {
        return true;
    }

    match tagger.tag(&first) {
        Ok(tag) => tag.is_verb(),
        Err(e) => {
            warn!("Error during verb check for '{name}': {e}");
            false
        }
    }
}

/// `true` if the last word of `name` is a noun (head-noun heuristic).
pub fn is_noun_phrase(name: &str) -> bool {
    is_noun_phrase_with(name, &SharedTagger)
}

/// [`is_noun_phrase`] with an explicit tagger.
pub fn is_noun_phrase_with(name: &str, tagger: &dyn PosTagger) -> bool {
    let words = split_words(name);
    let Some(last) = words.last() else {
        return false;
    };

    match tagger.tag(&last.to_lowercase()) {
        Ok(tag) => tag.is_noun(),
        Err(e) => {
            warn!("Error during noun check for '{name}': {e}");
            false
        }
    }
}

fn lexicon_error(line: usize, message: String) -> CodenamerError {
    CodenamerError::Parse {
        language: "pos-lexicon".to_string(),
        message,
        line: Some(line),
    }
}
