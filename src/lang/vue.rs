//! Lexical identifier mining for Vue single-file components.
//!
//! There is no grammar here: the `<script>` block is scanned line by line with
//! a handful of declaration patterns and per-block brace counters. Results are
//! best-effort and passes are independent, so one declaration may be reported
//! more than once.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::errors::{CodenamerError, Result};
use crate::detectors::names::config::{IdentifierFact, StructuralError, VueRole};
use crate::detectors::names::role::{classify_role, OPTIONS_LIFECYCLE_HOOKS};

fn pattern(src: &str) -> Regex {
    Regex::new(src).expect("static pattern")
}

static SCRIPT_BLOCK: Lazy<Regex> = Lazy::new(|| pattern(r"(?is)<script[^>]*>(.*?)</script>"));

static ASYNC_KEYWORD: Lazy<Regex> = Lazy::new(|| pattern(r"\basync\b"));

static METHODS_OPENER: Lazy<Regex> = Lazy::new(|| pattern(r"^methods\s*:\s*\{"));
static COMPUTED_OPENER: Lazy<Regex> = Lazy::new(|| pattern(r"^computed\s*:\s*\{"));
static WATCH_OPENER: Lazy<Regex> = Lazy::new(|| pattern(r"^watch\s*:\s*\{"));

/// Member definitions inside a tracked block; first match wins.
static BLOCK_MEMBER_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"^(\w+)\s*\(([^)]*)\)\s*\{",
        r"^(\w+)\s*:\s*(?:async\s+)?function\s*\(([^)]*)\)\s*\{",
        r"^(\w+)\s*:\s*(?:async\s+)?\(([^)]*)\)\s*=>\s*\{",
        r"^(?:async\s+)?(\w+)\s*\(([^)]*)\)\s*\{",
    ]
    .into_iter()
    .map(pattern)
    .collect()
});

static LIFECYCLE_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    OPTIONS_LIFECYCLE_HOOKS
        .iter()
        .map(|hook| (*hook, pattern(&format!(r"\b{hook}\s*\([^)]*\)\s*\{{"))))
        .collect()
});

/// `const name = (...) => {`, `const name = function (...) {`, `function name(...) {`
static FUNCTION_BINDINGS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\b(?:const|let|var)\s+(\w+)\s*=\s*(?:async\s+)?\(([^)]*)\)\s*=>\s*\{",
        r"\b(?:const|let|var)\s+(\w+)\s*=\s*(?:async\s+)?function\s*\(([^)]*)\)\s*\{",
        r"\bfunction\s+(\w+)\s*\(([^)]*)\)\s*\{",
    ]
    .into_iter()
    .map(pattern)
    .collect()
});

static REACTIVE_BINDING: Lazy<Regex> = Lazy::new(|| {
    pattern(r"\b(?:const|let|var)\s+(\w+)\s*=\s*(ref|reactive|computed)\s*\(")
});

static LOCAL_BINDING: Lazy<Regex> = Lazy::new(|| pattern(r"\b(?:const|let|var)\s+(\w+)\s*=\s*"));

static NON_LOCAL_INITIALIZER: Lazy<Regex> = Lazy::new(|| {
    pattern(r"^(?:ref\s*\(|reactive\s*\(|computed\s*\(|function|async|\()")
});

static OBJECT_MEMBER_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(\w+)\s*:\s*(?:async\s+)?\(([^)]*)\)\s*=>\s*\{",
        r"(\w+)\s*:\s*(?:async\s+)?function\s*\(([^)]*)\)\s*\{",
        r"(\w+)\s*\(([^)]*)\)\s*\{",
    ]
    .into_iter()
    .map(pattern)
    .collect()
});

static PARAMETER_NAME: Lazy<Regex> = Lazy::new(|| pattern(r"^(\w+)"));

/// Keywords that look like calls followed by a block.
const CONTROL_KEYWORDS: [&str; 17] = [
    "if", "else", "for", "while", "do", "switch", "case", "catch", "try", "finally", "function",
    "return", "with", "new", "typeof", "await", "async",
];

/// Component options that are not user-named members.
const COMPONENT_OPTIONS: [&str; 5] = ["data", "props", "emits", "components", "directives"];

const NON_VARIABLE_NAMES: [&str; 4] = ["import", "export", "from", "as"];

/// Miner limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinerConfig {
    /// Largest `<script>` block scanned; larger blocks fail the whole file
    pub max_script_bytes: usize,
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            max_script_bytes: 1024 * 1024,
        }
    }
}

/// Mining output: facts plus structural errors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinedScript {
    /// Identifier facts in emission order
    #[serde(default)]
    pub names: Vec<IdentifierFact>,
    /// Structural problems; a failed scan leaves exactly one here
    #[serde(default)]
    pub errors: Vec<StructuralError>,
}

impl MinedScript {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            names: Vec::new(),
            errors: vec![StructuralError::new(1, message)],
        }
    }
}

/// The first `<script>` block of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptBlock<'a> {
    /// Text between the opening and closing tags
    pub text: &'a str,
    /// Newlines preceding the block text in the file
    pub line_offset: usize,
}

/// Locate the first `<script ...>` block; `None` when absent or empty.
pub fn extract_script(content: &str) -> Option<ScriptBlock<'_>> {
    let body = SCRIPT_BLOCK.captures(content)?.get(1)?;
    if body.as_str().is_empty() {
        return None;
    }
    Some(ScriptBlock {
        text: body.as_str(),
        line_offset: content[..body.start()].matches('\n').count(),
    })
}

/// Option blocks whose members are tracked by brace depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// `methods: { ... }`
    Methods,
    /// `computed: { ... }`
    Computed,
    /// `watch: { ... }`
    Watch,
}

impl BlockKind {
    /// Blocks in scan order
    pub const ALL: [BlockKind; 3] = [BlockKind::Methods, BlockKind::Computed, BlockKind::Watch];

    fn opener(self) -> &'static Regex {
        match self {
            BlockKind::Methods => &METHODS_OPENER,
            BlockKind::Computed => &COMPUTED_OPENER,
            BlockKind::Watch => &WATCH_OPENER,
        }
    }

    /// Role given to members of this block
    pub fn role(self) -> VueRole {
        match self {
            BlockKind::Methods => VueRole::Method,
            BlockKind::Computed => VueRole::Computed,
            BlockKind::Watch => VueRole::Watch,
        }
    }
}

/// Tracker state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockState {
    /// Not inside the tracked block
    Outside,
    /// Inside the block at the given brace depth (always >= 1)
    InBlock {
        /// Tracked block
        kind: BlockKind,
        /// Open braces since the opener line
        depth: i64,
    },
}

/// Result of feeding one line to a [`BlockTracker`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStep {
    /// The line opened the block; its own braces are not counted
    Opened,
    /// The line lies inside the block
    Inside,
    /// The line brought depth to zero or below and left the block
    Closed,
    /// The line lies outside the block
    Outside,
}

/// Brace-depth state machine for one block kind
#[derive(Debug, Clone)]
pub struct BlockTracker {
    kind: BlockKind,
    state: BlockState,
}

impl BlockTracker {
    /// Start outside any block
    pub fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            state: BlockState::Outside,
        }
    }

    /// Current state
    pub fn state(&self) -> BlockState {
        self.state
    }

    /// Advance over one trimmed line.
    ///
    /// An opener line always (re)starts tracking at depth 1. Any other line
    /// inside the block adds `count('{') - count('}')`; reaching depth <= 0
    /// closes the block on that line.
    pub fn step(&mut self, line: &str) -> BlockStep {
        if self.kind.opener().is_match(line) {
            self.state = BlockState::InBlock {
                kind: self.kind,
                depth: 1,
            };
            return BlockStep::Opened;
        }

        match self.state {
            BlockState::Outside => BlockStep::Outside,
            BlockState::InBlock { kind, depth } => {
                let depth = depth + brace_delta(line);
                if depth <= 0 {
                    self.state = BlockState::Outside;
                    BlockStep::Closed
                } else {
                    self.state = BlockState::InBlock { kind, depth };
                    BlockStep::Inside
                }
            }
        }
    }
}

fn brace_delta(line: &str) -> i64 {
    line.chars().fold(0, |acc, c| match c {
        '{' => acc + 1,
        '}' => acc - 1,
        _ => acc,
    })
}

/// Regex-driven identifier miner
#[derive(Debug, Clone, Default)]
pub struct VueMiner {
    config: MinerConfig,
}

impl VueMiner {
    /// Create a miner with explicit limits
    pub fn new(config: MinerConfig) -> Self {
        Self { config }
    }

    /// Mine a whole component file.
    ///
    /// Never fails: a missing script block or a failed scan is reported as a
    /// single structural error with no facts.
    pub fn mine(&self, content: &str) -> MinedScript {
        let Some(script) = extract_script(content) else {
            return MinedScript::failure("No <script> section found");
        };

        match self.scan(&script) {
            Ok(names) => {
                debug!("Mined {} identifier facts from script block", names.len());
                MinedScript {
                    names,
                    errors: Vec::new(),
                }
            }
            Err(e) => {
                debug!("Script scan failed: {e}");
                MinedScript::failure(format!("Parse error: {e}"))
            }
        }
    }

    fn scan(&self, script: &ScriptBlock<'_>) -> Result<Vec<IdentifierFact>> {
        if script.text.len() > self.config.max_script_bytes {
            return Err(CodenamerError::resource_exhaustion(
                format!(
                    "script block is {} bytes, limit is {}",
                    script.text.len(),
                    self.config.max_script_bytes
                ),
                "script_bytes",
                self.config.max_script_bytes.to_string(),
            ));
        }

        let lines: Vec<(usize, &str, &str)> = script
            .text
            .split('\n')
            .enumerate()
            .map(|(idx, raw)| (idx + 1 + script.line_offset, raw, raw.trim()))
            .collect();

        let mut facts = Vec::new();
        for kind in BlockKind::ALL {
            scan_block(kind, &lines, &mut facts);
        }
        scan_lifecycle(&lines, &mut facts);
        scan_composition(&lines, &mut facts);
        scan_object_members(&lines, &mut facts);
        Ok(facts)
    }
}

/// Mine with default limits.
pub fn mine(content: &str) -> MinedScript {
    VueMiner::default().mine(content)
}

fn function_fact(name: &str, line: usize, role: VueRole, text: &str) -> IdentifierFact {
    IdentifierFact::new(role.fact_kind(), name, line)
        .with_subtype(role.as_str())
        .with_async(ASYNC_KEYWORD.is_match(text))
}

fn is_control_keyword(name: &str) -> bool {
    CONTROL_KEYWORDS.contains(&name)
}

fn scan_block(kind: BlockKind, lines: &[(usize, &str, &str)], facts: &mut Vec<IdentifierFact>) {
    let mut tracker = BlockTracker::new(kind);

    for &(line_no, _, trimmed) in lines {
        if tracker.step(trimmed) != BlockStep::Inside {
            continue;
        }

        let Some(caps) = BLOCK_MEMBER_PATTERNS
            .iter()
            .find_map(|re| re.captures(trimmed))
        else {
            continue;
        };

        let name = &caps[1];
        if is_control_keyword(name) {
            continue;
        }
        facts.push(function_fact(name, line_no, kind.role(), trimmed));
        facts.extend(parse_parameters(&caps[2], line_no));
    }
}

fn scan_lifecycle(lines: &[(usize, &str, &str)], facts: &mut Vec<IdentifierFact>) {
    for &(line_no, _, trimmed) in lines {
        for (hook, re) in LIFECYCLE_PATTERNS.iter() {
            if re.is_match(trimmed) {
                facts.push(function_fact(hook, line_no, VueRole::Lifecycle, trimmed));
            }
        }
    }
}

fn scan_composition(lines: &[(usize, &str, &str)], facts: &mut Vec<IdentifierFact>) {
    for &(line_no, raw, trimmed) in lines {
        let mut parameter_lists = Vec::new();

        for re in FUNCTION_BINDINGS.iter() {
            if let Some(caps) = re.captures(trimmed) {
                let name = &caps[1];
                facts.push(function_fact(name, line_no, classify_role(name), trimmed));
                parameter_lists.push(caps.get(2).map_or("", |m| m.as_str()));
            }
        }

        if let Some(caps) = REACTIVE_BINDING.captures(trimmed) {
            let role = if &caps[2] == "computed" {
                VueRole::Computed
            } else {
                VueRole::Variable
            };
            facts.push(
                IdentifierFact::new(role.fact_kind(), &caps[1], line_no).with_subtype(role.as_str()),
            );
        }

        let indented = raw.starts_with("  ") || raw.starts_with('\t');
        if indented && !trimmed.is_empty() {
            if let Some(caps) = LOCAL_BINDING.captures(trimmed) {
                let name = &caps[1];
                let initializer = caps.get(0).map_or("", |m| &trimmed[m.end()..]);
                if !NON_LOCAL_INITIALIZER.is_match(initializer) && !NON_VARIABLE_NAMES.contains(&name)
                {
                    facts.push(
                        IdentifierFact::new(VueRole::Variable.fact_kind(), name, line_no)
                            .with_subtype(VueRole::Variable.as_str()),
                    );
                }
            }
        }

        for params in parameter_lists {
            facts.extend(parse_parameters(params, line_no));
        }
    }
}

fn scan_object_members(lines: &[(usize, &str, &str)], facts: &mut Vec<IdentifierFact>) {
    for &(line_no, _, trimmed) in lines {
        for re in OBJECT_MEMBER_PATTERNS.iter() {
            let Some(caps) = re.captures(trimmed) else {
                continue;
            };
            let name = &caps[1];
            if COMPONENT_OPTIONS.contains(&name) || is_control_keyword(name) {
                continue;
            }
            facts.push(function_fact(name, line_no, classify_role(name), trimmed));
            facts.extend(parse_parameters(&caps[2], line_no));
        }
    }
}

/// Split a parameter list on top-level commas and keep each leading name.
///
/// Commas nested in `()`, `{}`, `[]` or `<>` do not split; the `>` of an
/// arrow (`=>`) is not a closing bracket, and an unmatched closer (a bare
/// comparison in a default value) never drives the depth below zero. Type annotations and defaults are
/// dropped, rest parameters lose their `...`, and destructured parameters
/// produce nothing.
pub fn parse_parameters(params: &str, line: usize) -> Vec<IdentifierFact> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut depth = 0i32;
    let mut prev = '\0';

    for c in params.chars() {
        match c {
            ',' if depth == 0 => {
                pieces.push(std::mem::take(&mut current));
                prev = c;
                continue;
            }
            '(' | '{' | '[' | '<' => depth += 1,
            '>' if prev == '=' => {}
            ')' | '}' | ']' | '>' => depth = (depth - 1).max(0),
            _ => {}
        }
        current.push(c);
        prev = c;
    }
    pieces.push(current);

    pieces
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .filter_map(|p| {
            let p = p.strip_prefix("...").unwrap_or(p);
            PARAMETER_NAME.captures(p).map(|caps| {
                IdentifierFact::new(VueRole::Parameter.fact_kind(), &caps[1], line)
                    .with_subtype(VueRole::Parameter.as_str())
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "vue_tests.rs"]
mod tests;
