//! Line-level heuristics used by the extractor.
//!
//! Each rule is a small pure function so its edge cases can be pinned down
//! on their own:
//!
//! | Rule            | Matches                                         |
//! |-----------------|-------------------------------------------------|
//! | block boundary  | a line starting with `digits.`                  |
//! | numbering strip | leading `digits.` plus whitespace on line 1     |
//! | noise filter    | preamble phrases such as `Here are 5 questions` |
//! | option          | `A)`, `b.`, `C:` followed by the option text    |
//! | answer          | first line starting with `Answer`, first A-D word |

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::error::{QuizError, Result};
use crate::types::{OptionLabel, QuizOption};

static BLOCK_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n[0-9]+\.").unwrap());

static NUMBERING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+\.\s*").unwrap());

static OPTION_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Da-d])[).:]\s*(.*)$").unwrap());

static ANSWER_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?-u:\b)([A-Da-d])(?-u:\b)").unwrap());

/// Preamble patterns discarded by the default noise filter. Matched case-insensitively
/// against the question text anywhere, except the filler which must be the
/// whole question apart from trailing punctuation.
pub const DEFAULT_NOISE_PATTERNS: &[&str] = &[
    r"here (?:are|is)",
    r"multiple[- ]?choice",
    r"^ok(?:ay)?\b[\s[:punct:]]*$",
];

static DEFAULT_NOISE_RULES: Lazy<Vec<Regex>> = Lazy::new(|| {
    DEFAULT_NOISE_PATTERNS
        .iter()
        .map(|p| compile_noise_pattern(p).unwrap())
        .collect()
});

const ANSWER_PREFIX: &str = "answer";

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Trim whitespace and byte order marks from both ends.
pub fn trim_line(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}

fn compile_noise_pattern(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| QuizError::InvalidNoisePattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// Split raw text into trimmed, non-empty question blocks.
///
/// A block starts at every line beginning with `digits.`; the numbered line
/// stays with the block it opens. Unnumbered text merges into the block
/// above it.
pub fn segment_blocks(text: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut start = 0;

    for boundary in BLOCK_BOUNDARY.find_iter(text) {
        blocks.push(&text[start..boundary.start()]);
        // Skip the newline; the numbered line opens the next block
        start = boundary.start() + 1;
    }
    blocks.push(&text[start..]);

    blocks
        .into_iter()
        .map(trim_line)
        .filter(|b| !b.is_empty())
        .collect()
}

/// Trimmed, non-empty lines of a block.
pub fn block_lines(block: &str) -> Vec<&str> {
    block
        .split('\n')
        .map(trim_line)
        .filter(|l| !l.is_empty())
        .collect()
}

/// Remove a leading `digits.` marker and surrounding whitespace.
pub fn strip_numbering(line: &str) -> &str {
    match NUMBERING.find(line) {
        Some(m) => trim_line(&line[m.end()..]),
        None => trim_line(line),
    }
}

/// Parse an option line like `a) Paris`, `B. Rome` or `C: Oslo`.
pub fn parse_option(line: &str) -> Option<QuizOption> {
    let caps = OPTION_LINE.captures(line)?;
    let label = caps[1].chars().next().and_then(OptionLabel::from_char)?;
    Some(QuizOption::new(label, trim_line(&caps[2])))
}

/// Collect every option line in the block, in line order.
pub fn collect_options(lines: &[&str]) -> Vec<QuizOption> {
    lines.iter().filter_map(|l| parse_option(l)).collect()
}

/// Whether the line starts with `Answer`, ignoring case.
pub fn is_answer_line(line: &str) -> bool {
    line.get(..ANSWER_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(ANSWER_PREFIX))
}

/// First standalone A-D letter on the line, uppercased. Word boundaries are
/// ASCII only, so a letter next to `é` still counts as standalone.
pub fn answer_label(line: &str) -> Option<OptionLabel> {
    ANSWER_LETTER
        .captures(line)
        .and_then(|caps| caps[1].chars().next())
        .and_then(OptionLabel::from_char)
}

/// Answer declared by the first answer line of the block. Later answer
/// lines are ignored even when the first one carries no letter.
pub fn find_answer(lines: &[&str]) -> Option<OptionLabel> {
    lines
        .iter()
        .find(|l| is_answer_line(l))
        .and_then(|l| answer_label(l))
}

/// Case-insensitive rule set for conversational preamble that should not
/// become a question.
#[derive(Debug, Clone)]
pub struct NoiseFilter {
    rules: Vec<Regex>,
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self {
            rules: DEFAULT_NOISE_RULES.to_vec(),
        }
    }
}

impl NoiseFilter {
    /// A filter that discards nothing.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a regex pattern, matched case-insensitively against question text.
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        self.rules.push(compile_noise_pattern(pattern)?);
        Ok(self)
    }

    /// Add several patterns, failing on the first invalid one.
    pub fn with_patterns<'a, I>(self, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        patterns.into_iter().try_fold(self, Self::with_pattern)
    }

    /// Source patterns in the order they were added.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(Regex::as_str)
    }

    pub fn is_noise(&self, question: &str) -> bool {
        self.rules.iter().any(|r| r.is_match(question))
    }
}
