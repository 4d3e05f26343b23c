//! Kerning rule compilation.
//!
//! Rules map a set of left characters and a set of right characters to a
//! horizontal adjustment in pixels. [`layout`](crate::layout::layout) does not
//! consult the compiled table.
use std::collections::HashMap;

use crate::error::{GenError, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KerningRule {
    /// Every character here kerns against every character in `right`.
    pub left: String,
    pub right: String,
    pub adjust: i32,
}

impl KerningRule {
    pub fn new(left: impl Into<String>, right: impl Into<String>, adjust: i32) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            adjust,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct KerningTable {
    pairs: HashMap<(u8, u8), i32>,
}

impl KerningTable {
    /// Expand `rules` into per-pair adjustments.
    ///
    /// Characters are upper-cased the same way layout input is; non-ASCII
    /// characters are dropped. A later rule overrides an earlier one for the
    /// same pair.
    pub fn compile(rules: &[KerningRule]) -> Self {
        let mut pairs = HashMap::new();
        for rule in rules {
            let left = rule.left.to_uppercase();
            let right = rule.right.to_uppercase();
            for l in left.chars().filter(char::is_ascii) {
                for r in right.chars().filter(char::is_ascii) {
                    pairs.insert((l as u8, r as u8), rule.adjust);
                }
            }
        }
        Self { pairs }
    }

    /// Read rules from text, one `LEFT RIGHT ADJUST` per line.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn parse(text: &str) -> Result<Self> {
        let mut rules = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = line.split_whitespace().collect();
            let [left, right, adjust] = fields[..] else {
                return Err(GenError::KerningParse {
                    line: idx + 1,
                    message: format!("expected 3 fields, found {}", fields.len()),
                });
            };
            let adjust = adjust.parse().map_err(|e| GenError::KerningParse {
                line: idx + 1,
                message: format!("bad adjustment {adjust:?}: {e}"),
            })?;
            rules.push(KerningRule::new(left, right, adjust));
        }
        Ok(Self::compile(&rules))
    }

    /// Adjustment for drawing `right` directly after `left`; 0 when no rule applies.
    pub fn adjustment(&self, left: char, right: char) -> i32 {
        if !left.is_ascii() || !right.is_ascii() {
            return 0;
        }
        let key = (
            left.to_ascii_uppercase() as u8,
            right.to_ascii_uppercase() as u8,
        );
        self.pairs.get(&key).copied().unwrap_or(0)
    }

    /// Number of distinct pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
