//! Last-match-wins occupation classifier

use std::fmt;

use smallvec::SmallVec;

use super::codes::DetailedCode;
use super::normalize::NormalizedText;
use super::rules::{RuleTable, RuleTier};

/// Classifies normalized occupation text against an ordered rule table
///
/// Every rule whose pattern occurs in the text matches, and the match with
/// the highest position determines the result. Text matched by no rule is
/// unclassified (`None`).
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'t> {
    table: &'t RuleTable,
}

impl Classifier<'static> {
    /// Classifier over the built-in rule table
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: RuleTable::builtin(),
        }
    }
}

impl Default for Classifier<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> Classifier<'t> {
    /// Classifier over a custom rule table
    #[must_use]
    pub const fn with_table(table: &'t RuleTable) -> Self {
        Self { table }
    }

    #[must_use]
    pub const fn table(&self) -> &'t RuleTable {
        self.table
    }

    /// Classify one normalized text
    ///
    /// Scanning backwards and stopping at the first hit yields the same
    /// result as a full forward scan keeping the last hit.
    #[must_use]
    pub fn classify(&self, text: &NormalizedText) -> Option<DetailedCode> {
        let text = text.as_str();
        self.table
            .rules()
            .iter()
            .rev()
            .find(|rule| rule.matches(text))
            .map(|rule| rule.target_code)
    }

    /// Classify and report every rule that matched, in table order
    #[must_use]
    pub fn explain(&self, text: &NormalizedText) -> ClassificationTrace {
        let mut matches: SmallVec<[RuleMatch; 4]> = SmallVec::new();
        for rule in self.table.rules() {
            if rule.matches(text.as_str()) {
                let block = self.table.block_of(rule);
                matches.push(RuleMatch {
                    position: rule.position,
                    pattern: rule.pattern,
                    block: block.name,
                    tier: block.tier,
                    code: rule.target_code,
                });
            }
        }
        let result = matches.last().map(|m| m.code);
        ClassificationTrace {
            text: text.clone(),
            matches,
            result,
        }
    }
}

/// One rule that fired during classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch {
    pub position: usize,
    pub pattern: &'static str,
    pub block: &'static str,
    pub tier: RuleTier,
    pub code: DetailedCode,
}

/// Full record of a classification, used by the review export
#[derive(Debug, Clone)]
pub struct ClassificationTrace {
    pub text: NormalizedText,
    pub matches: SmallVec<[RuleMatch; 4]>,
    pub result: Option<DetailedCode>,
}

impl ClassificationTrace {
    /// The rule that decided the result
    #[must_use]
    pub fn winner(&self) -> Option<&RuleMatch> {
        self.matches.last()
    }

    /// Matches whose code lost against a later rule
    pub fn overridden(&self) -> impl Iterator<Item = &RuleMatch> {
        let result = self.result;
        self.matches.iter().filter(move |m| Some(m.code) != result)
    }

    /// Whether more than one distinct code matched
    #[must_use]
    pub fn is_layered(&self) -> bool {
        self.overridden().next().is_some()
    }

    /// Compact `block:pattern -> code` listing of all matches
    #[must_use]
    pub fn matched_rules(&self) -> String {
        self.matches
            .iter()
            .map(|m| format!("{}:{}->{}", m.block, m.pattern, m.code))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

impl fmt::Display for ClassificationTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.result {
            Some(code) => write!(f, "'{}' => {code} ({})", self.text, self.matched_rules()),
            None => write!(f, "'{}' => unclassified", self.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::occupation::normalize::normalize;
    use crate::algorithm::occupation::rules::RuleBlock;

    fn text(raw: &str) -> NormalizedText {
        normalize(Some(raw)).unwrap()
    }

    #[test]
    fn later_rule_overrides_earlier() {
        let classifier = Classifier::new();
        assert_eq!(
            classifier.classify(&text("Schulleiter")),
            Some(DetailedCode::isced(111))
        );
        let trace = classifier.explain(&text("Schulleiter"));
        assert_eq!(trace.matches[0].code, DetailedCode::isced(410));
        assert!(trace.is_layered());
    }

    #[test]
    fn unmatched_text_is_unclassified() {
        let classifier = Classifier::new();
        assert_eq!(classifier.classify(&text("xyz")), None);
        let trace = classifier.explain(&text("xyz"));
        assert!(trace.matches.is_empty());
        assert!(trace.winner().is_none());
        assert_eq!(trace.to_string(), "'xyz' => unclassified");
    }

    #[test]
    fn classify_agrees_with_full_scan() {
        let classifier = Classifier::new();
        for raw in [
            "Tierarzt",
            "Krankenschwester",
            "Metallbauer",
            "kindergärtnerin",
            "Hausfrau",
            "Bauleiter",
            "Fahrlehrer",
        ] {
            let t = text(raw);
            assert_eq!(classifier.classify(&t), classifier.explain(&t).result, "{raw}");
        }
    }

    #[test]
    fn custom_tables_follow_declaration_order() {
        let blocks = [
            RuleBlock {
                name: "first",
                tier: RuleTier::Domain,
                code: DetailedCode::isced(811),
                patterns: &["bau"],
            },
            RuleBlock {
                name: "second",
                tier: RuleTier::Domain,
                code: DetailedCode::isced(732),
                patterns: &["bau"],
            },
        ];
        let table = RuleTable::from_blocks(&blocks);
        let classifier = Classifier::with_table(&table);
        assert_eq!(
            classifier.classify(&text("bauarbeiter")),
            Some(DetailedCode::isced(732))
        );
    }

    #[test]
    fn trace_lists_rules_in_table_order() {
        let trace = Classifier::new().explain(&text("Pharmaassistentin"));
        let positions: Vec<usize> = trace.matches.iter().map(|m| m.position).collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
        assert_eq!(trace.winner().map(|m| m.block), Some("pharmacy"));
    }
}
