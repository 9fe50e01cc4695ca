//! Heuristic excerpts from the training script.
//!
//! Each slot has an ordered list of rules; the first one yielding non-empty
//! text wins and a slot with no hit gets a placeholder. This is plain text
//! scraping over a script with conventional naming, nothing syntax-aware.

use std::sync::OnceLock;

use regex::Regex;

#[derive(Debug, Clone, PartialEq)]
pub enum Excerpt {
    Found { rule: &'static str, text: String },
    /// No rule matched the source.
    NotFound,
    /// The source itself could not be fetched.
    SourceUnavailable,
}

impl Excerpt {
    pub fn text(&self) -> Option<&str> {
        match self {
            Excerpt::Found { text, .. } => Some(text),
            _ => None,
        }
    }

    pub fn rule(&self) -> Option<&'static str> {
        match self {
            Excerpt::Found { rule, .. } => Some(rule),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SnippetSet {
    pub cleaning: Excerpt,
    pub regression: Excerpt,
    pub exports: Excerpt,
}

impl SnippetSet {
    pub fn unavailable() -> Self {
        Self {
            cleaning: Excerpt::SourceUnavailable,
            regression: Excerpt::SourceUnavailable,
            exports: Excerpt::SourceUnavailable,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    Cleaning,
    Regression,
    Exports,
}

#[derive(Debug)]
enum Strategy {
    /// The whole match.
    Span(Regex),
    /// From the header match to the next `until` match, or end of text.
    /// Divider lines directly under the header belong to the header.
    Section {
        header: Regex,
        until: Regex,
    },
    /// Fixed character window around the first keyword hit.
    Window {
        keyword: Regex,
        before: usize,
        after: usize,
    },
}

#[derive(Debug)]
struct Rule {
    id: &'static str,
    slot: Slot,
    strategy: Strategy,
}

const OUTPUT_FILES: &str = r"(?:transactions_with_scores\.(?:parquet|csv)|baseline_metrics\.json)";

fn rules() -> &'static [Rule] {
    static RULES: OnceLock<Vec<Rule>> = OnceLock::new();
    RULES.get_or_init(|| {
        let regex = |pattern: &str| Regex::new(pattern).expect("snippet regex must compile");
        let mut rules = Vec::new();

        // Regression: fit through the evaluation report, greedy across lines.
        rules.push(Rule {
            id: "regression.model-fit",
            slot: Slot::Regression,
            strategy: Strategy::Span(regex(
                r"(?ms)^[^\n]*?\bmodel\.fit\(.*classification_report[^\n]*",
            )),
        });
        rules.push(Rule {
            id: "regression.any-fit",
            slot: Slot::Regression,
            strategy: Strategy::Span(regex(
                r"(?ms)^[^\n]*?\.fit\(.*(?:classification_report|precision_score|f1_score)[^\n]*",
            )),
        });

        // Exports: serialization call through the last known output file.
        rules.push(Rule {
            id: "exports.joblib",
            slot: Slot::Exports,
            strategy: Strategy::Span(regex(&format!(
                r"(?ms)^[^\n]*?\bjoblib\.dump\(.*{OUTPUT_FILES}[^\n]*"
            ))),
        });
        rules.push(Rule {
            id: "exports.to-file",
            slot: Slot::Exports,
            strategy: Strategy::Span(regex(&format!(
                r"(?ms)^[^\n]*?\.to_(?:parquet|csv)\(.*{OUTPUT_FILES}[^\n]*"
            ))),
        });

        // Cleaning: dedicated function, then a commented section, then a keyword window.
        rules.push(Rule {
            id: "cleaning.function",
            slot: Slot::Cleaning,
            strategy: Strategy::Section {
                header: regex(r"(?m)^def[ \t]+clean_data\w*[ \t]*\([^\n]*$"),
                until: regex(r"(?m)^def[ \t]"),
            },
        });
        rules.push(Rule {
            id: "cleaning.section",
            slot: Slot::Cleaning,
            strategy: Strategy::Section {
                header: regex(r"(?m)^[ \t]*#[^\n]*\bCleaning\b[^\n]*$"),
                until: regex(r"(?m)^[ \t]*#[ \t]*-{3,}|^def[ \t]"),
            },
        });
        rules.push(Rule {
            id: "cleaning.keyword-window",
            slot: Slot::Cleaning,
            strategy: Strategy::Window {
                keyword: regex(r"drop_duplicates|dropna|fillna|duplicated\(|isna\("),
                before: 800,
                after: 1200,
            },
        });

        rules
    })
}

fn divider() -> &'static Regex {
    static DIVIDER: OnceLock<Regex> = OnceLock::new();
    DIVIDER.get_or_init(|| Regex::new(r"^[ \t]*#[ \t]*-{3,}[ \t\r]*$").expect("divider regex must compile"))
}

/// Pull the three excerpts out of `source`. Pure; never panics on odd input.
pub fn extract(source: &str) -> SnippetSet {
    SnippetSet {
        cleaning: extract_slot(source, Slot::Cleaning),
        regression: extract_slot(source, Slot::Regression),
        exports: extract_slot(source, Slot::Exports),
    }
}

fn extract_slot(source: &str, slot: Slot) -> Excerpt {
    rules()
        .iter()
        .filter(|rule| rule.slot == slot)
        .find_map(|rule| {
            let text = tidy(apply(&rule.strategy, source)?);
            (!text.is_empty()).then(|| Excerpt::Found {
                rule: rule.id,
                text: text.to_string(),
            })
        })
        .unwrap_or(Excerpt::NotFound)
}

fn apply<'a>(strategy: &Strategy, source: &'a str) -> Option<&'a str> {
    match strategy {
        Strategy::Span(pattern) => pattern.find(source).map(|hit| hit.as_str()),
        Strategy::Section { header, until } => {
            let hit = header.find(source)?;
            let body_start = skip_dividers(source, hit.end());
            let end = until
                .find_at(source, body_start)
                .map(|next| next.start())
                .unwrap_or(source.len());
            Some(&source[hit.start()..end])
        }
        Strategy::Window {
            keyword,
            before,
            after,
        } => {
            let at = keyword.find(source)?.start();
            Some(char_window(source, at, *before, *after))
        }
    }
}

/// Offset just past any divider lines that directly follow `from`.
fn skip_dividers(source: &str, from: usize) -> usize {
    let mut offset = from;
    loop {
        let rest = &source[offset..];
        let Some(line_start) = rest.strip_prefix('\n').map(|_| offset + 1) else {
            return offset;
        };
        let line_end = source[line_start..]
            .find('\n')
            .map(|i| line_start + i)
            .unwrap_or(source.len());
        if !divider().is_match(&source[line_start..line_end]) {
            return offset;
        }
        offset = line_end;
    }
}

fn char_window(text: &str, at: usize, before: usize, after: usize) -> &str {
    let start = text[..at]
        .char_indices()
        .rev()
        .take(before)
        .last()
        .map_or(at, |(index, _)| index);
    let end = text[at..]
        .char_indices()
        .nth(after)
        .map_or(text.len(), |(index, _)| at + index);
    &text[start..end]
}

fn tidy(text: &str) -> &str {
    text.trim_start_matches(['\r', '\n']).trim_end()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRAINING_SCRIPT: &str = include_str!("../../../../site/fraud.py");

    #[test]
    fn training_script_fills_every_slot() {
        let set = extract(TRAINING_SCRIPT);

        let regression = set.regression.text().unwrap();
        assert!(regression.starts_with("model.fit(X_train, y_train)"));
        assert!(regression.ends_with("print(classification_report(y_test, preds, digits=4))"));
        assert_eq!(set.regression.rule(), Some("regression.model-fit"));

        let exports = set.exports.text().unwrap();
        assert!(exports.starts_with("joblib.dump(model, MODEL_PATH)"));
        assert!(exports.contains("baseline_metrics.json"));

        // No clean_data function or Cleaning header: keyword window around `isna(`.
        assert_eq!(set.cleaning.rule(), Some("cleaning.keyword-window"));
        assert!(set.cleaning.text().unwrap().contains("df.isna().sum()"));
    }

    #[test]
    fn extraction_is_idempotent() {
        assert_eq!(extract(TRAINING_SCRIPT), extract(TRAINING_SCRIPT));
    }

    #[test]
    fn clean_data_function_beats_keyword_window() {
        let source = "\
import pandas as pd
df = df.dropna()

def clean_data(frame):
    frame = frame.drop_duplicates()
    return frame.fillna(0)

def train(frame):
    frame = frame.dropna()
";
        let set = extract(source);
        assert_eq!(set.cleaning.rule(), Some("cleaning.function"));
        assert_eq!(
            set.cleaning.text(),
            Some(
                "def clean_data(frame):\n    frame = frame.drop_duplicates()\n    return frame.fillna(0)"
            )
        );
    }

    #[test]
    fn clean_data_function_runs_to_end_of_file() {
        let source = "x = 1\ndef clean_data_v2(df):\n    return df.dropna()\n";
        assert_eq!(
            extract(source).cleaning.text(),
            Some("def clean_data_v2(df):\n    return df.dropna()")
        );
    }

    #[test]
    fn cleaning_section_skips_its_own_rule_lines() {
        let source = "\
# -----------------------------------------
# 8) Cleaning
# -----------------------------------------
df = df.drop_duplicates()
df = df.fillna(0)

# -----------------------------------------
# 9) Modelling
# -----------------------------------------
";
        let set = extract(source);
        assert_eq!(set.cleaning.rule(), Some("cleaning.section"));
        assert_eq!(
            set.cleaning.text(),
            Some(
                "# 8) Cleaning\n# -----------------------------------------\ndf = df.drop_duplicates()\ndf = df.fillna(0)"
            )
        );
    }

    #[test]
    fn cleaning_section_handles_crlf_line_endings() {
        let source = "# -----\r\n# 8) Cleaning\r\n# -----\r\ndf = df.drop_duplicates()\r\ndf = df.fillna(0)\r\n\r\n# -----\r\n# 9) Modelling\r\n";
        let set = extract(source);
        assert_eq!(set.cleaning.rule(), Some("cleaning.section"));
        let text = set.cleaning.text().unwrap();
        assert!(text.starts_with("# 8) Cleaning"));
        assert!(text.contains("df = df.drop_duplicates()"));
        assert!(text.ends_with("df = df.fillna(0)"));
    }

    #[test]
    fn keyword_window_is_bounded() {
        let source = format!("{}df.dropna(){}", "a".repeat(2_000), "b".repeat(2_000));
        let text = extract(&source).cleaning.text().unwrap().to_string();
        assert_eq!(text.len(), 800 + 1_200);
        assert!(text.starts_with('a'));
        // The window is anchored on the keyword itself, not the receiver.
        assert!(text[800..].starts_with("dropna()"));
    }

    #[test]
    fn keyword_window_respects_multibyte_text() {
        let source = format!("{}df.fillna(0) — done {}", "é".repeat(900), "ü".repeat(1_500));
        let text = extract(&source).cleaning.text().unwrap().to_string();
        assert_eq!(text.chars().count(), 2_000);
        assert!(text.starts_with('é'));
    }

    #[test]
    fn regression_falls_back_to_any_fit() {
        let source = "clf.fit(X, y)\nscore = precision_score(y, clf.predict(X))\n";
        let set = extract(source);
        assert_eq!(set.regression.rule(), Some("regression.any-fit"));
        assert_eq!(set.regression.text(), Some(source.trim_end()));
    }

    #[test]
    fn exports_fall_back_to_frame_writers() {
        let source = "scored.to_csv(out)\nprint('transactions_with_scores.csv written')\n";
        assert_eq!(extract(source).exports.rule(), Some("exports.to-file"));
    }

    #[test]
    fn unrelated_text_yields_placeholders() {
        let set = extract("print('hello world')\n");
        assert_eq!(set.cleaning, Excerpt::NotFound);
        assert_eq!(set.regression, Excerpt::NotFound);
        assert_eq!(set.exports, Excerpt::NotFound);
    }

    #[test]
    fn empty_source_yields_placeholders() {
        let set = extract("");
        assert_eq!(set.cleaning, Excerpt::NotFound);
        assert_eq!(set.regression, Excerpt::NotFound);
        assert_eq!(set.exports, Excerpt::NotFound);
    }
}
