//! Analysis output and export utilities.
//!
//! This module turns an [`Analysis`] into a serializable report, renders the
//! holding-strategy table and the recommendation as text, and writes JSON.

use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fmt::Write as _;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::cards::Card;
use crate::eval::HandCategory;
use crate::search::{Analysis, ExpectedValue, SearchConfig};

/// One row of the holding-strategy table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoldEntry {
    /// Held cards, in hand order.
    pub cards: Vec<Card>,
    /// Number of cards held.
    pub held: usize,
    /// Expected score, rounded to the report precision.
    pub expected_score: f64,
    /// Sum of scores over all draws.
    pub total: u64,
    /// Number of draws enumerated.
    pub draws: u64,
}

impl HoldEntry {
    fn new(ev: &ExpectedValue, precision: u32) -> Self {
        Self {
            cards: ev.held.clone(),
            held: ev.held.len(),
            expected_score: ev.rounded(precision),
            total: ev.total,
            draws: ev.draws,
        }
    }

    /// Held cards with suit symbols, or "None".
    pub fn label(&self) -> String {
        if self.cards.is_empty() {
            return "None".to_string();
        }
        let symbols: Vec<String> = self.cards.iter().map(Card::symbol).collect();
        symbols.join(" ")
    }
}

/// How often a category comes up for the recommended hold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeEntry {
    /// The category.
    pub category: HandCategory,
    /// Number of draws that end in this category.
    pub count: u64,
    /// Fraction of all draws.
    pub probability: f64,
}

/// Report metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportMetadata {
    /// Decimal digits in rounded scores.
    pub precision: u32,
    /// Whether the search ran in parallel.
    pub parallel: bool,
    /// Seconds since the Unix epoch when the report was built.
    pub timestamp: String,
}

/// Complete analysis report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Report metadata
    pub metadata: ReportMetadata,
    /// The hand as dealt.
    pub hand: Vec<Card>,
    /// Category of the hand as dealt.
    pub initial_category: HandCategory,
    /// Score of the hand as dealt.
    pub initial_score: u32,
    /// Every hold, grouped by number of cards held (ascending) and ordered
    /// by expected score within a group.
    pub holds: Vec<HoldEntry>,
    /// The recommended hold.
    pub best: HoldEntry,
    /// Expected score of keeping all five cards.
    pub baseline: Option<f64>,
    /// Best expected score minus the baseline, rounded.
    pub improvement: f64,
    /// Whether keeping every card is the recommendation, judged at the
    /// report precision.
    pub keep_all: bool,
    /// Outcome distribution of the recommended hold, if computed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcomes: Option<Vec<OutcomeEntry>>,
}

impl AnalysisReport {
    /// Build a report from an analysis.
    pub fn from_analysis(analysis: &Analysis, config: &SearchConfig) -> Self {
        let precision = config.precision;

        let improvement = config.round(analysis.best.improvement);
        let mut ordered: Vec<&ExpectedValue> = analysis.per_subset.iter().collect();
        // Stable: equal means keep enumeration order.
        ordered.sort_by(|a, b| a.held.len().cmp(&b.held.len()).then(b.cmp_mean(a)));

        Self {
            metadata: ReportMetadata {
                precision,
                parallel: config.parallel,
                timestamp: timestamp(),
            },
            hand: analysis.hand.cards().to_vec(),
            initial_category: analysis.initial.category,
            initial_score: analysis.initial.score,
            holds: ordered.into_iter().map(|ev| HoldEntry::new(ev, precision)).collect(),
            best: HoldEntry::new(&analysis.best.best, precision),
            baseline: analysis.best.baseline,
            improvement,
            keep_all: analysis.best.keep_all() || improvement <= 0.0,
            outcomes: None,
        }
    }

    /// Attach the outcome distribution of the recommended hold.
    pub fn with_outcomes(mut self, counts: &FxHashMap<HandCategory, u64>) -> Self {
        let draws: u64 = counts.values().sum();
        let outcomes = HandCategory::ALL
            .iter()
            .filter_map(|category| {
                let count = *counts.get(category)?;
                Some(OutcomeEntry {
                    category: *category,
                    count,
                    probability: count as f64 / draws.max(1) as f64,
                })
            })
            .collect();
        self.outcomes = Some(outcomes);
        self
    }

    /// Render the holding-strategy table.
    pub fn render_table(&self) -> String {
        let prec = self.metadata.precision as usize;
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:<30} {:<15} {:<15}",
            "Cards Held", "Expected Score", "Possibilities"
        );
        let _ = writeln!(out, "{}", "-".repeat(65));
        for entry in &self.holds {
            let _ = writeln!(
                out,
                "{:<30} {:<15.prec$} {:<15}",
                entry.label(),
                entry.expected_score,
                group_thousands(entry.draws),
            );
        }
        out
    }

    /// Render the full summary: hand, table and recommendation.
    pub fn render_summary(&self) -> String {
        let prec = self.metadata.precision as usize;
        let hand: Vec<String> = self.hand.iter().map(Card::symbol).collect();
        let mut out = String::new();

        let _ = writeln!(out, "Initial Hand: {}", hand.join(" "));
        let _ = writeln!(
            out,
            "Initial Hand Type: {} Score: {}",
            self.initial_category, self.initial_score
        );
        let _ = writeln!(out, "\nHolding Strategy Analysis:");
        out.push_str(&self.render_table());

        let _ = writeln!(out, "\nOptimal Strategy:");
        let _ = writeln!(out, "Cards to Hold: {}", self.best.label());
        let _ = writeln!(out, "Expected Score: {:.prec$}", self.best.expected_score);
        if self.keep_all {
            let _ = writeln!(out, "Recommend Keeping All Cards");
        } else {
            let _ = writeln!(
                out,
                "Score Improvement Over Keeping All: {:.prec$}",
                self.improvement
            );
        }

        if let Some(outcomes) = &self.outcomes {
            let _ = writeln!(out, "\nOutcomes For Recommended Hold:");
            for entry in outcomes {
                let _ = writeln!(
                    out,
                    "{:<20} {:>12} {:>9.4}%",
                    entry.category.name(),
                    group_thousands(entry.count),
                    entry.probability * 100.0
                );
            }
        }
        out
    }

    /// Print the summary to stdout.
    pub fn print_summary(&self) {
        print!("{}", self.render_summary());
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Save to JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let json = self.to_json()?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())
    }
}

/// Format an integer with comma thousands separators.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Simple timestamp without external dependencies.
fn timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();

    format!("{}", duration.as_secs())
}
