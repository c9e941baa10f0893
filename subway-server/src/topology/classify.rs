//! Segment classification.
//!
//! Turns undirected segments into direction-tagged edges using the line's
//! [`LineTopologyRule`]. Rules are checked in priority order: spur branch,
//! main loop, one-way loop section, default.

use std::collections::BTreeMap;

use crate::domain::{DirectedEdge, Direction, LineId, Segment};

use super::rules::{LineTopologyRule, RuleTable};

/// Which rule branch a segment was classified by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleMatch {
    /// Spur branch of a loop line (one `single` edge).
    Spur,
    /// Main ring of a loop line (up and down edges).
    MainLoop,
    /// One-way loop section (down edge only).
    LoopSection,
    /// Ordinary two-direction segment.
    Default,
}

/// Classify one segment under a rule.
pub fn classify_with(rule: &LineTopologyRule, segment: &Segment) -> (Vec<DirectedEdge>, RuleMatch) {
    let Segment { line, a, b, .. } = segment;

    match rule {
        LineTopologyRule::Loop { .. } => {
            if let Some(spur) = rule.spur_for(segment) {
                let edge =
                    DirectedEdge::new(spur.label.clone(), Direction::Single, a.clone(), b.clone());
                return (vec![edge], RuleMatch::Spur);
            }
            let inner = DirectedEdge::new(line.clone(), Direction::Up, a.clone(), b.clone());
            let outer = DirectedEdge::new(line.clone(), Direction::Down, b.clone(), a.clone());
            (vec![inner, outer], RuleMatch::MainLoop)
        }
        LineTopologyRule::PartialLoop { .. } if rule.in_loop_section(segment) => {
            let edge = DirectedEdge::new(line.clone(), Direction::Down, a.clone(), b.clone());
            (vec![edge], RuleMatch::LoopSection)
        }
        LineTopologyRule::PartialLoop { .. } | LineTopologyRule::Default => {
            let down = DirectedEdge::new(line.clone(), Direction::Down, a.clone(), b.clone());
            let up = DirectedEdge::new(line.clone(), Direction::Up, b.clone(), a.clone());
            (vec![down, up], RuleMatch::Default)
        }
    }
}

/// Per-line tally of how segments were classified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineReport {
    pub segments: usize,
    pub spur: usize,
    pub main_loop: usize,
    pub loop_section: usize,
    pub default: usize,
}

impl LineReport {
    fn record(&mut self, matched: RuleMatch) {
        self.segments += 1;
        match matched {
            RuleMatch::Spur => self.spur += 1,
            RuleMatch::MainLoop => self.main_loop += 1,
            RuleMatch::LoopSection => self.loop_section += 1,
            RuleMatch::Default => self.default += 1,
        }
    }

    /// Segments that hit a spur or loop-section predicate.
    pub fn predicate_hits(&self) -> usize {
        self.spur + self.loop_section
    }
}

/// Summary of a classification run, keyed by the segments' own line.
#[derive(Debug, Clone, Default)]
pub struct ClassifyReport {
    lines: BTreeMap<LineId, LineReport>,
}

impl ClassifyReport {
    pub fn line(&self, line: &LineId) -> Option<&LineReport> {
        self.lines.get(line)
    }

    pub fn lines(&self) -> impl Iterator<Item = (&LineId, &LineReport)> {
        self.lines.iter()
    }

    /// Lines whose rule has predicates that no segment matched.
    ///
    /// This usually means the rule table names stations that are not in the
    /// data, rather than the line really having no spur or loop section.
    pub fn unmatched_predicates<'a>(
        &'a self,
        rules: &'a RuleTable,
    ) -> impl Iterator<Item = &'a LineId> + 'a {
        self.lines.iter().filter_map(move |(line, report)| {
            (rules.rule_for(line).has_predicates() && report.predicate_hits() == 0).then_some(line)
        })
    }

    /// Lines with no entry in the rule table.
    pub fn unconfigured<'a>(&'a self, rules: &'a RuleTable) -> impl Iterator<Item = &'a LineId> + 'a {
        self.lines.keys().filter(move |line| !rules.is_configured(line))
    }
}

/// Directed edges produced from a batch of segments.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    pub edges: Vec<DirectedEdge>,
    pub report: ClassifyReport,
}

impl RuleTable {
    /// Classify a single segment with the rule for its line.
    pub fn classify(&self, segment: &Segment) -> Vec<DirectedEdge> {
        classify_with(self.rule_for(&segment.line), segment).0
    }
}

/// Classify all segments in order, keeping edge order stable.
pub fn classify_all<'a, I>(rules: &RuleTable, segments: I) -> Classification
where
    I: IntoIterator<Item = &'a Segment>,
{
    let mut out = Classification::default();

    for segment in segments {
        let (edges, matched) = classify_with(rules.rule_for(&segment.line), segment);
        out.report
            .lines
            .entry(segment.line.clone())
            .or_default()
            .record(matched);
        out.edges.extend(edges);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationCode;

    fn code(s: &str) -> StationCode {
        StationCode::parse(s).unwrap()
    }

    fn line(s: &str) -> LineId {
        LineId::new(s).unwrap()
    }

    fn seg(l: &str, a: &str, b: &str) -> Segment {
        Segment::new(line(l), code(a), code(b)).unwrap()
    }

    fn edge(l: &str, d: Direction, from: &str, to: &str) -> DirectedEdge {
        DirectedEdge::new(line(l), d, code(from), code(to))
    }

    #[test]
    fn default_line_gives_down_then_up() {
        let rules = RuleTable::new();
        let edges = rules.classify(&seg("L1", "A", "B"));
        assert_eq!(
            edges,
            vec![
                edge("L1", Direction::Down, "A", "B"),
                edge("L1", Direction::Up, "B", "A"),
            ]
        );
    }

    #[test]
    fn main_loop_gives_inner_up_outer_down() {
        let rules = RuleTable::seoul();
        let edges = rules.classify(&seg("2호선", "201", "202"));
        assert_eq!(
            edges,
            vec![
                edge("2호선", Direction::Up, "201", "202"),
                edge("2호선", Direction::Down, "202", "201"),
            ]
        );
    }

    #[test]
    fn spur_gives_single_edge_under_spur_label() {
        let rules = RuleTable::seoul();
        let edges = rules.classify(&seg("2호선", "211", "211-1"));
        assert_eq!(
            edges,
            vec![edge("2호선(성수지선)", Direction::Single, "211", "211-1")]
        );
    }

    #[test]
    fn spur_is_not_also_on_main_loop() {
        let rules = RuleTable::seoul();
        let edges = rules.classify(&seg("2호선", "234-1", "234-2"));
        assert_eq!(edges.len(), 1);
        assert!(edges.iter().all(|e| e.line.as_str() != "2호선"));
    }

    #[test]
    fn loop_section_suppresses_up() {
        let rules = RuleTable::seoul();
        let edges = rules.classify(&seg("6호선", "610", "611"));
        assert_eq!(edges, vec![edge("6호선", Direction::Down, "610", "611")]);
    }

    #[test]
    fn partial_loop_line_outside_section_is_default() {
        let rules = RuleTable::seoul();
        let edges = rules.classify(&seg("6호선", "610", "616"));
        assert_eq!(
            edges,
            vec![
                edge("6호선", Direction::Down, "610", "616"),
                edge("6호선", Direction::Up, "616", "610"),
            ]
        );
    }

    #[test]
    fn classify_all_reports_matches() {
        let rules = RuleTable::seoul();
        let segments = vec![
            seg("2호선", "210", "211"),
            seg("2호선", "211", "211-1"),
            seg("6호선", "610", "611"),
            seg("6호선", "610", "616"),
            seg("1호선", "150", "151"),
        ];

        let out = classify_all(&rules, &segments);
        assert_eq!(out.edges.len(), 2 + 1 + 1 + 2 + 2);

        let two = out.report.line(&line("2호선")).unwrap();
        assert_eq!(two.segments, 2);
        assert_eq!(two.spur, 1);
        assert_eq!(two.main_loop, 1);

        let six = out.report.line(&line("6호선")).unwrap();
        assert_eq!(six.loop_section, 1);
        assert_eq!(six.default, 1);

        assert_eq!(out.report.unmatched_predicates(&rules).count(), 0);
        let unconfigured: Vec<_> = out.report.unconfigured(&rules).collect();
        assert_eq!(unconfigured, vec![&line("1호선")]);
    }

    #[test]
    fn unmatched_predicates_flags_configured_lines() {
        let rules = RuleTable::seoul();
        let segments = vec![seg("6호선", "616", "617")];

        let out = classify_all(&rules, &segments);
        let flagged: Vec<_> = out.report.unmatched_predicates(&rules).collect();
        assert_eq!(flagged, vec![&line("6호선")]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::StationCode;
    use proptest::prelude::*;

    fn distinct_pair() -> impl Strategy<Value = (String, String)> {
        ("[A-Z]{1,3}", "[A-Z]{1,3}").prop_filter("endpoints differ", |(a, b)| a != b)
    }

    fn segment(line: &str, a: &str, b: &str) -> Segment {
        Segment::new(
            LineId::new(line).unwrap(),
            StationCode::parse(a).unwrap(),
            StationCode::parse(b).unwrap(),
        )
        .unwrap()
    }

    proptest! {
        /// Default lines always give one up and one down edge with reversed endpoints
        #[test]
        fn default_line_is_symmetric((a, b) in distinct_pair()) {
            let edges = RuleTable::new().classify(&segment("L1", &a, &b));
            prop_assert_eq!(edges.len(), 2);

            let down = edges.iter().find(|e| e.direction == Direction::Down).unwrap();
            let up = edges.iter().find(|e| e.direction == Direction::Up).unwrap();
            prop_assert_eq!(&down.from, &up.to);
            prop_assert_eq!(&down.to, &up.from);
        }

        /// Main-loop segments give two edges on the same endpoints with opposite tags
        #[test]
        fn loop_line_is_symmetric((a, b) in distinct_pair()) {
            let mut rules = RuleTable::new();
            rules.insert(LineId::new("Circle").unwrap(), LineTopologyRule::Loop { spurs: vec![] });

            let edges = rules.classify(&segment("Circle", &a, &b));
            prop_assert_eq!(edges.len(), 2);
            prop_assert_ne!(edges[0].direction, edges[1].direction);
            prop_assert_eq!(&edges[0].from, &edges[1].to);
            prop_assert_eq!(&edges[0].to, &edges[1].from);
        }

        /// No classification ever produces a self-loop
        #[test]
        fn no_self_loops((a, b) in distinct_pair()) {
            for edge in RuleTable::seoul().classify(&segment("2호선", &a, &b)) {
                prop_assert_ne!(edge.from, edge.to);
            }
        }
    }
}
