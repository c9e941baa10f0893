//! End-to-end topology scenarios: segments in, routes and paths out.

use super::*;
use crate::domain::{Direction, LineId, Route, Segment, StationCode};

fn code(s: &str) -> StationCode {
    StationCode::parse(s).unwrap()
}

fn line(s: &str) -> LineId {
    LineId::new(s).unwrap()
}

fn segments(l: &str, pairs: &[(&str, &str)]) -> Vec<Segment> {
    pairs
        .iter()
        .map(|(a, b)| Segment::new(line(l), code(a), code(b)).unwrap())
        .collect()
}

fn stations(route: &Route) -> Vec<&str> {
    route.stations.iter().map(StationCode::as_str).collect()
}

fn build(rules: &RuleTable, segs: &[Segment]) -> RouteTable {
    RouteTable::build(rules, segs, &TopologyConfig::default())
}

#[test]
fn default_line_has_one_route_each_way() {
    let segs = segments("L1", &[("A", "B"), ("B", "C")]);
    let table = build(&RuleTable::new(), &segs);

    let down = table.get(&line("L1"), Direction::Down);
    assert_eq!(down.len(), 1);
    assert_eq!(stations(&down[0]), vec!["A", "B", "C"]);
    assert_eq!(down[0].branch_no, 1);

    let up = table.get(&line("L1"), Direction::Up);
    assert_eq!(up.len(), 1);
    assert_eq!(stations(&up[0]), vec!["C", "B", "A"]);
}

#[test]
fn junction_gives_two_down_branches() {
    let segs = segments("L2", &[("A", "B"), ("B", "C"), ("B", "D")]);
    let table = build(&RuleTable::new(), &segs);

    let down = table.get(&line("L2"), Direction::Down);
    let got: Vec<_> = down.iter().map(stations).collect();
    assert_eq!(got, vec![vec!["A", "B", "C"], vec!["A", "B", "D"]]);
    assert_eq!(
        down.iter().map(|r| r.branch_no).collect::<Vec<_>>(),
        vec![1, 2]
    );
}

#[test]
fn express_skips_leave_one_route_each_way() {
    let mut segs = segments(
        "9호선",
        &[("901", "902"), ("902", "903"), ("903", "904"), ("904", "905")],
    );
    segs.extend(
        segments("9호선", &[("901", "903"), ("903", "905")])
            .into_iter()
            .map(Segment::express),
    );
    let table = build(&RuleTable::seoul(), &segs);

    let down = table.get(&line("9호선"), Direction::Down);
    assert_eq!(down.len(), 1);
    assert_eq!(stations(&down[0]), vec!["901", "902", "903", "904", "905"]);

    let up = table.get(&line("9호선"), Direction::Up);
    assert_eq!(up.len(), 1);
    assert_eq!(stations(&up[0]), vec!["905", "904", "903", "902", "901"]);

    // The skips still serve express path queries
    let graph = UndirectedGraph::from_segments(&line("9호선"), ServicePattern::Express, &segs);
    let path = graph.find_path(&code("901"), &code("905"));
    assert_eq!(path, vec![code("901"), code("903"), code("905")]);
}

#[test]
fn path_along_default_line() {
    let segs = segments("L1", &[("A", "B"), ("B", "C")]);
    let graph = UndirectedGraph::from_segments(&line("L1"), ServicePattern::Local, &segs);

    let path: Vec<_> = graph
        .find_path(&code("A"), &code("C"))
        .into_iter()
        .map(|s| s.as_str().to_string())
        .collect();
    assert_eq!(path, vec!["A", "B", "C"]);
}

#[test]
fn path_from_unknown_station_is_empty() {
    let segs = segments("L1", &[("A", "B"), ("B", "C")]);
    let graph = UndirectedGraph::from_segments(&line("L1"), ServicePattern::Local, &segs);

    assert!(graph.find_path(&code("Q"), &code("C")).is_empty());
}

#[test]
fn pure_cycle_still_yields_a_route() {
    let mut rules = RuleTable::new();
    rules.insert(line("Ring"), LineTopologyRule::Loop { spurs: vec![] });
    let segs = segments("Ring", &[("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")]);

    let table = build(&rules, &segs);

    for direction in [Direction::Up, Direction::Down] {
        let routes = table.get(&line("Ring"), direction);
        assert!(!routes.is_empty());
        for route in routes {
            assert!(route.cycle_cut);
            assert_eq!(route.stations.first(), Some(&route.start));
            assert_eq!(route.len(), 4);
        }
    }

    let up = table.get(&line("Ring"), Direction::Up);
    assert_eq!(stations(&up[0]), vec!["A", "B", "C", "D"]);
    let down = table.get(&line("Ring"), Direction::Down);
    assert_eq!(stations(&down[0]), vec!["B", "A", "D", "C"]);
}

#[test]
fn loop_line_with_spur() {
    let mut rules = RuleTable::new();
    rules.insert(
        line("2호선"),
        LineTopologyRule::Loop {
            spurs: vec![SpurBranch {
                label: line("2호선(성수지선)"),
                stations: ["211", "211-1", "211-2"].iter().map(|s| code(s)).collect(),
            }],
        },
    );

    let segs = segments(
        "2호선",
        &[
            ("210", "211"),
            ("211", "212"),
            ("212", "210"),
            ("211", "211-1"),
            ("211-1", "211-2"),
        ],
    );
    let table = build(&rules, &segs);

    let spur = table.get(&line("2호선(성수지선)"), Direction::Single);
    assert_eq!(spur.len(), 1);
    assert_eq!(stations(&spur[0]), vec!["211", "211-1", "211-2"]);
    assert!(!spur[0].cycle_cut);

    // Spur stations never show up on the ring
    for route in table.for_line(&line("2호선")) {
        assert!(!route.calls_at(&code("211-1")));
        assert_eq!(route.len(), 3);
    }
}

#[test]
fn partial_loop_has_no_up_inside_section() {
    let mut rules = RuleTable::new();
    rules.insert(
        line("6호선"),
        LineTopologyRule::PartialLoop {
            loop_section: ["610", "611", "612"].iter().map(|s| code(s)).collect(),
        },
    );

    // 616 - 610, then a one-way loop 610 -> 611 -> 612 -> 610
    let segs = segments(
        "6호선",
        &[("616", "610"), ("610", "611"), ("611", "612"), ("612", "610")],
    );
    let table = build(&rules, &segs);

    let up = table.get(&line("6호선"), Direction::Up);
    assert_eq!(up.len(), 1);
    assert_eq!(stations(&up[0]), vec!["610", "616"]);

    let down = table.get(&line("6호선"), Direction::Down);
    assert_eq!(down.len(), 1);
    assert_eq!(stations(&down[0]), vec!["616", "610", "611", "612"]);
}

#[test]
fn seoul_rules_on_sample_network() {
    let mut segs = segments(
        "2호선",
        &[
            ("210", "211"),
            ("211", "212"),
            ("211", "211-1"),
            ("211-1", "211-2"),
            ("233", "234"),
            ("234", "234-1"),
        ],
    );
    segs.extend(segments("1호선", &[("150", "151"), ("151", "152")]));

    let table = build(&RuleTable::seoul(), &segs);

    assert_eq!(
        table.lines(),
        vec![
            &line("1호선"),
            &line("2호선"),
            &line("2호선(성수지선)"),
            &line("2호선(신정지선)")
        ]
    );
    assert_eq!(
        table.directions(&line("2호선(신정지선)")),
        vec![Direction::Single]
    );
}
