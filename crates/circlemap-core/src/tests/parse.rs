use crate::*;

const EUROPE: &str = "Area of the states\n\
# Name Area Longitude Latitude\n\
D    357    10.0    51.3\n\
NL   42      5.3     52.2\n\
B    33      4.8     50.7\n\
L    3       6.1     49.8\n\
F    544     2.8     47.4\n\
CH   41      8.2     46.9\n\
A    84      14.2    47.6\n\
CZ   79      15.3    49.8\n\
PL   313     18.9    52.2\n\
DK   43      9.6     56.0\n\
# Adjacency\n\
D:  NL  B   L   F   CH  A  CZ   PL  DK\n\
NL: B\n\
B:  L   F\n\
L:  F\n\
F:  CH\n\
CH: A\n\
A:  CZ\n\
CZ: PL\n";

#[test]
fn parse_dataset_reads_title_regions_and_adjacency() {
    let dataset = parse_dataset(EUROPE).expect("dataset");
    assert_eq!(dataset.title, "Area of the states");
    assert_eq!(dataset.region_count(), 10);
    assert_eq!(dataset.graph.adjacency_count(), 17);
    dataset.graph.validate().expect("valid graph");

    let g = &dataset.graph;
    let d = g.region_by_name("D").expect("D");
    assert_eq!((d.x(), d.y()), (10.0, 51.3));
    assert!((d.radius() - (357.0 / std::f64::consts::PI).sqrt()).abs() < 1e-12);

    let nl = g.index_of("NL").expect("NL");
    let b = g.index_of("B").expect("B");
    assert!(g.are_adjacent(nl, b) && g.are_adjacent(b, nl));
    let dk = g.index_of("DK").expect("DK");
    assert_eq!(g.region(dk).expect("DK").neighbor_count(), 1);
}

#[test]
fn parse_dataset_keeps_region_order() {
    let dataset = parse_dataset(EUROPE).expect("dataset");
    let names: Vec<&str> = dataset
        .graph
        .regions()
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(
        names,
        ["D", "NL", "B", "L", "F", "CH", "A", "CZ", "PL", "DK"]
    );
}

#[test]
fn comments_tabs_and_blank_lines_are_ignored() {
    let text = "\n  # leading comment\nGDP # per capita\n\nX\t5\t1.5\t2.5 # trailing\n  Y 7 -3 4\nX:\tY # edge\n";
    let dataset = parse_dataset(text).expect("dataset");
    assert_eq!(dataset.title, "GDP");
    let y = dataset.graph.region_by_name("Y").expect("Y");
    assert_eq!((y.x(), y.y()), (-3.0, 4.0));
    assert_eq!(dataset.graph.adjacency_count(), 1);
}

#[test]
fn unknown_neighbors_and_repeated_edges_are_skipped() {
    let text = "T\nX 1 0 0\nY 1 1 1\nX: Y Z\nY: X\nX: X\n";
    let dataset = parse_dataset(text).expect("dataset");
    assert_eq!(dataset.graph.adjacency_count(), 1);
    dataset.graph.validate().expect("valid graph");
}

#[test]
fn repeated_region_name_keeps_the_first_declaration() {
    let text = "T\nX 1 0 0\nX 9 5 5\n";
    let dataset = parse_dataset(text).expect("dataset");
    assert_eq!(dataset.region_count(), 1);
    let x = dataset.graph.region_by_name("X").expect("X");
    assert_eq!((x.x(), x.y()), (0.0, 0.0));
}

#[test]
fn empty_and_comment_only_input_is_rejected() {
    for text in ["", "\n\n", "# only a comment\n   \n"] {
        let err = parse_dataset(text).expect_err("empty");
        assert!(matches!(err, ParseError::EmptyInput), "{err}");
        assert!(err.is_format_error());
    }
    let err = parse_dataset("Just a title\n").expect_err("no regions");
    assert!(matches!(err, ParseError::NoRegions), "{err}");
}

#[test]
fn area_must_be_a_positive_integer() {
    let err = parse_dataset("T\nX 1.5 0 0\n").expect_err("fractional area");
    assert!(
        matches!(err, ParseError::InvalidNumber { line: 2, field: "area", .. }),
        "{err}"
    );
    assert_eq!(
        err.context(),
        "Could not read input file, invalid number format:"
    );

    let err = parse_dataset("T\nX 0 0 0\n").expect_err("zero area");
    assert!(
        matches!(err, ParseError::NonPositiveValue { line: 2, value: 0 }),
        "{err}"
    );

    let err = parse_dataset("T\nX -4 0 0\n").expect_err("negative area");
    assert!(matches!(err, ParseError::NonPositiveValue { value: -4, .. }));
}

#[test]
fn coordinates_must_be_finite_numbers() {
    for text in ["T\nX 1 east 0\n", "T\nX 1 0 inf\n", "T\nX 1 NaN 0\n"] {
        let err = parse_dataset(text).expect_err("bad coordinate");
        assert!(matches!(err, ParseError::InvalidNumber { .. }), "{err}");
    }
}

#[test]
fn missing_fields_are_reported_by_name() {
    let err = parse_dataset("T\nX 1 0\n").expect_err("missing latitude");
    assert!(
        matches!(err, ParseError::MissingField { line: 2, field: "latitude" }),
        "{err}"
    );
    assert_eq!(err.line(), Some(2));
}

#[test]
fn two_regions_at_the_same_position_are_rejected() {
    let err = parse_dataset("T\nX 1 4 5\nY 2 4 5\n").expect_err("same position");
    match err {
        ParseError::DuplicatePosition {
            line,
            name,
            existing,
        } => {
            assert_eq!(line, 3);
            assert_eq!(name, "Y");
            assert_eq!(existing, "X");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_adjacency_lines_are_rejected() {
    let err = parse_dataset("T\nX 1 0 0\nX:\n").expect_err("empty tail");
    assert!(matches!(err, ParseError::EmptyRelationSide { line: 3 }), "{err}");

    let err = parse_dataset("T\nX 1 0 0\n: X\n").expect_err("empty head");
    assert!(matches!(err, ParseError::EmptyRelationSide { line: 3 }), "{err}");

    let err = parse_dataset("T\nX 1 0 0\nX: Y: Z\n").expect_err("two colons");
    assert!(matches!(err, ParseError::MalformedRelation { line: 3 }), "{err}");

    let err = parse_dataset("T\nX 1 0 0\nQ: X\n").expect_err("unknown head");
    assert!(
        matches!(err, ParseError::UnknownRegion { ref name, .. } if name == "Q"),
        "{err}"
    );
}

#[test]
fn adjacency_may_only_reference_regions_declared_above() {
    let dataset = parse_dataset("T\nX 1 0 0\nX: Y\nY 1 2 2\n").expect("dataset");
    assert_eq!(dataset.region_count(), 2);
    assert_eq!(dataset.graph.adjacency_count(), 0);
}
