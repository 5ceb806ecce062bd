use crate::dataset::Dataset;
use crate::error::{ParseError, Result};
use circlemap_layout::RegionGraph;

/// Radius of a circle with the given area.
pub fn radius_for_area(area: f64) -> f64 {
    (area / std::f64::consts::PI).sqrt()
}

/// Parses a dataset.
///
/// Line rules:
/// - everything from the first `#` is a comment; blank lines are skipped
/// - the first remaining line is the title
/// - a line containing `:` declares adjacency: `NAME: NEIGHBOR NEIGHBOR ...`
/// - any other line declares a region: `NAME AREA LONGITUDE LATITUDE`
///
/// An adjacency line whose head is not a declared region is an error. Unknown neighbor names
/// are skipped, as are repeated region names (the first declaration wins).
pub fn parse_dataset(text: &str) -> Result<Dataset> {
    let mut title: Option<String> = None;
    let mut graph = RegionGraph::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }
        if title.is_none() {
            title = Some(line.to_string());
            continue;
        }
        if line.contains(':') {
            parse_adjacency_line(line, line_no, &mut graph)?;
        } else {
            parse_region_line(line, line_no, &mut graph)?;
        }
    }

    let title = title.ok_or(ParseError::EmptyInput)?;
    if graph.is_empty() {
        return Err(ParseError::NoRegions);
    }
    tracing::debug!(
        title = title.as_str(),
        regions = graph.len(),
        adjacencies = graph.adjacency_count(),
        "dataset parsed"
    );
    Ok(Dataset { title, graph })
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(i) => &line[..i],
        None => line,
    }
}

fn parse_region_line(line: &str, line_no: usize, graph: &mut RegionGraph) -> Result<()> {
    let mut fields = line.split_whitespace();
    let name = fields.next().ok_or(ParseError::MissingField {
        line: line_no,
        field: "region name",
    })?;
    let area_raw = fields.next().ok_or(ParseError::MissingField {
        line: line_no,
        field: "area",
    })?;
    let lon_raw = fields.next().ok_or(ParseError::MissingField {
        line: line_no,
        field: "longitude",
    })?;
    let lat_raw = fields.next().ok_or(ParseError::MissingField {
        line: line_no,
        field: "latitude",
    })?;

    let area = area_raw
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidNumber {
            line: line_no,
            field: "area",
            value: area_raw.to_string(),
        })?;
    if area <= 0 {
        return Err(ParseError::NonPositiveValue {
            line: line_no,
            value: area,
        });
    }
    let lon = parse_coordinate(lon_raw, "longitude", line_no)?;
    let lat = parse_coordinate(lat_raw, "latitude", line_no)?;

    if let Some(existing) = graph
        .regions()
        .iter()
        .find(|r| r.name != name && r.x() == lon && r.y() == lat)
    {
        return Err(ParseError::DuplicatePosition {
            line: line_no,
            name: name.to_string(),
            existing: existing.name.clone(),
        });
    }
    if graph.index_of(name).is_some() {
        tracing::warn!(line = line_no, name, "region declared twice; keeping the first");
        return Ok(());
    }

    graph
        .add_region(name, lon, lat, radius_for_area(area as f64))
        .map_err(|source| ParseError::Graph {
            line: line_no,
            source,
        })?;
    Ok(())
}

fn parse_coordinate(raw: &str, field: &'static str, line_no: usize) -> Result<f64> {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ParseError::InvalidNumber {
            line: line_no,
            field,
            value: raw.to_string(),
        }),
    }
}

fn parse_adjacency_line(line: &str, line_no: usize, graph: &mut RegionGraph) -> Result<()> {
    let Some((head, tail)) = line.split_once(':') else {
        return Ok(());
    };
    if tail.contains(':') {
        return Err(ParseError::MalformedRelation { line: line_no });
    }
    let head = head.trim();
    let tail = tail.trim();
    if head.is_empty() || tail.is_empty() {
        return Err(ParseError::EmptyRelationSide { line: line_no });
    }

    let Some(id) = graph.index_of(head) else {
        return Err(ParseError::UnknownRegion {
            line: line_no,
            name: head.to_string(),
        });
    };

    for neighbor in tail.split_whitespace() {
        let Some(other) = graph.index_of(neighbor) else {
            tracing::warn!(
                line = line_no,
                region = head,
                neighbor,
                "ignoring adjacency to an undeclared region"
            );
            continue;
        };
        if other == id {
            tracing::debug!(line = line_no, region = head, "ignoring self adjacency");
            continue;
        }
        graph
            .add_adjacency(id, other)
            .map_err(|source| ParseError::Graph {
                line: line_no,
                source,
            })?;
    }
    Ok(())
}
