//! gnuplot script export.
//!
//! The script embeds the layout as an inline data block (`x y radius name color-index`) and
//! draws one circle plus one label per region in a square viewport. Run it with
//! `gnuplot -p <file>`.

use crate::viewport::Viewport;
use crate::{Error, Result};
use circlemap_layout::RegionGraph;
use std::fmt::Write as _;

const LABEL_FONT: &str = "arial,9";

/// Renders `graph` as a gnuplot script titled `"<title>, Iteration: <iterations>"`.
pub fn render_gnuplot(graph: &RegionGraph, title: &str, iterations: usize) -> Result<String> {
    let viewport = Viewport::square_around(graph).ok_or(Error::EmptyLayout)?;

    let mut out = String::with_capacity(256 + graph.len() * 48);
    out.push_str("reset\n");
    writeln!(
        out,
        "set xrange [{:.15}:{:.15}]",
        viewport.x_min, viewport.x_max
    )?;
    writeln!(
        out,
        "set yrange [{:.15}:{:.15}]",
        viewport.y_min, viewport.y_max
    )?;
    out.push_str("set size ratio 1.0\n");
    writeln!(
        out,
        "set title \"{}, Iteration: {iterations}\"",
        escape_double_quoted(title)
    )?;
    out.push_str("unset xtics\nunset ytics\n$data << EOD\n");
    for (idx, r) in graph.regions().iter().enumerate() {
        writeln!(
            out,
            "{:.6} {:.6} {:.6} {} {idx}",
            r.x(),
            r.y(),
            r.radius(),
            r.name
        )?;
    }
    out.push_str("EOD\nplot \\\n");
    out.push_str("'$data' using 1:2:3:5 with circles lc var notitle, \\\n");
    writeln!(
        out,
        "'$data' using 1:2:4:5 with labels font \"{LABEL_FONT}\" tc variable notitle"
    )?;
    Ok(out)
}

fn escape_double_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '"' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}
