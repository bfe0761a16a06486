use std::io::{self, Write};

use subway_graph_core::{PathStep, RouteCount, TransferStop};

pub fn write_header(out: &mut impl Write, question: u32) -> io::Result<()> {
    writeln!(out, "----- Question {} -----", question)
}

pub fn write_routes(out: &mut impl Write, routes: &[String]) -> io::Result<()> {
    for route in routes {
        writeln!(out, "{}", route)?;
    }
    writeln!(out)
}

pub fn write_stats(
    out: &mut impl Write,
    most: &RouteCount,
    fewest: &RouteCount,
    transfers: &[TransferStop],
) -> io::Result<()> {
    writeln!(out, "Route with most stops:")?;
    writeln!(out, "\t{}, with {} stops.", most.route, most.stops)?;
    writeln!(out)?;
    writeln!(out, "Route with least stops:")?;
    writeln!(out, "\t{}, with {} stops.", fewest.route, fewest.stops)?;
    writeln!(out)?;
    writeln!(out, "Stops which connect multiple routes:")?;
    for t in transfers {
        writeln!(
            out,
            "\t{} connects {} routes: {}",
            t.stop,
            t.routes.len(),
            t.routes.join(", ")
        )?;
    }
    writeln!(out)
}

pub fn write_path(out: &mut impl Write, path: Option<&[PathStep]>) -> io::Result<()> {
    match path {
        Some(steps) => {
            let names: Vec<&str> = steps.iter().map(|s| s.name.as_str()).collect();
            writeln!(out, "Route: {}", names.join(" -> "))
        }
        None => writeln!(out, "Route: no path found"),
    }
}
