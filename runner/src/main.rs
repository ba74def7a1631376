extern crate site_mst;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use site_mst::SiteGraph;
use std::io::{self, Write};
use std::time::Instant;

const DEFAULT_SITES: usize = 200;
const DEFAULT_LAYOUTS: usize = 16;
const DEFAULT_SEED: u64 = 42;
const CANVAS_SIZE: f64 = 1000.0;
/// Each site is linked to this many of its nearest neighbours.
const NEIGHBOURS: usize = 3;

struct LayoutReport {
    layout: usize,
    sites: usize,
    edges: usize,
    forest_edges: usize,
    forest_weight: u64,
    spanning: bool,
    elapsed_secs: f64,
}

fn parse_arg<T: std::str::FromStr>(args: &[String], index: usize, default: T) -> io::Result<T> {
    match args.get(index) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("cannot parse argument {index}: {raw:?}"),
            )
        }),
    }
}

/// Upper bound on random placement attempts for `sites` sites.
fn placement_attempts(sites: usize) -> usize {
    sites.saturating_mul(10)
}

fn solve_layout(layout: usize, sites: usize, seed: u64) -> LayoutReport {
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(layout as u64));
    let mut graph = SiteGraph::new();
    let now = Instant::now();

    // Dense canvases reject many candidates; cap the attempts.
    for _ in 0..placement_attempts(sites) {
        if graph.vertices().size() == sites {
            break;
        }
        let _ = graph.add_vertex(
            rng.gen_range(0.0..CANVAS_SIZE),
            rng.gen_range(0.0..CANVAS_SIZE),
        );
    }

    let vertices = graph.vertices().as_slice().to_vec();
    for vertex in &vertices {
        let mut others: Vec<(f64, usize)> = vertices
            .iter()
            .filter(|other| other.id != vertex.id)
            .map(|other| (vertex.distance_to(other), other.id))
            .collect();
        others.sort_by(|x, y| x.0.total_cmp(&y.0));
        for &(_, id) in others.iter().take(NEIGHBOURS) {
            if !graph.edge_exists(vertex.id, id) {
                if let Err(e) = graph.add_edge(vertex.id, id) {
                    log::error!("layout {layout}: unexpected rejection: {e}");
                }
            }
        }
    }

    let site_count = graph.vertices().size();
    let edge_count = graph.edges().len();
    let forest = graph.compute_mst();
    LayoutReport {
        layout,
        sites: site_count,
        edges: edge_count,
        forest_edges: forest.len(),
        forest_weight: forest.total_weight(),
        spanning: forest.is_spanning_tree(site_count),
        elapsed_secs: now.elapsed().as_secs_f64(),
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let sites = parse_arg(&args, 1, DEFAULT_SITES)?;
    let layouts = parse_arg(&args, 2, DEFAULT_LAYOUTS)?;
    let seed = parse_arg(&args, 3, DEFAULT_SEED)?;
    log::info!("solving {layouts} layouts of {sites} sites, seed {seed}");

    let reports: Vec<LayoutReport> = (0..layouts)
        .into_par_iter()
        .map(|layout| solve_layout(layout, sites, seed))
        .collect();

    let mut out = io::stdout().lock();
    writeln!(out, "Layout\tSites\tEdges\tForestEdges\tForestWeight\tSpanning\tTime(s)")?;
    for report in &reports {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}\t{:.6}",
            report.layout,
            report.sites,
            report.edges,
            report.forest_edges,
            report.forest_weight,
            report.spanning,
            report.elapsed_secs
        )?;
    }
    let spanning = reports.iter().filter(|report| report.spanning).count();
    writeln!(out, "{spanning} of {} layouts fully connected", reports.len())?;
    Ok(())
}
