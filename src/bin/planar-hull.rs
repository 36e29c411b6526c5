use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use planar_hull::algorithms::{Algorithm, Hull};
use planar_hull::io;

#[derive(Parser)]
#[command(name = "planar-hull")]
#[command(about = "Convex hull of a planar point set")]
struct Args {
  /// Point list, one point per line as `x y` or `x y z`. Use `-` for stdin.
  input: PathBuf,

  /// monotone-chain, graham-scan or gift-wrapping
  #[arg(short, long, default_value_t = Algorithm::GrahamScan)]
  algorithm: Algorithm,

  /// Write the point set and its hull to this CH file instead of printing
  /// the hull vertices.
  #[arg(short, long)]
  output: Option<PathBuf>,
}

fn main() -> Result<()> {
  env_logger::init();
  let args = Args::parse();

  let points = if args.input.as_os_str() == "-" {
    io::read_points(std::io::stdin().lock()).context("reading points from stdin")?
  } else {
    io::load_points(&args.input)
      .with_context(|| format!("reading points from {}", args.input.display()))?
  };
  info!(
    "{} points, computing hull with {}",
    points.len(),
    args.algorithm
  );

  let hull = args
    .algorithm
    .convex_hull(points)
    .context("computing convex hull")?;
  info!("{} hull vertices", hull.len());

  match args.output {
    Some(path) => io::save(&path, &hull)
      .with_context(|| format!("writing {}", path.display()))?,
    None => print_hull(&hull).context("writing to stdout")?,
  }
  Ok(())
}

fn print_hull(hull: &Hull) -> std::io::Result<()> {
  let mut out = BufWriter::new(std::io::stdout().lock());
  for (index, pt) in hull.indices.iter().zip(hull.vertices()) {
    writeln!(out, "{}\t{} {} {}", index, pt.x, pt.y, pt.z)?;
  }
  out.flush()
}
