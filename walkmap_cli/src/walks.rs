use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Args;
use tracing::info;
use walkmap::{
    Walk, assemble::walks_from_reader, distance_method::DistanceMethod, segment::DEFAULT_MAX_GAP,
    walk_params::WalkParams,
};

use crate::{file_utils::read_folder, parsers, walk_table::walk_table};

#[derive(Args)]
pub struct WalksArgs {
    /// Track file or folder of `.csv` tracks, reads stdin when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Longest pause inside a single walk (e.g., "30m", "PT1H", "3600")
    #[arg(
        short = 'g',
        long,
        env = "WALKMAP_MAX_GAP",
        value_parser = parsers::parse_duration,
        default_value_t = DEFAULT_MAX_GAP
    )]
    max_gap: jiff::SignedDuration,

    /// Column delimiter of the track files
    #[arg(long, value_parser = parsers::parse_delimiter, default_value = ";")]
    delimiter: u8,

    /// haversine or euclidean
    #[arg(long, default_value_t = DistanceMethod::Haversine)]
    distance_method: DistanceMethod,

    /// Segments with fewer points are dropped, at least 1
    #[arg(long, value_parser = parsers::parse_min_points, default_value_t = 2)]
    min_points: usize,
}

impl WalksArgs {
    fn params(&self) -> WalkParams {
        WalkParams::default()
            .with_max_gap(self.max_gap)
            .with_delimiter(self.delimiter)
            .with_distance_method(self.distance_method)
            .with_min_points(self.min_points)
    }
}

/// Walks of a single track file, or of every `.csv` file below a folder.
fn walks_from_path(input: &Path, params: &WalkParams) -> Result<Vec<Walk>, anyhow::Error> {
    if !input.exists() {
        anyhow::bail!("Input {} does not exist", input.display());
    }

    let paths = if input.is_file() {
        vec![input.to_path_buf()]
    } else {
        read_folder(input).with_context(|| format!("Failed to read folder {}", input.display()))?
    };

    let mut walks = Vec::new();
    for path in paths {
        info!("Reading track points from {:?}", path);
        let file =
            File::open(&path).with_context(|| format!("Failed to open {}", path.display()))?;
        walks.extend(walks_from_reader(file, params));
    }

    Ok(walks)
}

pub fn run(args: WalksArgs) -> Result<(), anyhow::Error> {
    let params = args.params();
    let walks = match &args.input {
        None => {
            info!("Reading track points from stdin");
            walks_from_reader(io::stdin().lock(), &params)
        }
        Some(input) => walks_from_path(input, &params)?,
    };

    info!("Found {} walks", walks.len());
    println!("{}", walk_table(&walks));

    Ok(())
}
