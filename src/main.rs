use std::error::Error;
use std::fs;
use std::process::ExitCode;

use reservoir_sampler::{
    ClipMode, PlanOptions, SpacingPolicy, boundary, estimated_cell_count, export, plan, regions,
};

/// Caller-side safety bound: refuse grids this CLI would take minutes to
/// clip rather than letting the pipeline churn through them.
const MAX_CELLS: usize = 250_000;

const USAGE: &str = "\
usage: reservoir-sampler <boundary.json|boundary.shp> [options]

options:
  --sites N           number of sampling sites (1-50, default 6)
  --policy P          tiered | manual:<spacing_deg> | density  (default tiered)
  --mode M            clip | filter  (default clip)
  --seed S            RNG seed for reproducible selection
  --region NAME       known reservoir name, prints its map center
  --csv PATH          write sites as CSV to PATH
";

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(boundary_path) = args.first().filter(|a| !a.starts_with("--")) else {
        eprint!("{USAGE}");
        return Err("missing boundary file".into());
    };

    let mut options = PlanOptions::default();
    let mut csv_path: Option<String> = None;
    let mut region_name: Option<String> = None;

    let mut rest = args[1..].iter();
    while let Some(flag) = rest.next() {
        let mut value = || {
            rest.next()
                .map(String::as_str)
                .ok_or_else(|| format!("{flag} needs a value"))
        };
        match flag.as_str() {
            "--sites" => options.requested_sites = value()?.parse()?,
            "--policy" => options.policy = parse_policy(value()?)?,
            "--mode" => {
                options.mode = match value()? {
                    "clip" => ClipMode::Clip,
                    "filter" => ClipMode::Filter,
                    other => return Err(format!("unknown clip mode {other:?}").into()),
                }
            }
            "--seed" => options.seed = Some(value()?.parse()?),
            "--region" => region_name = Some(value()?.to_string()),
            "--csv" => csv_path = Some(value()?.to_string()),
            other => {
                eprint!("{USAGE}");
                return Err(format!("unknown option {other:?}").into());
            }
        }
    }

    // density policy sizes cells off the requested count, whatever order
    // the flags came in
    if let SpacingPolicy::DensityByTargetCount { .. } = options.policy {
        options.policy = SpacingPolicy::DensityByTargetCount {
            target_sites: options.requested_sites,
        };
    }

    if let Some(name) = &region_name {
        if let Some(region) = regions::find_region(name) {
            let center = region.center();
            println!(
                "{}: map center {:.4}, {:.4}",
                region.name,
                center.y(),
                center.x()
            );
        }
    }

    let polygon = if boundary_path.ends_with(".shp") {
        boundary::from_shapefile(boundary_path)?
    } else {
        let json = fs::read_to_string(boundary_path)?;
        boundary::from_geojson(&json)?
    };

    // cell-count guard before any tiling happens, whatever policy picked
    // the spacing
    let estimate = estimated_cell_count(&polygon, options.policy)?;
    if estimate > MAX_CELLS {
        return Err(format!(
            "this boundary would tile ~{estimate} cells (limit {MAX_CELLS}); \
             widen the spacing or draw a smaller boundary"
        )
        .into());
    }

    let result = plan(&polygon, &options)?;

    println!(
        "area: {:.1} acres ({:.1} ha), spacing: {} m ({:.5} deg), {} candidate cells",
        result.area.acres,
        result.area.hectares,
        result.spacing.spacing_meters,
        result.spacing.spacing_deg,
        result.candidate_cell_count,
    );
    if let Some(clamp) = result.clamp {
        println!(
            "note: only {} candidate cells available, returning {} sites instead of {}",
            clamp.available, clamp.available, clamp.requested
        );
    }
    for site in &result.sites {
        println!(
            "site {:>2}: {:.6}, {:.6}",
            site.index, site.latitude, site.longitude
        );
    }

    if let Some(path) = csv_path {
        fs::write(&path, export::to_csv(&result.sites))?;
        println!("wrote {path}");
    }

    Ok(())
}

fn parse_policy(value: &str) -> Result<SpacingPolicy, Box<dyn Error>> {
    if value == "tiered" {
        return Ok(SpacingPolicy::TieredByArea);
    }
    if value == "density" {
        // target count is patched in from --sites after parsing
        return Ok(SpacingPolicy::DensityByTargetCount { target_sites: 6 });
    }
    if let Some(spacing) = value.strip_prefix("manual:") {
        return Ok(SpacingPolicy::Manual {
            spacing_deg: spacing.parse()?,
        });
    }
    Err(format!("unknown spacing policy {value:?}").into())
}
