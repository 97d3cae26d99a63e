use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use cutplan::config::CutConfig;
use cutplan::io::cli::Cli;
use cutplan::io::output::PlanOutput;
use cutplan::{io, plan};
use log::{info, warn};
use sheetpack::io::svg::solution_to_svg;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            CutConfig::default()
        }
        Some(config_file) => io::read_config(config_file)?,
    };
    if let Some(kind) = args.strategy {
        config.strategy = kind.apply(config.strategy);
    }

    info!("Successfully parsed CutConfig: {config:?}");

    let input_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("invalid input file name: {}", args.input_file.display()))?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let request = io::read_request(&args.input_file)?;
    let (instance, solution) = plan(&request, &config).context("could not plan request")?;

    {
        let svg_path = args.solution_folder.join(format!("sol_{input_stem}.svg"));
        let svg = solution_to_svg(&instance.sheet, &solution, config.svg_draw_options, input_stem);

        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    {
        let output = PlanOutput {
            request,
            solution,
            config,
        };
        let solution_path = args.solution_folder.join(format!("sol_{input_stem}.json"));

        io::write_json(&output, Path::new(&solution_path))?;
    }

    Ok(())
}
