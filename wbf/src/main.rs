use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use binfill::io::export::export_instance;
use binfill::io::ext_repr::ExtInstance;
use clap::Parser as ClapParser;
use log::{info, warn};
use rand::SeedableRng;
use rand::prelude::SmallRng;
use wbf::config::WBFConfig;
use wbf::generator::InstanceGenerator;
use wbf::io::cli::Cli;
use wbf::io::output::WBFOutput;
use wbf::opt::wbf_optimizer::WBFOptimizer;
use wbf::{EPOCH, io};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config: WBFConfig = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            WBFConfig::default()
        }
        Some(config_file) => {
            let file = File::open(&config_file).with_context(|| {
                format!("could not open config file: {}", config_file.display())
            })?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed WBFConfig: {config:?}");

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let mut rng = match config.prng_seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let (ext_instance, input_stem): (ExtInstance, String) = match &args.input_file {
        Some(input_file) => {
            let stem = input_file
                .file_stem()
                .and_then(|s| s.to_str())
                .context("input file has no valid name")?
                .to_string();
            (io::read_instance(input_file)?, stem)
        }
        None => {
            warn!("[MAIN] No input file provided, generating a random instance");
            let generator = InstanceGenerator::new(config.generator)?;
            let instance = generator.generate(&mut rng)?;
            (export_instance(&instance, "random"), "random".to_string())
        }
    };

    let instance = binfill::io::import(&ext_instance)?;
    info!(
        "[MAIN] instance {} has {} items for a {}x{} container",
        ext_instance.name,
        instance.total_item_qty(),
        instance.base_container.length,
        instance.base_container.width
    );

    let solution = WBFOptimizer::new(instance, config, rng).solve();

    let output = WBFOutput {
        instance: ext_instance,
        solution: binfill::io::export(&solution, *EPOCH),
        config,
    };
    let solution_path = args.solution_folder.join(format!("sol_{input_stem}.json"));
    io::write_json(&output, Path::new(&solution_path))?;

    Ok(())
}
