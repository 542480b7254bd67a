use clap::Parser;
use ebc_aktivace::{cli, config, error, pipeline, prompt};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use pipeline::{OutputState, RunSettings};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("⚠️ {} – používám výchozí nastavení", e);
            Config::default()
        }
    };

    match cli.command {
        Some(Commands::Config { show, reset, set_jobs, set_pause }) => {
            match configure(config, show, reset, set_jobs, set_pause) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("❌ {}", e);
                    ExitCode::FAILURE
                }
            }
        }

        Some(Commands::Run { folder, reference, output, jobs, no_summary, log }) => {
            let folder = folder.unwrap_or_else(|| PathBuf::from("."));
            let mut settings = RunSettings::from_config(&config, resolve_folder(folder));
            if let Some(reference) = reference {
                settings.reference_file = reference;
            }
            if let Some(output) = output {
                settings.output_file = output;
            }
            if let Some(jobs) = jobs {
                settings.workers = jobs.max(1);
            }
            settings.show_summary = settings.show_summary && !no_summary;
            settings.log_path = log;
            settings.verbose = cli.verbose;

            run_batch(&settings, config.pause_on_exit && !cli.no_pause)
        }

        None => {
            let mut settings = RunSettings::from_config(&config, executable_dir());
            settings.verbose = cli.verbose;
            run_batch(&settings, config.pause_on_exit && !cli.no_pause)
        }
    }
}

fn run_batch(settings: &RunSettings, pause: bool) -> ExitCode {
    println!("📦 ebc-aktivace - doporučení aktivace EBC\n");
    if settings.verbose {
        println!("Složka: {}", settings.folder.display());
        println!("Vláken: {}\n", settings.workers);
    }

    let code = match pipeline::run(settings) {
        Ok(report) => {
            if settings.verbose {
                println!(
                    "\nSouborů: {}, se zpracovanými položkami: {}",
                    report.files, report.processed
                );
                if let OutputState::Written { rows, .. } = report.output {
                    println!("Řádků ve výstupu: {}", rows);
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    };

    if pause {
        prompt::wait_for_exit();
    }
    code
}

fn configure(
    mut config: Config,
    show: bool,
    reset: bool,
    set_jobs: Option<usize>,
    set_pause: Option<bool>,
) -> Result<()> {
    if reset {
        config = Config::default();
        config.save()?;
        println!("✔ Nastavení obnoveno");
    }

    if let Some(jobs) = set_jobs {
        config.workers = if jobs == 0 { None } else { Some(jobs) };
        config.save()?;
        println!("✔ Počet vláken nastaven");
    }

    if let Some(pause) = set_pause {
        config.pause_on_exit = pause;
        config.save()?;
        println!("✔ Čekání na Enter: {}", if pause { "ano" } else { "ne" });
    }

    if show || (!reset && set_jobs.is_none() && set_pause.is_none()) {
        println!("Nastavení ({}):", Config::config_path()?.display());
        println!("  Referenční soubor: {}", config.reference_file);
        println!("  Výstupní soubor: {}", config.output_file);
        match config.workers {
            Some(n) => println!("  Vláken: {}", n),
            None => println!("  Vláken: podle jader ({})", config.worker_count()),
        }
        println!("  Čekat na Enter: {}", if config.pause_on_exit { "ano" } else { "ne" });
        println!("  Souhrn stavů: {}", if config.show_summary { "ano" } else { "ne" });
    }

    Ok(())
}

/// Složka programu (při spuštění dvojklikem se zpracuje ta)
fn executable_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn resolve_folder(folder: PathBuf) -> PathBuf {
    folder.canonicalize().unwrap_or(folder)
}
