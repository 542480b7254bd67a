use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ebc-aktivace")]
#[command(about = "Doporučení aktivace EBC – souhrn položek z tabulek zboží", long_about = None)]
pub struct Cli {
    /// Bez podpříkazu se zpracuje složka, ve které leží program
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Podrobný výpis
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Nečekat na Enter před ukončením
    #[arg(long, global = true)]
    pub no_pause: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Zpracuje všechny sešity ve složce a zapíše souhrnný výstup
    Run {
        /// Složka se vstupními sešity (výchozí: aktuální složka)
        folder: Option<PathBuf>,

        /// Název referenčního souboru
        #[arg(long)]
        reference: Option<String>,

        /// Název výstupního souboru
        #[arg(short, long)]
        output: Option<String>,

        /// Počet pracovních vláken (výchozí: počet jader)
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Nevypisovat souhrn stavů dat
        #[arg(long)]
        no_summary: bool,

        /// Zapsat zprávy o zpracování do souboru
        #[arg(long)]
        log: Option<PathBuf>,
    },

    /// Zobrazí/upraví nastavení
    Config {
        /// Zobrazit nastavení
        #[arg(long)]
        show: bool,

        /// Obnovit výchozí nastavení
        #[arg(long)]
        reset: bool,

        /// Nastavit počet vláken (0 = počet jader)
        #[arg(long)]
        set_jobs: Option<usize>,

        /// Nastavit čekání na Enter před ukončením
        #[arg(long)]
        set_pause: Option<bool>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["ebc-aktivace"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.no_pause);
    }

    #[test]
    fn test_run_options() {
        let cli = Cli::try_parse_from([
            "ebc-aktivace",
            "run",
            "data",
            "--reference",
            "ref.xlsx",
            "-j",
            "2",
            "--no-summary",
            "--no-pause",
        ])
        .unwrap();

        assert!(cli.no_pause);
        match cli.command {
            Some(Commands::Run { folder, reference, jobs, no_summary, output, log }) => {
                assert_eq!(folder, Some(PathBuf::from("data")));
                assert_eq!(reference.as_deref(), Some("ref.xlsx"));
                assert_eq!(jobs, Some(2));
                assert!(no_summary);
                assert!(output.is_none());
                assert!(log.is_none());
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_config_set_pause() {
        let cli = Cli::try_parse_from(["ebc-aktivace", "config", "--set-pause", "false"]).unwrap();
        match cli.command {
            Some(Commands::Config { set_pause, .. }) => assert_eq!(set_pause, Some(false)),
            _ => panic!("expected config"),
        }
    }
}
