#![forbid(unsafe_code)]
use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use rota::{
    build_report, io,
    model::StaffId,
    planner::{violations_of, PlanRequest, Planner, ResolveOptions, RosterTracker},
    storage::{JsonStorage, Storage},
};
use std::collections::BTreeSet;
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de planning d'astreinte annuel (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON du plan
    #[arg(long, global = true, default_value = "plan.json")]
    plan: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Générer le plan d'une année : classification, round-robin, réparation
    Generate {
        #[arg(long)]
        year: i32,
        /// liste "id1,id2,..."
        #[arg(long)]
        staff: Option<String>,
        /// CSV des membres (header `id`)
        #[arg(long)]
        staff_csv: Option<String>,
        /// CSV des fériés (header `date`, YYYY-MM-DD)
        #[arg(long)]
        holidays: Option<String>,
        #[arg(long, default_value_t = 5)]
        min_gap: u32,
        /// Borne de la boucle de réparation (obligatoire, pas de défaut sûr)
        #[arg(long)]
        max_iterations: u32,
    },

    /// Vérifier les écarts du plan courant
    Check {
        /// Seuil à vérifier (défaut : celui du plan)
        #[arg(long)]
        min_gap: Option<u32>,
        /// Export CSV des violations (optionnel)
        #[arg(long)]
        report: Option<String>,
    },

    /// Synthèse par membre
    Summary {
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Exporter le plan (JSON et/ou table CSV jour par jour)
    Export {
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.plan)?;

    let code = match cli.cmd {
        Commands::Generate {
            year,
            staff,
            staff_csv,
            holidays,
            min_gap,
            max_iterations,
        } => {
            let staff = match (staff, staff_csv) {
                (Some(list), None) => list
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(StaffId::new)
                    .collect(),
                (None, Some(path)) => io::import_staff_csv(path)?,
                (None, None) => bail!("provide --staff or --staff-csv"),
                (Some(_), Some(_)) => bail!("--staff and --staff-csv are exclusive"),
            };
            let holidays = match holidays {
                Some(path) => io::import_holidays_csv(path)?,
                None => BTreeSet::new(),
            };

            let request = PlanRequest {
                year,
                staff,
                holidays,
                options: ResolveOptions::new(max_iterations).with_min_gap(min_gap),
            };
            let mut planner = Planner::build(&request)?;
            let outcome = planner.resolve();
            let report = build_report(planner.plan(), planner.tracker(), outcome.violations);

            storage.save(planner.plan())?;
            print_summary(&report);
            println!(
                "iterations: {} | swaps: {} | min gap observed: {}",
                outcome.iterations,
                outcome.swaps,
                report
                    .min_gap_observed
                    .map_or_else(|| "-".to_string(), |g| g.to_string())
            );

            if report.is_clean() {
                0
            } else {
                eprintln!("{} short-gap violation(s) remain", report.violations.len());
                for v in &report.violations {
                    eprintln!("  {} | {} | gap {}", v.staff, v.date, v.gap_days);
                }
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
        Commands::Check { min_gap, report } => {
            let plan = storage.load()?;
            let min_gap = min_gap.unwrap_or(plan.min_gap);
            let violations = violations_of(&plan, min_gap);
            if violations.is_empty() {
                println!("OK: no short gaps under {min_gap}");
                0
            } else {
                eprintln!("Found {} short gap(s)", violations.len());
                if let Some(path) = report {
                    // CSV simple
                    let mut w = csv::Writer::from_path(path)?;
                    w.write_record(["staff", "date", "gap_days"])?;
                    for v in &violations {
                        w.write_record([
                            v.staff.as_str().to_string(),
                            v.date.to_string(),
                            v.gap_days.to_string(),
                        ])?;
                    }
                    w.flush()?;
                }
                2
            }
        }
        Commands::Summary { out_csv } => {
            let plan = storage.load()?;
            let tracker = RosterTracker::from_plan(&plan);
            let violations = violations_of(&plan, plan.min_gap);
            let report = build_report(&plan, &tracker, violations);
            if let Some(path) = out_csv {
                io::export_summary_csv(path, &report)?;
            }
            print_summary(&report);
            0
        }
        Commands::Export { out_json, out_csv } => {
            let plan = storage.load()?;
            if let Some(path) = out_json {
                io::export_plan_json(path, &plan)?;
            }
            if let Some(path) = out_csv {
                io::export_days_csv(path, &plan)?;
            }
            0
        }
    };

    std::process::exit(code);
}

fn print_summary(report: &rota::RotaReport) {
    println!("staff | hol | wkd | fri | work | w&h | w&f | total | short");
    for row in &report.rows {
        println!(
            "{} | {} | {} | {} | {} | {} | {} | {} | {}",
            row.staff,
            row.holiday,
            row.weekend,
            row.friday,
            row.workday,
            row.weekends_and_holidays,
            row.weekdays_and_fridays,
            row.total,
            row.short_gaps
        );
    }
}
