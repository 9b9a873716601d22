use clap::{Parser, Subcommand, ValueEnum};
use folio::{
    DirectorySink, ExportError, ExportItem, ExportTarget, Exporter, LessonPlan, Settings,
    deliver_batch, deliver_each, load_plans,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(version, about = "Render lesson plans as DOCX and PDF documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Export lesson plans read from JSON files
    Export(ExportArgs),
}

#[derive(clap::Args, Debug)]
struct ExportArgs {
    /// JSON files, each holding one lesson plan or an array of them
    #[arg(required = true)]
    plans: Vec<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Both)]
    format: Format,

    /// Learning-outcome code prefixed to every filename
    #[arg(long)]
    slo_id: Option<String>,

    /// Put all plans into one document per format with this name
    #[arg(long, value_name = "NAME")]
    batch: Option<String>,

    /// Output directory, overriding the settings file
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Settings file (defaults to ./folio.toml when present)
    #[arg(long, value_name = "FILE", env = "FOLIO_CONFIG")]
    config: Option<PathBuf>,

    /// Print the rendered trees as JSON instead of writing documents
    #[arg(long, default_value_t = false)]
    dump_tree: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Docx,
    Pdf,
    Both,
}

impl Format {
    fn targets(self) -> Vec<ExportTarget> {
        match self {
            Format::Docx => vec![ExportTarget::Flow],
            Format::Pdf => vec![ExportTarget::Page],
            Format::Both => ExportTarget::ALL.to_vec(),
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Export(args) => run_export(args),
    };
    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when some documents failed but others were written.
fn run_export(args: ExportArgs) -> Result<bool, ExportError> {
    let settings = Settings::load(args.config.as_deref())?;
    let output_dir = args.out.unwrap_or(settings.delivery.output_dir);
    let pacing = Duration::from_millis(settings.delivery.pacing_ms);

    let mut plans: Vec<LessonPlan> = Vec::new();
    for path in &args.plans {
        plans.extend(load_plans(path)?);
    }
    log::info!(
        "Loaded {} plan(s) from {} file(s)",
        plans.len(),
        args.plans.len()
    );

    let exporter = Exporter::new(settings.render);
    let targets = args.format.targets();

    if args.dump_tree {
        let mut exports = Vec::new();
        match &args.batch {
            Some(name) => {
                for &target in &targets {
                    exports.push(exporter.export_batch(&plans, target, name)?);
                }
            }
            None => {
                for plan in &plans {
                    for &target in &targets {
                        exports.push(exporter.export(plan, target, args.slo_id.as_deref()));
                    }
                }
            }
        }
        println!("{}", serde_json::to_string_pretty(&exports)?);
        return Ok(true);
    }

    let mut sink = DirectorySink::new(output_dir);

    let reports = match &args.batch {
        Some(name) => deliver_batch(&exporter, &plans, &targets, name, &mut sink, pacing),
        None => {
            let items: Vec<ExportItem> = plans
                .into_iter()
                .map(|plan| ExportItem::new(plan, args.slo_id.clone()))
                .collect();
            deliver_each(&exporter, &items, &targets, &mut sink, pacing)
        }
    };

    let mut all_ok = true;
    for report in &reports {
        match &report.result {
            Ok(path) => println!("{}", path.display()),
            Err(e) => {
                all_ok = false;
                eprintln!("[{}] {}: {}", report.index, report.filename, e);
            }
        }
    }
    Ok(all_ok)
}
