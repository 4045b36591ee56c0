use clap::Parser;
use log::info;
use mimalloc::MiMalloc;
use std::env;
use std::fs;
use std::path::PathBuf;
use trellis::{SceneConfig, SceneDescription, SceneTree, SolverMode, TrellisError};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser, Debug)]
#[command(version, about = "Lay out a JSON scene description and print its geometry")]
struct Args {
    /// Scene description (JSON)
    description: PathBuf,

    /// Scene configuration (JSON); defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Overrides the solver mode from the configuration
    #[arg(long, value_enum)]
    solver: Option<SolverArg>,

    /// Pretty-print the report
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum SolverArg {
    Inline,
    Worker,
}

impl From<SolverArg> for SolverMode {
    fn from(arg: SolverArg) -> Self {
        match arg {
            SolverArg::Inline => SolverMode::Inline,
            SolverArg::Worker => SolverMode::Worker,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), TrellisError> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "trellis=info");
        }
    }
    env_logger::init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SceneConfig::from_json(&fs::read_to_string(path)?)?,
        None => SceneConfig::default(),
    };
    if let Some(solver) = args.solver {
        config.solver = solver.into();
    }

    let description = SceneDescription::from_json(&fs::read_to_string(&args.description)?)?;
    let mut tree = SceneTree::<String>::from_config(config)?;
    let roots = tree.build_from_description(&description)?;
    info!("Built {} nodes under {} top-level nodes", tree.len(), roots.len());

    // The first frame schedules and dispatches every root.
    let mut report = tree.frame();
    report += tree.settle().await;
    info!(
        "Layout settled: {} dispatched, {} applied, {} failed",
        report.dispatched, report.applied, report.failed
    );

    let layout = tree.layout_report();
    let json = if args.pretty {
        serde_json::to_string_pretty(&layout)?
    } else {
        serde_json::to_string(&layout)?
    };
    println!("{}", json);
    Ok(())
}
