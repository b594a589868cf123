use crate::cli::RunArgs;
use crate::config::{Config, ConfigOverlay};
use crate::discovery::discover_files;
use crate::exit::terminate;
use crate::output::render;
use crate::registry::LinterRegistry;
use crate::scheduler::run_all;
use tracing::info;

pub async fn execute(args: RunArgs) -> anyhow::Result<()> {
    // Ordered overlay: defaults, project file, local file, then CLI flags
    let mut config = Config::resolve(&args.project_dir, args.config.as_deref())?;
    ConfigOverlay {
        diff_command: args.diff_command,
        exclude_patterns: args.exclude,
        linters: None,
    }
    .apply(&mut config);

    config.validate()?;

    let registry = LinterRegistry::from_config(&config, &args.project_dir);

    // Discovery failure is fatal and precedes every linter invocation
    let files = discover_files(&config, &args.project_dir).await?;
    info!(
        "Gating {} changed files through {} linters",
        files.len(),
        registry.len()
    );

    if args.dry_run {
        print_plan(&config, &files);
        return Ok(());
    }

    let results = run_all(&registry.linters(), &files).await?;

    let (text, signal) = render(&results);
    print!("{}", text);
    terminate(signal);
}

fn print_plan(config: &Config, files: &[String]) {
    println!("\n=== Gate Plan ===\n");
    println!("Diff command: {}", config.diff_command);

    println!("\nSelected files:");
    if files.is_empty() {
        println!("  (none)");
    }
    for file in files {
        println!("  - {}", file);
    }

    println!("\nLinters to run:");
    for linter in &config.linters {
        println!(
            "  - {} ({}) -> extensions: {:?}",
            linter.name, linter.command, linter.extensions
        );
    }
    println!();
}
