use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use homefin::cli::{
    handle_budget_command, handle_depreciation_command, handle_expense_command,
    handle_loan_command, handle_mileage_command, BudgetArgs, DepreciationArgs, ExpenseArgs,
    LoanArgs, MileageArgs,
};
use homefin::config::{HomefinPaths, OutputFormat, Settings};

#[derive(Parser)]
#[command(
    name = "homefin",
    author = "Kaylee Beyene",
    version,
    about = "Household finance helpers",
    long_about = "homefin categorizes household expenses against income, computes \
                  straight-line depreciation, logs expenses by date, applies monthly \
                  loan payments and tracks business/personal mileage."
)]
struct Cli {
    /// Output format (defaults to the configured format)
    #[arg(long, global = true, value_enum, env = "HOMEFIN_FORMAT")]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Total expenses by category as a share of income
    Budget(BudgetArgs),

    /// Straight-line annual depreciation of an asset
    #[command(alias = "dep")]
    Depreciation(DepreciationArgs),

    /// Add an expense to a date-keyed log
    Expense(ExpenseArgs),

    /// Apply one monthly payment to a loan
    Loan(LoanArgs),

    /// Add trips to a business/personal mileage record
    Mileage(MileageArgs),

    /// Write default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = HomefinPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let format = cli.format.unwrap_or(settings.output_format);

    match cli.command {
        Some(Commands::Budget(args)) => handle_budget_command(&settings, format, args)?,
        Some(Commands::Depreciation(args)) => {
            handle_depreciation_command(&settings, format, args)?
        }
        Some(Commands::Expense(args)) => handle_expense_command(&settings, format, args)?,
        Some(Commands::Loan(args)) => handle_loan_command(&settings, format, args)?,
        Some(Commands::Mileage(args)) => handle_mileage_command(&settings, format, args)?,
        Some(Commands::Init) => {
            settings.save(&paths)?;
            tracing::info!(path = %paths.settings_file().display(), "wrote settings");
            println!("Settings written to: {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("homefin Configuration");
            println!("=====================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Output format:   {:?}", settings.output_format);
            println!("  Log level:       {}", settings.log_level);
        }
        None => {
            println!("homefin - Household finance helpers");
            println!();
            println!("Run 'homefin --help' for usage information.");
        }
    }

    Ok(())
}
