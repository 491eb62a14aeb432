use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use flagx_rs::view::ListState;
use flagx_rs::{Client, Country, DisplayList, SortMode};
use flagx_rs::{browse, format, storage, view};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "flagx",
    version,
    about = "Browse countries & their flags via the Flag Explorer backend API"
)]
struct Cli {
    /// Backend base URL (overrides FLAGX_API_URL).
    #[arg(long, global = true)]
    api_url: Option<String>,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List countries (and optionally search, sort, and save).
    List(ListArgs),
    /// Show one country's details, looked up by name.
    Show(ShowArgs),
    /// Probe backend liveness.
    Health,
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
enum SortOption {
    /// Alphabetical, A to Z.
    #[default]
    NameAsc,
    /// Alphabetical, Z to A.
    NameDesc,
    /// Smallest population first.
    PopAsc,
    /// Largest population first.
    PopDesc,
    /// Group by region.
    Region,
}

impl From<SortOption> for SortMode {
    fn from(opt: SortOption) -> Self {
        match opt {
            SortOption::NameAsc => SortMode::NameAsc,
            SortOption::NameDesc => SortMode::NameDesc,
            SortOption::PopAsc => SortMode::PopulationAsc,
            SortOption::PopDesc => SortMode::PopulationDesc,
            SortOption::Region => SortMode::Region,
        }
    }
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Only show countries whose name contains this term (case-insensitive).
    #[arg(short, long)]
    search: Option<String>,
    /// Sort or group the visible list.
    #[arg(long, value_enum, default_value_t = SortOption::NameAsc)]
    sort: SortOption,
    /// Save the fetched list to a file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
}

#[derive(Args, Debug)]
struct ShowArgs {
    /// Country name, e.g. "Canada" or "Costa Rica".
    name: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = match cli.api_url {
        Some(url) => Client::new(url),
        None => Client::from_env(),
    };
    match cli.cmd {
        Command::List(args) => cmd_list(&client, args),
        Command::Show(args) => cmd_show(&client, args),
        Command::Health => cmd_health(&client),
    }
}

fn cmd_list(client: &Client, args: ListArgs) -> Result<()> {
    // load_countries resolves synchronously; Loading never comes back out.
    let countries = match view::load_countries(client) {
        ListState::Ready(countries) => countries,
        ListState::Failed(msg) => anyhow::bail!("{msg}"),
        ListState::Loading => anyhow::bail!("backend returned no data"),
    };

    let sort = SortMode::from(args.sort);
    let visible = browse::derive_view(&countries, args.search.as_deref().unwrap_or(""), sort);

    match &visible {
        DisplayList::Flat(rows) => {
            for c in rows {
                print_card(c, sort, "");
            }
        }
        DisplayList::Grouped(buckets) => {
            for bucket in buckets {
                println!("{}:", bucket.region);
                for c in &bucket.countries {
                    print_card(c, sort, "  ");
                }
            }
        }
    }
    println!("Found {} countries", visible.len());

    if let Some(path) = args.out.as_ref() {
        let fmt = match args.format {
            Some(OutFormat::Csv) => "csv",
            Some(OutFormat::Json) => "json",
            None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
        }
        .to_ascii_lowercase();
        match fmt.as_str() {
            "csv" => storage::save_csv(&countries, path)?,
            "json" => storage::save_json(&countries, path)?,
            other => anyhow::bail!("unsupported format: {}", other),
        }
        eprintln!("Saved {} countries to {}", countries.len(), path.display());
    }

    Ok(())
}

fn print_card(c: &Country, sort: SortMode, indent: &str) {
    if sort.shows_population() {
        println!(
            "{indent}{:<32} {:>8}  {}",
            c.name,
            format::abbreviate_population(c.population),
            c.flag
        );
    } else {
        println!("{indent}{:<32} {}", c.name, c.flag);
    }
}

fn cmd_show(client: &Client, args: ShowArgs) -> Result<()> {
    let details = client.fetch_country_by_name(&args.name)?;
    println!("{}", details.name);
    println!("  Code:       {}", details.code.as_deref().unwrap_or("N/A"));
    println!("  Capital:    {}", details.capital.as_deref().unwrap_or("N/A"));
    println!("  Region:     {}", details.region.as_deref().unwrap_or("N/A"));
    println!(
        "  Population: {}",
        format::format_population(details.population)
    );
    println!("  Area:       {}", format::format_area(details.area));
    println!("  Flag:       {}", details.flag);
    Ok(())
}

fn cmd_health(client: &Client) -> Result<()> {
    let health = client.check_health()?;
    println!("{} ({})", health.status, health.service);
    Ok(())
}
