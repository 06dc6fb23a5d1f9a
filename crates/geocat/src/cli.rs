//! Clap derive structures for the `geocat` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// geocat -- admin console for the catalog backend
#[derive(Debug, Parser)]
#[command(
    name = "geocat",
    version,
    about = "Manage catalog entities from the command line",
    long_about = "Admin console for the catalog backend: countries, states, cities,\n\
        locations, products, SEO entries, inquiries, and employees.\n\n\
        Every mutation is staged behind a confirmation prompt; list views\n\
        paint the last cached snapshot before reconciling from the backend.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Backend base URL (overrides config)
    #[arg(long, short = 'b', env = "GEOCAT_BACKEND", global = true)]
    pub backend: Option<String>,

    /// Admin email for the session
    #[arg(long, short = 'e', env = "GEOCAT_EMAIL", global = true)]
    pub email: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "GEOCAT_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Skip the snapshot cache (always hit the network cold)
    #[arg(long, env = "GEOCAT_NO_CACHE", global = true)]
    pub no_cache: bool,

    /// Request timeout in seconds
    #[arg(long, env = "GEOCAT_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
    /// Plain text, one id per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values
    Csv,
    /// PDF table
    Pdf,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in against the backend session check
    Login,

    /// Sign out and drop the cached session
    Logout,

    /// Manage countries
    Countries(CountriesArgs),

    /// Manage states
    States(StatesArgs),

    /// Manage cities
    Cities(CitiesArgs),

    /// Manage locations
    #[command(alias = "loc")]
    Locations(LocationsArgs),

    /// Manage products
    #[command(alias = "prod")]
    Products(ProductsArgs),

    /// Manage SEO entries and their custom field registry
    Seo(SeoArgs),

    /// Review customer inquiries
    #[command(alias = "inq")]
    Inquiries(InquiriesArgs),

    /// View the employee roster
    #[command(alias = "emp")]
    Employees(EmployeesArgs),

    /// Show entity counts across the catalog
    #[command(alias = "dashboard")]
    Stats,

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Shared list/export arguments ─────────────────────────────────────

#[derive(Debug, Args)]
pub struct ListOpts {
    /// Case-insensitive substring filter over the visible columns
    #[arg(long, short = 's')]
    pub search: Option<String>,
}

#[derive(Debug, Args)]
pub struct ExportOpts {
    /// Export file format
    #[arg(long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Output file path
    #[arg(long, short = 'O', value_name = "FILE")]
    pub out: PathBuf,

    /// Filter rows before exporting
    #[arg(long, short = 's')]
    pub search: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  GEOGRAPHY
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CountriesArgs {
    #[command(subcommand)]
    pub command: CountriesCommand,
}

#[derive(Debug, Subcommand)]
pub enum CountriesCommand {
    /// List countries
    #[command(alias = "ls")]
    List(ListOpts),

    /// Add a country
    Add {
        #[arg(long)]
        name: String,

        /// ISO-style short code
        #[arg(long, default_value = "")]
        code: String,
    },

    /// Edit a country
    Edit {
        /// Country id
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        code: Option<String>,
    },

    /// Delete a country
    #[command(alias = "rm")]
    Delete {
        /// Country id
        id: String,
    },

    /// Export the (filtered) country list
    Export(ExportOpts),
}

#[derive(Debug, Args)]
pub struct StatesArgs {
    #[command(subcommand)]
    pub command: StatesCommand,
}

#[derive(Debug, Subcommand)]
pub enum StatesCommand {
    /// List states, optionally scoped to one country
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        opts: ListOpts,

        /// Only states belonging to this country id
        #[arg(long)]
        country: Option<String>,
    },

    /// Add a state
    Add {
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        code: String,

        /// Owning country id
        #[arg(long)]
        country: Option<String>,
    },

    /// Edit a state
    Edit {
        /// State id
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        code: Option<String>,

        #[arg(long)]
        country: Option<String>,
    },

    /// Delete a state
    #[command(alias = "rm")]
    Delete {
        /// State id
        id: String,
    },

    /// Export the (filtered) state list
    Export(ExportOpts),
}

#[derive(Debug, Args)]
pub struct CitiesArgs {
    #[command(subcommand)]
    pub command: CitiesCommand,
}

#[derive(Debug, Subcommand)]
pub enum CitiesCommand {
    /// List cities
    #[command(alias = "ls")]
    List(ListOpts),

    /// Add a city
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        country: Option<String>,

        #[arg(long)]
        state: Option<String>,
    },

    /// Edit a city
    Edit {
        /// City id
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        country: Option<String>,

        #[arg(long)]
        state: Option<String>,
    },

    /// Delete a city
    #[command(alias = "rm")]
    Delete {
        /// City id
        id: String,
    },

    /// Export the (filtered) city list
    Export(ExportOpts),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CATALOG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct LocationsArgs {
    #[command(subcommand)]
    pub command: LocationsCommand,
}

#[derive(Debug, Subcommand)]
pub enum LocationsCommand {
    /// List locations
    #[command(alias = "ls")]
    List(ListOpts),

    /// Add a location (anchor it to at least one geographic level)
    Add {
        #[arg(long)]
        name: String,

        /// URL slug (lowercase letters, digits, hyphens)
        #[arg(long, default_value = "")]
        slug: String,

        #[arg(long)]
        country: Option<String>,

        #[arg(long)]
        state: Option<String>,

        #[arg(long)]
        city: Option<String>,
    },

    /// Edit a location
    Edit {
        /// Location id
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        slug: Option<String>,

        #[arg(long)]
        country: Option<String>,

        #[arg(long)]
        state: Option<String>,

        #[arg(long)]
        city: Option<String>,
    },

    /// Delete a location
    #[command(alias = "rm")]
    Delete {
        /// Location id
        id: String,
    },

    /// Export the (filtered) location list
    Export(ExportOpts),
}

#[derive(Debug, Args)]
pub struct ProductsArgs {
    #[command(subcommand)]
    pub command: ProductsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProductsCommand {
    /// List products
    #[command(alias = "ls")]
    List(ListOpts),

    /// Add a product
    Add {
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long, default_value = "")]
        slug: String,
    },

    /// Edit a product
    Edit {
        /// Product id
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        slug: Option<String>,
    },

    /// Delete a product
    #[command(alias = "rm")]
    Delete {
        /// Product id
        id: String,
    },

    /// Export the (filtered) product list
    Export(ExportOpts),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SEO
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct SeoArgs {
    #[command(subcommand)]
    pub command: SeoCommand,
}

#[derive(Debug, Subcommand)]
pub enum SeoCommand {
    /// List SEO entries
    #[command(alias = "ls")]
    List(ListOpts),

    /// Add an SEO entry
    Add(SeoFieldOpts),

    /// Edit an SEO entry
    Edit {
        /// SEO entry id
        id: String,

        #[command(flatten)]
        fields: SeoFieldOpts,
    },

    /// Delete an SEO entry
    #[command(alias = "rm")]
    Delete {
        /// SEO entry id
        id: String,
    },

    /// Export the (filtered) SEO entry list
    Export(ExportOpts),

    /// Manage the custom field registry
    Fields(SeoFieldsArgs),
}

/// SEO field flags shared by `seo add` and `seo edit`. `--from-file`
/// loads the full field set as JSON first; flags override on top.
#[derive(Debug, Args)]
pub struct SeoFieldOpts {
    #[arg(long)]
    pub sku: Option<String>,

    #[arg(long)]
    pub slug: Option<String>,

    /// Linked location id
    #[arg(long)]
    pub location: Option<String>,

    /// Linked product id
    #[arg(long)]
    pub product: Option<String>,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub keywords: Option<String>,

    #[arg(long)]
    pub canonical_url: Option<String>,

    /// Custom field value, repeatable (KEY=VALUE)
    #[arg(long = "custom", value_name = "KEY=VALUE")]
    pub custom: Vec<String>,

    /// JSON file with the full field set
    #[arg(long, value_name = "FILE")]
    pub from_file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct SeoFieldsArgs {
    #[command(subcommand)]
    pub command: SeoFieldsCommand,
}

#[derive(Debug, Subcommand)]
pub enum SeoFieldsCommand {
    /// List custom field definitions
    #[command(alias = "ls")]
    List(ListOpts),

    /// Register a custom field
    Add {
        #[arg(long)]
        name: String,

        /// Field shape
        #[arg(long = "type", value_enum, default_value = "text")]
        kind: FieldKindArg,

        /// Admissible values for dropdown fields (comma-separated)
        #[arg(long, value_delimiter = ',')]
        options: Vec<String>,
    },

    /// Remove a custom field definition
    #[command(alias = "rm")]
    Delete {
        /// Definition id
        id: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FieldKindArg {
    Text,
    Number,
    Dropdown,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  BACK OFFICE
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct InquiriesArgs {
    #[command(subcommand)]
    pub command: InquiriesCommand,
}

#[derive(Debug, Subcommand)]
pub enum InquiriesCommand {
    /// List inquiries
    #[command(alias = "ls")]
    List(ListOpts),

    /// Edit an inquiry
    Edit {
        /// Inquiry id
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        message: Option<String>,
    },

    /// Delete an inquiry
    #[command(alias = "rm")]
    Delete {
        /// Inquiry id
        id: String,
    },

    /// Export the (filtered) inquiry list
    Export(ExportOpts),
}

#[derive(Debug, Args)]
pub struct EmployeesArgs {
    #[command(subcommand)]
    pub command: EmployeesCommand,
}

#[derive(Debug, Subcommand)]
pub enum EmployeesCommand {
    /// List employees
    #[command(alias = "ls")]
    List(ListOpts),

    /// Export the (filtered) employee list
    Export(ExportOpts),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG / COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Print the config file path
    Path,

    /// Write a starter config file
    Init {
        /// Backend base URL to record
        #[arg(long)]
        backend: Option<String>,

        /// Admin email to record
        #[arg(long)]
        email: Option<String>,
    },
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
