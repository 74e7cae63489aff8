use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use contacts::config::{config_dir, config_file, load_config, Config, CONFIG_TEMPLATE};
use contacts::render::{render_card, render_contacts, render_form};
use contacts::{
    ContactController, ContactStore, ContactsError, HttpContactApi, Result, Status, SyncStrategy,
};

#[derive(Parser)]
#[command(name = "contacts")]
#[command(version, about = "Minimal CLI contact manager", long_about = None)]
struct Cli {
    /// Path to config directory (default: ~/.contacts or XDG config)
    #[arg(short = 'C', long, global = true)]
    config_dir: Option<PathBuf>,

    /// API base URL, overrides api.base_url from config.toml
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// How to refresh the list after a change (refetch, apply)
    #[arg(long, global = true)]
    sync: Option<String>,

    /// Log requests and state changes to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize config directory with a template config.toml
    Init,

    /// List all contacts
    List,

    /// Show a single contact
    Show {
        /// Contact ID as shown by 'list'
        id: String,
    },

    /// Create a new contact
    Create {
        #[arg(short, long)]
        first_name: String,

        #[arg(short, long)]
        last_name: String,

        /// active or inactive
        #[arg(short, long, default_value = "active")]
        status: String,
    },

    /// Edit an existing contact; omitted fields keep their current value
    Edit {
        /// Contact ID as shown by 'list'
        id: String,

        #[arg(short, long)]
        first_name: Option<String>,

        #[arg(short, long)]
        last_name: Option<String>,

        /// active or inactive
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Delete a contact
    Delete {
        /// Contact ID as shown by 'list'
        id: String,
    },

    /// Show configuration in effect
    Status,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        if e.is_remote() {
            eprintln!("Check api.base_url in config.toml or pass --base-url");
        }
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("contacts=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    // Only fails if a subscriber is already installed
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg_dir = match cli.config_dir {
        Some(p) => p,
        None => config_dir()?,
    };

    let (base_url, sync) = (cli.base_url, cli.sync);
    let config = || resolve_config(&cfg_dir, base_url.as_deref(), sync.as_deref());

    match cli.command {
        Commands::Init => cmd_init(&cfg_dir),
        Commands::Status => cmd_status(&cfg_dir, &config()?),
        Commands::List => cmd_list(&config()?),
        Commands::Show { id } => cmd_show(&config()?, &id),
        Commands::Create {
            first_name,
            last_name,
            status,
        } => cmd_create(&config()?, first_name, last_name, &status),
        Commands::Edit {
            id,
            first_name,
            last_name,
            status,
        } => cmd_edit(&config()?, &id, first_name, last_name, status.as_deref()),
        Commands::Delete { id } => cmd_delete(&config()?, &id),
    }
}

/// config.toml with command-line overrides applied
fn resolve_config(cfg_dir: &PathBuf, base_url: Option<&str>, sync: Option<&str>) -> Result<Config> {
    let mut config = load_config(cfg_dir)?;
    if let Some(url) = base_url {
        config.api.base_url = url.to_string();
    }
    if let Some(sync) = sync {
        config.sync.refresh = sync.parse::<SyncStrategy>()?;
    }
    Ok(config)
}

fn controller(config: &Config) -> ContactController<HttpContactApi> {
    let api = HttpContactApi::new(
        &config.api.base_url,
        Duration::from_secs(config.api.timeout_secs),
    );
    debug!(base_url = api.base_url(), sync = %config.sync.refresh, "mounting");

    ContactController::new(api, ContactStore::new()).with_sync(config.sync.refresh)
}

/// Build the controller and load the list, like a page mount
fn mount(config: &Config) -> Result<ContactController<HttpContactApi>> {
    let mut controller = controller(config);
    controller.fetch_contacts()?;
    Ok(controller)
}

/// Mount for commands that write without needing the list first.
/// A failed initial fetch is already logged by the controller.
fn mount_for_write(config: &Config) -> ContactController<HttpContactApi> {
    let mut controller = controller(config);
    if controller.fetch_contacts().is_err() {
        debug!("continuing without the initial list");
    }
    controller
}

/// Initialize config directory with the template config file
fn cmd_init(cfg_dir: &PathBuf) -> Result<()> {
    use std::fs;

    if cfg_dir.exists() {
        return Err(ContactsError::AlreadyInitialized(cfg_dir.clone()));
    }

    fs::create_dir_all(cfg_dir)?;
    fs::write(config_file(cfg_dir), CONFIG_TEMPLATE)?;

    println!("Initialized contacts config at: {}", cfg_dir.display());
    println!();
    println!("Point it at your API:  $EDITOR {}", config_file(cfg_dir).display());
    println!("Then list contacts:    contacts list");

    Ok(())
}

fn cmd_status(cfg_dir: &PathBuf, config: &Config) -> Result<()> {
    let path = config_file(cfg_dir);

    println!("Contacts Status");
    println!("{}", "-".repeat(50));
    println!("Config directory: {}", cfg_dir.display());
    if path.exists() {
        println!("Config file:      {}", path.display());
    } else {
        println!("Config file:      {} (not found, using defaults)", path.display());
    }
    println!("API base URL:     {}", config.api.base_url);
    println!("Timeout:          {}s", config.api.timeout_secs);
    println!("Sync strategy:    {}", config.sync.refresh);

    Ok(())
}

fn print_list(controller: &ContactController<HttpContactApi>) {
    println!("{}", render_contacts(controller.contacts()));
    if !controller.store().is_empty() {
        println!();
        println!("Total: {} contacts", controller.store().len());
        println!("Use the ID with show/edit/delete (e.g., 'contacts edit <ID>')");
    }
}

fn cmd_list(config: &Config) -> Result<()> {
    let controller = mount(config)?;
    print_list(&controller);
    Ok(())
}

fn cmd_show(config: &Config, id: &str) -> Result<()> {
    let controller = mount(config)?;
    let contact = controller
        .store()
        .get(id)
        .ok_or_else(|| ContactsError::ContactNotFound(id.to_string()))?;

    println!("{}", render_card(contact));
    Ok(())
}

fn cmd_create(config: &Config, first_name: String, last_name: String, status: &str) -> Result<()> {
    let status: Status = status.parse()?;
    let mut controller = mount_for_write(config);

    controller.open_create();
    controller.set_first_name(first_name);
    controller.set_last_name(last_name);
    controller.set_status(status);
    debug!(form = %render_form(controller.form(), controller.modal()), "submitting");

    controller.submit()?;
    println!("Contact created.");
    println!();
    print_list(&controller);
    Ok(())
}

fn cmd_edit(
    config: &Config,
    id: &str,
    first_name: Option<String>,
    last_name: Option<String>,
    status: Option<&str>,
) -> Result<()> {
    let status = status.map(str::parse::<Status>).transpose()?;
    let mut controller = mount(config)?;

    let contact = controller
        .store()
        .get(id)
        .cloned()
        .ok_or_else(|| ContactsError::ContactNotFound(id.to_string()))?;

    controller.edit_contact(&contact);
    if let Some(first_name) = first_name {
        controller.set_first_name(first_name);
    }
    if let Some(last_name) = last_name {
        controller.set_last_name(last_name);
    }
    if let Some(status) = status {
        controller.set_status(status);
    }
    debug!(form = %render_form(controller.form(), controller.modal()), "submitting");

    controller.submit()?;
    println!("Contact {id} updated.");
    println!();
    print_list(&controller);
    Ok(())
}

fn cmd_delete(config: &Config, id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(ContactsError::EmptyContactId);
    }
    let mut controller = mount_for_write(config);

    controller.delete_contact(id)?;
    println!("Contact {id} deleted.");
    println!();
    print_list(&controller);
    Ok(())
}
