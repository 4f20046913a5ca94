use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use storefront::session::{self, KeyValueStore};
use storefront::{
    ActionError, ApiError, Credentials, DEFAULT_API_URL, NewProduct, ProductId, StorefrontApi, actions,
};

mod http;
mod render;
mod session_file;
#[cfg(test)]
mod test_server;


use http::ReqwestApi;
use session_file::{DEFAULT_SESSION_FILE, FileStore};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Action(#[from] ActionError),
    #[error("failed to fetch products: {0}")]
    Catalog(#[from] ApiError),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("product {0} not found")]
    NotFound(ProductId),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "flashmart-cli", about = "FlashMart storefront from the terminal")]
struct Cli {
    #[arg(long, env = "FLASHMART_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    #[arg(long, env = "FLASHMART_SESSION_FILE", default_value = DEFAULT_SESSION_FILE)]
    session_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the catalog.
    Products,
    /// Create an account.
    Register(CredentialArgs),
    /// Sign in and save the session.
    Login(CredentialArgs),
    /// Forget the saved session.
    Logout,
    /// Show the saved session's role.
    Whoami,
    /// Add a product (admin).
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: f64,
        #[arg(long)]
        stock: i64,
    },
    /// Delete a product (admin).
    Delete {
        id: ProductId,
        /// Skip the confirmation prompt.
        #[arg(long, default_value_t = false)]
        yes: bool,
    },
    /// Buy one unit of a product.
    Buy { id: ProductId },
}

#[derive(Args, Debug)]
struct CredentialArgs {
    #[arg(long)]
    email: String,

    #[arg(long, env = "FLASHMART_PASSWORD", hide_env_values = true)]
    password: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let store = FileStore::new(cli.session_file);
    let result = match ReqwestApi::new(&cli.api_url) {
        Ok(api) => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut out = io::stdout().lock();
            run(&api, &store, cli.command, &mut input, &mut out).await
        }
        Err(e) => Err(e.into()),
    };
    finish(result, &mut io::stderr().lock())
}

/// Print a failure as the user-facing message and map it to an exit code.
fn finish<W: Write>(result: Result<(), CliError>, err_out: &mut W) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = writeln!(err_out, "{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run<A, S, R, W>(api: &A, store: &S, command: Command, input: &mut R, out: &mut W) -> Result<(), CliError>
where
    A: StorefrontApi + ?Sized,
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    match command {
        Command::Products => {
            let products = api.list_products().await?;
            write!(out, "{}", render::catalog_table(&products))?;
        }
        Command::Register(args) => {
            let credentials = Credentials::new(&args.email, &args.password)?;
            let notice = actions::register(api, &credentials).await?;
            writeln!(out, "{notice}")?;
        }
        Command::Login(args) => {
            let credentials = Credentials::new(&args.email, &args.password)?;
            let signed_in = actions::login(api, store, &credentials).await?;
            writeln!(out, "{}", render::session_line(Some(&signed_in)))?;
        }
        Command::Logout => {
            actions::logout(store);
            writeln!(out, "{}", render::session_line(None))?;
        }
        Command::Whoami => {
            writeln!(out, "{}", render::session_line(session::load(store).as_ref()))?;
        }
        Command::Add { name, price, stock } => {
            let product = NewProduct::new(&name, price, stock)?;
            let current = session::load(store);
            let refreshed = actions::add_product(api, current.as_ref(), &product).await?;
            print_refreshed(out, refreshed)?;
        }
        Command::Delete { id, yes } => {
            if !yes && !confirm(input, out, "Are you sure? [y/N] ")? {
                writeln!(out, "Cancelled.")?;
                return Ok(());
            }
            let current = session::load(store);
            let refreshed = actions::delete_product(api, current.as_ref(), id).await?;
            print_refreshed(out, refreshed)?;
        }
        Command::Buy { id } => {
            let current = session::load(store).ok_or(ActionError::LoginRequired("Buy"))?;
            let products = api.list_products().await?;
            let product = products.iter().find(|p| p.id == id).ok_or(CliError::NotFound(id))?;
            let refreshed = actions::buy(api, Some(&current), product).await?;
            print_refreshed(out, refreshed)?;
        }
    }
    Ok(())
}

fn print_refreshed<W: Write>(out: &mut W, refreshed: actions::Refreshed) -> io::Result<()> {
    match refreshed {
        Some(products) => write!(out, "{}", render::catalog_table(&products)),
        None => writeln!(out, "Done. Catalog refresh failed; run `products` to reload."),
    }
}

fn confirm<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> io::Result<bool> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
