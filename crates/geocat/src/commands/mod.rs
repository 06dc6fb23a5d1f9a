//! Command dispatch.

pub mod admin;
pub mod auth;
pub mod catalog;
pub mod config_cmd;
pub mod geo;
pub mod seo;
pub mod stats;
pub mod util;

use crate::cli::{Command, GlobalOpts};
use crate::context::AppContext;
use crate::error::CliError;

/// Dispatch a backend-facing command. `Config` and `Completions` are
/// handled before a context is built.
pub async fn dispatch(
    command: Command,
    ctx: &AppContext,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match command {
        Command::Login => auth::login(ctx, global).await,
        Command::Logout => auth::logout(ctx, global).await,
        Command::Countries(args) => geo::countries(ctx, args, global).await,
        Command::States(args) => geo::states(ctx, args, global).await,
        Command::Cities(args) => geo::cities(ctx, args, global).await,
        Command::Locations(args) => catalog::locations(ctx, args, global).await,
        Command::Products(args) => catalog::products(ctx, args, global).await,
        Command::Seo(args) => seo::seo(ctx, args, global).await,
        Command::Inquiries(args) => admin::inquiries(ctx, args, global).await,
        Command::Employees(args) => admin::employees(ctx, args, global).await,
        Command::Stats => stats::handle(ctx, global).await,
        Command::Config(_) | Command::Completions(_) => unreachable!("handled in main"),
    }
}
