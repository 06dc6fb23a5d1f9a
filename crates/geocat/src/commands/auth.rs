//! Session command handlers: login and logout.

use crate::cli::GlobalOpts;
use crate::context::AppContext;
use crate::error::CliError;

pub async fn login(ctx: &AppContext, global: &GlobalOpts) -> Result<(), CliError> {
    let Some(email) = ctx.config.email.clone() else {
        return Err(CliError::Validation {
            message: "login needs an email; pass --email or set it in the config".into(),
        });
    };

    let check = ctx.client.check_session(&email).await?;
    match check.user {
        Some(user) if check.valid && user.is_verified => {
            let display = user.name.clone().unwrap_or_else(|| email.clone());
            ctx.session.login(user);
            if !global.quiet {
                eprintln!("Signed in as {display} <{email}>");
            }
            Ok(())
        }
        _ => Err(CliError::AuthFailed { email }),
    }
}

pub async fn logout(ctx: &AppContext, global: &GlobalOpts) -> Result<(), CliError> {
    if ctx.session.current().is_none() {
        if !global.quiet {
            eprintln!("No active session.");
        }
        return Ok(());
    }

    // Best-effort backend invalidation; the local session always clears.
    ctx.session.logout(&ctx.client).await;
    if !global.quiet {
        eprintln!("Signed out.");
    }
    Ok(())
}
