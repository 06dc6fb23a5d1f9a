//! Back-office command handlers: inquiries and employees.

use geocat_core::{Employees, Inquiries};

use crate::cli::{EmployeesArgs, EmployeesCommand, GlobalOpts, InquiriesArgs, InquiriesCommand};
use crate::context::AppContext;
use crate::error::CliError;

use super::util;

pub async fn inquiries(
    ctx: &AppContext,
    args: InquiriesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        InquiriesCommand::List(opts) => util::list::<Inquiries>(ctx, opts, global).await,

        InquiriesCommand::Edit {
            id,
            name,
            email,
            phone,
            message,
        } => {
            util::edit::<Inquiries>(ctx, "inquiries", &id, global, |draft| {
                if let Some(name) = name {
                    draft.name = name;
                }
                if let Some(email) = email {
                    draft.email = email;
                }
                if let Some(phone) = phone {
                    draft.phone = phone;
                }
                if let Some(message) = message {
                    draft.message = message;
                }
            })
            .await
        }

        InquiriesCommand::Delete { id } => util::delete::<Inquiries>(ctx, &id, global).await,

        InquiriesCommand::Export(opts) => util::export::<Inquiries>(ctx, opts, global).await,
    }
}

pub async fn employees(
    ctx: &AppContext,
    args: EmployeesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        EmployeesCommand::List(opts) => util::list::<Employees>(ctx, opts, global).await,
        EmployeesCommand::Export(opts) => util::export::<Employees>(ctx, opts, global).await,
    }
}
