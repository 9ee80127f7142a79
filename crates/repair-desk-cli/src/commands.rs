//! Subcommands and their dispatch onto the client view models.

use std::io::Write;

use anyhow::{bail, Result};
use clap::{Args, Subcommand, ValueEnum};

use repair_desk_client::{
    AuthGateway, Authenticator, RepairApi, RequestDetailView, RequestForm, RequestGateway,
    RequestListView, ScheduleForm, ScheduleGateway, UserGateway,
};
use repair_desk_core::{RegistrationProfile, RequestId, RequestPatch, RequestStatus, UserRole};

use crate::output::Printer;

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new account (does not sign in).
    Register(RegisterArgs),

    /// Browse and manage service requests.
    #[command(subcommand)]
    Requests(RequestsCommand),

    /// Browse and book appointments.
    #[command(subcommand)]
    Schedule(ScheduleCommand),

    /// List platform users.
    Users,
}

/// Profile fields for `register`.
#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Display name.
    #[arg(long)]
    name: String,

    /// Phone number or e-mail; used as the sign-in identifier.
    #[arg(long)]
    contact: String,

    /// Street address.
    #[arg(long)]
    address: String,

    /// Platform role.
    #[arg(long, value_enum, default_value_t = RoleArg::Resident)]
    role: RoleArg,

    /// Account password.
    #[arg(long)]
    password: String,
}

impl From<RegisterArgs> for RegistrationProfile {
    fn from(args: RegisterArgs) -> Self {
        Self {
            name: args.name,
            contact: args.contact,
            address: args.address,
            role: args.role.into(),
            password: args.password,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleArg {
    Resident,
    Serviceman,
}

impl From<RoleArg> for UserRole {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Resident => Self::Resident,
            RoleArg::Serviceman => Self::Serviceman,
        }
    }
}

/// `requests` subcommands.
#[derive(Subcommand, Debug)]
pub enum RequestsCommand {
    /// List every service request.
    List,

    /// Show one service request.
    Show {
        /// Request id.
        id: RequestId,
    },

    /// Open a new service request.
    Create {
        /// Short summary.
        #[arg(long)]
        title: String,

        /// Details of the problem.
        #[arg(long)]
        description: String,
    },

    /// Change fields of an existing request.
    Update {
        /// Request id.
        id: RequestId,

        /// New summary.
        #[arg(long)]
        title: Option<String>,

        /// New details.
        #[arg(long)]
        description: Option<String>,

        /// New status (`pending`, `scheduled`, `completed`).
        #[arg(long)]
        status: Option<String>,
    },

    /// Delete a request.
    Delete {
        /// Request id.
        id: RequestId,
    },
}

/// `schedule` subcommands.
#[derive(Subcommand, Debug)]
pub enum ScheduleCommand {
    /// List booked appointments.
    List,

    /// Book an appointment.
    Create {
        /// Day of the appointment (`YYYY-MM-DD`).
        #[arg(long)]
        date: String,

        /// Time of the appointment (`HH:MM`).
        #[arg(long)]
        time: String,
    },
}

/// Run one command against the backend and print its result.
///
/// Failures surface as the fixed user-facing message of the failed call.
pub async fn run<G, W>(
    command: Command,
    api: &RepairApi,
    auth: &Authenticator<G>,
    printer: &mut Printer<W>,
) -> Result<()>
where
    G: AuthGateway,
    W: Write,
{
    match command {
        Command::Register(args) => {
            auth.register(&args.into()).await?;
            printer.message("Account registered")?;
        }
        Command::Requests(command) => requests(command, api.requests(), printer).await?,
        Command::Schedule(command) => schedule(command, api.schedules(), printer).await?,
        Command::Users => {
            let users = api.users().list_users().await?;
            printer.users(&users)?;
        }
    }
    Ok(())
}

async fn requests<G, W>(
    command: RequestsCommand,
    gateway: &G,
    printer: &mut Printer<W>,
) -> Result<()>
where
    G: RequestGateway + ?Sized,
    W: Write,
{
    match command {
        RequestsCommand::List => {
            let mut view = RequestListView::new();
            view.refresh(gateway).await?;
            printer.requests(view.requests())?;
        }
        RequestsCommand::Show { id } => {
            let mut view = RequestDetailView::new();
            view.load(gateway, &id).await?;
            if let Some(request) = view.request() {
                printer.request(request)?;
            }
        }
        RequestsCommand::Create { title, description } => {
            let mut form = RequestForm::new();
            form.title = title;
            form.description = description;
            let created = form.submit(gateway).await?;
            printer.request(&created)?;
        }
        RequestsCommand::Update {
            id,
            title,
            description,
            status,
        } => {
            let patch = RequestPatch {
                title,
                description,
                status: status.map(RequestStatus::from),
            };
            if patch.is_empty() {
                bail!("Nothing to update: pass --title, --description or --status");
            }
            let updated = gateway.update_request(&id, &patch).await?;
            printer.request(&updated)?;
        }
        RequestsCommand::Delete { id } => {
            gateway.delete_request(&id).await?;
            printer.message(&format!("Deleted service request {id}"))?;
        }
    }
    Ok(())
}

async fn schedule<G, W>(
    command: ScheduleCommand,
    gateway: &G,
    printer: &mut Printer<W>,
) -> Result<()>
where
    G: ScheduleGateway + ?Sized,
    W: Write,
{
    match command {
        ScheduleCommand::List => {
            let entries = gateway.list_schedules().await?;
            printer.schedules(&entries)?;
        }
        ScheduleCommand::Create { date, time } => {
            let mut form = ScheduleForm::new();
            form.date = date;
            form.time = time;
            let entry = form.submit(gateway).await?;
            printer.schedule(&entry)?;
        }
    }
    Ok(())
}
