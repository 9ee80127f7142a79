//! Rendering of backend records for the terminal.

use std::io::{self, Write};

use serde::Serialize;

use repair_desk_core::{ScheduleEntry, ServiceRequest, UserRecord, UserRole};

/// How records are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Aligned, human-readable lines.
    Text,
    /// Pretty-printed JSON, one document per command.
    Json,
}

/// Writes command results in the selected [`Format`].
pub struct Printer<W> {
    out: W,
    format: Format,
}

impl<W: Write> Printer<W> {
    pub const fn new(out: W, format: Format) -> Self {
        Self { out, format }
    }

    pub fn requests(&mut self, requests: &[ServiceRequest]) -> io::Result<()> {
        if self.format == Format::Json {
            return self.json(requests);
        }
        if requests.is_empty() {
            return writeln!(self.out, "No service requests.");
        }
        for request in requests {
            writeln!(
                self.out,
                "{:<6} {:<10} {}",
                request.id.as_str(),
                request.status.as_str(),
                request.title
            )?;
        }
        Ok(())
    }

    pub fn request(&mut self, request: &ServiceRequest) -> io::Result<()> {
        if self.format == Format::Json {
            return self.json(request);
        }
        writeln!(self.out, "#{} {}", request.id, request.title)?;
        writeln!(self.out, "Status: {}", request.status)?;
        writeln!(self.out)?;
        writeln!(self.out, "{}", request.description)
    }

    pub fn schedules(&mut self, entries: &[ScheduleEntry]) -> io::Result<()> {
        if self.format == Format::Json {
            return self.json(entries);
        }
        if entries.is_empty() {
            return writeln!(self.out, "No appointments.");
        }
        for entry in entries {
            writeln!(
                self.out,
                "{} {} {}",
                entry.date,
                entry.time.format("%H:%M"),
                entry.status.as_deref().unwrap_or("-")
            )?;
        }
        Ok(())
    }

    pub fn schedule(&mut self, entry: &ScheduleEntry) -> io::Result<()> {
        if self.format == Format::Json {
            return self.json(entry);
        }
        writeln!(
            self.out,
            "Appointment booked for {} at {}",
            entry.date,
            entry.time.format("%H:%M")
        )
    }

    pub fn users(&mut self, users: &[UserRecord]) -> io::Result<()> {
        if self.format == Format::Json {
            return self.json(users);
        }
        if users.is_empty() {
            return writeln!(self.out, "No users.");
        }
        for user in users {
            writeln!(
                self.out,
                "{:<6} {:<24} {:<11} {}",
                user.id.as_str(),
                user.name,
                user.role.as_ref().map_or("-", UserRole::as_str),
                user.contact
            )?;
        }
        Ok(())
    }

    /// A one-line confirmation for commands without a record to show.
    pub fn message(&mut self, message: &str) -> io::Result<()> {
        if self.format == Format::Json {
            return self.json(&serde_json::json!({ "message": message }));
        }
        writeln!(self.out, "{message}")
    }

    fn json<T: Serialize + ?Sized>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, value)?;
        writeln!(self.out)
    }
}
