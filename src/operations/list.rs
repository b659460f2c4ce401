//! Application listing
//!
//! Tabular view over the persisted applications. Quiet mode prints ids only
//! so the output can feed shell pipelines.

use console::Style;

use crate::context::Context;
use crate::error::Result;
use crate::storage::record::Status;

/// List installed applications
pub fn run(ctx: &Context, quiet: bool) -> Result<()> {
    let applications = ctx.applications()?;

    if quiet {
        for application in &applications {
            println!("{}", application.id);
        }
        return Ok(());
    }

    if applications.is_empty() {
        println!("No applications installed.");
        return Ok(());
    }

    println!(
        "{}",
        Style::new().bold().apply_to(row(
            "APP ID", "VERSION", "UPTIME", "STATUS", "APP NAME", "SOURCE"
        ))
    );

    let now = super::epoch_seconds();
    for application in &applications {
        let uptime = crate::ui::format_uptime(now - application.started);
        let status_style = match application.status {
            Status::Running => Style::new().green(),
            Status::Error => Style::new().red(),
        };
        let status = status_style
            .apply_to(format!("{:<10}", status_text(application.status)))
            .to_string();
        println!(
            "{:<15} {:<10} {:<10} {} {:<23} {}",
            application.id, application.version, uptime, status, application.name,
            application.source
        );
    }
    Ok(())
}

fn status_text(status: Status) -> &'static str {
    match status {
        Status::Running => "Running",
        Status::Error => "Error",
    }
}

fn row(id: &str, version: &str, uptime: &str, status: &str, name: &str, source: &str) -> String {
    format!("{id:<15} {version:<10} {uptime:<10} {status:<10} {name:<23} {source}")
}
