use std::time::{SystemTime, UNIX_EPOCH};

use super::{report_partial, Command, CommandError, Context, Flow};
use crate::fs::EntryInfo;

/// Lists the session directory, or each argument resolved against it.
#[derive(Clone)]
pub struct LsCommand;

impl Default for LsCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl LsCommand {
    pub fn new() -> Self {
        Self
    }

    fn list(&self, ctx: &mut Context<'_>, target: &str) -> Result<(), CommandError> {
        let entries = ctx
            .fs
            .list_entries(target)
            .map_err(|source| CommandError::FileAccess {
                command: "ls",
                source,
            })?;

        writeln!(ctx.out, "{:<4} {:>10}  {:<16}  Name", "Mode", "Size", "Modified")?;
        for entry in &entries {
            writeln!(ctx.out, "{}", format_row(entry))?;
        }
        Ok(())
    }
}

impl Command for LsCommand {
    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> Result<Flow, CommandError> {
        if args.is_empty() {
            let current = ctx.session.current_path();
            self.list(ctx, &current)?;
            return Ok(Flow::Continue);
        }

        let mut last_error = None;
        for (i, arg) in args.iter().enumerate() {
            let target = ctx.session.resolve(arg).to_string();
            if args.len() > 1 {
                if i > 0 {
                    writeln!(ctx.out)?;
                }
                writeln!(ctx.out, "{}:", target)?;
            }
            if let Err(e) = self.list(ctx, &target) {
                if let Some(previous) = last_error.replace(e) {
                    report_partial(ctx, &previous);
                }
            }
        }

        match last_error {
            Some(e) => Err(e),
            None => Ok(Flow::Continue),
        }
    }
}

fn format_row(entry: &EntryInfo) -> String {
    let mode = if entry.is_directory { "d" } else { "-" };
    let size = if entry.is_directory {
        String::new()
    } else {
        entry.size.to_string()
    };
    let modified = entry
        .modified
        .map(format_time)
        .unwrap_or_else(|| "-".to_string());

    format!("{:<4} {:>10}  {:<16}  {}", mode, size, modified, entry.name)
}

/// Formats as `YYYY-MM-DD HH:MM` in UTC.
fn format_time(time: SystemTime) -> String {
    let secs = match time.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs() as i64,
        Err(e) => -(e.duration().as_secs() as i64),
    };
    let days = secs.div_euclid(86_400);
    let rem = secs.rem_euclid(86_400);
    let (year, month, day) = civil_from_days(days);

    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}",
        year,
        month,
        day,
        rem / 3600,
        (rem % 3600) / 60
    )
}

// Howard Hinnant's days-to-civil conversion.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}
