use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::settings::{SettingsLogic, StoredHours};
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::formatting::format_hours;

/// Handle the `settings` subcommand (profile name, reminder interval).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        name,
        reminder_hours,
        print,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        // Validate the interval first: on error nothing is written.
        if let Some(raw) = reminder_hours {
            let hours = SettingsLogic::set_reminder_hours(&mut pool, raw)?;
            success(format!("Reminder interval set to {}.", format_hours(hours)));
            ttlog_soft(
                &pool.conn,
                "settings",
                "reminder_hours",
                &format!("Reminder interval set to {}", hours),
            );
        }

        if let Some(n) = name {
            SettingsLogic::set_profile_name(&mut pool, n)?;
            success(format!("Profile name set to '{}'.", n.trim()));
            ttlog_soft(
                &pool.conn,
                "settings",
                "profile_name",
                &format!("Profile name set to '{}'", n.trim()),
            );
        }

        let nothing_changed = name.is_none() && reminder_hours.is_none();
        if *print || nothing_changed {
            let stored = SettingsLogic::read_reminder_hours(&pool)?;
            if let StoredHours::Invalid(raw) = &stored {
                warning(format!("Stored reminder interval '{}' is invalid.", raw));
            }
            let hours = stored.or_default(cfg.default_reminder_hours);
            let profile = SettingsLogic::read_profile_name(&pool)?;

            println!("⚙️  Settings:");
            println!("   Profile name   : {}", profile.as_deref().unwrap_or("(not set)"));
            println!(
                "   Reminder every : {}{}",
                format_hours(hours),
                if stored == StoredHours::Unset { " (default)" } else { "" }
            );
        }
    }

    Ok(())
}
