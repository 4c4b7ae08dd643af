use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::home::HomeScreen;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::coffee_type::CoffeeType;
use crate::ui::messages::{info, success};
use crate::utils::time::format_time;
use chrono::{Local, Utc};

/// Log a coffee ("I just had ...").
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Drink { coffee_type } = cmd {
        // Validate before touching storage.
        let selected = match coffee_type {
            Some(code) => Some(
                CoffeeType::from_code(code)
                    .ok_or_else(|| AppError::InvalidCoffeeType(code.to_string()))?,
            ),
            None => None,
        };

        let pool = DbPool::new(&cfg.database)?;
        let mut screen = HomeScreen::new(pool, cfg.default_reminder_hours);
        screen.refresh()?;

        if let Some(t) = selected {
            screen.select(t);
        }

        let outcome = screen.drink_coffee(Utc::now())?;

        success(outcome.message());
        if let Some(next) = outcome.next_reminder_time {
            info(format!(
                "Next coffee at {}",
                format_time(&next.with_timezone(&Local))
            ));
        }

        ttlog_soft(
            &screen.storage().conn,
            "drink",
            &outcome.entry.coffee_type.id,
            &format!(
                "Logged {} (id {})",
                outcome.entry.coffee_type.title, outcome.entry.id
            ),
        );
    }

    Ok(())
}
