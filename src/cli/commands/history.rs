use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::coffee_log::CoffeeLogStore;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::date::{format_date, is_same_day, today};
use crate::utils::formatting::pad_right;
use crate::utils::time::format_time;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { today: only_today, limit } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let entries = CoffeeLogStore::new(pool).load()?;

        let day = today();
        let selected: Vec<_> = entries
            .iter()
            .filter(|e| !*only_today || is_same_day(&e.timestamp, day, &Local))
            .take(limit.unwrap_or(usize::MAX))
            .collect();

        if selected.is_empty() {
            println!("No coffees logged{}.", if *only_today { " today" } else { "" });
            return Ok(());
        }

        header(
            format!("☕ Coffee log ({} entries)", selected.len()),
            &cfg.separator_char,
        );
        for e in selected {
            let at = e.local_timestamp();
            println!(
                "{} {}  {} [{}]",
                format_date(&at),
                format_time(&at),
                pad_right(&e.coffee_type.title, 14),
                e.id
            );
        }
    }

    Ok(())
}
