use crate::config::Config;
use crate::core::home::HomeScreen;
use crate::core::reminder::time_until;
use crate::db::pool::DbPool;
use crate::db::store::KeyValueStore;
use crate::errors::AppResult;
use crate::utils::colors::{RESET, color_for_due, colorize_optional};
use crate::utils::date::format_date;
use crate::utils::formatting::{cups, duration_readable};
use crate::utils::time::{format_optional_time, format_time, greeting};
use chrono::{DateTime, Local};

/// Render the home screen as text lines, as of `now`.
pub fn render<S: KeyValueStore>(
    screen: &HomeScreen<S>,
    now: DateTime<Local>,
    show_greeting: bool,
    sep: &str,
) -> Vec<String> {
    let mut lines = Vec::new();
    let now_utc = now.to_utc();

    if show_greeting {
        match screen.user_name() {
            Some(name) => lines.push(format!("{} 👋 {}", greeting(&now), name)),
            None => lines.push(format!("{} 👋", greeting(&now))),
        }
        lines.push(String::new());
    }

    // Reminder card
    let due = screen.is_reminder_due(now_utc);
    let next_local = screen
        .next_reminder_time()
        .map(|t| t.with_timezone(&Local));
    let title = if due { "⏰ Time for Coffee!" } else { "🕒 Next Coffee" };
    lines.push(format!("{}{}{}", color_for_due(due), title, RESET));

    let mut when = colorize_optional(&format_optional_time(next_local.as_ref()));
    if let Some(left) = time_until(screen.next_reminder_time(), now_utc) {
        when.push_str(&format!(" (in {})", duration_readable(left)));
    }
    lines.push(format!("   {}", when));

    // Last coffee card
    if let Some(last) = screen.last_entry() {
        let at = last.local_timestamp();
        lines.push(sep.repeat(30));
        lines.push("Last Coffee".to_string());
        lines.push(format!("   {}", last.coffee_type.title));
        lines.push(format!("   {} at {}", format_date(&at), format_time(&at)));
    }

    // Today's summary
    if !screen.coffee_log().is_empty() {
        let today = now.date_naive();
        lines.push(sep.repeat(30));
        lines.push("Today's Coffee".to_string());
        lines.push(format!("   {}", cups(screen.count_on_day(today, &Local))));
    }

    lines
}

pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    let mut screen = HomeScreen::new(pool, cfg.default_reminder_hours);
    screen.refresh()?;

    for line in render(&screen, Local::now(), cfg.show_greeting, &cfg.separator_char) {
        println!("{}", line);
    }

    Ok(())
}
