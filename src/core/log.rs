use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;

const MAX_OP_WIDTH: usize = 60;

fn strip_ansi(s: &str) -> String {
    match Regex::new(r"\x1B\[[0-9;]*[mK]") {
        Ok(re) => re.replace_all(s, "").into_owned(),
        Err(_) => s.to_string(),
    }
}

fn color_for_operation(op: &str) -> Colour {
    match op {
        "drink" => Colour::Green,
        "settings" => Colour::Yellow,
        "init" => Colour::RGB(255, 153, 51),
        "migration_applied" => Colour::Purple,
        _ => Colour::White,
    }
}

/// One row of the internal `log` table.
#[derive(Debug, Clone)]
pub struct LogRow {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

impl LogRow {
    fn op_target(&self) -> String {
        if self.target.is_empty() {
            self.operation.clone()
        } else {
            format!("{} ({})", self.operation, self.target)
        }
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn load(pool: &DbPool) -> AppResult<Vec<LogRow>> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, IFNULL(target, ''), message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let raw_date: String = row.get(1)?;
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok(LogRow {
                id: row.get(0)?,
                date,
                operation: row.get(2)?,
                target: row.get(3)?,
                message: row.get(4)?,
            })
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }
        Ok(entries)
    }

    /// Operation column: colored operation name, optional target, cut
    /// to `MAX_OP_WIDTH` visible characters and padded to `width`.
    fn render_op(row: &LogRow, width: usize) -> String {
        let color = color_for_operation(&row.operation);

        let visible = row.op_target();
        let truncated = if visible.chars().count() > MAX_OP_WIDTH {
            let mut s: String = visible.chars().take(MAX_OP_WIDTH - 3).collect();
            s.push_str("...");
            s
        } else {
            visible
        };

        let colored = match truncated.split_once(' ') {
            Some((op, rest)) => format!("{} {}", color.paint(op), rest),
            None => color.paint(truncated.as_str()).to_string(),
        };

        let padding = " ".repeat(width.saturating_sub(strip_ansi(&colored).chars().count()));
        format!("{}{}", colored, padding)
    }

    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = Self::load(pool)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let op_w = entries
            .iter()
            .map(|r| r.op_target().chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);
        let id_w = entries
            .iter()
            .map(|r| r.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|r| r.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for row in &entries {
            println!(
                "{:>id_w$}: {:<date_w$} | {} => {}",
                row.id,
                row.date,
                Self::render_op(row, op_w),
                row.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
