use console::style;

use crate::errors::StockroomError;
use crate::models::Product;
use crate::repl::commands::CommandHelp;

pub fn render_error(message: &str) -> String {
    format!("  {} {}", style("✗").red(), style(message).red())
}

pub fn render_success(message: &str) -> String {
    format!("  {} {}", style("✓").green(), message)
}

pub fn render_info(message: &str) -> String {
    format!("  {} {}", style("i").cyan(), style(message).dim())
}

/// Map an operation failure onto the right kind of notice. Validation,
/// integrity, and authentication failures carry their own message; the
/// unimplemented stub is informational; anything else (store/IO trouble)
/// becomes a generic failure notice so the session survives it.
pub fn render_notice(err: &StockroomError) -> String {
    match err {
        StockroomError::Validation(msg) => render_error(msg),
        StockroomError::Authentication(msg) => render_error(msg),
        StockroomError::DuplicateUsername(_) => render_error("Username already exists"),
        StockroomError::Unimplemented(msg) => render_info(msg),
        other => {
            tracing::error!(error = %other, "operation failed");
            render_error("The operation failed; see the log for details")
        }
    }
}

/// Render the visible product list as a table with the selected row marked.
pub fn render_product_table(products: &[Product], selected: Option<i64>) -> String {
    if products.is_empty() {
        return render_info("No products yet. Use /add to create one.");
    }

    let headers = ["ID", "Name", "Quantity", "Price"];
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for p in products {
        widths[0] = widths[0].max(p.id.to_string().len());
        widths[1] = widths[1].max(p.name.len());
        widths[2] = widths[2].max(p.quantity.len());
        widths[3] = widths[3].max(p.price.len());
    }

    let mut out = String::new();
    out.push_str(&format!(
        "    {}  {}  {}  {}\n",
        style(format!("{:<w$}", headers[0], w = widths[0])).white().bold(),
        style(format!("{:<w$}", headers[1], w = widths[1])).white().bold(),
        style(format!("{:<w$}", headers[2], w = widths[2])).white().bold(),
        style(format!("{:<w$}", headers[3], w = widths[3])).white().bold(),
    ));

    for p in products {
        let is_selected = selected == Some(p.id);
        let marker = if is_selected { "▸ " } else { "  " };
        let line = format!(
            "{:<w0$}  {:<w1$}  {:<w2$}  {:<w3$}",
            p.id,
            p.name,
            p.quantity,
            p.price,
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
            w3 = widths[3],
        );
        if is_selected {
            out.push_str(&format!("  {}{}\n", style(marker).cyan().bold(), style(line).cyan()));
        } else {
            out.push_str(&format!("  {}{}\n", marker, line));
        }
    }

    out
}

/// Render the help listing for the active screen's commands.
pub fn render_help(help: &[CommandHelp], specific_command: Option<&str>) -> String {
    if let Some(cmd_name) = specific_command {
        if let Some(cmd) = help.iter().find(|c| c.name == cmd_name) {
            return format_command_detail(cmd);
        } else {
            return format!("{} Unknown command: /{}", style("✗").red(), cmd_name);
        }
    }

    let mut out = String::new();
    out.push_str(&format!("\n{}\n\n", style("Available commands:").white().bold()));
    for cmd in help {
        out.push_str(&format!(
            "  {:<12} {}\n",
            style(format!("/{}", cmd.name)).cyan().bold(),
            style(cmd.description).dim(),
        ));
    }
    out
}

fn format_command_detail(cmd: &CommandHelp) -> String {
    format!(
        "\n{}\n  {}\n\n  {}\n",
        style(format!("/{}", cmd.name)).cyan().bold(),
        style(cmd.description).dim(),
        style(cmd.usage).white(),
    )
}

/// Render the version info.
pub fn render_version() -> String {
    let version = env!("CARGO_PKG_VERSION");
    let git_hash = option_env!("GIT_HASH").unwrap_or("dev");
    let build_ts = option_env!("BUILD_TIMESTAMP").unwrap_or("unknown");

    format!(
        "\n  {} {}\n  {} {}\n  {} {}\n",
        style("Version:").dim(),
        style(version).white().bold(),
        style("Commit:").dim(),
        style(git_hash).white(),
        style("Built:").dim(),
        style(build_ts).white(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str, quantity: &str, price: &str) -> Product {
        Product {
            id,
            name: name.into(),
            quantity: quantity.into(),
            price: price.into(),
            created_at: "2026-01-01T00:00:00Z".into(),
        }
    }

    #[test]
    fn test_table_shows_literal_field_values() {
        console::set_colors_enabled(false);
        let rows = vec![product(1, "Widget", "10", "2.50")];
        let out = render_product_table(&rows, None);
        assert!(out.contains("Widget"));
        assert!(out.contains("10"));
        assert!(out.contains("2.50"));
    }

    #[test]
    fn test_table_marks_selected_row() {
        console::set_colors_enabled(false);
        let rows = vec![product(1, "A", "1", "1"), product(2, "B", "2", "2")];
        let out = render_product_table(&rows, Some(2));
        let marked: Vec<&str> = out.lines().filter(|l| l.contains('▸')).collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].contains('B'));
    }

    #[test]
    fn test_empty_table_renders_hint() {
        console::set_colors_enabled(false);
        let out = render_product_table(&[], None);
        assert!(out.contains("/add"));
    }

    #[test]
    fn test_unimplemented_renders_as_info_not_error() {
        console::set_colors_enabled(false);
        let notice = render_notice(&StockroomError::Unimplemented(
            "Update is not implemented yet".into(),
        ));
        assert!(notice.contains("Update is not implemented yet"));
        assert!(!notice.contains('✗'));
    }
}
