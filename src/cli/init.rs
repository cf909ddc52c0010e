use console::style;

use crate::cli::commands::InitArgs;
use crate::cli::start::resolve_db_path;
use crate::db::Database;
use crate::errors::StockroomError;

/// Runs the persistence bootstrap on its own: opens (creating if absent) the
/// database file and ensures both tables exist. Safe to run repeatedly.
pub fn handle_init(args: InitArgs) -> Result<(), StockroomError> {
    let path = resolve_db_path(args.db)?;
    let db = Database::new(&path)?;

    let products = db.list_products()?.len();
    let users = db.count_users()?;

    println!(
        "  {} Database ready at {}",
        style("✓").green(),
        style(path.display()).white().bold(),
    );
    println!(
        "  {} {} user(s), {} product(s)",
        style("i").cyan(),
        users,
        products,
    );
    Ok(())
}
