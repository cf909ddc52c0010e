use std::path::PathBuf;

use crate::cli::commands::StartArgs;
use crate::db::Database;
use crate::errors::StockroomError;
use crate::repl::ReplSession;

pub fn handle_start(args: StartArgs, quiet: bool) -> Result<(), StockroomError> {
    let path = resolve_db_path(args.db)?;
    tracing::info!(path = %path.display(), "starting interactive session");

    let db = Database::new(&path)?;
    ReplSession::new(db).run(!quiet)
}

pub(crate) fn resolve_db_path(arg: Option<String>) -> Result<PathBuf, StockroomError> {
    match arg {
        Some(p) => Ok(PathBuf::from(p)),
        None => Database::default_path(),
    }
}
