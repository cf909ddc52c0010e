use std::io::Write;

use console::{style, Term};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};

use crate::auth::hash_password;
use crate::db::Database;
use crate::errors::StockroomError;
use crate::models::{Product, UserAccount};
use crate::repl::banner;
use crate::repl::commands::{
    parse_auth_command, parse_inventory_command, AuthCommand, InventoryCommand, AUTH_COMMAND_HELP,
    INVENTORY_COMMAND_HELP,
};
use crate::repl::completer::ReplHelper;
use crate::repl::renderer;

/// Which screen owns the prompt. Exactly one is active at a time; switching
/// screens discards the old screen's state entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Auth,
    Inventory { username: String },
}

/// The inventory screen's visible state: the full product list as of the
/// last reload, plus at most one selected row.
#[derive(Debug, Default)]
pub struct InventoryView {
    pub products: Vec<Product>,
    pub selected: Option<i64>,
}

impl InventoryView {
    /// Replaces the entire visible list with the current table contents,
    /// ascending id. A selection whose row disappeared is dropped.
    pub fn reload(&mut self, db: &Database) -> Result<(), StockroomError> {
        self.products = db.list_products()?;
        if let Some(id) = self.selected {
            if !self.products.iter().any(|p| p.id == id) {
                self.selected = None;
            }
        }
        Ok(())
    }

    /// Presence check on all three fields, then a raw-text insert and a full
    /// reload. No write happens when any field is empty.
    pub fn add_product(
        &mut self,
        db: &Database,
        name: &str,
        quantity: &str,
        price: &str,
    ) -> Result<i64, StockroomError> {
        if name.is_empty() || quantity.is_empty() || price.is_empty() {
            return Err(StockroomError::Validation("All fields are required".into()));
        }
        let id = db.insert_product(name, quantity, price)?;
        self.reload(db)?;
        Ok(id)
    }

    /// Marks a row from the visible list. Ids not currently visible are
    /// rejected, so a delete can only ever target what the user can see.
    pub fn select(&mut self, id: i64) -> Result<(), StockroomError> {
        if self.products.iter().any(|p| p.id == id) {
            self.selected = Some(id);
            Ok(())
        } else {
            Err(StockroomError::Validation(format!(
                "No product with id {} in the list",
                id
            )))
        }
    }

    /// Deletes the selected row by primary key and reloads.
    pub fn delete_selected(&mut self, db: &Database) -> Result<i64, StockroomError> {
        let id = self
            .selected
            .ok_or_else(|| StockroomError::Validation("No product selected".into()))?;
        db.delete_product(id)?;
        self.selected = None;
        self.reload(db)?;
        Ok(id)
    }

    /// Declared but unimplemented; touches nothing.
    pub fn update_selected(&self) -> Result<(), StockroomError> {
        Err(StockroomError::Unimplemented(
            "Update is not implemented yet".into(),
        ))
    }
}

/// Digest the password and look for an exact credential match. The error
/// message never says which of the two fields was wrong.
pub fn login(
    db: &Database,
    username: &str,
    password: &str,
) -> Result<UserAccount, StockroomError> {
    let digest = hash_password(password);
    if db.verify_credentials(username, &digest)? {
        db.get_user(username)?.ok_or_else(|| {
            StockroomError::Internal("Credential row vanished during login".into())
        })
    } else {
        Err(StockroomError::Authentication("Invalid credentials".into()))
    }
}

/// Single-statement insert; success does not log the user in.
pub fn register(db: &Database, username: &str, password: &str) -> Result<i64, StockroomError> {
    db.register_user(username, &hash_password(password))
}

pub struct ReplSession {
    db: Database,
}

impl ReplSession {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn run(self, splash: bool) -> Result<(), StockroomError> {
        if splash {
            banner::show_splash();
        }

        let config = Config::builder().auto_add_history(true).build();
        let mut editor = Editor::<ReplHelper, DefaultHistory>::with_config(config)
            .map_err(|e| StockroomError::Internal(format!("Failed to initialize REPL: {}", e)))?;
        editor.set_helper(Some(ReplHelper::for_auth()));

        let mut screen = Screen::Auth;
        let mut view = InventoryView::default();

        loop {
            let prompt = match &screen {
                Screen::Auth => format!("{} ", style("login>").cyan().bold()),
                Screen::Inventory { username } => {
                    format!("{} ", style(format!("{}@inventory>", username)).cyan().bold())
                }
            };

            match editor.readline(&prompt) {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }

                    let on_auth_screen = matches!(screen, Screen::Auth);
                    let should_exit = if on_auth_screen {
                        match parse_auth_command(trimmed) {
                            Ok(cmd) => self.handle_auth(cmd, &mut screen, &mut view, &mut editor),
                            Err(msg) => {
                                println!("{}", renderer::render_error(&msg));
                                false
                            }
                        }
                    } else {
                        match parse_inventory_command(trimmed) {
                            Ok(cmd) => {
                                self.handle_inventory(cmd, &mut screen, &mut view, &mut editor)
                            }
                            Err(msg) => {
                                println!("{}", renderer::render_error(&msg));
                                false
                            }
                        }
                    };

                    if should_exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!();
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!();
                    break;
                }
                Err(err) => {
                    println!(
                        "{}",
                        renderer::render_error(&format!("Input error: {}", err))
                    );
                    break;
                }
            }
        }

        println!("{}", renderer::render_info("Goodbye."));
        Ok(())
    }

    fn handle_auth(
        &self,
        cmd: AuthCommand,
        screen: &mut Screen,
        view: &mut InventoryView,
        editor: &mut Editor<ReplHelper, DefaultHistory>,
    ) -> bool {
        match cmd {
            AuthCommand::Login { username } => {
                let (username, password) = match read_credentials(username) {
                    Ok(pair) => pair,
                    Err(e) => {
                        println!("{}", renderer::render_notice(&e.into()));
                        return false;
                    }
                };

                match login(&self.db, &username, &password) {
                    Ok(user) => {
                        println!(
                            "{}",
                            renderer::render_success(&format!("Logged in as {}", user.username))
                        );
                        *screen = Screen::Inventory {
                            username: user.username,
                        };
                        *view = InventoryView::default();
                        editor.set_helper(Some(ReplHelper::for_inventory()));
                        if let Err(e) = view.reload(&self.db) {
                            println!("{}", renderer::render_notice(&e));
                        } else {
                            println!("{}", renderer::render_product_table(&view.products, None));
                        }
                    }
                    Err(e) => println!("{}", renderer::render_notice(&e)),
                }
            }

            AuthCommand::Register { username } => {
                let (username, password) = match read_credentials(username) {
                    Ok(pair) => pair,
                    Err(e) => {
                        println!("{}", renderer::render_notice(&e.into()));
                        return false;
                    }
                };

                match register(&self.db, &username, &password) {
                    Ok(_) => println!(
                        "{}",
                        renderer::render_success("User registered. Use /login to sign in.")
                    ),
                    Err(e) => println!("{}", renderer::render_notice(&e)),
                }
            }

            AuthCommand::Help { command } => {
                println!(
                    "{}",
                    renderer::render_help(AUTH_COMMAND_HELP, command.as_deref())
                );
            }

            AuthCommand::Version => println!("{}", renderer::render_version()),

            AuthCommand::Clear => print!("\x1B[2J\x1B[1;1H"),

            AuthCommand::Exit => return true,
        }

        false
    }

    fn handle_inventory(
        &self,
        cmd: InventoryCommand,
        screen: &mut Screen,
        view: &mut InventoryView,
        editor: &mut Editor<ReplHelper, DefaultHistory>,
    ) -> bool {
        match cmd {
            InventoryCommand::List => match view.reload(&self.db) {
                Ok(()) => println!(
                    "{}",
                    renderer::render_product_table(&view.products, view.selected)
                ),
                Err(e) => println!("{}", renderer::render_notice(&e)),
            },

            InventoryCommand::Add {
                name,
                quantity,
                price,
            } => {
                let fields = read_product_fields(name, quantity, price);
                let (name, quantity, price) = match fields {
                    Ok(f) => f,
                    Err(e) => {
                        println!("{}", renderer::render_notice(&e.into()));
                        return false;
                    }
                };

                match view.add_product(&self.db, &name, &quantity, &price) {
                    Ok(id) => {
                        println!(
                            "{}",
                            renderer::render_success(&format!("Added product #{}", id))
                        );
                        println!(
                            "{}",
                            renderer::render_product_table(&view.products, view.selected)
                        );
                    }
                    Err(e) => println!("{}", renderer::render_notice(&e)),
                }
            }

            InventoryCommand::Select { id } => match view.select(id) {
                Ok(()) => println!(
                    "{}",
                    renderer::render_product_table(&view.products, view.selected)
                ),
                Err(e) => println!("{}", renderer::render_notice(&e)),
            },

            InventoryCommand::Delete => match view.delete_selected(&self.db) {
                Ok(id) => {
                    println!(
                        "{}",
                        renderer::render_success(&format!("Deleted product #{}", id))
                    );
                    println!(
                        "{}",
                        renderer::render_product_table(&view.products, view.selected)
                    );
                }
                Err(e) => println!("{}", renderer::render_notice(&e)),
            },

            InventoryCommand::Update => {
                if let Err(e) = view.update_selected() {
                    println!("{}", renderer::render_notice(&e));
                }
            }

            InventoryCommand::Logout => {
                *screen = Screen::Auth;
                *view = InventoryView::default();
                editor.set_helper(Some(ReplHelper::for_auth()));
                println!("{}", renderer::render_info("Logged out."));
            }

            InventoryCommand::Help { command } => {
                println!(
                    "{}",
                    renderer::render_help(INVENTORY_COMMAND_HELP, command.as_deref())
                );
            }

            InventoryCommand::Version => println!("{}", renderer::render_version()),

            InventoryCommand::Clear => print!("\x1B[2J\x1B[1;1H"),

            InventoryCommand::Exit => return true,
        }

        false
    }
}

/// Username from the flag or a prompt; password always from a masked prompt.
fn read_credentials(username: Option<String>) -> std::io::Result<(String, String)> {
    let username = match username {
        Some(u) => u,
        None => prompt_field("Username")?,
    };
    let password = prompt_password("Password")?;
    Ok((username, password))
}

/// Fill in whichever product-form fields the command line did not carry.
fn read_product_fields(
    name: Option<String>,
    quantity: Option<String>,
    price: Option<String>,
) -> std::io::Result<(String, String, String)> {
    let name = match name {
        Some(n) => n,
        None => prompt_field("Product name")?,
    };
    let quantity = match quantity {
        Some(q) => q,
        None => prompt_field("Quantity")?,
    };
    let price = match price {
        Some(p) => p,
        None => prompt_field("Price")?,
    };
    Ok((name, quantity, price))
}

fn prompt_field(label: &str) -> std::io::Result<String> {
    let term = Term::stdout();
    print!("  {} ", style(format!("{}:", label)).white());
    std::io::stdout().flush()?;
    Ok(term.read_line()?.trim().to_string())
}

fn prompt_password(label: &str) -> std::io::Result<String> {
    let term = Term::stdout();
    print!("  {} ", style(format!("{}:", label)).white());
    std::io::stdout().flush()?;
    let secret = term.read_secure_line()?;
    Ok(secret)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_after_register_succeeds() {
        let db = Database::in_memory().unwrap();
        register(&db, "alice", "s3cret").unwrap();

        let user = login(&db, "alice", "s3cret").unwrap();
        assert_eq!(user.username, "alice");
    }

    #[test]
    fn test_login_wrong_password_fails_without_disclosure() {
        let db = Database::in_memory().unwrap();
        register(&db, "alice", "s3cret").unwrap();

        let err = login(&db, "alice", "wrong").unwrap_err();
        match err {
            StockroomError::Authentication(msg) => {
                assert_eq!(msg, "Invalid credentials");
            }
            other => panic!("expected Authentication, got {:?}", other),
        }
    }

    #[test]
    fn test_register_duplicate_leaves_single_row() {
        let db = Database::in_memory().unwrap();
        register(&db, "bob", "one").unwrap();

        let err = register(&db, "bob", "two").unwrap_err();
        assert!(matches!(err, StockroomError::DuplicateUsername(_)));
        assert_eq!(db.count_users().unwrap(), 1);

        // The original password still works; registration never auto-logs-in
        // nor overwrites.
        assert!(login(&db, "bob", "one").is_ok());
        assert!(login(&db, "bob", "two").is_err());
    }

    #[test]
    fn test_add_product_empty_field_writes_nothing() {
        let db = Database::in_memory().unwrap();
        let mut view = InventoryView::default();

        for (name, quantity, price) in [("", "10", "2.50"), ("Widget", "", "2.50"), ("Widget", "10", "")] {
            let err = view.add_product(&db, name, quantity, price).unwrap_err();
            assert!(matches!(err, StockroomError::Validation(_)));
        }
        assert!(db.list_products().unwrap().is_empty());
    }

    #[test]
    fn test_add_product_refreshes_view_with_literal_values() {
        let db = Database::in_memory().unwrap();
        let mut view = InventoryView::default();

        let id = view.add_product(&db, "Widget", "10", "2.50").unwrap();
        assert_eq!(view.products.len(), 1);
        assert_eq!(view.products[0].id, id);
        assert_eq!(view.products[0].quantity, "10");
        assert_eq!(view.products[0].price, "2.50");
    }

    #[test]
    fn test_delete_without_selection_is_an_error() {
        let db = Database::in_memory().unwrap();
        let mut view = InventoryView::default();
        view.add_product(&db, "Widget", "10", "2.50").unwrap();

        let err = view.delete_selected(&db).unwrap_err();
        assert!(matches!(err, StockroomError::Validation(_)));
        assert_eq!(view.products.len(), 1);
    }

    #[test]
    fn test_delete_selected_removes_exactly_that_row() {
        let db = Database::in_memory().unwrap();
        let mut view = InventoryView::default();
        let keep = view.add_product(&db, "Keep", "1", "1.00").unwrap();
        let doomed = view.add_product(&db, "Doomed", "2", "2.00").unwrap();

        view.select(doomed).unwrap();
        let deleted = view.delete_selected(&db).unwrap();

        assert_eq!(deleted, doomed);
        assert!(view.selected.is_none());
        assert_eq!(view.products.len(), 1);
        assert_eq!(view.products[0].id, keep);
    }

    #[test]
    fn test_select_requires_visible_row() {
        let db = Database::in_memory().unwrap();
        let mut view = InventoryView::default();
        view.add_product(&db, "Widget", "10", "2.50").unwrap();

        assert!(view.select(999).is_err());
        assert!(view.selected.is_none());
    }

    #[test]
    fn test_reload_drops_stale_selection() {
        let db = Database::in_memory().unwrap();
        let mut view = InventoryView::default();
        let id = view.add_product(&db, "Widget", "10", "2.50").unwrap();
        view.select(id).unwrap();

        // Row vanishes underneath the view
        db.delete_product(id).unwrap();
        view.reload(&db).unwrap();
        assert!(view.selected.is_none());
    }

    #[test]
    fn test_update_is_a_pure_stub() {
        let db = Database::in_memory().unwrap();
        let mut view = InventoryView::default();
        let id = view.add_product(&db, "Widget", "10", "2.50").unwrap();
        view.select(id).unwrap();

        let before = db.list_products().unwrap();
        let err = view.update_selected().unwrap_err();
        assert!(matches!(err, StockroomError::Unimplemented(_)));
        assert_eq!(db.list_products().unwrap(), before);
    }
}
