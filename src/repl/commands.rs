/// Commands available on the login screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthCommand {
    Login { username: Option<String> },
    Register { username: Option<String> },
    Help { command: Option<String> },
    Version,
    Clear,
    Exit,
}

/// Commands available on the inventory screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryCommand {
    List,
    Add {
        name: Option<String>,
        quantity: Option<String>,
        price: Option<String>,
    },
    Select { id: i64 },
    Delete,
    Update,
    Logout,
    Help { command: Option<String> },
    Version,
    Clear,
    Exit,
}

/// Description of a command for help display.
pub struct CommandHelp {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

pub static AUTH_COMMAND_HELP: &[CommandHelp] = &[
    CommandHelp {
        name: "login",
        usage: "/login [--user <name>]",
        description: "Log in; prompts for the username and masked password",
    },
    CommandHelp {
        name: "register",
        usage: "/register [--user <name>]",
        description: "Create a new account (usernames must be unique)",
    },
    CommandHelp {
        name: "version",
        usage: "/version",
        description: "Show version and build info",
    },
    CommandHelp {
        name: "clear",
        usage: "/clear",
        description: "Clear the terminal screen",
    },
    CommandHelp {
        name: "help",
        usage: "/help [command]",
        description: "Show help for all or a specific command",
    },
    CommandHelp {
        name: "exit",
        usage: "/exit",
        description: "Quit",
    },
];

pub static INVENTORY_COMMAND_HELP: &[CommandHelp] = &[
    CommandHelp {
        name: "list",
        usage: "/list",
        description: "Reload and show all products",
    },
    CommandHelp {
        name: "add",
        usage: "/add [--name <n>] [--quantity <q>] [--price <p>]",
        description: "Add a product; missing fields are prompted for",
    },
    CommandHelp {
        name: "select",
        usage: "/select <id>",
        description: "Select a row from the visible list",
    },
    CommandHelp {
        name: "delete",
        usage: "/delete",
        description: "Delete the selected product",
    },
    CommandHelp {
        name: "update",
        usage: "/update",
        description: "Update the selected product (not implemented)",
    },
    CommandHelp {
        name: "logout",
        usage: "/logout",
        description: "Return to the login screen",
    },
    CommandHelp {
        name: "version",
        usage: "/version",
        description: "Show version and build info",
    },
    CommandHelp {
        name: "clear",
        usage: "/clear",
        description: "Clear the terminal screen",
    },
    CommandHelp {
        name: "help",
        usage: "/help [command]",
        description: "Show help for all or a specific command",
    },
    CommandHelp {
        name: "exit",
        usage: "/exit",
        description: "Quit",
    },
];

/// Command names for tab completion, per screen.
pub static AUTH_COMMAND_NAMES: &[&str] =
    &["/login", "/register", "/version", "/clear", "/help", "/exit"];

pub static INVENTORY_COMMAND_NAMES: &[&str] = &[
    "/list", "/add", "/select", "/delete", "/update", "/logout", "/version", "/clear", "/help",
    "/exit",
];

/// Parse a raw input line on the login screen.
pub fn parse_auth_command(input: &str) -> Result<AuthCommand, String> {
    let parts = tokenize(input)?;
    let cmd = parts[0].as_str();
    let args = &parts[1..];

    match cmd {
        "/login" => Ok(AuthCommand::Login {
            username: parse_user_flag(args, "/login")?,
        }),
        "/register" => Ok(AuthCommand::Register {
            username: parse_user_flag(args, "/register")?,
        }),
        "/version" => Ok(AuthCommand::Version),
        "/clear" => Ok(AuthCommand::Clear),
        "/help" => Ok(AuthCommand::Help {
            command: args.first().map(|s| s.trim_start_matches('/').to_string()),
        }),
        "/exit" | "/quit" | "/q" => Ok(AuthCommand::Exit),
        other => Err(format!(
            "Unknown command: {}. Type /help for available commands.",
            other
        )),
    }
}

/// Parse a raw input line on the inventory screen.
pub fn parse_inventory_command(input: &str) -> Result<InventoryCommand, String> {
    let parts = tokenize(input)?;
    let cmd = parts[0].as_str();
    let args = &parts[1..];

    match cmd {
        "/list" => Ok(InventoryCommand::List),
        "/add" => parse_add(args),
        "/select" => {
            let raw = args
                .first()
                .ok_or("Usage: /select <id>".to_string())?;
            let id = raw
                .parse::<i64>()
                .map_err(|_| format!("Invalid product id: {}", raw))?;
            Ok(InventoryCommand::Select { id })
        }
        "/delete" => Ok(InventoryCommand::Delete),
        "/update" => Ok(InventoryCommand::Update),
        "/logout" => Ok(InventoryCommand::Logout),
        "/version" => Ok(InventoryCommand::Version),
        "/clear" => Ok(InventoryCommand::Clear),
        "/help" => Ok(InventoryCommand::Help {
            command: args.first().map(|s| s.trim_start_matches('/').to_string()),
        }),
        "/exit" | "/quit" | "/q" => Ok(InventoryCommand::Exit),
        other => Err(format!(
            "Unknown command: {}. Type /help for available commands.",
            other
        )),
    }
}

fn tokenize(input: &str) -> Result<Vec<String>, String> {
    let input = input.trim();
    if !input.starts_with('/') {
        return Err("Commands must start with /. Type /help for available commands.".into());
    }
    let parts: Vec<String> = input.split_whitespace().map(|s| s.to_string()).collect();
    if parts.is_empty() {
        return Err("Empty command".into());
    }
    Ok(parts)
}

fn parse_user_flag(args: &[String], cmd: &str) -> Result<Option<String>, String> {
    let mut username = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--user" | "-u" => {
                i += 1;
                username = args.get(i).map(|s| s.to_string());
            }
            other => {
                return Err(format!("Unknown flag for {}: {}", cmd, other));
            }
        }
        i += 1;
    }
    Ok(username)
}

fn parse_add(args: &[String]) -> Result<InventoryCommand, String> {
    let mut name = None;
    let mut quantity = None;
    let mut price = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--name" | "-n" => {
                i += 1;
                name = args.get(i).map(|s| s.to_string());
            }
            "--quantity" | "-q" => {
                i += 1;
                quantity = args.get(i).map(|s| s.to_string());
            }
            "--price" | "-p" => {
                i += 1;
                price = args.get(i).map(|s| s.to_string());
            }
            other => {
                return Err(format!("Unknown flag for /add: {}", other));
            }
        }
        i += 1;
    }

    Ok(InventoryCommand::Add {
        name,
        quantity,
        price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_auth_login_with_user() {
        let cmd = parse_auth_command("/login --user alice").unwrap();
        assert_eq!(
            cmd,
            AuthCommand::Login {
                username: Some("alice".into())
            }
        );
    }

    #[test]
    fn test_parse_auth_rejects_bare_word() {
        assert!(parse_auth_command("login").is_err());
    }

    #[test]
    fn test_parse_auth_unknown_command() {
        assert!(parse_auth_command("/list").is_err());
    }

    #[test]
    fn test_parse_add_flags() {
        let cmd = parse_inventory_command("/add --name Widget --quantity 10 --price 2.50").unwrap();
        assert_eq!(
            cmd,
            InventoryCommand::Add {
                name: Some("Widget".into()),
                quantity: Some("10".into()),
                price: Some("2.50".into()),
            }
        );
    }

    #[test]
    fn test_parse_add_unknown_flag() {
        assert!(parse_inventory_command("/add --color red").is_err());
    }

    #[test]
    fn test_parse_select_requires_numeric_id() {
        assert_eq!(
            parse_inventory_command("/select 7").unwrap(),
            InventoryCommand::Select { id: 7 }
        );
        assert!(parse_inventory_command("/select seven").is_err());
        assert!(parse_inventory_command("/select").is_err());
    }

    #[test]
    fn test_parse_exit_aliases() {
        for line in ["/exit", "/quit", "/q"] {
            assert_eq!(parse_inventory_command(line).unwrap(), InventoryCommand::Exit);
            assert_eq!(parse_auth_command(line).unwrap(), AuthCommand::Exit);
        }
    }
}
