// Both tables use TEXT for every non-key column. Quantity and price are
// deliberately TEXT, not INTEGER/REAL: the product form stores whatever the
// user typed, and TEXT affinity keeps the read-back byte-faithful.
pub const CREATE_TABLES: &str = "
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    quantity TEXT NOT NULL,
    price TEXT NOT NULL,
    created_at TEXT NOT NULL
);
";
