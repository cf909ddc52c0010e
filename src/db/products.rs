use chrono::Utc;

use super::Database;
use crate::errors::StockroomError;
use crate::models::Product;

impl Database {
    /// Full table read in ascending-id order. The visible list is always
    /// rebuilt from this; there is no incremental diffing.
    pub fn list_products(&self) -> Result<Vec<Product>, StockroomError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare("SELECT id, name, quantity, price, created_at FROM products ORDER BY id ASC")
            .map_err(|e| StockroomError::Database(format!("Query failed: {}", e)))?;

        let rows = stmt
            .query_map([], |row| {
                Ok(Product {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    quantity: row.get(2)?,
                    price: row.get(3)?,
                    created_at: row.get(4)?,
                })
            })
            .map_err(|e| StockroomError::Database(format!("Query error: {}", e)))?;

        let mut products = Vec::new();
        for row in rows {
            products.push(row.map_err(|e| StockroomError::Database(format!("Row error: {}", e)))?);
        }
        Ok(products)
    }

    /// Stores the three fields exactly as given; no numeric coercion.
    pub fn insert_product(
        &self,
        name: &str,
        quantity: &str,
        price: &str,
    ) -> Result<i64, StockroomError> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO products (name, quantity, price, created_at) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![name, quantity, price, Utc::now().to_rfc3339()],
        )
        .map_err(|e| StockroomError::Database(format!("Insert failed: {}", e)))?;
        Ok(conn.last_insert_rowid())
    }

    /// Deletes by primary key. Returns whether a row was actually removed.
    pub fn delete_product(&self, id: i64) -> Result<bool, StockroomError> {
        let conn = self.conn.lock().unwrap();
        let affected = conn
            .execute("DELETE FROM products WHERE id = ?1", rusqlite::params![id])
            .map_err(|e| StockroomError::Database(format!("Delete failed: {}", e)))?;
        Ok(affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_insert_and_list_products() {
        let db = Database::in_memory().unwrap();
        let id = db.insert_product("Widget", "10", "2.50").unwrap();

        let products = db.list_products().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, id);
        assert_eq!(products[0].name, "Widget");
        assert_eq!(products[0].quantity, "10");
        assert_eq!(products[0].price, "2.50");
    }

    #[test]
    fn test_db_quantity_and_price_are_raw_text() {
        // The form performs no numeric validation; whatever the user typed
        // must come back byte-for-byte.
        let db = Database::in_memory().unwrap();
        db.insert_product("Gadget", "lots", "cheap").unwrap();
        db.insert_product("Sprocket", "007", "2.500").unwrap();

        let products = db.list_products().unwrap();
        assert_eq!(products[0].quantity, "lots");
        assert_eq!(products[0].price, "cheap");
        assert_eq!(products[1].quantity, "007");
        assert_eq!(products[1].price, "2.500");
    }

    #[test]
    fn test_db_list_products_ascending_id_order() {
        let db = Database::in_memory().unwrap();
        let a = db.insert_product("A", "1", "1").unwrap();
        let b = db.insert_product("B", "2", "2").unwrap();
        let c = db.insert_product("C", "3", "3").unwrap();

        let ids: Vec<i64> = db.list_products().unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![a, b, c]);
    }

    #[test]
    fn test_db_delete_removes_exactly_one_row() {
        let db = Database::in_memory().unwrap();
        let keep = db.insert_product("Keep", "1", "1.00").unwrap();
        let drop = db.insert_product("Drop", "2", "2.00").unwrap();

        assert!(db.delete_product(drop).unwrap());

        let products = db.list_products().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, keep);
    }

    #[test]
    fn test_db_delete_nonexistent_product() {
        let db = Database::in_memory().unwrap();
        assert!(!db.delete_product(42).unwrap());
    }
}
