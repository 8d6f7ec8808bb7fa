//! SQLite-backed user store.
//! Used by: handlers::register, handlers::login, handlers::me, state.

use std::sync::Mutex;

use rusqlite::{Connection, OptionalExtension};

use crate::error::{lock_err, Result};

pub struct UserStore {
    conn: Mutex<Connection>,
}

#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: String,
}

impl User {
    pub fn new(username: &str, email: &str, password_hash: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            username: username.to_owned(),
            email: email.to_owned(),
            password_hash: password_hash.to_owned(),
            role: "user".to_owned(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

const SELECT: &str =
    "SELECT id, username, email, password_hash, role, created_at FROM users";

impl UserStore {
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                username TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                password_hash TEXT NOT NULL,
                role TEXT NOT NULL,
                created_at TEXT NOT NULL
            )",
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::open(":memory:")
    }

    pub fn insert(&self, user: &User) -> Result<()> {
        let conn = self.conn.lock().map_err(lock_err("users"))?;
        conn.execute(
            "INSERT INTO users (id, username, email, password_hash, role, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            (
                &user.id,
                &user.username,
                &user.email,
                &user.password_hash,
                &user.role,
                &user.created_at,
            ),
        )?;
        Ok(())
    }

    pub fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        self.find(&format!("{SELECT} WHERE email = ?1"), email)
    }

    pub fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        self.find(&format!("{SELECT} WHERE id = ?1"), id)
    }

    fn find(&self, sql: &str, key: &str) -> Result<Option<User>> {
        let conn = self.conn.lock().map_err(lock_err("users"))?;
        let user = conn
            .query_row(sql, [key], |row| {
                Ok(User {
                    id: row.get(0)?,
                    username: row.get(1)?,
                    email: row.get(2)?,
                    password_hash: row.get(3)?,
                    role: row.get(4)?,
                    created_at: row.get(5)?,
                })
            })
            .optional()?;
        Ok(user)
    }
}
