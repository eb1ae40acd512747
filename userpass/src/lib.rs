//! Appends a randomly generated password column to a CSV file of users.
//!
//! The whole input table is read into memory, the literal header `password`
//! is appended to the first row, and every following row gets a fresh
//! fixed-length token drawn uniformly from `[A-Za-z0-9]`. The result is
//! written with `\n` line endings.
//!
//! Passwords come from a non-cryptographic PRNG and are not checked for
//! uniqueness, so two users may receive the same token. Rows whose width
//! differs from the header are augmented without complaint.
//!
//! # Usage
//!
//! ```sh
//! userpass                                  # users.csv -> userpass.csv
//! userpass -i staff.csv -o staff-pass.csv -l 12
//! ```
//!
//! From code, with a seeded generator:
//!
//! ```
//! use userpass::{PasswordGenerator, read_table, write_table, PASSWORD_COLUMN};
//!
//! let mut table = read_table("id,name\n1,Alice\n".as_bytes()).unwrap();
//! table.augment(&mut PasswordGenerator::from_seed(42), PASSWORD_COLUMN);
//!
//! let mut out = Vec::new();
//! write_table(&table, &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().starts_with("id,name,password\n1,Alice,"));
//! ```

pub mod augment;
pub mod error;
pub mod password;

pub use augment::{
    AugmentSummary, PASSWORD_COLUMN, Row, Table, augment_file, read_table, write_table,
};
pub use error::Error;
pub use password::{ALPHANUMERIC, DEFAULT_LENGTH, PasswordGenerator, generate_password};

/// Input file read when no path is given
pub const DEFAULT_INPUT: &str = "users.csv";

/// Output file written when no path is given
pub const DEFAULT_OUTPUT: &str = "userpass.csv";
