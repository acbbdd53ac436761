//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models so that the
//! service layer never sees database-specific structures. All database queries, inserts,
//! and deletes are performed through these repositories.

pub mod reaction_role;

#[cfg(test)]
mod test;
