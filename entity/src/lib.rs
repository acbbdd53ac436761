pub mod prelude;

pub mod reaction_role;
