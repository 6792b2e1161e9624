pub mod psql;

pub use psql::PsqlExecutor;
