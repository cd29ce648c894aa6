pub mod error_mapper;

pub use error_mapper::map_portfolio_load_error;
