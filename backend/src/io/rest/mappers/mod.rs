pub mod statistics_mapper;
pub mod transaction_mapper;

pub use statistics_mapper::StatisticsMapper;
pub use transaction_mapper::TransactionMapper;
