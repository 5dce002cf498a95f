pub mod collection;
pub mod dates;
pub mod export;
pub mod field;
pub mod load_sequence;
pub mod money;
pub mod pagination;
pub mod record;
