pub mod catalog;
pub mod collation;
pub mod ledger;
pub mod pager;
pub mod ranker;
pub mod settings;
pub mod unicode;
