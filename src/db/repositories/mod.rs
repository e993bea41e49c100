pub mod search_history;
