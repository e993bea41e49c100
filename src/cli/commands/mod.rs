mod calculate;
mod history;

pub use calculate::cmd_calculate;
pub use history::cmd_history;
