pub mod commands;
pub mod menu;
pub mod report;
pub mod table;

pub use commands::execute;
pub use menu::Menu;
pub use report::report_load_issues;
