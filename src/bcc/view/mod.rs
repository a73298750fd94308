mod account_table;
mod notice;
mod statement;

pub use account_table::{AccountRow, AccountTable};
pub use notice::{Notice, NoticeLevel};
pub use statement::Statement;
