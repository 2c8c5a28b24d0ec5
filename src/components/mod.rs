pub mod layout;
pub mod notice_bar;
pub mod pager;
