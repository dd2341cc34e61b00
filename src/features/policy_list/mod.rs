//! Policy List Page

mod page;

pub use page::PolicyListPage;
