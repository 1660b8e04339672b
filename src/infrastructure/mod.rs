pub mod browser_session;
pub mod page_driver;

pub use browser_session::{BrowserSession, IsolatedContext};
pub use page_driver::PageDriver;
