pub mod action;
pub mod category;
pub mod session;

pub use action::Action;
pub use category::Category;
pub use session::{ChatState, Rate, Session, Totals};
