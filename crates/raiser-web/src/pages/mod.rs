//! Page Components

mod browse;
mod home;
mod outcome;
mod raise_list;

pub use browse::BrowsePage;
pub use home::HomePage;
pub use outcome::{CancelPage, SuccessPage};
pub use raise_list::RaiseListPage;
