mod dashboard;
mod detail;
mod heroes;
mod search;

pub use dashboard::Dashboard;
pub use detail::HeroDetail;
pub use heroes::HeroesView;
pub use search::{HeroSearch, SearchHandle};
