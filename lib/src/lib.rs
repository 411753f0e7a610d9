mod data;
mod engine;
mod groups;
mod results;

pub use data::Challenge;
pub use data::ChallengeList;
pub use data::GroupCatalog;
pub use data::GroupedItem;
pub use data::DEFAULT_ATTEMPT_BUDGET;
pub use data::GROUP_SIZE;
pub use engine::*;
pub use groups::*;
pub use results::*;
