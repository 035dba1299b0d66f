pub mod domain;
pub mod ports;
pub mod session;

pub use domain::{Address, CreditCard, Employment, Subscription, UserRecord};
pub use ports::{FetchError, SourceResult, UserSource};
pub use session::{Advance, BrowsingSession};
