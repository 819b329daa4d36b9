//! Read-only aggregators over a filtered [`TripTable`](crate::trips::TripTable).
//!
//! Each aggregator reduces the table to a small summary independently of the
//! others. A statistic over an empty table is reported as
//! [`Stat::NoData`](types::Stat::NoData); one whose column the dataset lacks
//! is [`Stat::Unavailable`](types::Stat::Unavailable).

pub mod duration;
pub mod station;
pub mod time;
pub mod types;
pub mod users;
pub mod utility;

pub use duration::duration_stats;
pub use station::station_stats;
pub use time::time_stats;
pub use users::user_stats;
