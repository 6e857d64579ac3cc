//! Statistics used to summarize batches of games.
//!
//! - [`descriptive`]: min, max, mean, median and spread of a set of samples
//! - [`tally`]: frequency counts of discrete outcomes (e.g. the largest tile
//!   reached in each game)
//!
//! # Examples
//!
//! ```
//! use tilemerge_stats::{descriptive::DescriptiveStats, tally::ValueTally};
//!
//! let stats = DescriptiveStats::new([1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
//! assert_eq!(stats.mean, 3.0);
//!
//! let tally = ValueTally::from_values([256, 512, 256, 1024]);
//! assert_eq!(tally.count(256), 2);
//! assert_eq!(tally.max_value(), Some(1024));
//! ```

pub mod descriptive;
pub mod tally;
