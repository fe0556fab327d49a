#![forbid(unsafe_code)]

//! `townmap` answers "how do I get from here to there" over a small regional road map.
//!
//! The map is built from town and road names, either one call at a time through
//! [`TownGraphManager`] or in bulk from a road file (see [`import`]). Path queries return one
//! line per road travelled:
//!
//! ```
//! use townmap::TownGraphManager;
//!
//! let mut map = TownGraphManager::new();
//! map.add_road("Ashby", "Brook", 5, "Mill Lane").unwrap();
//! map.add_road("Brook", "Carrow", 3, "High Street").unwrap();
//!
//! assert_eq!(
//!     map.get_path("Ashby", "Carrow"),
//!     vec![
//!         "Ashby via Mill Lane to Brook 5 mi".to_string(),
//!         "Brook via High Street to Carrow 3 mi".to_string(),
//!     ]
//! );
//! ```

mod error;
pub mod import;
mod manager;

pub use error::{Error, Result};
pub use import::{ImportOptions, ImportSummary, RoadRecord};
pub use manager::TownGraphManager;
pub use townmap_graph::{Graph, Hop, Road, ShortestPaths, Town, alg};
