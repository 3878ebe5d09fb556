//! Application constants for the OCAT client
//!
//! This module contains the service endpoints, wire-format constants,
//! and default values used throughout the OCAT client.

// =============================================================================
// Service Endpoints
// =============================================================================

/// Base URL of the OCAT details service (tab-delimited text interface)
pub const OCAT_URL: &str = "https://cda.harvard.edu/srservices/ocatDetails.do";

/// Output format requested from the OCAT service
pub const OCAT_FORMAT: &str = "text";

/// ChaSeR observation viewer, used to open a record in the browser
pub const CHASER_URL: &str = "https://cda.harvard.edu/chaser/startViewer.do";

/// Mission-planning target parameter page for a single observation
pub const TARGET_PARAM_URL: &str = "https://icxc.harvard.edu/cgi-bin/mp/target_param.cgi";

// =============================================================================
// Wire Format
// =============================================================================

/// Field delimiter in the OCAT text response
pub const FIELD_DELIMITER: char = '\t';

/// Number of leading non-data lines in a response: the column-name row
/// followed by a separator/units row
pub const HEADER_LINE_COUNT: usize = 2;

/// Column holding the observation identifier, the join key for the cache
pub const OBSID_COLUMN: &str = "OBSID";

/// Markers the service emits for an absent value
pub const NULL_MARKERS: &[&str] = &["", "None", "NULL"];

// =============================================================================
// HTTP Defaults
// =============================================================================

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// User agent sent with every catalog request
pub const DEFAULT_USER_AGENT: &str = concat!("ocat_client/", env!("CARGO_PKG_VERSION"));
