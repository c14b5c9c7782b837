//! Field weights for similar-venue scoring
//!
//! - shared category: 3
//! - shared city: 2
//! - shared service: 1 per matching service

/// Added once per target category that matches a candidate
pub const CATEGORY_WEIGHT: u32 = 3;

/// Added when the target's city matches a candidate
pub const CITY_WEIGHT: u32 = 2;

/// Added once per target service that matches a candidate
pub const SERVICE_WEIGHT: u32 = 1;

/// Number of similar venues returned when the caller does not choose
pub const DEFAULT_SIMILAR_LIMIT: usize = 3;
