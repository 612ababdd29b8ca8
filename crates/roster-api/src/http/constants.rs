//! Shared HTTP constants (headers, problem URIs).

pub(crate) const PROBLEM_BAD_REQUEST: &str = "https://roster.dev/problems/bad-request";
pub(crate) const PROBLEM_CONFLICT: &str = "https://roster.dev/problems/conflict";
pub(crate) const PROBLEM_NOT_FOUND: &str = "https://roster.dev/problems/not-found";
pub(crate) const PROBLEM_INTERNAL: &str = "https://roster.dev/problems/internal";
