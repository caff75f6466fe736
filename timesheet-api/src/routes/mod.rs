pub(crate) mod entries;
pub(crate) mod error;
pub(crate) mod tasks;
pub(crate) mod timesheets;

#[cfg(test)]
pub(crate) mod test_support;

pub(crate) use error::ApiError;
