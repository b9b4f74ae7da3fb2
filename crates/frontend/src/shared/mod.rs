pub mod api_utils;
pub mod clock;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod error;
pub mod http;
pub mod icons;
pub mod list_utils;
pub mod number_format;
pub mod page_standard;
pub mod paged_cache;
pub mod resource_api;
pub mod storage;

#[cfg(test)]
pub(crate) mod testing;
