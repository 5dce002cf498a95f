pub mod api_utils;
pub mod components;
pub mod export;
pub mod firebase;
pub mod list_utils;
pub mod storage;
