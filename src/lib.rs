// Library for tests to access modules

pub mod config;
pub mod cron_builder;
pub mod format;
pub mod models;
pub mod poller;
pub mod reconcile;
pub mod stats_client;
pub mod validators;
pub mod version;
pub mod view;
