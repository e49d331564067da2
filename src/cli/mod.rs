pub mod dashboard;
pub mod dependency;
pub mod health;
pub mod kpis;
pub mod ranking;
pub mod setup;
pub mod ui;
