//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of each screen for formatters.

pub mod app_card;
pub mod screen_view;
pub mod screen_view_builder;

pub use app_card::AppCard;
pub use screen_view::{
    AnalyticsView, AppDetailsView, BundleCard, BundlesView, CatalogView, HeaderView, MyAppsView,
    RequestFlowView, ScreenBody, ScreenView, TabView, TopAppView,
};
pub use screen_view_builder::ScreenViewBuilder;
