//! The body of whichever tab is active.

use chrono::{DateTime, Utc};

use super::{
    AnalyticsCardsComponent, AnalyticsViewContext, CompletedListComponent,
    CompletedListViewContext, CycleListComponent, CycleListViewContext, ListWindow,
    NotificationListComponent, NotificationListViewContext, ReviewListComponent,
    ReviewListViewContext,
};
use crate::dashboard::{DashboardData, DashboardTab, derive_notifications};

/// Context for rendering one tab's panel.
#[derive(Debug, Clone, Copy)]
pub struct PanelViewContext<'a> {
    /// Tab whose panel is drawn.
    pub tab: DashboardTab,
    /// Datasets as currently known.
    pub data: &'a DashboardData,
    /// Reference instant for due labels and notifications.
    pub now: DateTime<Utc>,
    /// Visible rows of the panel's list. Ignored by analytics.
    pub window: ListWindow,
    /// Whether to colour status icons.
    pub styled: bool,
}

/// Renders exactly one panel, chosen by [`PanelViewContext::tab`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelComponent;

impl PanelComponent {
    /// Renders the panel for `ctx.tab`.
    #[must_use]
    pub fn view(ctx: &PanelViewContext<'_>) -> String {
        let PanelViewContext {
            tab,
            data,
            now,
            window,
            styled,
        } = *ctx;

        match tab {
            DashboardTab::MyReviews => {
                let reviews = data.open_reviews();
                ReviewListComponent::view(&ReviewListViewContext {
                    reviews: &reviews,
                    window,
                    now,
                    styled,
                })
            }
            DashboardTab::Completed => {
                let reviews = data.completed_reviews();
                CompletedListComponent::view(&CompletedListViewContext {
                    reviews: &reviews,
                    window,
                    styled,
                })
            }
            DashboardTab::Cycles => CycleListComponent::view(&CycleListViewContext {
                cycles: data.cycles(),
                window,
                styled,
            }),
            DashboardTab::Analytics => {
                let summary = data.analytics();
                AnalyticsCardsComponent::view(&AnalyticsViewContext { summary: &summary })
            }
            DashboardTab::Notifications => {
                let notifications = derive_notifications(data.reviews(), now);
                NotificationListComponent::view(&NotificationListViewContext {
                    notifications: &notifications,
                    window,
                    styled,
                })
            }
        }
    }
}
