//! Tab bar listing the five panels with their shortcut digits.

use crate::dashboard::DashboardTab;

/// Context for rendering the tab bar.
#[derive(Debug, Clone, Copy)]
pub struct TabBarViewContext {
    /// Currently active tab.
    pub active: DashboardTab,
    /// Number of pending notifications, shown as a badge when non-zero.
    pub notification_count: usize,
}

/// Component for the tab bar.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabBarComponent;

impl TabBarComponent {
    /// Renders one line, bracketing the active tab.
    #[must_use]
    pub fn view(ctx: &TabBarViewContext) -> String {
        let labels: Vec<String> = DashboardTab::ALL
            .into_iter()
            .map(|tab| {
                let label = Self::label(tab, ctx.notification_count);
                if tab == ctx.active {
                    format!("[{label}]")
                } else {
                    format!(" {label} ")
                }
            })
            .collect();
        format!("{}\n", labels.join(" "))
    }

    fn label(tab: DashboardTab, notification_count: usize) -> String {
        let position = tab.index().saturating_add(1);
        let title = tab.title();
        if tab == DashboardTab::Notifications && notification_count > 0 {
            format!("{position} {title} ({notification_count})")
        } else {
            format!("{position} {title}")
        }
    }
}
