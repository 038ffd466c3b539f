//! Tabs of the admin shell.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum AdminTab {
    #[default]
    Dashboard,
    Users,
    Properties,
    Subscriptions,
    Payments,
}

impl AdminTab {
    pub const ALL: [AdminTab; 5] = [
        AdminTab::Dashboard,
        AdminTab::Users,
        AdminTab::Properties,
        AdminTab::Subscriptions,
        AdminTab::Payments,
    ];

    /// The four collection tabs shown as dashboard shortcuts.
    pub const SECTIONS: [AdminTab; 4] = [
        AdminTab::Users,
        AdminTab::Properties,
        AdminTab::Subscriptions,
        AdminTab::Payments,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AdminTab::Dashboard => "Dashboard",
            AdminTab::Users => "Users",
            AdminTab::Properties => "Properties",
            AdminTab::Subscriptions => "Subscriptions",
            AdminTab::Payments => "Payments",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AdminTab::Dashboard => "Overview of the admin sections",
            AdminTab::Users => "Registered accounts and their subscription state",
            AdminTab::Properties => "Listings offered for sale or rent",
            AdminTab::Subscriptions => "Listing plans held by users",
            AdminTab::Payments => "Payments received through the site",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            AdminTab::Dashboard => "dashboard",
            AdminTab::Users => "users",
            AdminTab::Properties => "properties",
            AdminTab::Subscriptions => "subscriptions",
            AdminTab::Payments => "payments",
        }
    }
}

/// Next active tab, or `None` when `selected` is already active.
pub fn transition(current: AdminTab, selected: AdminTab) -> Option<AdminTab> {
    (current != selected).then_some(selected)
}
