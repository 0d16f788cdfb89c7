//! Routed page views.

mod alert_management;
mod community_alert_center;
mod environmental_data_analytics;
mod login;
mod main_dashboard;
mod not_found;
mod system_administration;
mod widgets;

pub use alert_management::AlertManagementPage;
pub use community_alert_center::CommunityAlertCenterPage;
pub use environmental_data_analytics::EnvironmentalDataAnalyticsPage;
pub use login::LoginPage;
pub use main_dashboard::MainDashboardPage;
pub use not_found::NotFoundPage;
pub use system_administration::SystemAdministrationPage;

#[cfg(test)]
mod tests {
    /// Page modules paired with the stylesheet they import, if any.
    const MODULES: &[(&str, &str, Option<&str>)] = &[
        ("widgets", include_str!("widgets.rs"), Some(include_str!("widgets.module.css"))),
        ("login", include_str!("login.rs"), Some(include_str!("login.module.css"))),
        (
            "community_alert_center",
            include_str!("community_alert_center.rs"),
            Some(include_str!("community_alert_center.module.css")),
        ),
        ("not_found", include_str!("not_found.rs"), Some(include_str!("not_found.module.css"))),
        ("alert_management", include_str!("alert_management.rs"), None),
        ("main_dashboard", include_str!("main_dashboard.rs"), None),
        ("system_administration", include_str!("system_administration.rs"), None),
        (
            "environmental_data_analytics",
            include_str!("environmental_data_analytics.rs"),
            None,
        ),
    ];

    /// Class names declared at the start of a selector line.
    fn class_names(sheet: &str) -> Vec<&str> {
        sheet
            .lines()
            .filter_map(|line| line.strip_prefix('.'))
            .map(|rest| {
                let end = rest
                    .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
                    .unwrap_or(rest.len());
                &rest[..end]
            })
            .collect()
    }

    #[test]
    fn test_stylesheet_classes_are_used_by_their_module() {
        for (name, source, sheet) in MODULES {
            let Some(sheet) = sheet else { continue };
            for class in class_names(sheet) {
                assert!(
                    source.contains(&format!("css::{class}")),
                    "{name} never uses .{class}"
                );
            }
        }
    }

    #[test]
    fn test_only_styled_modules_import_a_stylesheet() {
        for (name, source, sheet) in MODULES {
            let imports = source.matches("import_crate_style!").count();
            assert_eq!(imports, usize::from(sheet.is_some()), "{name}");
        }
    }
}
