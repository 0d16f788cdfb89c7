//! Interface string translations.
//!
//! Small static table keyed by [`Text`]. Anything without a translation for
//! the requested language is served in English.

use crate::models::Page;

/// Translatable interface strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Text {
    PageTitle(Page),
    Menu,
    SelectLanguage,
    GoToDashboard,
    GoBack,
    QuickLinks,
    NotFoundHeading,
    NotFoundMessage,
}

/// Translate `key` for the language `code`.
pub fn translate(code: &str, key: Text) -> &'static str {
    match code {
        "hi" => hindi(key).unwrap_or_else(|| english(key)),
        _ => english(key),
    }
}

fn english(key: Text) -> &'static str {
    match key {
        Text::PageTitle(page) => page.title(),
        Text::Menu => "Menu",
        Text::SelectLanguage => "Select language",
        Text::GoToDashboard => "Go to Dashboard",
        Text::GoBack => "Go Back",
        Text::QuickLinks => "Quick links",
        Text::NotFoundHeading => "Page not found",
        Text::NotFoundMessage => {
            "The page you are looking for does not exist or has been moved."
        }
    }
}

fn hindi(key: Text) -> Option<&'static str> {
    let text = match key {
        Text::PageTitle(page) => match page {
            Page::AlertManagement => "अलर्ट प्रबंधन",
            Page::MainDashboard => "मुख्य डैशबोर्ड",
            Page::Login => "लॉगिन",
            Page::SystemAdministration => "सिस्टम प्रशासन",
            Page::EnvironmentalDataAnalytics => "पर्यावरण डेटा विश्लेषण",
            Page::CommunityAlertCenter => "सामुदायिक अलर्ट केंद्र",
            Page::NotFound => return None,
        },
        Text::Menu => "मेनू",
        Text::SelectLanguage => "भाषा चुनें",
        Text::GoToDashboard => "डैशबोर्ड पर जाएं",
        Text::GoBack => "वापस जाएं",
        Text::QuickLinks => "त्वरित लिंक",
        Text::NotFoundHeading => "पृष्ठ नहीं मिला",
        Text::NotFoundMessage => return None,
    };
    Some(text)
}
