//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons and
//! provides the [`AppIcon`] wrapper used by every view.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::config::{DEFAULT_ICON_SIZE, IconTheme};

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuActivity as Analytics, LuArrowLeft as ArrowLeft, LuBell as Bell, LuCheck as Check,
        LuChevronDown as ChevronDown, LuGlobe as Globe, LuHouse as Home, LuInfo as Info,
        LuLayoutDashboard as Dashboard, LuList as Menu, LuLogIn as Login, LuSettings as Settings,
        LuShield as Shield, LuTriangleAlert as Warning, LuUsers as Community, LuWaves as Waves,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowLeft as ArrowLeft, BsBell as Bell, BsBoxArrowInRight as Login, BsCheck2 as Check,
        BsChevronDown as ChevronDown, BsExclamationTriangle as Warning, BsGear as Settings,
        BsGlobe as Globe, BsGraphUp as Analytics, BsHouseFill as Home, BsInfoCircle as Info,
        BsListUl as Menu, BsPeople as Community, BsShieldCheck as Shield,
        BsSpeedometer2 as Dashboard, BsWater as Waves,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: IconData = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(ANALYTICS, Analytics);
themed_icon!(ARROW_LEFT, ArrowLeft);
themed_icon!(BELL, Bell);
themed_icon!(CHECK, Check);
themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(COMMUNITY, Community);
themed_icon!(DASHBOARD, Dashboard);
themed_icon!(GLOBE, Globe);
themed_icon!(HOME, Home);
themed_icon!(INFO, Info);
themed_icon!(LOGIN, Login);
themed_icon!(MENU, Menu);
themed_icon!(SETTINGS, Settings);
themed_icon!(SHIELD, Shield);
themed_icon!(WARNING, Warning);
themed_icon!(WAVES, Waves);

// =============================================================================
// Semantic Names
// =============================================================================

/// Symbolic icon names accepted by [`AppIcon`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconName {
    Analytics,
    ArrowLeft,
    Bell,
    Check,
    ChevronDown,
    Community,
    Dashboard,
    Globe,
    Home,
    Info,
    Login,
    Menu,
    Settings,
    Shield,
    Warning,
    Waves,
}

impl IconName {
    /// Glyph for this name in the configured theme.
    pub const fn glyph(self) -> IconData {
        match self {
            Self::Analytics => ANALYTICS,
            Self::ArrowLeft => ARROW_LEFT,
            Self::Bell => BELL,
            Self::Check => CHECK,
            Self::ChevronDown => CHEVRON_DOWN,
            Self::Community => COMMUNITY,
            Self::Dashboard => DASHBOARD,
            Self::Globe => GLOBE,
            Self::Home => HOME,
            Self::Info => INFO,
            Self::Login => LOGIN,
            Self::Menu => MENU,
            Self::Settings => SETTINGS,
            Self::Shield => SHIELD,
            Self::Warning => WARNING,
            Self::Waves => WAVES,
        }
    }

    /// Parse a kebab-case icon name (`"arrow-left"`), falling back to
    /// [`IconName::Info`] for unknown names.
    pub fn from_name(name: &str) -> Self {
        match name {
            "analytics" => Self::Analytics,
            "arrow-left" => Self::ArrowLeft,
            "bell" => Self::Bell,
            "check" => Self::Check,
            "chevron-down" => Self::ChevronDown,
            "community" => Self::Community,
            "dashboard" => Self::Dashboard,
            "globe" => Self::Globe,
            "home" => Self::Home,
            "info" => Self::Info,
            "login" => Self::Login,
            "menu" => Self::Menu,
            "settings" => Self::Settings,
            "shield" => Self::Shield,
            "warning" => Self::Warning,
            "waves" => Self::Waves,
            other => {
                log::warn!("unknown icon {other:?}");
                Self::Info
            }
        }
    }
}

/// Themed glyph at a fixed pixel size.
#[component]
pub fn AppIcon(
    name: IconName,
    #[prop(default = DEFAULT_ICON_SIZE)] size: u32,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    let px = format!("{size}px");
    view! {
        <span class=move || class.get().unwrap_or_default() aria-hidden="true">
            <Icon icon=name.glyph() width=px.clone() height=px />
        </span>
    }
}
