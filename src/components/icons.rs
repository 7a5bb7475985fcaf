//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;
use signoz_core::NavIcon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuActivity as Metrics, LuChevronLeft as ChevronLeft, LuChevronRight as ChevronRight,
        LuList as Traces, LuMoon as Moon, LuNetwork as ServiceMap, LuPlug as Instrumentation,
        LuSettings as Settings, LuSun as Sun, LuTrendingUp as Usage,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBarChartFill as Metrics, BsChevronLeft as ChevronLeft, BsChevronRight as ChevronRight,
        BsDiagram3 as ServiceMap, BsGear as Settings, BsGraphUp as Usage,
        BsMoonFill as Moon, BsPlug as Instrumentation, BsSunFill as Sun, BsTextLeft as Traces,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(SUN, Sun);
themed_icon!(MOON, Moon);
themed_icon!(METRICS, Metrics);
themed_icon!(TRACES, Traces);
themed_icon!(SERVICE_MAP, ServiceMap);
themed_icon!(USAGE, Usage);
themed_icon!(SETTINGS, Settings);
themed_icon!(INSTRUMENTATION, Instrumentation);

/// Icon for a navigation menu entry.
pub fn nav_icon(icon: NavIcon) -> Icon {
    match icon {
        NavIcon::Metrics => METRICS,
        NavIcon::Traces => TRACES,
        NavIcon::ServiceMap => SERVICE_MAP,
        NavIcon::UsageExplorer => USAGE,
        NavIcon::Settings => SETTINGS,
        NavIcon::Instrumentation => INSTRUMENTATION,
    }
}
