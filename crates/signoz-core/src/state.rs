//! Shell UI state as an immutable snapshot plus a reducer.

use crate::config::SiderConfig;
use crate::error::ThemeError;
use crate::theme::{Theme, ThemeStatus};

/// Everything the shell itself remembers. Resets on reload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellState {
    pub theme: Theme,
    pub theme_status: ThemeStatus,
    /// Id of the latest theme activation request (0 before the first one).
    pub theme_request: u64,
    pub collapsed: bool,
}

/// Events that change [`ShellState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellAction {
    ThemeRequested { theme: Theme, request: u64 },
    ThemeSettled { request: u64, result: Result<(), ThemeError> },
    ToggleSider,
    SetCollapsed(bool),
}

impl ShellState {
    /// Dark theme (pending activation), sider expanded.
    pub fn new() -> Self {
        Self {
            theme: Theme::Dark,
            theme_status: ThemeStatus::Loading,
            theme_request: 0,
            collapsed: false,
        }
    }

    pub fn reduce(&self, action: ShellAction) -> Self {
        let mut next = self.clone();
        match action {
            ShellAction::ThemeRequested { theme, request } => {
                next.theme = theme;
                next.theme_status = ThemeStatus::Loading;
                next.theme_request = request;
            }
            ShellAction::ThemeSettled { request, result } => {
                if request == self.theme_request {
                    next.theme_status = match result {
                        Ok(()) => ThemeStatus::Ready,
                        Err(err) => ThemeStatus::Failed(err),
                    };
                }
            }
            ShellAction::ToggleSider => next.collapsed = !self.collapsed,
            ShellAction::SetCollapsed(collapsed) => next.collapsed = collapsed,
        }
        next
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    /// The shell renders a blank frame while the theme is switching.
    pub fn is_blank(&self) -> bool {
        self.theme_status == ThemeStatus::Loading
    }

    pub fn sider_width(&self, sider: &SiderConfig) -> u32 {
        if self.collapsed {
            sider.collapsed_width
        } else {
            sider.width
        }
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}
