//! Theme switching.
//!
//! The shell never touches stylesheets itself. It asks an injected
//! [`ThemeService`] to activate a named theme and tracks the request in
//! [`ShellState`](crate::ShellState) through [`ShellAction`]s. While a request
//! is pending the shell renders a blank frame.

use std::cell::Cell;
use std::fmt;
use std::future::Future;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParseThemeError, ThemeError};
use crate::state::ShellAction;

/// Named theme profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn from_dark_flag(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Identifier handed to the theme service.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(ParseThemeError(s.to_string())),
        }
    }
}

/// Status of the most recent activation request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ThemeStatus {
    /// A request is in flight; the shell renders nothing.
    #[default]
    Loading,
    Ready,
    /// The service reported a failure for the latest request.
    Failed(ThemeError),
}

/// External service that swaps the active theme.
pub trait ThemeService {
    /// Activate `theme`, settling once its assets are applied.
    fn activate(&self, theme: Theme) -> impl Future<Output = Result<(), ThemeError>>;
}

/// Issues activation requests and reports them as [`ShellAction`]s.
///
/// Each request gets an increasing id so that a settlement arriving after a
/// newer request is ignored by the reducer.
pub struct ThemeController<S> {
    service: S,
    next_request: Cell<u64>,
}

impl<S: ThemeService> ThemeController<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            next_request: Cell::new(1),
        }
    }

    /// Set the theme from the toggle's checked state.
    pub async fn set_theme(
        &self,
        is_dark: bool,
        dispatch: impl Fn(ShellAction),
    ) -> Result<(), ThemeError> {
        self.activate(Theme::from_dark_flag(is_dark), dispatch).await
    }

    /// Request `theme`: records it synchronously, then awaits the service.
    pub async fn activate(
        &self,
        theme: Theme,
        dispatch: impl Fn(ShellAction),
    ) -> Result<(), ThemeError> {
        let request = self.request(theme, &dispatch);
        self.settle(theme, request, dispatch).await
    }

    /// Reserve a request id for `theme` and report it through `dispatch`.
    ///
    /// Never suspends, so callers can update state inside an event handler
    /// and await [`ThemeController::settle`] afterwards.
    pub fn request(&self, theme: Theme, dispatch: &impl Fn(ShellAction)) -> u64 {
        let request = self.next_request.get();
        self.next_request.set(request + 1);

        dispatch(ShellAction::ThemeRequested { theme, request });
        request
    }

    /// Ask the service for `theme` and report the outcome of `request`.
    pub async fn settle(
        &self,
        theme: Theme,
        request: u64,
        dispatch: impl Fn(ShellAction),
    ) -> Result<(), ThemeError> {
        let result = self.service.activate(theme).await;
        dispatch(ShellAction::ThemeSettled {
            request,
            result: result.clone(),
        });
        result
    }
}
