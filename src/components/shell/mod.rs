//! Shell layout.
//!
//! Composes the sider, header row, content region and footer. Renders a
//! blank frame while a theme is being activated, and throws a failed theme
//! activation to the root error boundary.

use leptos::prelude::*;
use leptos_use::use_media_query;
use signoz_core::{ShellAction, ThemeStatus};

use crate::app::AppContext;
use crate::components::content::PageContent;
use crate::components::header::HeaderRow;
use crate::components::sider::Sider;

stylance::import_crate_style!(css, "src/components/shell/shell.module.css");

/// Action for a media query reading, given the previous one.
///
/// The first reading never acts, so the sider always mounts expanded; later
/// readings act only when the viewport crosses the breakpoint.
fn breakpoint_action(prev: Option<bool>, is_narrow: bool) -> Option<ShellAction> {
    match prev {
        Some(was_narrow) if was_narrow != is_narrow => Some(ShellAction::SetCollapsed(is_narrow)),
        _ => None,
    }
}

/// Collapse the sider when the viewport becomes narrow, expand it when it
/// becomes wide again. A manual toggle sticks until the next crossing.
fn setup_auto_collapse(ctx: AppContext) {
    let breakpoint = ctx.config.with_value(|c| c.sider.auto_collapse_below);
    let narrow = use_media_query(format!("(max-width: {}px)", breakpoint.saturating_sub(1)));

    Effect::new(move |prev: Option<bool>| {
        let is_narrow = narrow.get();
        if let Some(action) = breakpoint_action(prev, is_narrow) {
            ctx.dispatch(action);
        }
        is_narrow
    });
}

/// Main shell component.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    setup_auto_collapse(ctx);

    let footer = ctx.config.with_value(|c| c.product.footer.clone());
    let blank = Memo::new(move |_| ctx.shell.with(|s| s.is_blank()));
    let theme_failure = move || {
        ctx.shell.with(|s| match &s.theme_status {
            ThemeStatus::Failed(err) => Err(err.clone()),
            _ => Ok(()),
        })
    };

    view! {
        {theme_failure}
        <Show when=move || !blank.get()>
            <div class=css::layout>
                <Sider />
                <div class=css::main>
                    <main class=css::content>
                        <HeaderRow />
                        <PageContent />
                    </main>
                    <footer class=css::footer>{footer.clone()}</footer>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_reading_keeps_sider_expanded() {
        assert_eq!(breakpoint_action(None, true), None);
        assert_eq!(breakpoint_action(None, false), None);
    }

    #[test]
    fn test_crossing_breakpoint() {
        assert_eq!(
            breakpoint_action(Some(false), true),
            Some(ShellAction::SetCollapsed(true))
        );
        assert_eq!(
            breakpoint_action(Some(true), false),
            Some(ShellAction::SetCollapsed(false))
        );
        assert_eq!(breakpoint_action(Some(true), true), None);
    }
}
