//! Navigation sider.
//!
//! Logo, theme switch, navigation menu and the collapse trigger. The sider
//! width follows `ShellState::collapsed`; labels are hidden when collapsed.

use leptos::prelude::*;
use leptos_icons::Icon;
use signoz_core::nav::active_link;
use signoz_core::{NAV_LINKS, NavLinkEntry, ShellAction};

use crate::app::AppContext;
use crate::components::Link;
use crate::components::icons::{self as ic, nav_icon};

stylance::import_crate_style!(css, "src/components/sider/sider.module.css");

fn join_classes(base: &str, extra: &str, enabled: bool) -> String {
    if enabled {
        format!("{} {}", base, extra)
    } else {
        base.to_string()
    }
}

/// Collapsible navigation sider.
#[component]
pub fn Sider() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let (logo, product) = ctx
        .config
        .with_value(|c| (c.product.logo.clone(), c.product.name.clone()));
    let collapsed = Memo::new(move |_| ctx.shell.with(|s| s.collapsed));
    let width = move || {
        let px = ctx
            .config
            .with_value(|c| ctx.shell.with(|s| s.sider_width(&c.sider)));
        format!("{}px", px)
    };

    let toggle = move |_: leptos::ev::MouseEvent| ctx.dispatch(ShellAction::ToggleSider);
    let trigger_title = move || {
        if collapsed.get() {
            "Expand sidebar"
        } else {
            "Collapse sidebar"
        }
    };

    view! {
        <aside class=css::sider style:width=width>
            <div class=css::top>
                <div class=move || join_classes(css::logo, css::logoHidden, collapsed.get())>
                    <Link href="/">
                        <img src=logo alt=product />
                    </Link>
                </div>
                <ThemeToggle />
                <nav class=css::menu aria-label="Main">
                    {NAV_LINKS
                        .iter()
                        .map(|entry| view! { <NavItem entry=entry collapsed=collapsed /> })
                        .collect_view()}
                </nav>
            </div>
            <button
                class=css::trigger
                on:click=toggle
                title=trigger_title
                aria-label=trigger_title
            >
                {move || {
                    if collapsed.get() {
                        view! { <Icon icon=ic::CHEVRON_RIGHT /> }.into_any()
                    } else {
                        view! { <Icon icon=ic::CHEVRON_LEFT /> }.into_any()
                    }
                }}
            </button>
        </aside>
    }
}

/// A single menu entry; highlighted while it is the first entry whose
/// section contains the location.
#[component]
fn NavItem(entry: &'static NavLinkEntry, collapsed: Memo<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let active = Memo::new(move |_| {
        ctx.location
            .with(|path| active_link(path).is_some_and(|link| link.key == entry.key))
    });
    let class = Signal::derive(move || join_classes(css::item, css::itemActive, active.get()));

    view! {
        <Link href=entry.target class=class>
            <span class=css::itemIcon title=entry.label>
                <Icon icon=nav_icon(entry.icon) />
            </span>
            <Show when=move || !collapsed.get()>
                <span class=css::itemLabel>{entry.label}</span>
            </Show>
        </Link>
    }
}

/// Dark/light switch. Checked means dark.
#[component]
fn ThemeToggle() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let is_dark = Memo::new(move |_| ctx.shell.with(|s| s.is_dark()));
    let class = move || join_classes(css::switch, css::switchOn, is_dark.get());
    let title = move || {
        if is_dark.get() {
            "Switch to light theme"
        } else {
            "Switch to dark theme"
        }
    };

    view! {
        <div class=css::themeSwitch>
            <button
                role="switch"
                class=class
                title=title
                aria-checked=move || is_dark.get().to_string()
                on:click=move |_| ctx.set_theme(!is_dark.get_untracked())
            >
                <span class=css::knob>
                    {move || {
                        if is_dark.get() {
                            view! { <Icon icon=ic::MOON /> }.into_any()
                        } else {
                            view! { <Icon icon=ic::SUN /> }.into_any()
                        }
                    }}
                </span>
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_classes() {
        assert_eq!(join_classes("a", "b", true), "a b");
        assert_eq!(join_classes("a", "b", false), "a");
    }
}
