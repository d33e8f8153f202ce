//! Navigation bar with one button per dashboard tab.

#[cfg(test)]
#[path = "tab_nav_test.rs"]
mod tab_nav_test;

use leptos::prelude::*;

use crate::state::dashboard::DashboardTab;

/// Activate `tab`, notifying subscribers only when the selection changes.
fn activate_tab(active: RwSignal<DashboardTab>, tab: DashboardTab) {
    active.maybe_update(|current| DashboardTab::replace(current, tab));
}

fn tab_button_class(active: bool) -> &'static str {
    if active { "tab-nav__button tab-nav__button--active" } else { "tab-nav__button" }
}

/// Tab bar. Clicking a button only updates `active`; nothing is refetched.
#[component]
pub fn TabNav(active: RwSignal<DashboardTab>) -> impl IntoView {
    view! {
        <nav class="tab-nav">
            <ul class="tab-nav__list">
                {DashboardTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <li>
                                <button
                                    class=move || tab_button_class(active.get() == tab)
                                    on:click=move |_| activate_tab(active, tab)
                                >
                                    <span
                                        class=format!("tab-nav__icon tab-nav__icon--{}", tab.id())
                                        aria-hidden="true"
                                    ></span>
                                    {tab.label()}
                                </button>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </nav>
    }
}
