use log::info;
use web_sys::{window, Element, Event, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::config::DESKTOP_BREAKPOINT;

/// Class marking the links inside the mobile menu.
const MOBILE_LINK_CLASS: &str = "mobile__link";

const LINKS: &[(&str, &str)] = &[
    ("#destinations", "Destinations"),
    ("#about", "About"),
    ("#contact", "Contact"),
];

/// Open/closed state of the mobile menu. The CSS class and both ARIA
/// attributes are all derived from the single `open` flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn closed() -> Self {
        Self { open: false }
    }

    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// Desktop widths always close the menu.
    pub fn resized(self, width: f64) -> Self {
        if width > DESKTOP_BREAKPOINT {
            Self::closed()
        } else {
            self
        }
    }

    pub fn menu_class(self) -> &'static str {
        if self.open {
            "mobile is-open"
        } else {
            "mobile"
        }
    }

    pub fn aria_expanded(self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    pub fn aria_hidden(self) -> &'static str {
        if self.open {
            "false"
        } else {
            "true"
        }
    }
}

fn is_menu_link(class_name: &str) -> bool {
    class_name.split_whitespace().any(|c| c == MOBILE_LINK_CLASS)
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub scrolled: bool,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu = use_state_eq(MenuState::closed);

    {
        let menu = menu.clone();
        use_event_with_window("resize", move |_: Event| {
            let width = window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|w| w.as_f64());
            if let Some(width) = width {
                menu.set(menu.resized(width));
            }
        });
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let next = menu.toggled();
            info!("Mobile menu {}", if next.is_open() { "opened" } else { "closed" });
            menu.set(next);
        })
    };

    let close_on_link = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            let clicked_link = e
                .target_dyn_into::<Element>()
                .map_or(false, |el| is_menu_link(&el.class_name()));
            if clicked_link {
                menu.set(MenuState::closed());
            }
        })
    };

    html! {
        <header id="header" class={classes!("header", props.scrolled.then(|| "is-scrolled"))}>
            <div class="container header__inner">
                <a href="#top" class="logo">{"Wander"}<span>{"Lust"}</span></a>

                <nav class="nav" aria-label="Primary">
                    { for LINKS.iter().map(|(href, label)| html! {
                        <a class="nav__link" href={*href}>{*label}</a>
                    }) }
                </nav>

                <button
                    id="burgerBtn"
                    class="burger"
                    aria-label="Open menu"
                    aria-controls="mobileMenu"
                    aria-expanded={menu.aria_expanded()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            <div
                id="mobileMenu"
                class={menu.menu_class()}
                aria-hidden={menu.aria_hidden()}
                onclick={close_on_link}
            >
                { for LINKS.iter().map(|(href, label)| html! {
                    <a class={MOBILE_LINK_CLASS} href={*href}>{*label}</a>
                }) }
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_lockstep(state: MenuState) {
        let class_open = state.menu_class().split(' ').any(|c| c == "is-open");
        assert_eq!(class_open, state.is_open());
        assert_eq!(state.aria_expanded() == "true", state.is_open());
        assert_eq!(state.aria_hidden() == "false", state.is_open());
    }

    #[test]
    fn starts_closed() {
        let state = MenuState::default();
        assert!(!state.is_open());
        assert_lockstep(state);
    }

    #[test]
    fn toggle_flips_and_keeps_attributes_in_lockstep() {
        let mut state = MenuState::closed();
        for expected in [true, false, true, false] {
            state = state.toggled();
            assert_eq!(state.is_open(), expected);
            assert_lockstep(state);
        }
    }

    #[test]
    fn desktop_resize_closes_regardless_of_state() {
        let open = MenuState::closed().toggled();
        assert_eq!(open.resized(769.0), MenuState::closed());
        assert_eq!(MenuState::closed().resized(1440.0), MenuState::closed());
        assert_eq!(open.resized(1024.0).resized(1024.0), MenuState::closed());
    }

    #[test]
    fn breakpoint_width_keeps_menu_open() {
        let open = MenuState::closed().toggled();
        assert!(open.resized(768.0).is_open());
        assert!(open.resized(375.0).is_open());
    }

    #[test]
    fn only_mobile_links_close_the_menu() {
        assert!(is_menu_link("mobile__link"));
        assert!(is_menu_link("mobile__link active"));
        assert!(!is_menu_link("mobile"));
        assert!(!is_menu_link("mobile__link-icon"));
        assert!(!is_menu_link(""));
    }
}
