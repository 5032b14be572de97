use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::contact::contact_form::ContactFormView;
use crate::feed::DestinationsGrid;

const HIGHLIGHTS: &[(&str, &str)] = &[
    ("Hand-picked stays", "Small hotels and guesthouses we have slept in ourselves."),
    ("Local guides", "Walks and tastings led by people who live there."),
    ("Flexible plans", "Change dates up to a week before you travel."),
];

#[function_component(Footer)]
fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="footer">
            <div class="container footer__inner">
                <p>{"© "}<span id="year">{year.to_string()}</span>{" WanderLust. All rights reserved."}</p>
                <a href="#top" class="footer__link">{"Back to top"}</a>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <>
            <style>
                {r#"
                    :root {
                        --accent: #1e90ff;
                        --ink: #1b1f24;
                        --muted: #5b6470;
                        --bg: #f7f8fa;
                        --error: #d93025;
                        --ok: #188038;
                    }
                    * { box-sizing: border-box; }
                    body {
                        margin: 0;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        color: var(--ink);
                        background: var(--bg);
                    }
                    .container { width: min(1100px, 92%); margin: 0 auto; }
                    .header {
                        position: sticky;
                        top: 0;
                        z-index: 20;
                        background: transparent;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }
                    .header.is-scrolled {
                        background: rgba(255, 255, 255, 0.95);
                        box-shadow: 0 4px 16px rgba(0, 0, 0, 0.08);
                    }
                    .header__inner {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1rem 0;
                    }
                    .logo { font-weight: 800; font-size: 1.4rem; color: var(--ink); text-decoration: none; }
                    .logo span { color: var(--accent); }
                    .nav { display: flex; gap: 1.5rem; }
                    .nav__link { color: var(--ink); text-decoration: none; }
                    .burger { display: none; background: none; border: 0; cursor: pointer; }
                    .burger span { display: block; width: 24px; height: 2px; margin: 5px 0; background: var(--ink); }
                    .mobile { display: none; }
                    .mobile.is-open {
                        display: flex;
                        flex-direction: column;
                        padding: 1rem 4%;
                        background: #fff;
                    }
                    .mobile__link { padding: 0.75rem 0; color: var(--ink); text-decoration: none; }
                    .hero { padding: 6rem 0 4rem; }
                    .hero h1 { font-size: clamp(2rem, 5vw, 3.5rem); margin: 0 0 1rem; }
                    .hero p { color: var(--muted); max-width: 40rem; }
                    .section { padding: 4rem 0; }
                    .section h2 { margin-top: 0; }
                    .highlights { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 1.5rem; }
                    .grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 1.5rem; }
                    .card { background: #fff; border-radius: 12px; box-shadow: 0 8px 24px rgba(0, 0, 0, 0.06); }
                    .card__body { padding: 1.25rem; }
                    .card__name { margin: 0 0 0.5rem; }
                    .card__meta { margin: 0.25rem 0; color: var(--muted); }
                    .tag {
                        display: inline-block;
                        margin-top: 0.75rem;
                        padding: 0.2rem 0.6rem;
                        border-radius: 999px;
                        background: rgba(30, 144, 255, 0.1);
                        color: var(--accent);
                        font-size: 0.8rem;
                    }
                    .note { color: var(--muted); font-size: 0.9rem; }
                    .form { display: grid; gap: 1rem; max-width: 560px; }
                    .form__row { display: grid; gap: 0.35rem; }
                    .form input, .form textarea {
                        padding: 0.7rem 0.8rem;
                        border: 1px solid #d0d5dd;
                        border-radius: 8px;
                        font: inherit;
                    }
                    .password { display: flex; gap: 0.5rem; }
                    .password input { flex: 1; }
                    .error { min-height: 1em; color: var(--error); }
                    .success { color: var(--ok); }
                    .btn {
                        padding: 0.7rem 1.4rem;
                        border: 0;
                        border-radius: 8px;
                        background: var(--accent);
                        color: #fff;
                        cursor: pointer;
                        font: inherit;
                    }
                    .btn--ghost { background: transparent; color: var(--accent); border: 1px solid var(--accent); }
                    .btn--small { padding: 0.4rem 0.9rem; }
                    .to-top {
                        position: fixed;
                        right: 1.5rem;
                        bottom: 1.5rem;
                        width: 44px;
                        height: 44px;
                        border: 0;
                        border-radius: 50%;
                        background: var(--accent);
                        color: #fff;
                        opacity: 0;
                        pointer-events: none;
                        transition: opacity 0.3s ease;
                    }
                    .to-top.is-visible { opacity: 1; pointer-events: auto; }
                    .cookie {
                        position: fixed;
                        left: 1rem;
                        right: 1rem;
                        bottom: 1rem;
                        z-index: 30;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                        padding: 1rem 1.25rem;
                        border-radius: 12px;
                        background: var(--ink);
                        color: #fff;
                    }
                    .footer { padding: 2rem 0; border-top: 1px solid #e4e7ec; }
                    .footer__inner { display: flex; justify-content: space-between; align-items: center; }
                    .footer__link { color: var(--accent); }
                    @media (max-width: 768px) {
                        .nav { display: none; }
                        .burger { display: block; }
                        .footer__inner { flex-direction: column; gap: 0.5rem; }
                    }
                "#}
            </style>

            <main id="top">
                <section class="hero">
                    <div class="container">
                        <h1>{"Find your next favourite place"}</h1>
                        <p>{"Slow travel itineraries across the Caucasus and beyond, planned with people who know the roads."}</p>
                        <a href="#contact" class="btn">{"Plan a trip"}</a>
                    </div>
                </section>

                <section id="about" class="section">
                    <div class="container highlights">
                        { for HIGHLIGHTS.iter().map(|(title, text)| html! {
                            <div>
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="destinations" class="section">
                    <div class="container">
                        <h2>{"Popular destinations"}</h2>
                        <DestinationsGrid />
                    </div>
                </section>

                <section id="contact" class="section">
                    <div class="container">
                        <h2>{"Contact us"}</h2>
                        <ContactFormView />
                    </div>
                </section>
            </main>

            <Footer />
        </>
    }
}
