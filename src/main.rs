use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::{HtmlInputElement, MouseEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use chrono::Datelike;
use gloo_timers::callback::Timeout;

mod config;
mod reveal;
mod typewriter;
mod components {
    pub mod limited_offer;
    pub mod seo;
}
mod pages {
    pub mod contact;
    pub mod landing;
    pub mod pricing;
    pub mod services;
    pub mod under_construction;
}

use pages::{
    contact::Contact,
    landing::Landing,
    pricing::Pricing,
    services::Services,
    under_construction::UnderConstruction,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/home")]
    Home,
    #[at("/services")]
    Services,
    #[at("/pricing")]
    Pricing,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Landing | Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Pricing => {
            info!("Rendering Pricing page");
            html! { <Pricing /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Rendering UnderConstruction page");
            html! { <UnderConstruction /> }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let route = use_route::<Route>();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_top = document.document_element().unwrap().scroll_top();
                is_scrolled.set(scroll_top > 50);
            }) as Box<dyn FnMut()>);

            window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                .unwrap();

            move || {
                window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .unwrap();
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    let is_home = matches!(route, Some(Route::Landing) | Some(Route::Home));
    let is_services = matches!(route, Some(Route::Services));
    let is_pricing = matches!(route, Some(Route::Pricing));
    let is_contact = matches!(route, Some(Route::Contact));

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        background: rgba(255, 255, 255, 0.7);
                        backdrop-filter: blur(6px);
                        padding: 16px 0;
                        transition: background 0.5s ease, box-shadow 0.5s ease, padding 0.5s ease;
                    }
                    .top-nav.scrolled {
                        background: #ffffff;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        padding: 8px 0;
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 24px;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #1f2937;
                        text-decoration: none;
                    }
                    .nav-logo .logo-accent {
                        color: #2563eb;
                    }
                    .nav-links {
                        display: flex;
                        align-items: center;
                        background: #f3f4f6;
                        border-radius: 9999px;
                        padding: 4px;
                        box-shadow: inset 0 2px 4px rgba(0, 0, 0, 0.05);
                    }
                    .nav-link {
                        padding: 8px 20px;
                        border-radius: 9999px;
                        font-weight: 500;
                        color: #4b5563;
                        text-decoration: none;
                        transition: color 0.2s ease, background 0.2s ease;
                    }
                    .nav-link:hover {
                        color: #2563eb;
                    }
                    .nav-link.active {
                        background: #2563eb;
                        color: #ffffff;
                    }
                    .nav-cta {
                        background: #2563eb;
                        color: #ffffff;
                        padding: 8px 24px;
                        border-radius: 8px;
                        font-weight: 500;
                        text-decoration: none;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                        transition: background 0.2s ease, transform 0.2s ease;
                    }
                    .nav-cta:hover {
                        background: #1d4ed8;
                        transform: scale(1.05);
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: #eff6ff;
                        border: none;
                        border-radius: 50%;
                        width: 40px;
                        height: 40px;
                        align-items: center;
                        justify-content: center;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        display: block;
                        width: 18px;
                        height: 2px;
                        background: #2563eb;
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-right {
                            display: none;
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            background: #ffffff;
                            box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                            padding: 16px 24px;
                            gap: 8px;
                        }
                        .nav-right.mobile-menu-open .nav-links {
                            flex-direction: column;
                            background: none;
                            box-shadow: none;
                            border-radius: 0;
                            align-items: stretch;
                        }
                        .nav-right.mobile-menu-open .nav-link {
                            border-radius: 8px;
                        }
                        .nav-right.mobile-menu-open .nav-link.active {
                            background: #eff6ff;
                            color: #2563eb;
                            border-left: 4px solid #2563eb;
                        }
                        .nav-right.mobile-menu-open .nav-cta {
                            text-align: center;
                            margin-top: 8px;
                        }
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 24px;
                    }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Landing} classes="nav-logo">
                    {"NextGen"}<span class="logo-accent">{"Websites"}</span>
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div class="nav-links">
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={Route::Home} classes={classes!("nav-link", is_home.then(|| "active"))}>
                                {"Home"}
                            </Link<Route>>
                        </div>
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={Route::Services} classes={classes!("nav-link", is_services.then(|| "active"))}>
                                {"Services"}
                            </Link<Route>>
                        </div>
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={Route::Pricing} classes={classes!("nav-link", is_pricing.then(|| "active"))}>
                                {"Pricing"}
                            </Link<Route>>
                        </div>
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={Route::Contact} classes={classes!("nav-link", is_contact.then(|| "active"))}>
                                {"Contact"}
                            </Link<Route>>
                        </div>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes="nav-cta">
                            {"Call Now 📞"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let newsletter_email = use_state(String::new);
    let subscribed = use_state(|| false);
    let current_year = chrono::Local::now().year();

    let on_email_change = {
        let newsletter_email = newsletter_email.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            newsletter_email.set(input.value());
        })
    };

    let on_subscribe = {
        let newsletter_email = newsletter_email.clone();
        let subscribed = subscribed.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if newsletter_email.is_empty() {
                return;
            }
            info!("Newsletter signup: {}", *newsletter_email);
            newsletter_email.set(String::new());
            subscribed.set(true);

            let subscribed = subscribed.clone();
            Timeout::new(3_000, move || {
                subscribed.set(false);
            })
            .forget();
        })
    };

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        position: relative;
                        background: linear-gradient(to right, #1e40af, #1e3a8a);
                        color: #ffffff;
                        overflow: hidden;
                    }
                    .footer-wave {
                        line-height: 0;
                    }
                    .footer-wave svg {
                        display: block;
                        width: 100%;
                        height: 50px;
                        fill: #ffffff;
                    }
                    .footer-grid {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 48px 24px;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 48px;
                    }
                    .footer-col h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        margin-bottom: 8px;
                    }
                    .footer-col .col-bar {
                        width: 48px;
                        height: 4px;
                        background: #60a5fa;
                        margin-bottom: 24px;
                    }
                    .footer-col p,
                    .footer-col li {
                        color: #dbeafe;
                    }
                    .footer-col ul {
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }
                    .footer-col li {
                        margin-bottom: 12px;
                    }
                    .footer-col a {
                        color: #dbeafe;
                        text-decoration: none;
                        transition: color 0.2s ease, padding-left 0.2s ease;
                    }
                    .footer-col a:hover {
                        color: #ffffff;
                        padding-left: 4px;
                    }
                    .footer-social {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 12px;
                        margin-top: 16px;
                    }
                    .footer-social a {
                        background: #ffffff;
                        color: #2563eb;
                        border-radius: 9999px;
                        padding: 6px 14px;
                        font-size: 0.875rem;
                        transition: background 0.2s ease;
                    }
                    .footer-social a:hover {
                        background: #eff6ff;
                        color: #1d4ed8;
                        padding-left: 14px;
                    }
                    .newsletter-row {
                        display: flex;
                    }
                    .newsletter-row input {
                        flex-grow: 1;
                        padding: 8px 16px;
                        border: none;
                        border-radius: 8px 0 0 8px;
                        font-size: 1rem;
                        min-width: 0;
                    }
                    .newsletter-row input:focus {
                        outline: 2px solid #60a5fa;
                    }
                    .newsletter-row button {
                        background: #2563eb;
                        color: #ffffff;
                        border: none;
                        border-radius: 0 8px 8px 0;
                        padding: 8px 16px;
                        font-size: 1rem;
                        cursor: pointer;
                        transition: background 0.2s ease;
                    }
                    .newsletter-row button:hover {
                        background: #1d4ed8;
                    }
                    .newsletter-thanks {
                        margin-top: 12px;
                        color: #86efac;
                    }
                    .footer-bottom {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 32px 24px;
                        border-top: 1px solid #1d4ed8;
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: space-between;
                        gap: 16px;
                        color: #dbeafe;
                    }
                "#}
            </style>
            <div class="footer-wave">
                <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 1440 100" preserveAspectRatio="none">
                    <path d="M0,64L48,53.3C96,43,192,21,288,16C384,11,480,21,576,37.3C672,53,768,75,864,69.3C960,64,1056,32,1152,16C1248,0,1344,0,1392,0L1440,0L1440,0L1392,0C1344,0,1248,0,1152,0C1056,0,960,0,864,0C768,0,672,0,576,0C480,0,384,0,288,0C192,0,96,0,48,0L0,0Z" />
                </svg>
            </div>
            <div class="footer-grid">
                <div class="footer-col">
                    <h3>{config::SITE_NAME}</h3>
                    <div class="col-bar"></div>
                    <p>
                        {"We create stunning websites that drive results for businesses of all sizes. Our team blends creativity with technical expertise to deliver exceptional digital experiences."}
                    </p>
                    <div class="footer-social">
                        <a href="https://facebook.com" target="_blank" rel="noopener noreferrer">{"Facebook"}</a>
                        <a href="https://twitter.com" target="_blank" rel="noopener noreferrer">{"Twitter"}</a>
                        <a href="https://instagram.com" target="_blank" rel="noopener noreferrer">{"Instagram"}</a>
                        <a href="https://linkedin.com" target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                    </div>
                </div>
                <div class="footer-col">
                    <h3>{"Quick Links"}</h3>
                    <div class="col-bar"></div>
                    <ul>
                        <li>
                            <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
                        </li>
                        <li>
                            <Link<Route> to={Route::Services}>{"Services"}</Link<Route>>
                        </li>
                        <li>
                            <Link<Route> to={Route::Pricing}>{"Pricing"}</Link<Route>>
                        </li>
                    </ul>
                </div>
                <div class="footer-col">
                    <h3>{"Contact Us"}</h3>
                    <div class="col-bar"></div>
                    <ul>
                        <li>{config::CONTACT_ADDRESS}</li>
                        <li>
                            <a href={config::CONTACT_PHONE_HREF}>{config::CONTACT_PHONE}</a>
                        </li>
                        <li>
                            <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                        </li>
                    </ul>
                </div>
                <div class="footer-col">
                    <h3>{"Newsletter"}</h3>
                    <div class="col-bar"></div>
                    <p>{"Subscribe to our newsletter for the latest updates and offers."}</p>
                    <div class="newsletter-row">
                        <input
                            type="email"
                            placeholder="Your email"
                            value={(*newsletter_email).clone()}
                            onchange={on_email_change}
                        />
                        <button onclick={on_subscribe}>{"Subscribe"}</button>
                    </div>
                    if *subscribed {
                        <p class="newsletter-thanks">{"✓ Thanks for subscribing!"}</p>
                    }
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} {}. All rights reserved.", current_year, config::SITE_NAME)}</p>
                <p>{format!("Made with ❤️ by {}", config::SITE_NAME)}</p>
            </div>
        </footer>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>
                {r#"
                    body {
                        margin: 0;
                        font-family: 'Segoe UI', 'Helvetica Neue', Arial, sans-serif;
                        color: #1f2937;
                        background: #ffffff;
                    }
                    h1, h2, h3, h4, p {
                        margin-top: 0;
                    }
                "#}
            </style>
            <Nav />
            <Switch<Route> render={switch} />
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
