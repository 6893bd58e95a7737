use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use yew::prelude::*;
use yew_router::components::Link;

use crate::components::limited_offer::LimitedOffer;
use crate::components::seo::SeoTags;
use crate::config;
use crate::reveal::attach_reveal_listener;
use crate::Route;

const SERVICES: &[(&str, &str, &str, &str)] = &[
    (
        "design",
        "🖥️",
        "Website Design",
        "We create custom, responsive designs that reflect any business brand identity and provide exceptional user experience.",
    ),
    (
        "development",
        "⌨️",
        "Website Development",
        "Modern, high-performance websites built with the latest technologies and full custom stack coded solutions to meet your business needs.",
    ),
    (
        "ecommerce",
        "🛒",
        "E-Commerce Solutions",
        "Feature-rich online stores with secure payment gateways and intuitive inventory management for all your E-Commerce needs.",
    ),
    (
        "seo",
        "🔍",
        "SEO Optimization",
        "Boost your search rankings and drive more organic traffic to increase your online visibility.",
    ),
    (
        "maintenance",
        "🔧",
        "Website Maintenance",
        "Regular updates, security monitoring, and technical support to keep your website updated and running smoothly.",
    ),
    (
        "social",
        "📣",
        "Social Media Integration",
        "Seamless connection with social platforms to expand your reach and engage with your audience.",
    ),
];

const TESTIMONIALS: &[(&str, &str, &str)] = &[
    (
        "Eddy Li",
        "Car Wash Owner",
        "I honestly didn't think I needed a website, but after NextGen set one up for me, I started getting way more bookings. It was quick, affordable, and it looks way better than I expected. Wish I did it sooner",
    ),
    (
        "Shelley Zhang",
        "E-commerce Entrepreneur",
        "Their team delivered a website that exceeded my expectations. The social media integration has helped us grow our following and drive sales.",
    ),
    (
        "Rebecca Torres",
        "Law Firm Partner",
        "Professional, responsive, and detail-oriented. Our new website has significantly improved our client acquisition process.",
    ),
    (
        "David Wilson",
        "Landscaping Business Owner",
        "The maintenance service is worth every penny. Our site is always up-to-date and secure, letting me focus on my business. They even came to site to take some photos!",
    ),
];

#[function_component(Services)]
pub fn services() -> Html {
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    use_effect_with_deps(
        move |_| attach_reveal_listener(&[".reveal"]),
        (),
    );

    let bubbles = {
        let mut rng = SmallRng::seed_from_u64(web_sys::js_sys::Date::now() as u64);
        (0..24)
            .map(|_| {
                let size = rng.gen_range(5.0..25.0_f64);
                let top = rng.gen_range(0.0..100.0_f64);
                let left = rng.gen_range(0.0..100.0_f64);
                let duration = rng.gen_range(5.0..15.0_f64);
                let delay = rng.gen_range(0.0..5.0_f64);
                let style = format!(
                    "width: {size:.0}px; height: {size:.0}px; top: {top:.0}%; left: {left:.0}%; animation-duration: {duration:.1}s; animation-delay: {delay:.1}s;"
                );
                html! { <div class="hero-bubble" style={style}></div> }
            })
            .collect::<Html>()
    };

    html! {
        <>
            <SeoTags
                title="Our Services | NextGen Websites"
                description="Explore our comprehensive web development services including custom website design, e-commerce solutions, and SEO optimization."
                keywords="web development services, custom websites, e-commerce development, website maintenance, SEO services"
                path="/services"
            />
            <div class="services-page">
                <section class="services-hero">
                    <div class="services-hero-bubbles">
                        { bubbles }
                    </div>
                    <div class="services-hero-content">
                        <div class="services-hero-copy">
                            <h1>
                                {"Transform Your "}
                                <span class="highlight">{"Digital Presence"}</span>
                            </h1>
                            <p>
                                {"We provide innovative solutions that help businesses grow and thrive in the digital world."}
                            </p>
                        </div>
                        <div class="services-hero-panel">
                            <div class="mini-grid">
                                {
                                    SERVICES.iter().take(4).map(|(_, icon, title, _)| html! {
                                        <div class="mini-card">
                                            <span class="mini-icon">{*icon}</span>
                                            <p>{*title}</p>
                                        </div>
                                    }).collect::<Html>()
                                }
                            </div>
                        </div>
                    </div>
                    <div class="services-hero-wave">
                        <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 1440 320" preserveAspectRatio="none">
                            <path fill="#ffffff" d="M0,224L48,213.3C96,203,192,181,288,181.3C384,181,480,203,576,197.3C672,192,768,160,864,160C960,160,1056,192,1152,186.7C1248,181,1344,139,1392,117.3L1440,96L1440,320L1392,320C1344,320,1248,320,1152,320C1056,320,960,320,864,320C768,320,672,320,576,320C480,320,384,320,288,320C192,320,96,320,48,320L0,320Z" />
                        </svg>
                    </div>
                </section>

                <section id="services" class="services-list">
                    <div class="section-heading reveal">
                        <h2>{"Our Services"}</h2>
                        <div class="accent-bar centered"></div>
                        <p>{"We offer comprehensive web solutions to help your business thrive in the digital landscape."}</p>
                    </div>
                    <div class="services-grid">
                        {
                            SERVICES.iter().map(|(id, icon, title, description)| html! {
                                <div id={*id} class="service-card reveal">
                                    <div class="service-icon-circle">{*icon}</div>
                                    <h3>{*title}</h3>
                                    <p>{*description}</p>
                                    <Link<Route> to={Route::Pricing} classes="service-cta">
                                        {"Get Started"}
                                    </Link<Route>>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </section>

                <section class="subscription-pitch">
                    <div class="pitch-content reveal">
                        <div class="pitch-offer">
                            <LimitedOffer />
                        </div>
                        <div class="pitch-copy">
                            <h2>{"Why Pay Thousands Upfront?"}</h2>
                            <div class="pitch-item">
                                <div class="pitch-check">{"✓"}</div>
                                <div>
                                    <h3>{"No Massive Upfront Costs"}</h3>
                                    <p>
                                        {"Most web developers charge $5,000 to $40,000 upfront. Our subscription model spreads the cost, making professional websites accessible to all businesses."}
                                    </p>
                                </div>
                            </div>
                            <div class="pitch-item">
                                <div class="pitch-check">{"✓"}</div>
                                <div>
                                    <h3>{"Continuous Updates & Maintenance"}</h3>
                                    <p>
                                        {"Unlike traditional agencies that charge extra for updates, our subscription includes ongoing maintenance, security updates, and technical support."}
                                    </p>
                                </div>
                            </div>
                            <div class="pitch-item">
                                <div class="pitch-check">{"✓"}</div>
                                <div>
                                    <h3>{"Only 3 Month Lock In Period"}</h3>
                                    <p>
                                        {"Try any plan for a minimum of 3 months. Experience our service, see your website come to life, and only continue if you're completely satisfied. (Only applies to monthly subscriptions)"}
                                    </p>
                                </div>
                            </div>
                        </div>
                    </div>
                </section>

                <section class="services-cta">
                    <div class="cta-banner reveal">
                        <div class="cta-copy">
                            <h3>{"Ready to Get Started?"}</h3>
                            <p>{"Let's transform your business with our expert services and innovative solutions."}</p>
                        </div>
                        <a href={config::CONTACT_PHONE_HREF} class="cta-button">
                            {"Contact Us Today"}
                        </a>
                    </div>
                </section>

                <section class="services-testimonials">
                    <div class="section-heading reveal">
                        <h2>{"What Our Clients Say"}</h2>
                        <div class="accent-bar centered"></div>
                        <p>{"Don't just take our word for it. Hear what our satisfied clients have to say."}</p>
                    </div>
                    <div class="testimonials-row">
                        {
                            TESTIMONIALS.iter().map(|(name, role, comment)| html! {
                                <div class="testimonial-card reveal">
                                    <div class="testimonial-stars">{"★★★★★"}</div>
                                    <p class="testimonial-comment">{format!("\"{}\"", comment)}</p>
                                    <div class="testimonial-header">
                                        <div class="testimonial-avatar">
                                            {name.chars().next().unwrap_or('?').to_string()}
                                        </div>
                                        <div>
                                            <h4>{*name}</h4>
                                            <p class="testimonial-role">{*role}</p>
                                        </div>
                                    </div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </section>

                <section class="google-reviews">
                    <div class="reveal">
                        <h3>{"See What Others Are Saying"}</h3>
                        <a
                            href="https://maps.app.goo.gl/YxoTgWAeP6mu23Gn9"
                            target="_blank"
                            rel="noopener noreferrer"
                            class="reviews-link"
                        >
                            {"See Our Google Reviews"}
                        </a>
                    </div>
                </section>
            </div>
            <style>
                {r#"
                    .services-page {
                        min-height: 100vh;
                        background: linear-gradient(to bottom, #f9fafb, #ffffff);
                        color: #1f2937;
                    }
                    .services-page section {
                        padding: 80px 24px;
                    }
                    .services-page .reveal {
                        opacity: 0;
                        transform: translateY(30px);
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }
                    .services-page .reveal.visible {
                        opacity: 1;
                        transform: translateY(0);
                    }

                    .services-hero {
                        position: relative;
                        background: #2563eb;
                        color: #ffffff;
                        padding: 96px 24px 140px;
                        overflow: hidden;
                    }
                    .services-hero-bubbles {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                    }
                    .hero-bubble {
                        position: absolute;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.1);
                        animation-name: bubble-drift;
                        animation-timing-function: ease-in-out;
                        animation-iteration-count: infinite;
                    }
                    @keyframes bubble-drift {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-24px); }
                    }
                    .services-hero-content {
                        position: relative;
                        z-index: 10;
                        max-width: 1200px;
                        margin: 0 auto;
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: space-between;
                        gap: 48px;
                    }
                    .services-hero-copy {
                        flex: 1 1 440px;
                    }
                    .services-hero-copy h1 {
                        font-size: 3rem;
                        font-weight: 700;
                        margin-bottom: 32px;
                    }
                    .services-hero-copy .highlight {
                        color: #fde047;
                    }
                    .services-hero-copy p {
                        font-size: 1.25rem;
                        font-weight: 600;
                        opacity: 0.9;
                    }
                    .services-hero-panel {
                        flex: 1 1 380px;
                        background: #ffffff;
                        padding: 16px;
                        border-radius: 8px;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    }
                    .mini-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 16px;
                    }
                    .mini-card {
                        background: #f9fafb;
                        padding: 16px;
                        border-radius: 6px;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        transition: transform 0.2s ease;
                    }
                    .mini-card:hover {
                        transform: translateY(-5px);
                    }
                    .mini-icon {
                        font-size: 1.5rem;
                        margin-bottom: 8px;
                    }
                    .mini-card p {
                        color: #1f2937;
                        font-size: 0.875rem;
                        font-weight: 500;
                        text-align: center;
                        margin: 0;
                    }
                    .services-hero-wave {
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        right: 0;
                        line-height: 0;
                    }
                    .services-hero-wave svg {
                        display: block;
                        width: 100%;
                        height: 80px;
                    }

                    .section-heading {
                        text-align: center;
                        max-width: 640px;
                        margin: 0 auto 48px;
                    }
                    .section-heading h2 {
                        font-size: 2.25rem;
                        font-weight: 700;
                        color: #1f2937;
                        margin-bottom: 16px;
                    }
                    .accent-bar {
                        width: 80px;
                        height: 4px;
                        background: #2563eb;
                        margin-bottom: 24px;
                    }
                    .accent-bar.centered {
                        margin-left: auto;
                        margin-right: auto;
                    }
                    .section-heading p {
                        font-size: 1.125rem;
                        color: #4b5563;
                    }

                    .services-list {
                        background: #ffffff;
                    }
                    .services-grid {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 32px;
                    }
                    .service-card {
                        background: #ffffff;
                        border: 1px solid #f3f4f6;
                        border-radius: 8px;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        padding: 32px;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                        scroll-margin-top: 90px;
                        transition: box-shadow 0.3s ease, border-color 0.3s ease;
                    }
                    .service-card:hover {
                        border-color: #60a5fa;
                        box-shadow: 0 20px 25px rgba(59, 130, 246, 0.2);
                    }
                    .service-icon-circle {
                        width: 64px;
                        height: 64px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 50%;
                        background: #eff6ff;
                        font-size: 1.5rem;
                        margin-bottom: 24px;
                        transition: background 0.3s ease;
                    }
                    .service-card:hover .service-icon-circle {
                        background: #2563eb;
                    }
                    .service-card h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        margin-bottom: 12px;
                    }
                    .service-card p {
                        color: #4b5563;
                        margin-bottom: 24px;
                    }
                    .service-cta {
                        padding: 8px 20px;
                        background: #2563eb;
                        color: #ffffff;
                        border-radius: 9999px;
                        font-size: 0.875rem;
                        font-weight: 500;
                        text-decoration: none;
                        opacity: 0;
                        transform: translateY(10px);
                        transition: opacity 0.3s ease, transform 0.3s ease, background 0.2s ease;
                    }
                    .service-card:hover .service-cta {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .service-cta:hover {
                        background: #1d4ed8;
                    }

                    .subscription-pitch {
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .pitch-content {
                        display: grid;
                        grid-template-columns: 1fr 2fr;
                        gap: 32px;
                        align-items: center;
                    }
                    .pitch-offer {
                        position: relative;
                        min-height: 200px;
                    }
                    .pitch-copy h2 {
                        font-size: 1.875rem;
                        font-weight: 700;
                        margin-bottom: 24px;
                    }
                    .pitch-item {
                        display: flex;
                        gap: 16px;
                        margin-bottom: 24px;
                    }
                    .pitch-check {
                        background: #dbeafe;
                        color: #2563eb;
                        border-radius: 50%;
                        width: 40px;
                        height: 40px;
                        flex-shrink: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-weight: 700;
                    }
                    .pitch-item h3 {
                        font-size: 1.25rem;
                        font-weight: 600;
                        margin-bottom: 8px;
                    }
                    .pitch-item p {
                        color: #4b5563;
                    }

                    .services-cta {
                        background: #f9fafb;
                    }
                    .cta-banner {
                        max-width: 1100px;
                        margin: 0 auto;
                        background: linear-gradient(to right, #2563eb, #1e40af);
                        border-radius: 16px;
                        padding: 48px;
                        color: #ffffff;
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: space-between;
                        gap: 32px;
                    }
                    .cta-copy h3 {
                        font-size: 1.875rem;
                        font-weight: 700;
                        margin-bottom: 16px;
                    }
                    .cta-copy p {
                        font-size: 1.125rem;
                        opacity: 0.9;
                        max-width: 520px;
                    }
                    .cta-button {
                        padding: 16px 32px;
                        background: #ffffff;
                        color: #2563eb;
                        border-radius: 8px;
                        font-weight: 500;
                        text-decoration: none;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        transition: background 0.3s ease, transform 0.2s ease;
                    }
                    .cta-button:hover {
                        background: #eff6ff;
                        transform: scale(1.05);
                    }

                    .services-testimonials {
                        background: #ffffff;
                    }
                    .testimonials-row {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 32px;
                    }
                    .testimonial-card {
                        background: #f9fafb;
                        border: 1px solid #f3f4f6;
                        border-radius: 8px;
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                        padding: 32px;
                        display: flex;
                        flex-direction: column;
                        height: 100%;
                    }
                    .testimonial-stars {
                        color: #facc15;
                        letter-spacing: 2px;
                        margin-bottom: 16px;
                    }
                    .testimonial-comment {
                        color: #4b5563;
                        font-style: italic;
                        margin-bottom: 24px;
                        flex-grow: 1;
                    }
                    .testimonial-header {
                        display: flex;
                        align-items: center;
                        margin-top: auto;
                    }
                    .testimonial-avatar {
                        width: 48px;
                        height: 48px;
                        border-radius: 50%;
                        background: #dbeafe;
                        color: #2563eb;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-weight: 700;
                        margin-right: 16px;
                    }
                    .testimonial-header h4 {
                        font-weight: 500;
                        color: #1f2937;
                        margin: 0;
                    }
                    .testimonial-role {
                        color: #6b7280;
                        font-size: 0.875rem;
                        margin: 0;
                    }

                    .google-reviews {
                        background: #ffffff;
                        text-align: center;
                        padding-top: 24px;
                    }
                    .google-reviews h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin-bottom: 16px;
                    }
                    .reviews-link {
                        display: inline-flex;
                        align-items: center;
                        gap: 8px;
                        background: #2563eb;
                        color: #ffffff;
                        padding: 12px 24px;
                        border-radius: 8px;
                        text-decoration: none;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                        transition: background 0.3s ease;
                    }
                    .reviews-link:hover {
                        background: #1d4ed8;
                    }

                    @media (max-width: 768px) {
                        .services-hero-copy h1 {
                            font-size: 2.25rem;
                        }
                        .pitch-content {
                            grid-template-columns: 1fr;
                        }
                        .pitch-offer {
                            min-height: 140px;
                        }
                    }
                "#}
            </style>
        </>
    }
}
