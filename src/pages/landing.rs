use yew::prelude::*;
use yew_router::components::Link;

use crate::components::seo::SeoTags;
use crate::reveal::attach_reveal_listener;
use crate::typewriter::TypewriterText;
use crate::Route;

static HERO_PHRASES: &[&str] = &[
    "Restaurant.",
    "Plumbing Business.",
    "Landscaping Business.",
    "Carwash.",
    "Salon.",
    "Law Firm.",
    "Blog.",
    "HVAC.",
    "Sneaker Shop.",
    "Cafe.",
    "Food Truck.",
    "Bakery.",
    "Gym.",
    "Bookstore.",
    "Tutoring Service.",
    "Music School.",
    "Window Cleaning.",
    "Business.",
];

const SERVICES: &[(&str, &str, &str)] = &[
    (
        "✏️",
        "Website Design",
        "Beautiful, responsive designs that reflect your brand identity and engage your visitors.",
    ),
    (
        "💻",
        "Website Development",
        "Custom websites built with the latest technologies to ensure speed, security, and scalability.",
    ),
    (
        "🔧",
        "Maintenance",
        "Regular updates, security patches, and technical support to keep your website running smoothly.",
    ),
    (
        "📈",
        "SEO Optimization",
        "Boost your online visibility and attract more qualified traffic to your website.",
    ),
    (
        "#️⃣",
        "Social Media Integration",
        "Seamless connections with your social platforms to expand your digital footprint.",
    ),
    (
        "📱",
        "Responsive Design",
        "Websites that look and function perfectly on all devices, from desktops to smartphones.",
    ),
];

const TESTIMONIALS: &[(&str, &str, &str)] = &[
    (
        "Sarah Johnson",
        "Restaurant Owner",
        "The website they designed for my restaurant not only looks stunning but has increased our online reservations by 70%. Their SEO work has put us on the map!",
    ),
    (
        "Michael Chen",
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
        "The maintenance service is worth every penny. Our site is always up-to-date and secure, letting me focus on my business.",
    ),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
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

    html! {
        <>
            <SeoTags
                title="NextGen Websites | Top Web Development Agency"
                description="Transform your online presence with our expert web development services. Modern, responsive websites that drive business growth."
                keywords="web agency, professional websites, responsive design, SEO-friendly websites"
                path="/"
            />
            <div class="landing-page">
                <section id="home" class="hero-section">
                    <div class="hero-shapes">
                        <div class="shape shape-outline-one"></div>
                        <div class="shape shape-outline-two"></div>
                        <div class="shape shape-band-top"></div>
                        <div class="shape shape-band-bottom"></div>
                        <div class="shape shape-diamond"></div>
                        <div class="shape shape-block"></div>
                    </div>
                    <div class="hero-content">
                        <div class="hero-copy reveal">
                            <span class="quote-mark quote-open">{"\""}</span>
                            <h1>
                                {"Build a website for your"}
                                <br />
                                <span class="hero-typewriter">
                                    <TypewriterText phrases={HERO_PHRASES} />
                                </span>
                            </h1>
                            <span class="quote-mark quote-close">{"\""}</span>
                            <p class="hero-subtitle">
                                {"Elevate your online presence with cutting-edge web solutions tailored for your business needs at a fraction of the cost."}
                            </p>
                            <Link<Route> to={Route::Pricing} classes="hero-cta">
                                {"Get Started 🚀"}
                            </Link<Route>>
                        </div>
                        <div class="hero-visual reveal">
                            <div class="hero-frame">
                                <div class="hero-mockup">
                                    <div class="mockup-bar">
                                        <span></span><span></span><span></span>
                                    </div>
                                    <div class="mockup-body">
                                        <div class="mockup-line wide"></div>
                                        <div class="mockup-line"></div>
                                        <div class="mockup-line short"></div>
                                    </div>
                                </div>
                            </div>
                            <div class="hero-badge">
                                <span>{"🚀 Launch Fast"}</span>
                            </div>
                        </div>
                    </div>
                    <div class="hero-wave">
                        <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 1200 120" preserveAspectRatio="none">
                            <path d="M321.39,56.44c58-10.79,114.16-30.13,172-41.86,82.39-16.72,168.19-17.73,250.45-.39C823.78,31,906.67,72,985.66,92.83c70.05,18.48,146.53,26.09,214.34,3V0H0V27.35A600.21,600.21,0,0,0,321.39,56.44Z" />
                        </svg>
                    </div>
                </section>

                <section id="about" class="about-section">
                    <div class="about-content">
                        <div class="about-visual reveal">
                            <div class="about-frame">
                                <div class="about-photo"></div>
                            </div>
                            <div class="about-badge">{"Since 2020"}</div>
                        </div>
                        <div class="about-copy reveal">
                            <h2>{"About NextGen Websites"}</h2>
                            <div class="accent-bar"></div>
                            <p>
                                {"At NextGen Websites, we believe that getting online shouldn't cost a fortune. We're passionate about helping small businesses, startups, and local legends step confidently into the digital world without the crazy price tags."}
                            </p>
                            <p>
                                {"Our mission is simple: make beautiful, functional websites accessible to everyone. No time wasting, no hidden fees, no BS. Just clean and honest pricing that works. It's all about pushing into the next generation of business, together."}
                            </p>
                            <div class="stats-grid">
                                <div class="stat-card">
                                    <h3>{"200+"}</h3>
                                    <p>{"Projects Completed"}</p>
                                </div>
                                <div class="stat-card">
                                    <h3>{"50+"}</h3>
                                    <p>{"Happy Clients"}</p>
                                </div>
                                <div class="stat-card">
                                    <h3>{"5+"}</h3>
                                    <p>{"Years Experience"}</p>
                                </div>
                                <div class="stat-card">
                                    <h3>{"24/7"}</h3>
                                    <p>{"Customer Support"}</p>
                                </div>
                            </div>
                        </div>
                    </div>
                </section>

                <section id="services" class="services-preview">
                    <div class="section-heading reveal">
                        <h2>{"Our Services"}</h2>
                        <div class="accent-bar centered"></div>
                        <p>{"We offer comprehensive web solutions to help your business thrive in the digital landscape."}</p>
                    </div>
                    <div class="services-grid">
                        {
                            SERVICES.iter().map(|(icon, title, description)| html! {
                                <div class="service-card reveal">
                                    <span class="service-icon">{*icon}</span>
                                    <h3>{*title}</h3>
                                    <p>{*description}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </section>

                <section id="testimonials" class="testimonials-section">
                    <div class="section-heading reveal">
                        <h2>{"What Our Clients Say"}</h2>
                        <div class="accent-bar centered"></div>
                        <p>{"Don't just take our word for it. Here's what our clients have to say about working with us."}</p>
                    </div>
                    <div class="testimonials-grid">
                        {
                            TESTIMONIALS.iter().map(|(name, role, comment)| html! {
                                <div class="testimonial-card reveal">
                                    <div class="testimonial-header">
                                        <div class="testimonial-avatar">
                                            {name.chars().next().unwrap_or('?').to_string()}
                                        </div>
                                        <div>
                                            <h4>{*name}</h4>
                                            <p class="testimonial-role">{*role}</p>
                                        </div>
                                    </div>
                                    <p class="testimonial-comment">{*comment}</p>
                                    <div class="testimonial-stars">{"★★★★★"}</div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </section>
            </div>
            <style>
                {r#"
                    .landing-page {
                        background: #ffffff;
                        color: #1f2937;
                        overflow: hidden;
                    }
                    .landing-page section {
                        padding: 80px 24px;
                    }
                    .reveal {
                        opacity: 0;
                        transform: translateY(30px);
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }
                    .reveal.visible {
                        opacity: 1;
                        transform: translateY(0);
                    }

                    .hero-section {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        background: linear-gradient(to bottom, #eff6ff, #ffffff);
                        overflow: hidden;
                    }
                    .hero-shapes {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                        pointer-events: none;
                    }
                    .shape {
                        position: absolute;
                    }
                    .shape-outline-one {
                        width: 384px;
                        height: 384px;
                        border: 4px solid #1e40af;
                        top: 0;
                        left: 25%;
                        opacity: 0.2;
                        transform: rotate(12deg);
                    }
                    .shape-outline-two {
                        width: 320px;
                        height: 320px;
                        border: 4px solid #1e3a8a;
                        top: 40px;
                        left: 33%;
                        opacity: 0.15;
                        transform: rotate(-6deg);
                    }
                    .shape-band-top {
                        width: 120%;
                        height: 256px;
                        background: #1e3a8a;
                        top: -80px;
                        left: -80px;
                        opacity: 0.2;
                        transform: rotate(-12deg);
                        transform-origin: top left;
                    }
                    .shape-band-bottom {
                        width: 120%;
                        height: 256px;
                        background: #3b82f6;
                        bottom: -80px;
                        right: -80px;
                        opacity: 0.15;
                        transform: rotate(12deg);
                        transform-origin: bottom right;
                    }
                    .shape-diamond {
                        width: 160px;
                        height: 160px;
                        background: #2563eb;
                        top: 33%;
                        left: 33%;
                        opacity: 0.3;
                        transform: rotate(45deg);
                    }
                    .shape-block {
                        width: 128px;
                        height: 128px;
                        background: #1e3a8a;
                        bottom: 25%;
                        right: 33%;
                        opacity: 0.2;
                        transform: rotate(-12deg);
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        max-width: 1200px;
                        margin: 0 auto;
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: space-between;
                        gap: 48px;
                        width: 100%;
                    }
                    .hero-copy {
                        position: relative;
                        flex: 1 1 480px;
                    }
                    .quote-mark {
                        position: absolute;
                        font-size: 3rem;
                    }
                    .quote-open {
                        left: -16px;
                        top: -16px;
                        color: #3b82f6;
                    }
                    .quote-close {
                        right: -16px;
                        bottom: 0;
                        color: #bfdbfe;
                    }
                    .hero-copy h1 {
                        font-size: 3rem;
                        font-weight: 700;
                        line-height: 1.2;
                        margin-bottom: 24px;
                    }
                    .hero-typewriter {
                        display: inline-flex;
                        align-items: center;
                        min-height: 3.5rem;
                        color: #2563eb;
                    }
                    .hero-subtitle {
                        font-size: 1.25rem;
                        color: #4b5563;
                        margin-bottom: 32px;
                    }
                    .hero-cta {
                        display: inline-block;
                        background: #2563eb;
                        color: #ffffff;
                        font-weight: 700;
                        padding: 16px 32px;
                        border-radius: 8px;
                        box-shadow: 0 10px 15px rgba(37, 99, 235, 0.2);
                        text-decoration: none;
                        transition: background 0.2s ease, transform 0.2s ease;
                    }
                    .hero-cta:hover {
                        background: #1d4ed8;
                        transform: scale(1.05);
                    }
                    .hero-visual {
                        flex: 1 1 400px;
                        position: relative;
                    }
                    .hero-frame {
                        background: #2563eb;
                        border-radius: 24px;
                        height: 320px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        transform: rotate(1deg);
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                    }
                    .hero-mockup {
                        background: #ffffff;
                        border-radius: 8px;
                        width: 85%;
                        height: 85%;
                        transform: rotate(-2deg);
                        transition: transform 0.5s ease;
                        overflow: hidden;
                    }
                    .hero-mockup:hover {
                        transform: rotate(0deg);
                    }
                    .mockup-bar {
                        background: #e5e7eb;
                        padding: 8px 12px;
                        display: flex;
                        gap: 6px;
                    }
                    .mockup-bar span {
                        width: 10px;
                        height: 10px;
                        border-radius: 50%;
                        background: #9ca3af;
                    }
                    .mockup-body {
                        padding: 24px;
                    }
                    .mockup-line {
                        height: 14px;
                        border-radius: 7px;
                        background: #dbeafe;
                        margin-bottom: 14px;
                        width: 70%;
                    }
                    .mockup-line.wide {
                        width: 90%;
                        background: #bfdbfe;
                    }
                    .mockup-line.short {
                        width: 45%;
                    }
                    .hero-badge {
                        position: absolute;
                        bottom: -24px;
                        right: -8px;
                        background: #ffffff;
                        padding: 16px;
                        border-radius: 8px;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        font-weight: 600;
                    }
                    .hero-wave {
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        width: 100%;
                        overflow: hidden;
                        line-height: 0;
                    }
                    .hero-wave svg {
                        display: block;
                        width: 100%;
                        height: 60px;
                        fill: #ffffff;
                    }

                    .about-section {
                        background: #eff6ff;
                        position: relative;
                    }
                    .about-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        gap: 48px;
                    }
                    .about-visual {
                        flex: 1 1 380px;
                        position: relative;
                    }
                    .about-frame {
                        background: #2563eb;
                        border-radius: 8px 0 8px 0;
                        padding: 4px;
                        transform: rotate(3deg);
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                    }
                    .about-photo {
                        height: 280px;
                        border-radius: 4px;
                        background: linear-gradient(135deg, #60a5fa, #1e3a8a);
                        transform: rotate(-6deg) translate(16px, -16px);
                        transition: transform 0.5s ease;
                    }
                    .about-photo:hover {
                        transform: rotate(0deg);
                    }
                    .about-badge {
                        position: absolute;
                        bottom: -24px;
                        right: -8px;
                        background: #ffffff;
                        padding: 16px;
                        border-radius: 8px;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        color: #2563eb;
                        font-weight: 600;
                    }
                    .about-copy {
                        flex: 1 1 480px;
                    }
                    .about-copy h2,
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
                    .about-copy p {
                        font-size: 1.125rem;
                        color: #4b5563;
                        margin-bottom: 24px;
                    }
                    .stats-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 24px;
                    }
                    .stat-card {
                        text-align: center;
                        background: #ffffff;
                        padding: 16px;
                        border-radius: 8px;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                        transition: transform 0.2s ease, box-shadow 0.2s ease;
                    }
                    .stat-card:hover {
                        transform: translateY(-4px);
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    .stat-card h3 {
                        font-size: 1.875rem;
                        font-weight: 700;
                        color: #2563eb;
                        margin-bottom: 8px;
                    }
                    .stat-card p {
                        color: #4b5563;
                        margin: 0;
                    }

                    .section-heading {
                        text-align: center;
                        max-width: 640px;
                        margin: 0 auto 48px;
                    }
                    .section-heading p {
                        font-size: 1.125rem;
                        color: #4b5563;
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
                        padding: 24px;
                        border-radius: 12px;
                        border-top: 4px solid #2563eb;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        transition: box-shadow 0.3s ease;
                    }
                    .service-card:hover {
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                    }
                    .service-icon {
                        display: block;
                        font-size: 2.25rem;
                        margin-bottom: 16px;
                    }
                    .service-card h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        margin-bottom: 8px;
                    }
                    .service-card p {
                        color: #4b5563;
                    }

                    .testimonials-section {
                        background: #ffffff;
                    }
                    .testimonials-grid {
                        max-width: 1000px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(380px, 1fr));
                        gap: 32px;
                    }
                    .testimonial-card {
                        background: #ffffff;
                        border-radius: 12px;
                        border-left: 4px solid #2563eb;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        padding: 24px;
                    }
                    .testimonial-header {
                        display: flex;
                        align-items: center;
                        margin-bottom: 16px;
                    }
                    .testimonial-avatar {
                        background: #2563eb;
                        border-radius: 50%;
                        width: 48px;
                        height: 48px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #ffffff;
                        font-weight: 700;
                        font-size: 1.25rem;
                        margin-right: 16px;
                    }
                    .testimonial-header h4 {
                        font-weight: 700;
                        margin: 0;
                    }
                    .testimonial-role {
                        font-size: 0.875rem;
                        color: #6b7280;
                        margin: 0;
                    }
                    .testimonial-comment {
                        color: #4b5563;
                        font-style: italic;
                        margin-bottom: 16px;
                    }
                    .testimonial-stars {
                        color: #facc15;
                        letter-spacing: 2px;
                    }

                    @media (max-width: 768px) {
                        .hero-copy h1 {
                            font-size: 2.25rem;
                        }
                        .landing-page section {
                            padding: 60px 16px;
                        }
                        .testimonials-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </>
    }
}
